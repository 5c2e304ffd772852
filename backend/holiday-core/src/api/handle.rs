//! HTTP server handle type.

use crate::error::server::ServerError;

use common::ErrorLocation;

use std::io::Result as IoResult;
use std::net::SocketAddr;
use std::panic::Location;

use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// Handle to a running HTTP server.
///
/// Returned by [`start_http_server`](crate::api::start_http_server).
///
/// # Lifecycle
///
/// The server runs until [`shutdown`](Self::shutdown) is called or the handle
/// is dropped; both trigger a graceful shutdown that lets in-flight requests finish.
pub struct HttpServerHandle {
    local_addr: SocketAddr,
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<IoResult<()>>,
}

impl HttpServerHandle {
    pub(crate) fn new(
        local_addr: SocketAddr,
        shutdown_tx: oneshot::Sender<()>,
        task: JoinHandle<IoResult<()>>,
    ) -> Self {
        Self {
            local_addr,
            shutdown_tx,
            task,
        }
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// `http://<local_addr>`
    pub fn base_url(&self) -> String {
        format!("http://{}", self.local_addr)
    }

    /// Signal a graceful shutdown and wait for the server task to finish.
    pub async fn shutdown(self) -> Result<(), ServerError> {
        let _ = self.shutdown_tx.send(());
        Self::join(self.task).await
    }

    async fn join(task: JoinHandle<IoResult<()>>) -> Result<(), ServerError> {
        match task.await {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(ServerError::Serve {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
            Err(e) => Err(ServerError::Serve {
                message: format!("Server task failed: {e}"),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
