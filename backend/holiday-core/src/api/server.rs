use crate::api::handle::HttpServerHandle;
use crate::config::ServerConfig;
use crate::error::server::ServerError;

use common::ErrorLocation;

use std::panic::Location;

use axum::Router;
use log::{error, info};
use tokio::net::TcpListener;
use tokio::spawn as TokioSpawn;
use tokio::sync::oneshot;

/// Bind `config.host:config.port` and serve `router` in a background task.
///
/// Port `0` picks a free port; the bound address is available from
/// [`HttpServerHandle::local_addr`].
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the address is invalid, already in use,
/// or cannot be bound for lack of permissions.
pub async fn start_http_server(
    config: &ServerConfig,
    router: Router,
) -> Result<HttpServerHandle, ServerError> {
    let address = config.address();

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| ServerError::Bind {
            address: address.clone(),
            location: ErrorLocation::from(Location::caller()),
            source: e,
        })?;

    let local_addr = listener.local_addr().map_err(|e| ServerError::Bind {
        address: address.clone(),
        location: ErrorLocation::from(Location::caller()),
        source: e,
    })?;

    info!("HTTP server listening on {local_addr}");

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = TokioSpawn(async move {
        let result = axum::serve(listener, router)
            .with_graceful_shutdown(async move {
                // Either an explicit shutdown or the handle being dropped.
                let _ = shutdown_rx.await;
                info!("HTTP server shutting down");
            })
            .await;

        if let Err(ref e) = result {
            error!("HTTP server stopped with error: {e}");
        }

        result
    });

    Ok(HttpServerHandle::new(local_addr, shutdown_tx, task))
}
