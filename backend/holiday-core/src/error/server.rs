use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum ServerError {
    #[error("Bind Error: {address}: {source} {location}")]
    Bind {
        address: String,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    #[error("Serve Error: {message} {location}")]
    Serve {
        message: String,
        location: ErrorLocation,
    },
}
