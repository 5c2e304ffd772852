pub mod api;
pub mod config;
pub mod lookup;
pub mod provider;
pub mod server;
pub mod validation;
