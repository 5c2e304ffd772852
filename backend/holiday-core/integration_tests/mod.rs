mod api;
mod helpers;
mod lookup;
mod provider;
