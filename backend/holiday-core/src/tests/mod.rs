mod lookup;
mod provider;
