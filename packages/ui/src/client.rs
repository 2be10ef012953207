//! Platform-appropriate card service client.
//!
//! - **Web** (WASM + `web` feature): [`api::HttpClient`] against the configured cohort
//! - **Everything else**: [`api::MemoryClient::demo`], so the page runs offline

use model::ApiConfig;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type Client = api::HttpClient;

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type Client = api::MemoryClient;

/// Create the client the page talks to.
pub fn make_client(config: &ApiConfig) -> Client {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        api::HttpClient::new(config)
    }
    #[cfg(not(all(target_arch = "wasm32", feature = "web")))]
    {
        tracing::info!(endpoint = %config.endpoint(), "using the in-memory demo client");
        api::MemoryClient::demo()
    }
}
