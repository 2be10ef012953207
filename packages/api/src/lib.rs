//! # API crate — the remote card service as seen by the front-end
//!
//! Every network operation the page performs goes through the [`RemoteClient`]
//! trait, so the UI never talks to `reqwest` directly and tests can swap in an
//! in-process implementation.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`error`] | [`ApiError`], the single error type of every operation |
//! | [`http`] | [`HttpClient`], the `reqwest` implementation (fetch-backed on wasm32) |
//! | [`memory`] | [`MemoryClient`], an in-process implementation mirroring the server's rules |
//!
//! ## Operations
//!
//! | Method | Request | Result |
//! |--------|---------|--------|
//! | `get_user_info` | `GET /users/me` | [`UserProfile`] |
//! | `get_card_list` | `GET /cards` | `Vec<Card>` |
//! | `set_user_info` | `PATCH /users/me` | [`UserProfile`] |
//! | `set_user_avatar` | `PATCH /users/me/avatar` | [`UserProfile`] |
//! | `add_card` | `POST /cards` | [`Card`] |
//! | `delete_card` | `DELETE /cards/:id` | [`DeleteConfirmation`] |
//! | `change_like_card_status` | `PUT` / `DELETE /cards/likes/:id` | [`Card`] |
//!
//! [`load_initial`] runs the two startup fetches concurrently and joins them.

use std::future::Future;

pub use model::{Card, DeleteConfirmation, NewCard, ProfileUpdate, UserProfile};

pub mod error;
pub mod http;
pub mod memory;

pub use error::ApiError;
pub use http::HttpClient;
pub use memory::MemoryClient;

/// Async access to the card service.
pub trait RemoteClient {
    fn get_user_info(&self) -> impl Future<Output = Result<UserProfile, ApiError>>;

    fn get_card_list(&self) -> impl Future<Output = Result<Vec<Card>, ApiError>>;

    fn set_user_info(
        &self,
        update: &ProfileUpdate,
    ) -> impl Future<Output = Result<UserProfile, ApiError>>;

    fn set_user_avatar(&self, avatar: &str) -> impl Future<Output = Result<UserProfile, ApiError>>;

    fn add_card(&self, card: &NewCard) -> impl Future<Output = Result<Card, ApiError>>;

    fn delete_card(&self, card_id: &str)
        -> impl Future<Output = Result<DeleteConfirmation, ApiError>>;

    /// Unlike when `is_liked` is set, like otherwise. Returns the card with its
    /// refreshed liker list.
    fn change_like_card_status(
        &self,
        card_id: &str,
        is_liked: bool,
    ) -> impl Future<Output = Result<Card, ApiError>>;
}

/// Fetch the profile and the card list concurrently.
pub async fn load_initial<C: RemoteClient>(
    client: &C,
) -> Result<(UserProfile, Vec<Card>), ApiError> {
    futures::try_join!(client.get_user_info(), client.get_card_list())
}
