//! `reqwest` implementation of [`RemoteClient`].
//!
//! On wasm32 `reqwest` is backed by the browser's `fetch`, so the same client
//! serves the web build and native tooling.

use reqwest::header::AUTHORIZATION;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;

use model::{ApiConfig, AvatarUpdate, Card, DeleteConfirmation, NewCard, ProfileUpdate, UserProfile};

use crate::error::ApiError;
use crate::RemoteClient;

/// HTTP client bound to one cohort endpoint and token.
#[derive(Clone, Debug)]
pub struct HttpClient {
    http: reqwest::Client,
    endpoint: String,
    token: String,
}

impl HttpClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: config.endpoint(),
            token: config.token.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.endpoint, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!(%method, path, "api request");
        self.http
            .request(method, self.url(path))
            .header(AUTHORIZATION, &self.token)
    }

    async fn send<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status.as_u16(), &body));
        }
        Ok(response.json::<T>().await?)
    }
}

/// `DELETE` removes the current user's like, `PUT` adds it.
fn like_method(is_liked: bool) -> Method {
    if is_liked {
        Method::DELETE
    } else {
        Method::PUT
    }
}

impl RemoteClient for HttpClient {
    async fn get_user_info(&self) -> Result<UserProfile, ApiError> {
        Self::send(self.request(Method::GET, "users/me")).await
    }

    async fn get_card_list(&self) -> Result<Vec<Card>, ApiError> {
        Self::send(self.request(Method::GET, "cards")).await
    }

    async fn set_user_info(&self, update: &ProfileUpdate) -> Result<UserProfile, ApiError> {
        Self::send(self.request(Method::PATCH, "users/me").json(update)).await
    }

    async fn set_user_avatar(&self, avatar: &str) -> Result<UserProfile, ApiError> {
        let body = AvatarUpdate {
            avatar: avatar.to_string(),
        };
        Self::send(self.request(Method::PATCH, "users/me/avatar").json(&body)).await
    }

    async fn add_card(&self, card: &NewCard) -> Result<Card, ApiError> {
        Self::send(self.request(Method::POST, "cards").json(card)).await
    }

    async fn delete_card(&self, card_id: &str) -> Result<DeleteConfirmation, ApiError> {
        Self::send(self.request(Method::DELETE, &format!("cards/{card_id}"))).await
    }

    async fn change_like_card_status(&self, card_id: &str, is_liked: bool) -> Result<Card, ApiError> {
        let path = format!("cards/likes/{card_id}");
        Self::send(self.request(like_method(is_liked), &path)).await
    }
}
