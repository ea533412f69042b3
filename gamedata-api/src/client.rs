use crate::error::ClientError;
use crate::schema::{GameData, Snapshot};
use log::info;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// Client for the game-data HTTP service.
pub struct GameDataClient {
    http: reqwest::Client,
    base_url: String,
}

/// Outcome of a single fetch. `body` is present only for a 200 response
/// whose body decoded; any other status is carried as-is for the caller
/// to report.
#[derive(Debug)]
pub struct Reply<T> {
    pub status: StatusCode,
    pub body: Option<T>,
}

impl GameDataClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(ClientError::Build)?;

        Ok(GameDataClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        })
    }

    pub async fn root(&self) -> Result<Reply<Value>, ClientError> {
        self.fetch("/", &[]).await
    }

    pub async fn game_data(&self, snapshot: Snapshot) -> Result<Reply<GameData>, ClientError> {
        self.fetch("/getData", &[("type", snapshot.as_query().to_owned())])
            .await
    }

    pub async fn screen_pos(&self, x: i32, y: i32) -> Result<Reply<Value>, ClientError> {
        self.fetch("/getScreenPos", &[("x", x.to_string()), ("y", y.to_string())])
            .await
    }

    pub async fn location_on_screen(
        &self,
        x: i32,
        y: i32,
        z: i32,
    ) -> Result<Reply<Value>, ClientError> {
        self.fetch(
            "/getLocationOnScreen",
            &[("x", x.to_string()), ("y", y.to_string()), ("z", z.to_string())],
        )
        .await
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<Reply<T>, ClientError> {
        let url = self.base_url.clone() + path;

        let mut request = self.http.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }

        info!("Fetching {url}");
        let response = request.send().await.map_err(ClientError::Request)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Ok(Reply { status, body: None });
        }

        let body = response.json().await.map_err(ClientError::Deserialize)?;
        Ok(Reply {
            status,
            body: Some(body),
        })
    }
}
