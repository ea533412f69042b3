use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Couldn't build HTTP client: {0}")]
    Build(reqwest::Error),

    #[error("Request failed: {0}")]
    Request(reqwest::Error),

    #[error("Couldn't deserialize response: {0}")]
    Deserialize(reqwest::Error),
}
