mod client;
mod error;
mod schema;

pub use client::{GameDataClient, Reply};
pub use error::ClientError;
pub use schema::{EntityData, GameData, PlayerInfo, Snapshot};
