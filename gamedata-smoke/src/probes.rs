use gamedata_api::{GameDataClient, Snapshot};
use serde_json::Value;

// Fixed coordinates fed to the position endpoints.
const PROBE_GRID_X: i32 = 100;
const PROBE_GRID_Y: i32 = 200;
const PROBE_WORLD_Z: i32 = 0;

/// Runs every probe in order and returns the full report. Probes never
/// abort the run; a failed request becomes a single narrated line.
pub async fn run_all(client: &GameDataClient) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push("Probing game-data API...".to_owned());
    lines.push("=".repeat(50));

    lines.extend(probe_root(client).await);
    lines.push(String::new());
    lines.extend(probe_partial_data(client).await);
    lines.push(String::new());
    lines.extend(probe_full_data(client).await);
    lines.push(String::new());
    lines.extend(probe_screen_pos(client).await);
    lines.push(String::new());
    lines.extend(probe_location_on_screen(client).await);
    lines.push(String::new());

    lines.push("API probe completed!".to_owned());
    lines
}

pub async fn probe_root(client: &GameDataClient) -> Vec<String> {
    match client.root().await {
        Ok(reply) => {
            let mut lines = vec![format!("Root endpoint: {}", reply.status.as_u16())];
            if let Some(body) = reply.body {
                lines.push(format!("Response: {body:#}"));
            }
            lines
        }
        Err(err) => vec![format!("Root endpoint failed: {err}")],
    }
}

pub async fn probe_partial_data(client: &GameDataClient) -> Vec<String> {
    match client.game_data(Snapshot::Partial).await {
        Ok(reply) => {
            let mut lines = vec![format!("GetData (partial): {}", reply.status.as_u16())];
            if let Some(data) = reply.body {
                lines.push(format!("Game State: {}", display_field(data.game_state.as_ref())));
                lines.push(format!("Area Name: {}", display_field(data.area_name.as_ref())));
                lines.push(format!("Is Loading: {}", display_field(data.is_loading.as_ref())));
                let level = data.player.as_ref().and_then(|p| p.level.as_ref());
                lines.push(format!("Player Level: {}", display_field(level)));
            }
            lines
        }
        Err(err) => vec![format!("GetData (partial) failed: {err}")],
    }
}

pub async fn probe_full_data(client: &GameDataClient) -> Vec<String> {
    match client.game_data(Snapshot::Full).await {
        Ok(reply) => {
            let mut lines = vec![format!("GetData (full): {}", reply.status.as_u16())];
            if let Some(data) = reply.body {
                // The terrain string itself can be enormous; report only its size.
                let length = data.terrain_string.as_deref().unwrap_or("").chars().count();
                lines.push(format!("Terrain String Length: {length}"));
            }
            lines
        }
        Err(err) => vec![format!("GetData (full) failed: {err}")],
    }
}

pub async fn probe_screen_pos(client: &GameDataClient) -> Vec<String> {
    match client.screen_pos(PROBE_GRID_X, PROBE_GRID_Y).await {
        Ok(reply) => {
            let mut lines = vec![format!("GetScreenPos: {}", reply.status.as_u16())];
            if let Some(body) = reply.body {
                lines.push(format!("Screen Position: {body}"));
            }
            lines
        }
        Err(err) => vec![format!("GetScreenPos failed: {err}")],
    }
}

pub async fn probe_location_on_screen(client: &GameDataClient) -> Vec<String> {
    match client
        .location_on_screen(PROBE_GRID_X, PROBE_GRID_Y, PROBE_WORLD_Z)
        .await
    {
        Ok(reply) => {
            let mut lines = vec![format!("GetLocationOnScreen: {}", reply.status.as_u16())];
            if let Some(body) = reply.body {
                lines.push(format!("Location On Screen: {body}"));
            }
            lines
        }
        Err(err) => vec![format!("GetLocationOnScreen failed: {err}")],
    }
}

/// Human rendering of an optional JSON field: absent and null collapse to
/// "Unknown", strings print bare, booleans print capitalized, anything else
/// prints as compact JSON.
fn display_field(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "Unknown".to_owned(),
        Some(Value::Bool(true)) => "True".to_owned(),
        Some(Value::Bool(false)) => "False".to_owned(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
