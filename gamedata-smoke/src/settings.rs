use serde::Deserialize;

static SETTINGS_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/resources/smoke.json5"
));

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Settings {
    pub fn load() -> Result<Self, json5::Error> {
        json5::from_str(SETTINGS_JSON)
    }
}
