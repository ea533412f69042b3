use serde::Deserialize;
use serde_json::Value;

/// Which `/getData` variant to request. `Full` adds the terrain string,
/// which can run to hundreds of kilobytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Snapshot {
    Partial,
    Full,
}

impl Snapshot {
    pub fn as_query(self) -> &'static str {
        match self {
            Snapshot::Partial => "partial",
            Snapshot::Full => "full",
        }
    }
}

/// Payload of `/getData`. Every field is optional: the service omits
/// whatever it can't read from the game at that moment.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameData {
    pub game_state: Option<Value>, // integer on some server builds, string on others
    pub area_name: Option<Value>,
    pub is_loading: Option<Value>,
    pub terrain_string: Option<String>,
    pub player: Option<PlayerInfo>,
    pub window_bounds: Vec<i64>, // [x, right, y, bottom]
    pub mouse_position: Vec<i64>,
    pub area_hash: Option<u32>,
    pub is_loading_background: Option<bool>,
    pub invites_panel_visible: Option<bool>,
    pub awake_entities: Vec<EntityData>,
    pub visible_labels: Vec<EntityData>,
    pub items_on_ground: Vec<EntityData>,
    pub controller_type: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerInfo {
    pub level: Option<Value>,
    pub grid_position: Vec<i64>,
    pub life_data: Vec<i64>,
    pub buffs: Vec<String>,
    pub is_moving: Option<i64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntityData {
    pub id: Option<i64>,
    pub path: Option<String>,
    pub entity_type: Option<String>,
    pub grid_position: Vec<i64>,
    pub world_position: Vec<i64>,
    pub screen_position: Vec<i64>,
    pub rarity: Option<String>,
    pub is_hostile: Option<i64>,
    pub is_attackable: Option<i64>,
    pub is_targetable: Option<i64>,
    pub is_targeted: Option<i64>,
    pub is_opened: Option<i64>,
    pub has_bounds: Option<i64>,
    pub render_name: Option<String>,
    pub life_data: Vec<i64>,
}
