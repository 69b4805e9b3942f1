//! Serde document types mirroring the on-disk game-definition format.
//!
//! These structs stay dumb: they match the JSON shape one field to one
//! key and hold strings where the live model holds ids. Defaults and
//! leniency rules live in [`load`](super::load); reference resolution
//! does too. Entity ids travel as strings and are re-derived on load,
//! so linkage survives a round trip even though raw id values change.

use serde::{Deserialize, Serialize};

/// Root of a game-definition file: `{ "games": [...] }`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GamesDoc {
    #[serde(default)]
    pub games: Vec<GameDoc>,
}

/// One game definition.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDoc {
    /// Ref string other documents key on; title stands in when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free text, parsed case-insensitively.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit_minutes: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_players: Option<u32>,
    #[serde(default)]
    pub items: Vec<ItemDoc>,
    #[serde(default)]
    pub rooms: Vec<RoomDoc>,
}

/// One item definition. Rooms and puzzles point at it by its `id` string.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// One room definition.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Absent leaves the room's default lock state alone.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    /// Negative values are ignored on load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint_limit: Option<i64>,
    /// Item ref.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_required: Option<String>,
    /// Item refs.
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub puzzles: Vec<PuzzleDoc>,
}

/// One puzzle definition.
///
/// `kind` names the puzzle type (`"sequence"`, `"riddle"`, `"math"`);
/// when absent the payload fields decide. Only the fields for the
/// actual kind are written.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleDoc {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub hints: Vec<String>,
    /// Item ref.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_provided: Option<String>,
    /// Riddle: accepted answers.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub answers: Vec<String>,
    /// Math: expected value and accepted slack.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
    /// Sequence: round count and generator seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rounds: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}
