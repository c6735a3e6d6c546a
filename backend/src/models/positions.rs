use serde::{Deserialize, Serialize};

use crate::api::PositionId;

/// Player position lookup row (`positions`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: PositionId,
    pub player_name: Option<String>,
    /// Listed position, e.g. `G`, `F-C`.
    pub player_position: Option<String>,
}
