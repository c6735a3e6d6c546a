use serde::{Deserialize, Serialize};

use crate::api::AverageId;

/// Per-player aggregate averages from the `averages` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Average {
    pub id: AverageId,
    pub player_name: Option<String>,
    pub player_pts: Option<f64>,
    pub player_reb: Option<f64>,
    pub player_ast: Option<f64>,
    /// Points + rebounds + assists.
    pub player_pra: Option<f64>,
}
