//! Defensive efficiency by opposing position (`defensive_efficiency`).

use serde::{Deserialize, Serialize};

use crate::api::TeamId;

/// Storage column → JSON field for [`DefensiveEfficiency`].
///
/// Consumers depend on these names. `c_efficiency` in particular must stay
/// `cEfficiency` on the wire.
pub const DEFENSIVE_EFFICIENCY_WIRE_NAMES: [(&str, &str); 6] = [
    ("team_id", "teamId"),
    ("pg_efficiency", "pgEfficiency"),
    ("sg_efficiency", "sgEfficiency"),
    ("sf_efficiency", "sfEfficiency"),
    ("pf_efficiency", "pfEfficiency"),
    ("c_efficiency", "cEfficiency"),
];

/// How a team defends each position (PG, SG, SF, PF, C).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefensiveEfficiency {
    #[serde(rename = "teamId")]
    pub team_id: TeamId,
    #[serde(rename = "pgEfficiency")]
    pub pg_efficiency: Option<f64>,
    #[serde(rename = "sgEfficiency")]
    pub sg_efficiency: Option<f64>,
    #[serde(rename = "sfEfficiency")]
    pub sf_efficiency: Option<f64>,
    #[serde(rename = "pfEfficiency")]
    pub pf_efficiency: Option<f64>,
    #[serde(rename = "cEfficiency")]
    pub c_efficiency: Option<f64>,
}
