//! Guidance tuning values.
//!
//! Defaults match the stock guidance widgets. The Android layer may pass
//! a partial JSON object to override individual values.

use serde::Deserialize;

/// Lookahead horizon for finding a displayable street name.
pub const NEXT_NEXT_MANEUVER_THRESHOLD_M: u64 = 750;

/// Remaining distance under which the destination counts as reached.
pub const DESTINATION_THRESHOLD_M: u64 = 50;

/// After-next maneuvers further away than this are not shown.
pub const NEXT_MANEUVER_MAX_DISTANCE_M: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GuidanceConfig {
    pub lookahead_threshold_m: u64,
    pub destination_threshold_m: u64,
    pub next_maneuver_max_distance_m: u64,
    /// Template joining road number and name, with `{number}` and `{name}`
    /// placeholders.
    pub road_name_divider: String,
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        GuidanceConfig {
            lookahead_threshold_m: NEXT_NEXT_MANEUVER_THRESHOLD_M,
            destination_threshold_m: DESTINATION_THRESHOLD_M,
            next_maneuver_max_distance_m: NEXT_MANEUVER_MAX_DISTANCE_M,
            road_name_divider: "{number}/{name}".to_string(),
        }
    }
}

impl GuidanceConfig {
    /// Parse a config from JSON. Missing keys keep their defaults.
    pub fn from_json(data: &[u8]) -> Result<Self, String> {
        serde_json::from_slice(data).map_err(|e| format!("Config parse error: {e}"))
    }

    /// Join a road number and a road name with the configured divider.
    pub fn join_road(&self, number: &str, name: &str) -> String {
        self.road_name_divider
            .replace("{number}", number)
            .replace("{name}", name)
    }
}
