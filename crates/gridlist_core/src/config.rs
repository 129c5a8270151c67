//! Engine tunables.
//!
//! Every threshold the controller uses lives here so hosts can tune gesture
//! feel per device (terminal cells are far coarser than touch pixels).

use serde::{Deserialize, Serialize};

/// Thresholds and ratios for gesture classification and momentum scrolling.
///
/// Distances are in layout units (the same units as item width/height).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Displacement from the press origin beyond which a press becomes a drag.
    pub drag_threshold: f32,
    /// Accumulated wheel delta that scrolls one row.
    pub wheel_threshold: f32,
    /// Number of recent drag deltas kept for release velocity.
    pub momentum_capacity: usize,
    /// Per-tick multiplier applied to the release velocity.
    pub momentum_decay: f32,
    /// Coasting stops once the velocity magnitude drops below this.
    pub momentum_min_speed: f32,
    /// Ticks without a selection change before a press near an edge nudges the cursor.
    pub nudge_stay_ticks: u32,
    /// Height of the band inside each vertical edge of the frame that counts as "near the edge".
    pub nudge_edge_band: f32,
    /// Minimum horizontal travel for a swipe.
    pub swipe_distance: f32,
    /// A swipe must complete within this many ticks of the press.
    pub swipe_max_ticks: u32,
    /// Whether pointer hover moves the selection.
    pub hover_select: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 12.0,
            wheel_threshold: 20.0,
            momentum_capacity: 3,
            momentum_decay: 0.9,
            momentum_min_speed: 2.0,
            nudge_stay_ticks: 10,
            nudge_edge_band: 8.0,
            swipe_distance: 48.0,
            swipe_max_ticks: 12,
            hover_select: true,
        }
    }
}
