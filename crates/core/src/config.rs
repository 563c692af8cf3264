use crate::grid::{Orientation, Shift};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Smallest radius that passes validation. `validator` range checks are
/// inclusive, so this is the lower bound that stands in for `radius > 0`.
/// Keep it in sync with the attribute on [GridConfig::radius].
pub const MIN_RADIUS: f64 = 0.000001;

/// Configuration that defines a hexagon grid. Two grids created from the same
/// config will always be identical. See
/// [HexagonGrid::new](crate::HexagonGrid::new).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct GridConfig {
    /// Distance from the center of each hexagon to each of its corners, in
    /// pixels. This is also the length of one side. Must be at least
    /// [MIN_RADIUS].
    #[validate(range(min = 0.000001))]
    pub radius: f64,

    /// Which way the hexagons face
    pub orientation: Orientation,

    /// Which rows (horizontal grids) or columns (vertical grids) are shifted
    /// by half a cell
    pub shift: Shift,
}

impl GridConfig {
    /// Deserialize a config from JSON. Missing fields fall back to their
    /// defaults. Will fail if the input is malformed or the resulting config
    /// is invalid.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        use anyhow::Context;

        let config: Self =
            serde_json::from_str(json).context("error deserializing config")?;
        config.validate().context("invalid grid config")?;
        Ok(config)
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            radius: 1.0,
            orientation: Orientation::Vertical,
            shift: Shift::Odd,
        }
    }
}
