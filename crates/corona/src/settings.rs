use crate::easing::Easing;
use crate::{DEFAULT_DURATION_MS, DEFAULT_ICON_SIZE, DEFAULT_MAX_OFFSET};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Radius interpolation parameters. Offsets are logical units.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimationSpec {
    pub duration_ms: u64,
    pub max_offset: f64,
    pub easing: Easing,
}

impl AnimationSpec {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_DURATION_MS,
            max_offset: DEFAULT_MAX_OFFSET,
            easing: Easing::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    pub icon_size: f64,
    /// Logical units to device pixels.
    pub scale_factor: f64,
    pub animation: AnimationSpec,
}

impl Settings {
    pub fn to_px(&self, logical: f64) -> f64 {
        logical * self.scale_factor
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            icon_size: DEFAULT_ICON_SIZE,
            scale_factor: 1.0,
            animation: AnimationSpec::default(),
        }
    }
}
