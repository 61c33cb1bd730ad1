//! The persisted preference record.
//!
//! [`Preferences`] holds every value the store knows about.  Its `Serialize`
//! implementation defines the on-disk key names and their order, so the file
//! written by the store is always the same for the same values.

use serde::Serialize;

use super::geometry::{Bounds, Vector2};

/// JSON key names of the nine persisted fields.
pub mod keys {
    pub const BOUNDS_TOP_LEFT: &str = "boundsTopLeft";
    pub const BOUNDS_TOP_RIGHT: &str = "boundsTopRight";
    pub const BOUNDS_BOTTOM_RIGHT: &str = "boundsBottomRight";
    pub const BOUNDS_BOTTOM_LEFT: &str = "boundsBottomLeft";
    pub const TOTAL_FADE_TIME_MS: &str = "totalFadeTimeMS";
    pub const CAM_BRIGHTNESS: &str = "camBrightness";
    pub const CAM_CONTRAST: &str = "camContrast";
    pub const CAM_SATURATION: &str = "camSaturation";
    pub const CAM_GAIN: &str = "camGain";

    /// All keys in the order they are read and written.
    pub const ALL: [&str; 9] = [
        BOUNDS_TOP_LEFT,
        BOUNDS_TOP_RIGHT,
        BOUNDS_BOTTOM_RIGHT,
        BOUNDS_BOTTOM_LEFT,
        TOTAL_FADE_TIME_MS,
        CAM_BRIGHTNESS,
        CAM_CONTRAST,
        CAM_SATURATION,
        CAM_GAIN,
    ];
}

/// Camera tuning scalars.  Values are passed through unclamped.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraSettings {
    pub brightness: f32,
    pub contrast: f32,
    pub saturation: f32,
    pub gain: f32,
}

/// All persisted preference values.
///
/// `Default` places every corner at the origin and zeroes every scalar; these
/// are the values written for keys absent from the file on first load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Preferences {
    #[serde(rename = "boundsTopLeft")]
    pub bounds_top_left: Vector2,
    #[serde(rename = "boundsTopRight")]
    pub bounds_top_right: Vector2,
    #[serde(rename = "boundsBottomRight")]
    pub bounds_bottom_right: Vector2,
    #[serde(rename = "boundsBottomLeft")]
    pub bounds_bottom_left: Vector2,
    /// Duration of a full fade, in milliseconds.
    #[serde(rename = "totalFadeTimeMS")]
    pub total_fade_time_ms: f32,
    #[serde(rename = "camBrightness")]
    pub cam_brightness: f32,
    #[serde(rename = "camContrast")]
    pub cam_contrast: f32,
    #[serde(rename = "camSaturation")]
    pub cam_saturation: f32,
    #[serde(rename = "camGain")]
    pub cam_gain: f32,
}

impl Preferences {
    /// Returns the four bound corners by copy.
    pub fn bounds(&self) -> Bounds {
        Bounds::new(
            self.bounds_top_left,
            self.bounds_top_right,
            self.bounds_bottom_right,
            self.bounds_bottom_left,
        )
    }

    /// Overwrites all four bound corners.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds_top_left = bounds.top_left;
        self.bounds_top_right = bounds.top_right;
        self.bounds_bottom_right = bounds.bottom_right;
        self.bounds_bottom_left = bounds.bottom_left;
    }

    /// Returns the camera tuning scalars by copy.
    pub fn camera(&self) -> CameraSettings {
        CameraSettings {
            brightness: self.cam_brightness,
            contrast: self.cam_contrast,
            saturation: self.cam_saturation,
            gain: self.cam_gain,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
