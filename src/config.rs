use crate::solver::SolverConfig;
use crate::types::{AspectRatio, Locale, ScreenSpec};

/// Real-world length of the reference car drawn in the backdrop (cm).
pub const CAR_LENGTH_CM: f64 = 424.0;

/// Dimensions of the top-down and side-on reference images, in drawing units.
///
/// The side image sits below the top image, separated by `gap`. The head
/// anchor is stored normalized to each image so it follows the backdrop when
/// its size changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Backdrop {
    pub top_width: f64,
    pub top_height: f64,
    pub side_width: f64,
    pub side_height: f64,
    pub gap: f64,
    pub head_norm_x: f64,
    pub head_norm_top_y: f64,
    pub head_norm_side_y: f64,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self {
            top_width: 600.0,
            top_height: 240.0,
            side_width: 600.0,
            side_height: 240.0,
            gap: 80.0,
            head_norm_x: 0.555,
            head_norm_top_y: 0.67,
            head_norm_side_y: 0.22,
        }
    }
}

impl Backdrop {
    /// Top edge of the side-on image.
    pub fn side_origin_y(&self) -> f64 {
        self.top_height + self.gap
    }

    pub fn canvas_height(&self) -> f64 {
        self.side_origin_y() + self.side_height
    }

    pub fn canvas_width(&self) -> f64 {
        self.top_width.max(self.side_width)
    }
}

/// How the viewing distance is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum FovMode {
    /// Use `SceneConfig::distance_cm` as given.
    #[default]
    Manual,
    /// Search for the distance that yields this vertical FOV (degrees).
    FixedVertical { target_deg: f64 },
}

/// Which angle the `hfov-rad` transfer converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HfovRadMode {
    /// Vertical angle, as the published calculator always did.
    #[default]
    Literal,
    /// Horizontal angle, matching the entry's name.
    Corrected,
}

#[derive(Debug, Clone)]
pub struct SceneConfig {
    pub screen: ScreenSpec,
    pub distance_cm: f64,
    pub triple: bool,
    pub triple_angle_deg: f64,
    pub mode: FovMode,
    pub hfov_rad: HfovRadMode,
    pub locale: Locale,
    pub backdrop: Backdrop,
    pub solver: SolverConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            screen: ScreenSpec {
                size_in: 32.0,
                aspect: AspectRatio::new(16, 9),
                curvature_cm: 0.0,
            },
            distance_cm: 70.0,
            triple: true,
            triple_angle_deg: 60.0,
            mode: FovMode::Manual,
            hfov_rad: HfovRadMode::Literal,
            locale: Locale::En,
            backdrop: Backdrop::default(),
            solver: SolverConfig::default(),
        }
    }
}
