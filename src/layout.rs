use crate::config::{Backdrop, CAR_LENGTH_CM};
use crate::geometry::MonitorGeometry;
use crate::types::Point;

/// Viewer head in drawing units. Both projections share `x`; `top_y` and
/// `side_y` are its row in the top-down and side-on views.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadPosition {
    pub x: f64,
    pub top_y: f64,
    pub side_y: f64,
}

impl HeadPosition {
    pub fn top(&self) -> Point {
        Point::new(self.x, self.top_y)
    }

    pub fn side(&self) -> Point {
        Point::new(self.x, self.side_y)
    }
}

/// Head anchor and drawing scale for a given backdrop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceFrame {
    pub head: HeadPosition,
    /// Drawing units per real centimetre.
    pub scale: f64,
}

impl From<&Backdrop> for ReferenceFrame {
    fn from(b: &Backdrop) -> Self {
        let head = HeadPosition {
            x: b.top_width * b.head_norm_x,
            top_y: b.top_height * b.head_norm_top_y,
            side_y: b.side_height * b.head_norm_side_y + b.side_origin_y(),
        };
        let scale = b.top_width / CAR_LENGTH_CM;
        Self { head, scale }
    }
}

/// Where the monitors land in both projections.
///
/// Top view: the centre panel is the vertical segment at `top_mon_x` from
/// `mon_top_y` to `mon_top_y + width`. Side panels hinge on its ends
/// (`mon_left_y`, `mon_right_y`) and are rotated by `triple_angle_deg`
/// towards the viewer. Side view: the panel face runs from `mon_side_y` to
/// `mon_side_y + height` at `side_mon_x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayLayout {
    pub head: HeadPosition,
    pub top_mon_x: f64,
    pub side_mon_x: f64,
    pub mon_top_y: f64,
    pub mon_side_y: f64,
    pub mon_left_y: f64,
    pub mon_right_y: f64,
    pub triple_angle_deg: f64,
    pub width: f64,
    pub height: f64,
}

pub fn compute_display_layout(
    head: HeadPosition,
    geometry: &MonitorGeometry,
    distance_cm: f64,
    triple_angle_deg: f64,
    scale: f64,
) -> DisplayLayout {
    let front_x = head.x - distance_cm * scale;
    DisplayLayout {
        head,
        // Curved panels: the chord ends sit closer to the viewer than the centre
        top_mon_x: front_x + geometry.thickness,
        side_mon_x: front_x,
        mon_top_y: head.top_y - geometry.width / 2.0,
        mon_side_y: head.side_y - geometry.height / 2.0,
        mon_left_y: head.top_y + geometry.width / 2.0,
        mon_right_y: head.top_y - geometry.width / 2.0,
        triple_angle_deg,
        width: geometry.width,
        height: geometry.height,
    }
}

impl DisplayLayout {
    /// Centre panel endpoints in the top view.
    pub fn top_span(&self) -> (Point, Point) {
        (
            Point::new(self.top_mon_x, self.mon_top_y),
            Point::new(self.top_mon_x, self.mon_top_y + self.width),
        )
    }

    /// Panel face endpoints in the side view.
    pub fn side_span(&self) -> (Point, Point) {
        (
            Point::new(self.side_mon_x, self.mon_side_y),
            Point::new(self.side_mon_x, self.mon_side_y + self.height),
        )
    }

    /// Lateral (`width * sin`) and depth (`width * cos`) reach of a rotated side panel.
    pub fn triple_offsets(&self) -> (f64, f64) {
        let a = self.triple_angle_deg.to_radians();
        (self.width * a.sin(), self.width * a.cos())
    }

    /// Outer ends of both side panels, the span used for the triple horizontal FOV.
    pub fn triple_span(&self) -> (Point, Point) {
        let (sin_x, cos_y) = self.triple_offsets();
        let x = self.top_mon_x + sin_x;
        (
            Point::new(x, self.mon_top_y - cos_y),
            Point::new(x, self.mon_top_y + self.width + cos_y),
        )
    }

    /// Side panel hinged at `mon_left_y`: (hinge, outer end).
    pub fn left_panel(&self) -> (Point, Point) {
        let (sin_x, cos_y) = self.triple_offsets();
        (
            Point::new(self.top_mon_x, self.mon_left_y),
            Point::new(self.top_mon_x + sin_x, self.mon_left_y + cos_y),
        )
    }

    /// Side panel hinged at `mon_right_y`: (hinge, outer end).
    pub fn right_panel(&self) -> (Point, Point) {
        let (sin_x, cos_y) = self.triple_offsets();
        (
            Point::new(self.top_mon_x, self.mon_right_y),
            Point::new(self.top_mon_x + sin_x, self.mon_right_y - cos_y),
        )
    }

    /// Lateral extent covered by the setup, in drawing units.
    pub fn covered_width(&self, triple: bool) -> f64 {
        if triple {
            let (_, cos_y) = self.triple_offsets();
            self.width + 2.0 * cos_y
        } else {
            self.width
        }
    }
}
