use crate::types::Point;
use log::debug;

pub const CM_PER_INCH: f64 = 2.54;

/// Physical panel extents in scaled drawing units.
///
/// `width` is the chord width for curved panels, `thickness` the sagitta
/// (chord-to-arc depth) and `curve_angle` the arc angle in radians. Both are
/// zero for flat panels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonitorGeometry {
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
    pub curve_angle: f64,
}

impl MonitorGeometry {
    pub fn is_curved(&self) -> bool {
        self.curve_angle > 0.0
    }
}

// Derive panel extents from the diagonal.
// - `screen_size_in`: diagonal in inches
// - `aspect_ratio`: width / height
// - `curvature_cm`: arc radius, `<= 0` for a flat panel
// - `scale`: drawing units per real centimetre
//
// A curved panel is an arc of `curvature_cm` whose length equals the real flat
// width, so its chord is what occupies space in front of the viewer.
pub fn compute_monitor_geometry(
    screen_size_in: f64,
    aspect_ratio: f64,
    curvature_cm: f64,
    scale: f64,
) -> MonitorGeometry {
    let real_width =
        (CM_PER_INCH * screen_size_in) * (aspect_ratio / (1.0 + aspect_ratio * aspect_ratio).sqrt());
    let real_height = real_width / aspect_ratio;

    let geometry = if curvature_cm <= 0.0 {
        MonitorGeometry {
            width: real_width * scale,
            height: real_height * scale,
            thickness: 0.0,
            curve_angle: 0.0,
        }
    } else {
        let angle = real_width / curvature_cm;
        let chord = 2.0 * curvature_cm * (angle / 2.0).sin();
        let sagitta = curvature_cm * (1.0 - (angle / 2.0).cos());
        MonitorGeometry {
            width: chord * scale,
            height: real_height * scale,
            thickness: sagitta * scale,
            curve_angle: angle,
        }
    };
    debug!("monitor geometry: {geometry:?}");
    geometry
}

// Angle in degrees subtended at `apex` by the span `from`..`to`.
//
// Only symmetric spans are supported: both endpoints must share the same x,
// with the apex looking perpendicular onto the span. Anything else yields
// `None`. When the span lies beyond the apex (`apex.x < from.x`) the reflex
// angle is returned so that toed-in triple setups keep growing past 180°.
pub fn subtended_angle_deg(apex: Point, from: Point, to: Point) -> Option<f64> {
    if from.x != to.x {
        return None;
    }
    let y_diff = (from.y - to.y).abs();
    let radius = ((from.x - apex.x).powi(2) + (from.y - apex.y).powi(2)).sqrt();
    let half_angle = (y_diff / 2.0 / radius).asin().abs();
    let angle = (half_angle * 2.0).to_degrees();

    if apex.x < from.x {
        Some(360.0 - angle)
    } else {
        Some(angle)
    }
}

/// Circular arc standing in for a curved panel seen from above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpanArc {
    pub start: Point,
    pub end: Point,
    pub center: Point,
    pub radius: f64,
    pub half_angle: f64,
}

// Arc of `radius` through (x, from_y) and (x, to_y), bulging towards -x
// (away from a viewer placed at larger x).
pub fn span_arc(x: f64, from_y: f64, to_y: f64, radius: f64) -> SpanArc {
    let half_len = (to_y - from_y) / 2.0;
    let half_angle = (half_len / radius).asin();
    SpanArc {
        start: Point::new(x, from_y),
        end: Point::new(x, to_y),
        center: Point::new(x + radius * half_angle.cos(), from_y + half_len),
        radius,
        half_angle,
    }
}
