use svg::node::element::Group;

use crate::context::FovContext;
use crate::i18n::tr;
use crate::layers::{group_with_class, line, text, Layer};
use crate::types::Point;

pub struct LabelsLayer {
    text_size: f64,
    tick: f64,
    calibration_gap: f64,
}
impl LabelsLayer {
    pub fn new() -> Self {
        Self {
            text_size: 10.0,
            tick: 20.0,
            calibration_gap: 12.0,
        }
    }

    // Dimension marker: dashed span with end ticks and the real length above it
    fn calibration(&self, span: f64, real_cm: f64, center_y: f64, x: f64) -> Group {
        let top = center_y - span / 2.0;
        let bottom = center_y + span / 2.0;
        group_with_class("calibration")
            .add(line("dashed", Point::new(x, top), Point::new(x, bottom)))
            .add(line(
                "tick",
                Point::new(x - self.tick, top),
                Point::new(x + self.tick, top),
            ))
            .add(line(
                "tick",
                Point::new(x - self.tick, bottom),
                Point::new(x + self.tick, bottom),
            ))
            .add(text(
                "dimension",
                x,
                top - self.text_size / 2.0,
                "middle",
                &format!("{real_cm:.1} cm"),
            ))
    }
}

/// Caption lines: size and triple angle, then aspect ratio and curvature.
pub fn caption_lines(context: &FovContext) -> (String, String) {
    let cfg = &context.cfg;
    let locale = cfg.locale;
    let mut first = format!("{}{}", cfg.screen.size_in, tr(locale, "inch"));
    if cfg.triple {
        first.push_str(&format!(
            " {} {}° {}",
            tr(locale, "tripleMonitor"),
            cfg.triple_angle_deg,
            tr(locale, "angle")
        ));
    }
    let curvature = if cfg.screen.is_flat() {
        tr(locale, "flat").to_string()
    } else {
        format!("{}0R", cfg.screen.curvature_cm)
    };
    let second = format!("{} {}", cfg.screen.aspect, curvature);
    (first, second)
}

impl Layer for LabelsLayer {
    fn render(&self, context: &FovContext) -> Group {
        let mut g = group_with_class("labels");
        let head = context.frame.head;
        let l = &context.layout;

        // Eye-to-screen distance in the side view
        g = g
            .add(line(
                "dashed",
                Point::new(l.top_mon_x, head.side_y),
                Point::new(head.x - 32.0, head.side_y),
            ))
            .add(text(
                "distance",
                l.top_mon_x + 5.0,
                head.side_y - self.text_size / 2.0,
                "start",
                &format!("{} cm", (context.distance_cm * 10.0).round() / 10.0),
            ));

        g = g.add(self.calibration(
            l.height,
            context.real_cm(l.height),
            head.side_y,
            l.side_mon_x - self.calibration_gap,
        ));

        let side_x = if context.cfg.triple {
            l.triple_span().0.x
        } else {
            l.top_mon_x - self.calibration_gap
        };
        g = g.add(self.calibration(
            l.covered_width(context.cfg.triple),
            context.covered_width_cm(),
            head.top_y,
            side_x,
        ));

        let (first, second) = caption_lines(context);
        g.add(text("caption", 10.0, head.side_y - 30.0, "start", &first))
            .add(text("caption", 10.0, head.side_y - 10.0, "start", &second))
    }
}
