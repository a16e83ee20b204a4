use svg::node::element::path::Data;
use svg::node::element::{Group, Path};

use crate::context::FovContext;
use crate::geometry::span_arc;
use crate::layers::{group_with_class, line, Layer};

pub struct MonitorsLayer;
impl MonitorsLayer {
    pub fn new() -> Self {
        Self
    }
}

// Curved panel seen from above, as an arc between two points sharing `x`
fn arc_path(x: f64, from_y: f64, to_y: f64, radius: f64) -> Path {
    let arc = span_arc(x, from_y, to_y, radius);
    let d = Data::new()
        .move_to((arc.start.x, arc.start.y))
        .elliptical_arc_to((arc.radius, arc.radius, 0.0, 0.0, 0.0, arc.end.x, arc.end.y));
    Path::new()
        .set("class", "monitor")
        .set("fill", "none")
        .set("d", d)
}

impl Layer for MonitorsLayer {
    fn render(&self, context: &FovContext) -> Group {
        let mut g = group_with_class("monitors");
        let l = &context.layout;

        // Side view, panel face
        let (a, b) = l.side_span();
        g = g.add(line("monitor", a, b));

        let curved = context.geometry.is_curved();
        let radius = context.cfg.screen.curvature_cm * context.frame.scale;

        // Top view, centre panel
        let (a, b) = l.top_span();
        if curved {
            g = g.add(arc_path(a.x, a.y, b.y, radius));
        } else {
            g = g.add(line("monitor", a, b));
        }

        if !context.cfg.triple {
            return g;
        }

        if curved {
            // Draw unrotated, then swing about the hinge
            let angle = l.triple_angle_deg;
            let left = Group::new()
                .set(
                    "transform",
                    format!("rotate({} {} {})", -angle, l.top_mon_x, l.mon_left_y),
                )
                .add(arc_path(l.top_mon_x, l.mon_left_y, l.mon_left_y + l.width, radius));
            let right = Group::new()
                .set(
                    "transform",
                    format!("rotate({} {} {})", angle, l.top_mon_x, l.mon_right_y),
                )
                .add(arc_path(l.top_mon_x, l.mon_right_y - l.width, l.mon_right_y, radius));
            g = g.add(left).add(right);
        } else {
            let (hinge, outer) = l.left_panel();
            g = g.add(line("monitor", hinge, outer));
            let (hinge, outer) = l.right_panel();
            g = g.add(line("monitor", hinge, outer));
        }
        g
    }
}
