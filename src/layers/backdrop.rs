use svg::node::element::{Circle, Group, Rectangle};

use crate::context::FovContext;
use crate::layers::{group_with_class, Layer};

pub struct BackdropLayer {
    head_radius: f64,
}
impl BackdropLayer {
    pub fn new() -> Self {
        Self { head_radius: 6.0 }
    }
}

impl Layer for BackdropLayer {
    fn render(&self, context: &FovContext) -> Group {
        let mut g = group_with_class("backdrop");
        let b = &context.cfg.backdrop;

        let top = Rectangle::new()
            .set("class", "view top")
            .set("x", 0)
            .set("y", 0)
            .set("width", b.top_width)
            .set("height", b.top_height);
        let side = Rectangle::new()
            .set("class", "view side")
            .set("x", 0)
            .set("y", b.side_origin_y())
            .set("width", b.side_width)
            .set("height", b.side_height);
        g = g.add(top).add(side);

        let head = context.frame.head;
        for p in [head.top(), head.side()] {
            g = g.add(
                Circle::new()
                    .set("class", "head")
                    .set("cx", p.x)
                    .set("cy", p.y)
                    .set("r", self.head_radius),
            );
        }
        g
    }
}
