use svg::node::element::Group;

use crate::context::FovContext;
use crate::games::format_fixed;
use crate::layers::{group_with_class, line, text, Layer};
use crate::types::Point;

pub struct AnglesLayer {
    label_offset: f64,
}
impl AnglesLayer {
    pub fn new() -> Self {
        Self { label_offset: 30.0 }
    }

    fn rays(&self, g: Group, apex: Point, from: Point, to: Point) -> Group {
        g.add(line("ray", apex, from)).add(line("ray", apex, to))
    }

    fn label(&self, g: Group, apex: Point, dx: f64, angle: Option<f64>) -> Group {
        match angle {
            Some(deg) => g.add(text(
                "angle",
                apex.x + dx,
                apex.y + 5.0,
                "middle",
                &format!("{}°", format_fixed(deg, 0)),
            )),
            None => g,
        }
    }
}

impl Layer for AnglesLayer {
    fn render(&self, context: &FovContext) -> Group {
        let mut g = group_with_class("angles");
        let head = context.frame.head;
        let l = &context.layout;

        let (from, to) = l.side_span();
        g = self.rays(g, head.side(), from, to);
        g = self.label(g, head.side(), -self.label_offset, context.angles.vertical);

        let (from, to) = l.top_span();
        g = self.rays(g, head.top(), from, to);
        g = self.label(
            g,
            head.top(),
            -self.label_offset,
            context.angles.horizontal_single,
        );

        if context.cfg.triple {
            let (from, to) = l.triple_span();
            g = self.rays(g, head.top(), from, to);
            g = self.label(
                g,
                head.top(),
                self.label_offset,
                context.angles.horizontal_triple,
            );
        }
        g
    }
}
