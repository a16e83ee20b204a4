use svg::node::element::{Group, Line, Text as TextEl};

use crate::context::FovContext;
use crate::types::Point;

pub trait Layer {
    /// Produce an SVG group for this layer.
    fn render(&self, context: &FovContext) -> Group;
}

pub fn group_with_class(class: &str) -> Group {
    let mut g = Group::new();
    g = g.set("class", class);
    g
}

pub fn text(class: &str, x: f64, y: f64, anchor: &str, content: &str) -> TextEl {
    TextEl::new(content)
        .set("class", class)
        .set("x", x)
        .set("y", y)
        .set("text-anchor", anchor)
}

pub fn line(class: &str, a: Point, b: Point) -> Line {
    Line::new()
        .set("class", class)
        .set("x1", a.x)
        .set("y1", a.y)
        .set("x2", b.x)
        .set("y2", b.y)
}

pub mod angles;
pub mod backdrop;
pub mod labels;
pub mod monitors;

pub use angles::AnglesLayer;
pub use backdrop::BackdropLayer;
pub use labels::LabelsLayer;
pub use monitors::MonitorsLayer;
