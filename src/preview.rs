use std::fs;
use svg::Document;
use svg::node::element::Style;

use crate::context::FovContext;
use crate::layers::{AnglesLayer, BackdropLayer, LabelsLayer, Layer, MonitorsLayer};

// Load the default css for embedding
const DEFAULT_CSS: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/styles/preview.css"));

/// Top-down and side-on diagram of one scene.
pub struct Preview<'a> {
    pub context: &'a FovContext,
    css_path: Option<String>,
}

impl<'a> Preview<'a> {
    pub fn new(context: &'a FovContext, css_path: Option<String>) -> Self {
        Self { context, css_path }
    }

    fn load_css_text(&self) -> String {
        if let Some(path) = &self.css_path {
            if let Ok(text) = fs::read_to_string(path) {
                return text;
            }
        }
        // Embedded fallback
        DEFAULT_CSS.to_owned()
    }

    pub fn draw_document(&self) -> Document {
        let b = &self.context.cfg.backdrop;

        // Layer stack, back to front
        let layers: Vec<Box<dyn Layer>> = vec![
            Box::new(BackdropLayer::new()),
            Box::new(MonitorsLayer::new()),
            Box::new(AnglesLayer::new()),
            Box::new(LabelsLayer::new()),
        ];

        let mut doc = Document::new()
            .set("xmlns", "http://www.w3.org/2000/svg")
            .set("width", b.canvas_width())
            .set("height", b.canvas_height())
            .set("class", "preview");

        let css = self.load_css_text();
        if !css.is_empty() {
            doc = doc.add(Style::new(css));
        }

        for layer in layers {
            doc = doc.add(layer.render(self.context));
        }
        doc
    }

    pub fn to_file(&self, path: &str) -> std::io::Result<()> {
        let doc = self.draw_document();
        svg::save(path, &doc)
    }
}
