use svg::{self, node::element as svg_element};

use super::BorderDefinition;
use crate::{color::Color, geometry::Rect};

/// Rectangle border definition (object nodes, plain boxes).
#[derive(Debug, Clone)]
pub struct RectangleDefinition {
    line_width: usize,
}

impl RectangleDefinition {
    /// Create a new rectangle definition with default values.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for RectangleDefinition {
    fn default() -> Self {
        Self { line_width: 1 }
    }
}

impl BorderDefinition for RectangleDefinition {
    fn render_to_svg(
        &self,
        bounds: Rect,
        line_color: &Color,
        fill_color: &Color,
    ) -> Box<dyn svg::Node> {
        let rect = svg_element::Rectangle::new()
            .set("x", bounds.x())
            .set("y", bounds.y())
            .set("width", bounds.width())
            .set("height", bounds.height())
            .set("stroke", line_color)
            .set("stroke-opacity", line_color.alpha())
            .set("stroke-width", self.line_width)
            .set("fill", fill_color)
            .set("fill-opacity", fill_color.alpha());

        Box::new(rect)
    }

    fn clone_box(&self) -> Box<dyn BorderDefinition> {
        Box::new(self.clone())
    }
}
