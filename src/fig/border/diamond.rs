use svg::{self, node::element as svg_element};

use super::BorderDefinition;
use crate::{color::Color, geometry::Rect};

/// Diamond border definition (decision and merge nodes).
#[derive(Debug, Clone)]
pub struct DiamondDefinition {
    line_width: usize,
}

impl DiamondDefinition {
    /// Create a new diamond definition with default values.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for DiamondDefinition {
    fn default() -> Self {
        Self { line_width: 1 }
    }
}

impl BorderDefinition for DiamondDefinition {
    fn render_to_svg(
        &self,
        bounds: Rect,
        line_color: &Color,
        fill_color: &Color,
    ) -> Box<dyn svg::Node> {
        // Vertices at the midpoints of the bounding box edges
        let mid_x = bounds.x() + bounds.width() / 2;
        let mid_y = bounds.y() + bounds.height() / 2;
        let points = format!(
            "{},{} {},{} {},{} {},{}",
            mid_x,
            bounds.y(),
            bounds.x() + bounds.width(),
            mid_y,
            mid_x,
            bounds.y() + bounds.height(),
            bounds.x(),
            mid_y,
        );

        let polygon = svg_element::Polygon::new()
            .set("points", points)
            .set("stroke", line_color)
            .set("stroke-opacity", line_color.alpha())
            .set("stroke-width", self.line_width)
            .set("fill", fill_color)
            .set("fill-opacity", fill_color.alpha());

        Box::new(polygon)
    }

    fn clone_box(&self) -> Box<dyn BorderDefinition> {
        Box::new(self.clone())
    }
}
