//! Border figures: the outline representing a node's shape.
//!
//! A [`Border`] carries the state every outline has (bounds, line color,
//! fill color); the shape-specific behavior lives behind the
//! [`BorderDefinition`] trait. Concrete node kinds differ only in which
//! definition they are constructed with.

use std::fmt;

use crate::{
    color::Color,
    geometry::{Insets, Rect},
};

mod diamond;
mod rectangle;
mod rounded;

pub use diamond::DiamondDefinition;
pub use rectangle::RectangleDefinition;
pub use rounded::RoundedDefinition;

/// Default label margin, in canvas units, on each side of the name.
const MARGIN: i32 = 2;

/// Shape-specific border behavior.
///
/// Implementing this trait is how a new node kind is added: the node
/// presentation algorithm is shared, only the outline rendering and
/// (optionally) the label margins vary. The four margin methods default
/// to 2 units each; a shape may override any subset to change the label
/// inset without touching the layout algorithm.
pub trait BorderDefinition: fmt::Debug {
    /// Renders the outline for the given bounds to an SVG node element.
    fn render_to_svg(
        &self,
        bounds: Rect,
        line_color: &Color,
        fill_color: &Color,
    ) -> Box<dyn svg::Node>;

    /// Creates a boxed clone of this border definition.
    fn clone_box(&self) -> Box<dyn BorderDefinition>;

    /// Margin above the name label.
    fn top_margin(&self) -> i32 {
        MARGIN
    }

    /// Margin left of the name label.
    fn left_margin(&self) -> i32 {
        MARGIN
    }

    /// Margin right of the name label.
    fn right_margin(&self) -> i32 {
        MARGIN
    }

    /// Margin below the name label.
    fn bottom_margin(&self) -> i32 {
        MARGIN
    }

    /// All four label margins as insets.
    fn margins(&self) -> Insets {
        Insets::new(
            self.top_margin(),
            self.right_margin(),
            self.bottom_margin(),
            self.left_margin(),
        )
    }
}

/// Enable cloning of `Box<dyn BorderDefinition>` by delegating to clone_box.
impl Clone for Box<dyn BorderDefinition> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// The outline figure of a diagram node.
///
/// Owned exclusively by its node presentation; the parent keeps the
/// border's bounds identical to its own.
#[derive(Debug, Clone)]
pub struct Border {
    definition: Box<dyn BorderDefinition>,
    bounds: Rect,
    line_color: Color,
    fill_color: Color,
}

impl Border {
    /// Creates a border from a shape definition, initial bounds, and colors.
    pub fn new(
        definition: Box<dyn BorderDefinition>,
        bounds: Rect,
        line_color: Color,
        fill_color: Color,
    ) -> Self {
        Self {
            definition,
            bounds,
            line_color,
            fill_color,
        }
    }

    /// Returns the current bounds of the border.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Moves and resizes the border. Called by the owning node's layout
    /// pass, which keeps these bounds equal to its own.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Returns the line (stroke) color.
    pub fn line_color(&self) -> &Color {
        &self.line_color
    }

    /// Returns the fill color.
    pub fn fill_color(&self) -> &Color {
        &self.fill_color
    }

    /// Returns the shape definition behind this border.
    pub fn definition(&self) -> &dyn BorderDefinition {
        self.definition.as_ref()
    }

    /// Renders the outline at its current bounds.
    pub fn render_to_svg(&self) -> Box<dyn svg::Node> {
        self.definition
            .render_to_svg(self.bounds, &self.line_color, &self.fill_color)
    }
}
