//! The label figure rendering a model element's name.

use std::{cell::RefCell, rc::Rc};

use svg::{self, node::Text as SvgText, node::element as svg_element};

use crate::{
    geometry::{Dimension, Point, Rect},
    model::ModelElement,
    notation::{self, NotationType},
    settings::DiagramSettings,
};

/// A leaf figure displaying one notation string of a model element.
///
/// The name display owns no children. Its minimum size is computed from
/// the element's current text through the notation subsystem, so it can
/// change whenever the underlying name changes (e.g. a rename). The
/// owning node positions it but never imposes a size on it.
#[derive(Debug, Clone)]
pub struct NameDisplay {
    element: Rc<RefCell<ModelElement>>,
    settings: Rc<DiagramSettings>,
    notation: NotationType,
    bounds: Rect,
}

impl NameDisplay {
    /// Creates a name display bound to the given model element.
    pub fn new(
        element: Rc<RefCell<ModelElement>>,
        bounds: Rect,
        settings: Rc<DiagramSettings>,
        notation: NotationType,
    ) -> Self {
        Self {
            element,
            settings,
            notation,
            bounds,
        }
    }

    /// The notation string currently displayed.
    pub fn text(&self) -> String {
        match self.notation {
            NotationType::Name => self.element.borrow().name().to_string(),
            // No stereotype notation is resolved for the base presentation
            NotationType::Stereotype => String::new(),
        }
    }

    /// Computes the extent of the current text under the notation settings.
    ///
    /// Re-measures on every call: the element may have been renamed since
    /// the last layout pass.
    pub fn minimum_size(&self) -> Dimension {
        notation::text_extent(&self.text(), self.settings.notation())
    }

    /// Returns the current bounds of the label.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Moves the label to the given origin without changing its size.
    pub fn set_location(&mut self, location: Point) {
        self.bounds = self.bounds.with_origin(location);
    }

    /// Renders the label text centered on its own minimum extent.
    pub fn render_to_svg(&self) -> Box<dyn svg::Node> {
        let extent = self.minimum_size();
        let notation = self.settings.notation();

        let text = svg_element::Text::new("")
            .set("x", self.bounds.x() + extent.width() / 2)
            .set("y", self.bounds.y() + extent.height() / 2)
            .set("text-anchor", "middle")
            .set("dominant-baseline", "central")
            .set("font-family", notation.font_family())
            .set("font-size", notation.font_size())
            .add(SvgText::new(self.text()));

        Box::new(text)
    }
}
