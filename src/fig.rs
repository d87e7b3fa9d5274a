//! Figure layer: the visual elements placed on a diagram canvas.
//!
//! A figure has a position, a size, and (optionally) an owning group.
//! This module provides the composite node presentation
//! ([`NodePresentation`]), its two owned children ([`Border`] and
//! [`NameDisplay`]), and the small contracts the hosting canvas plugs
//! into: the property-change channel ([`ChangeListener`]) and the upward
//! layout delegation hook ([`FigGroup`]).
//!
//! All figure mutation happens on the UI event-processing thread; there
//! is no locking and none is needed. Shared references use `Rc`, the
//! parent back-reference is a `Weak` so ownership never cycles.

pub mod border;
mod name_display;
mod node;

pub use border::{Border, BorderDefinition};
pub use name_display::NameDisplay;
pub use node::NodePresentation;

use crate::geometry::Rect;

/// A property-change event fired by a figure.
///
/// The hosting framework consumes these generically, e.g. to schedule a
/// redraw or record an undo step. The only property the node
/// presentation fires is `"bounds"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyChange {
    property: &'static str,
    old: Rect,
    new: Rect,
}

impl PropertyChange {
    pub(crate) fn new(property: &'static str, old: Rect, new: Rect) -> Self {
        Self { property, old, new }
    }

    /// The name of the property that changed.
    pub fn property(&self) -> &'static str {
        self.property
    }

    /// The value before the change.
    pub fn old(&self) -> Rect {
        self.old
    }

    /// The value after the change.
    pub fn new_value(&self) -> Rect {
        self.new
    }
}

/// Receiver for figure property changes.
pub trait ChangeListener {
    fn property_change(&mut self, change: &PropertyChange);
}

/// A compositing container of child figures; may itself be nested.
///
/// Figures hold only a weak back-reference to their group. The single
/// operation figures invoke on it is `calc_bounds`: when a child's
/// minimum size outgrows its bounds, the group is asked to make room.
pub trait FigGroup {
    /// Re-validate this group's layout after a child's minimum size changed.
    fn calc_bounds(&mut self);
}
