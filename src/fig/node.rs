//! The composite figure presenting one diagram node.

use std::{
    cell::RefCell,
    fmt,
    rc::{Rc, Weak},
};

use log::{debug, trace};
use svg::{self, node::element as svg_element};

use crate::{
    color::Color,
    fig::{Border, BorderDefinition, ChangeListener, FigGroup, NameDisplay, PropertyChange},
    geometry::{Dimension, Insets, Point, Rect},
    model::ModelElement,
    notation::NotationType,
    settings::DiagramSettings,
};

/// Nodes are never narrower than this, whatever their label measures.
const MIN_WIDTH: i32 = 90;

/// A diagram node figure: a shape border with a centered name label.
///
/// The presentation owns exactly two child figures for its whole
/// lifetime: a [`Border`] that always fills the node's bounds, and a
/// [`NameDisplay`] centered inside the label margins. Which border shape
/// is used (and which margins apply) comes from the
/// [`BorderDefinition`] supplied at construction; everything else —
/// minimum sizing, bounds clamping, child layout, change notification,
/// upward delegation — is shared by all node kinds.
///
/// Bounds changes enter through [`set_bounds`](Self::set_bounds):
/// requested sizes are clamped up to [`minimum_size`](Self::minimum_size),
/// children are repositioned, and a `"bounds"` property change is fired.
/// Setting bounds equal to the current bounds is a no-op.
pub struct NodePresentation {
    border: Border,
    name_display: NameDisplay,
    bounds: Rect,
    group: Option<Weak<RefCell<dyn FigGroup>>>,
    listeners: Vec<Rc<RefCell<dyn ChangeListener>>>,
}

impl NodePresentation {
    /// Creates a node presentation for the given model element.
    ///
    /// The name display starts as a zero-size placeholder; the border is
    /// built from `definition` sized to `rect`. Child order is fixed:
    /// border below, name above. The initial rectangle is then applied
    /// through the normal bounds path, so it is clamped to the minimum
    /// size and the first layout pass runs before the constructor
    /// returns.
    pub fn new(
        definition: Box<dyn BorderDefinition>,
        rect: Rect,
        line_color: Color,
        fill_color: Color,
        element: Rc<RefCell<ModelElement>>,
        settings: Rc<DiagramSettings>,
    ) -> Self {
        let name_display = NameDisplay::new(
            element,
            Rect::new(0, 0, 0, 0),
            settings,
            NotationType::Name,
        );
        let border = Border::new(definition, rect, line_color, fill_color);

        let mut node = Self {
            border,
            name_display,
            bounds: Rect::default(),
            group: None,
            listeners: Vec::new(),
        };
        node.set_bounds(rect.x(), rect.y(), rect.width(), rect.height());
        node
    }

    /// Returns the border figure.
    pub fn border(&self) -> &Border {
        &self.border
    }

    /// Returns the name label figure.
    pub fn name_display(&self) -> &NameDisplay {
        &self.name_display
    }

    /// The stereotype label for this figure class.
    ///
    /// Always `None`: stereotype display is an extension point for
    /// figure kinds that show one; the base presentation displays only
    /// the name.
    pub fn stereotype_display(&self) -> Option<&NameDisplay> {
        None
    }

    /// Returns the current bounding rectangle.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Computes the smallest rectangle this node may occupy.
    ///
    /// Width is the name extent plus the horizontal margins, floored at
    /// [`MIN_WIDTH`]=90 units; height is the name extent plus the
    /// vertical margins. Pure: reads the current label state, changes
    /// nothing.
    pub fn minimum_size(&self) -> Dimension {
        let padded = self
            .name_display
            .minimum_size()
            .add_insets(self.margins());
        Dimension::new(padded.width().max(MIN_WIDTH), padded.height())
    }

    /// Moves and resizes the node.
    ///
    /// Requested dimensions below the minimum size are silently raised,
    /// never rejected. If the resulting rectangle equals the current
    /// bounds exactly, nothing happens: no layout pass, no notification.
    /// Otherwise the children are repositioned and a `"bounds"` change
    /// carrying (old, new) is fired.
    pub fn set_bounds(&mut self, x: i32, y: i32, w: i32, h: i32) {
        let min = self.minimum_size();
        let ww = w.max(min.width());
        let hh = h.max(min.height());

        let old_bounds = self.bounds;
        let new_bounds = Rect::new(x, y, ww, hh);
        if old_bounds == new_bounds {
            return;
        }

        trace!(x, y, width = ww, height = hh; "applying node bounds");
        self.bounds = new_bounds;
        self.position_children();
        self.fire_prop_change("bounds", old_bounds, new_bounds);
    }

    /// Moves the node by (dx, dy) at unchanged size.
    ///
    /// A motion with either axis at zero is dropped entirely, not just
    /// that axis; dragging canvases rely on this exact behavior.
    // TODO: confirm whether the guard should be `dx == 0 && dy == 0`.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        if dx == 0 || dy == 0 {
            return;
        }
        let moved = self.bounds.translate(dx, dy);
        self.set_bounds(moved.x(), moved.y(), moved.width(), moved.height());
    }

    /// Re-validates layout after a child's minimum size changed, e.g.
    /// when the element was renamed to a longer name.
    ///
    /// If the node no longer fits its own bounds and it has an enclosing
    /// group, responsibility is handed to that group: its `calc_bounds`
    /// is invoked and this node is left untouched. Otherwise the node
    /// grows in place to at least its minimum size. This is a single
    /// hop up the containment chain, not a recursive solve.
    pub fn calc_bounds(&mut self) {
        let min = self.minimum_size();
        let undersized =
            self.bounds.height() < min.height() || self.bounds.width() < min.width();

        if undersized {
            if let Some(group) = self.group.as_ref().and_then(Weak::upgrade) {
                debug!("node no longer fits; delegating to enclosing group");
                group.borrow_mut().calc_bounds();
                return;
            }
        }

        let size = self.bounds.size().max(min);
        self.set_bounds(self.bounds.x(), self.bounds.y(), size.width(), size.height());
    }

    /// Returns the enclosing group, if it is set and still alive.
    pub fn group(&self) -> Option<Rc<RefCell<dyn FigGroup>>> {
        self.group.as_ref().and_then(Weak::upgrade)
    }

    /// Sets the enclosing group back-reference. The node never owns its
    /// group; only a weak reference is kept.
    pub fn set_group(&mut self, group: Weak<RefCell<dyn FigGroup>>) {
        self.group = Some(group);
    }

    /// Registers a listener for property changes fired by this node.
    pub fn add_change_listener(&mut self, listener: Rc<RefCell<dyn ChangeListener>>) {
        self.listeners.push(listener);
    }

    /// Margin above the name label.
    pub fn top_margin(&self) -> i32 {
        self.border.definition().top_margin()
    }

    /// Margin left of the name label.
    pub fn left_margin(&self) -> i32 {
        self.border.definition().left_margin()
    }

    /// Margin right of the name label.
    pub fn right_margin(&self) -> i32 {
        self.border.definition().right_margin()
    }

    /// Margin below the name label.
    pub fn bottom_margin(&self) -> i32 {
        self.border.definition().bottom_margin()
    }

    /// Renders the node in fixed child order: border first, name above it.
    pub fn render_to_svg(&self) -> Box<dyn svg::Node> {
        let group = svg_element::Group::new()
            .add(self.border.render_to_svg())
            .add(self.name_display.render_to_svg());
        Box::new(group)
    }

    fn margins(&self) -> Insets {
        self.border.definition().margins()
    }

    /// Lays the children out inside the current bounds: the border fills
    /// the node exactly, the name is centered inside the margins. The
    /// name's own size is read, never written.
    fn position_children(&mut self) {
        let my_bounds = self.bounds;
        self.border.set_bounds(my_bounds);

        let name_dim = self.name_display.minimum_size();
        let origin = centered_name_origin(my_bounds, name_dim, self.margins());
        self.name_display.set_location(origin);
    }

    fn fire_prop_change(&mut self, property: &'static str, old: Rect, new: Rect) {
        let change = PropertyChange::new(property, old, new);
        for listener in &self.listeners {
            listener.borrow_mut().property_change(&change);
        }
    }
}

impl fmt::Debug for NodePresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodePresentation")
            .field("bounds", &self.bounds)
            .field("border", &self.border)
            .field("name_display", &self.name_display)
            .field("has_group", &self.group.is_some())
            .finish_non_exhaustive()
    }
}

/// Where the name label's top-left corner goes inside `bounds`.
///
/// Horizontal offset: left margin plus half the slack between the node
/// width and the margined name width; vertical offset likewise. Integer
/// division truncates toward zero, so odd slack rounds toward the
/// leading edge.
fn centered_name_origin(bounds: Rect, name: Dimension, margins: Insets) -> Point {
    let offset = Point::new(
        margins.left()
            + (bounds.width() - (name.width() + margins.left() + margins.right())) / 2,
        margins.top()
            + (bounds.height() - name.height() - margins.top() - margins.bottom()) / 2,
    );
    bounds.origin().add_point(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fig::border::RectangleDefinition;
    use crate::model::Id;

    #[derive(Default)]
    struct RecordingListener {
        events: Vec<PropertyChange>,
    }

    impl ChangeListener for RecordingListener {
        fn property_change(&mut self, change: &PropertyChange) {
            self.events.push(*change);
        }
    }

    #[derive(Default)]
    struct RecordingGroup {
        calc_bounds_calls: usize,
    }

    impl FigGroup for RecordingGroup {
        fn calc_bounds(&mut self) {
            self.calc_bounds_calls += 1;
        }
    }

    fn sample_element(name: &str) -> Rc<RefCell<ModelElement>> {
        Rc::new(RefCell::new(ModelElement::new(Id::new("node"), name)))
    }

    fn sample_node(name: &str, rect: Rect) -> NodePresentation {
        NodePresentation::new(
            Box::new(RectangleDefinition::new()),
            rect,
            Color::default(),
            Color::new("white").unwrap(),
            sample_element(name),
            Rc::new(DiagramSettings::default()),
        )
    }

    #[test]
    fn test_construction_applies_minimum_clamp() {
        let node = sample_node("A", Rect::new(10, 20, 1, 1));
        let min = node.minimum_size();
        assert_eq!(node.bounds().x(), 10);
        assert_eq!(node.bounds().y(), 20);
        assert_eq!(node.bounds().width(), min.width());
        assert_eq!(node.bounds().height(), min.height());
    }

    #[test]
    fn test_minimum_width_floor_is_90() {
        let node = sample_node("A", Rect::new(0, 0, 0, 0));
        // A one-character name measures well under the 86-unit threshold
        assert!(node.name_display().minimum_size().width() < 86);
        assert_eq!(node.minimum_size().width(), 90);
    }

    #[test]
    fn test_minimum_height_is_name_plus_margins() {
        let node = sample_node("Approve Order", Rect::new(0, 0, 200, 100));
        let name_height = node.name_display().minimum_size().height();
        assert_eq!(node.minimum_size().height(), name_height + 4);
    }

    #[test]
    fn test_set_bounds_clamps_to_minimum() {
        let mut node = sample_node("Approve Order", Rect::new(0, 0, 200, 100));
        node.set_bounds(5, 5, 1, 1);

        let min = node.minimum_size();
        assert_eq!(node.bounds(), Rect::new(5, 5, min.width(), min.height()));
    }

    #[test]
    fn test_set_bounds_is_idempotent() {
        let mut node = sample_node("Approve Order", Rect::new(0, 0, 200, 100));
        let listener = Rc::new(RefCell::new(RecordingListener::default()));
        node.add_change_listener(listener.clone());

        node.set_bounds(10, 10, 200, 100);
        assert_eq!(listener.borrow().events.len(), 1);

        // Same rectangle again: no layout pass, no notification
        node.set_bounds(10, 10, 200, 100);
        assert_eq!(listener.borrow().events.len(), 1);
    }

    #[test]
    fn test_undersized_repeat_is_idempotent_after_clamp() {
        let mut node = sample_node("Approve Order", Rect::new(0, 0, 200, 100));
        let listener = Rc::new(RefCell::new(RecordingListener::default()));
        node.add_change_listener(listener.clone());

        node.set_bounds(10, 10, 1, 1);
        assert_eq!(listener.borrow().events.len(), 1);

        // Clamps to the same effective rectangle as before
        node.set_bounds(10, 10, 1, 1);
        assert_eq!(listener.borrow().events.len(), 1);
    }

    #[test]
    fn test_change_event_carries_old_and_new_bounds() {
        let mut node = sample_node("Approve Order", Rect::new(0, 0, 200, 100));
        let listener = Rc::new(RefCell::new(RecordingListener::default()));
        node.add_change_listener(listener.clone());

        let before = node.bounds();
        node.set_bounds(30, 40, 220, 110);

        let events = &listener.borrow().events;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].property(), "bounds");
        assert_eq!(events[0].old(), before);
        assert_eq!(events[0].new_value(), Rect::new(30, 40, 220, 110));
    }

    #[test]
    fn test_border_always_fills_node() {
        let mut node = sample_node("Approve Order", Rect::new(0, 0, 200, 100));
        assert_eq!(node.border().bounds(), node.bounds());

        node.set_bounds(25, 35, 300, 150);
        assert_eq!(node.border().bounds(), node.bounds());

        node.translate(7, 9);
        assert_eq!(node.border().bounds(), node.bounds());
    }

    #[test]
    fn test_name_is_centered_inside_margins() {
        let mut node = sample_node("Approve Order", Rect::new(0, 0, 200, 100));
        node.set_bounds(10, 20, 200, 100);

        let name = node.name_display().minimum_size();
        let expected = centered_name_origin(node.bounds(), name, Insets::uniform(2));
        assert_eq!(node.name_display().bounds().origin(), expected);
    }

    #[test]
    fn test_centered_name_origin_formula() {
        // width 200, name 50, margins 2: x offset = 2 + (200-50-2-2)/2 = 75
        let origin = centered_name_origin(
            Rect::new(0, 0, 200, 100),
            Dimension::new(50, 10),
            Insets::uniform(2),
        );
        assert_eq!(origin.x(), 75);
        assert_eq!(origin.y(), 45);
    }

    #[test]
    fn test_centered_name_origin_truncates_toward_zero() {
        // Odd slack: (199-54)/2 = 72 (72.5 truncated)
        let odd = centered_name_origin(
            Rect::new(0, 0, 199, 100),
            Dimension::new(50, 10),
            Insets::uniform(2),
        );
        assert_eq!(odd.x(), 74);

        // Negative slack: (41-54)/2 = -6 (-6.5 truncated toward zero)
        let negative = centered_name_origin(
            Rect::new(0, 0, 41, 100),
            Dimension::new(50, 10),
            Insets::uniform(2),
        );
        assert_eq!(negative.x(), -4);
    }

    #[test]
    fn test_centered_name_origin_offsets_by_bounds_origin() {
        let at_origin = centered_name_origin(
            Rect::new(0, 0, 200, 100),
            Dimension::new(50, 10),
            Insets::uniform(2),
        );
        let moved = centered_name_origin(
            Rect::new(13, 17, 200, 100),
            Dimension::new(50, 10),
            Insets::uniform(2),
        );
        assert_eq!(moved.x(), at_origin.x() + 13);
        assert_eq!(moved.y(), at_origin.y() + 17);
    }

    #[test]
    fn test_layout_does_not_resize_name() {
        let mut node = sample_node("Approve Order", Rect::new(0, 0, 200, 100));
        let size_before = node.name_display().bounds().size();
        node.set_bounds(50, 60, 400, 200);
        assert_eq!(node.name_display().bounds().size(), size_before);
    }

    #[test]
    fn test_translate_drops_single_axis_motion() {
        // Documented quirk: either axis at zero drops the whole motion.
        let mut node = sample_node("Approve Order", Rect::new(10, 10, 200, 100));
        let before = node.bounds();

        node.translate(5, 0);
        assert_eq!(node.bounds(), before);

        node.translate(0, 7);
        assert_eq!(node.bounds(), before);
    }

    #[test]
    fn test_translate_shifts_both_axes() {
        let mut node = sample_node("Approve Order", Rect::new(10, 10, 200, 100));
        let before = node.bounds();

        node.translate(3, 4);
        assert_eq!(node.bounds(), before.translate(3, 4));
        assert_eq!(node.bounds().size(), before.size());
    }

    #[test]
    fn test_calc_bounds_resizes_in_place_without_group() {
        let element = sample_element("Go");
        let mut node = NodePresentation::new(
            Box::new(RectangleDefinition::new()),
            Rect::new(5, 5, 0, 0),
            Color::default(),
            Color::new("white").unwrap(),
            Rc::clone(&element),
            Rc::new(DiagramSettings::default()),
        );

        // Outgrow the current bounds by renaming to a much longer name
        element
            .borrow_mut()
            .set_name("Check inventory and reserve every line item on the order");

        let min = node.minimum_size();
        assert!(node.bounds().width() < min.width());

        node.calc_bounds();
        assert!(node.bounds().width() >= min.width());
        assert!(node.bounds().height() >= min.height());
        assert_eq!(node.bounds().origin(), Point::new(5, 5));
    }

    #[test]
    fn test_calc_bounds_delegates_to_group_when_undersized() {
        let element = sample_element("Go");
        let mut node = NodePresentation::new(
            Box::new(RectangleDefinition::new()),
            Rect::new(5, 5, 0, 0),
            Color::default(),
            Color::new("white").unwrap(),
            Rc::clone(&element),
            Rc::new(DiagramSettings::default()),
        );

        let group = Rc::new(RefCell::new(RecordingGroup::default()));
        let group_dyn: Rc<RefCell<dyn FigGroup>> = group.clone();
        node.set_group(Rc::downgrade(&group_dyn));

        element
            .borrow_mut()
            .set_name("Check inventory and reserve every line item on the order");
        assert!(node.bounds().width() < node.minimum_size().width());

        let before = node.bounds();
        node.calc_bounds();

        // The group was asked to make room; the node did not resize itself
        assert_eq!(group.borrow().calc_bounds_calls, 1);
        assert_eq!(node.bounds(), before);
    }

    #[test]
    fn test_calc_bounds_with_fitting_bounds_is_noop() {
        let mut node = sample_node("Go", Rect::new(5, 5, 300, 200));
        let group = Rc::new(RefCell::new(RecordingGroup::default()));
        let group_dyn: Rc<RefCell<dyn FigGroup>> = group.clone();
        node.set_group(Rc::downgrade(&group_dyn));

        let before = node.bounds();
        node.calc_bounds();

        // Bounds already fit: resize path, which the equality guard absorbs
        assert_eq!(group.borrow().calc_bounds_calls, 0);
        assert_eq!(node.bounds(), before);
    }

    #[test]
    fn test_calc_bounds_resizes_when_group_is_gone() {
        let element = sample_element("Go");
        let mut node = NodePresentation::new(
            Box::new(RectangleDefinition::new()),
            Rect::new(5, 5, 0, 0),
            Color::default(),
            Color::new("white").unwrap(),
            Rc::clone(&element),
            Rc::new(DiagramSettings::default()),
        );

        {
            let group: Rc<RefCell<dyn FigGroup>> =
                Rc::new(RefCell::new(RecordingGroup::default()));
            node.set_group(Rc::downgrade(&group));
        } // group dropped; the weak reference is now dead

        element
            .borrow_mut()
            .set_name("Check inventory and reserve every line item on the order");
        node.calc_bounds();

        let min = node.minimum_size();
        assert!(node.bounds().width() >= min.width());
    }

    #[test]
    fn test_stereotype_display_is_inactive() {
        let node = sample_node("Approve Order", Rect::new(0, 0, 200, 100));
        assert!(node.stereotype_display().is_none());
    }

    #[test]
    fn test_margin_accessors_default_to_two() {
        let node = sample_node("Approve Order", Rect::new(0, 0, 200, 100));
        assert_eq!(node.top_margin(), 2);
        assert_eq!(node.left_margin(), 2);
        assert_eq!(node.right_margin(), 2);
        assert_eq!(node.bottom_margin(), 2);
    }

    #[test]
    fn test_render_orders_border_below_name() {
        let node = sample_node("Approve Order", Rect::new(0, 0, 200, 100));
        let rendered = node.render_to_svg().to_string();

        let border_at = rendered.find("<rect").expect("border element");
        let name_at = rendered.find("<text").expect("name element");
        assert!(border_at < name_at);
    }
}
