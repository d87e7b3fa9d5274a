//! Integer geometry primitives for the diagram canvas.
//!
//! The hosting canvas addresses pixels with `i32` coordinates, so every
//! type here is integer-valued. Centering math uses integer division,
//! which truncates toward zero; callers rely on that rounding behavior.

/// A location on the diagram canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Creates a new point with the specified coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point.
    pub fn x(self) -> i32 {
        self.x
    }

    /// Returns the y-coordinate of the point.
    pub fn y(self) -> i32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

/// Represents the dimensions of an element with width and height.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dimension {
    width: i32,
    height: i32,
}

impl Dimension {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size.
    pub fn width(self) -> i32 {
        self.width
    }

    /// Returns the height dimension of this size.
    pub fn height(self) -> i32 {
        self.height
    }

    /// Returns a new Dimension with the maximum width and height between
    /// this dimension and another.
    pub fn max(self, other: Dimension) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Returns true if both width and height are zero.
    pub fn is_zero(self) -> bool {
        self.width == 0 && self.height == 0
    }

    /// Returns a new Dimension grown by the given insets on each side.
    pub fn add_insets(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }
}

/// A rectangle on the canvas: origin (top-left corner) plus size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl Rect {
    /// Creates a new rectangle from its top-left corner and size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the x-coordinate of the top-left corner.
    pub fn x(self) -> i32 {
        self.x
    }

    /// Returns the y-coordinate of the top-left corner.
    pub fn y(self) -> i32 {
        self.y
    }

    /// Returns the width of the rectangle.
    pub fn width(self) -> i32 {
        self.width
    }

    /// Returns the height of the rectangle.
    pub fn height(self) -> i32 {
        self.height
    }

    /// Returns the top-left corner as a Point.
    pub fn origin(self) -> Point {
        Point {
            x: self.x,
            y: self.y,
        }
    }

    /// Converts the rectangle's size to a Dimension.
    pub fn size(self) -> Dimension {
        Dimension {
            width: self.width,
            height: self.height,
        }
    }

    /// Returns a new rectangle moved by the given deltas, same size.
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    /// Returns a new rectangle at the given origin, same size.
    pub fn with_origin(self, origin: Point) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            ..self
        }
    }
}

/// Spacing around an element (margins, label insets) with potentially
/// different values for each side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Insets {
    top: i32,
    right: i32,
    bottom: i32,
    left: i32,
}

impl Insets {
    /// Creates new insets with specified values for each side.
    pub fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides.
    pub fn uniform(value: i32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Returns the top inset value.
    pub fn top(self) -> i32 {
        self.top
    }

    /// Returns the right inset value.
    pub fn right(self) -> i32 {
        self.right
    }

    /// Returns the bottom inset value.
    pub fn bottom(self) -> i32 {
        self.bottom
    }

    /// Returns the left inset value.
    pub fn left(self) -> i32 {
        self.left
    }

    /// Returns the sum of left and right insets.
    pub fn horizontal_sum(self) -> i32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets.
    pub fn vertical_sum(self) -> i32 {
        self.top + self.bottom
    }
}
