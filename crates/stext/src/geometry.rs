/// A point in page coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to another point.
    pub fn squared_distance_to(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// Axis-aligned rectangle with top-left origin coordinate system.
///
/// - `x0`: left edge
/// - `y0`: top edge
/// - `x1`: right edge
/// - `y1`: bottom edge
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl Rect {
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Width of the rectangle.
    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    /// Height of the rectangle.
    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    /// Compute the union of two rectangles.
    pub fn union(&self, other: &Rect) -> Rect {
        Rect {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Whether the point lies inside the rectangle. Edges are inclusive.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x0 && point.x <= self.x1 && point.y >= self.y0 && point.y <= self.y1
    }

    /// Squared distance from a point to the rectangle, clamped per axis.
    /// Zero for points inside the rectangle.
    pub fn squared_distance_to(&self, point: Point) -> f32 {
        let dx = (self.x0 - point.x).max(point.x - self.x1).max(0.0);
        let dy = (self.y0 - point.y).max(point.y - self.y1).max(0.0);
        dx * dx + dy * dy
    }

    /// Convert to a quadrilateral with corners in lower-left, upper-left,
    /// upper-right, lower-right order.
    pub fn to_quad(&self) -> Quad {
        Quad {
            lower_left: Point::new(self.x0, self.y1),
            upper_left: Point::new(self.x0, self.y0),
            upper_right: Point::new(self.x1, self.y0),
            lower_right: Point::new(self.x1, self.y1),
        }
    }
}

/// A (possibly rotated or skewed) quadrilateral, typically the bounding
/// region of a single character.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quad {
    pub lower_left: Point,
    pub upper_left: Point,
    pub upper_right: Point,
    pub lower_right: Point,
}

impl Quad {
    pub fn new(lower_left: Point, upper_left: Point, upper_right: Point, lower_right: Point) -> Self {
        Self {
            lower_left,
            upper_left,
            upper_right,
            lower_right,
        }
    }

    /// Whether the point lies inside the quadrilateral (edges inclusive).
    ///
    /// The quad is split into the triangles (ll, ul, ur) and (ll, ur, lr);
    /// the point is inside if it is inside either triangle.
    pub fn contains(&self, point: Point) -> bool {
        triangle_contains(self.lower_left, self.upper_left, self.upper_right, point)
            || triangle_contains(self.lower_left, self.upper_right, self.lower_right, point)
    }

    /// Squared distance from the point to the nearest of the four corners.
    pub fn min_corner_squared_distance(&self, point: Point) -> f32 {
        self.lower_left
            .squared_distance_to(point)
            .min(self.upper_left.squared_distance_to(point))
            .min(self.upper_right.squared_distance_to(point))
            .min(self.lower_right.squared_distance_to(point))
    }
}

fn cross(origin: Point, a: Point, b: Point) -> f32 {
    (a.x - origin.x) * (b.y - origin.y) - (a.y - origin.y) * (b.x - origin.x)
}

/// Point-in-triangle via signs of the three edge cross products. A point on
/// an edge produces a zero cross product and counts as inside.
fn triangle_contains(a: Point, b: Point, c: Point, p: Point) -> bool {
    let d1 = cross(a, b, p);
    let d2 = cross(b, c, p);
    let d3 = cross(c, a, p);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}
