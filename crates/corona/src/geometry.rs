#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Angle of `self` around `origin` in degrees, normalized into `[0, 360)`.
    /// Clockwise in screen coordinates (y grows downwards).
    pub fn angle_around(&self, origin: Point) -> f64 {
        let (dx, dy) = (self.x - origin.x, self.y - origin.y);
        dy.atan2(dx).to_degrees().rem_euclid(360.0)
    }

    pub fn distance_squared(&self, other: Point) -> f64 {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        dx * dx + dy * dy
    }
}

/// Axis-aligned rectangle in the host's local coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Radius of the inscribed circle of a square rect.
    pub fn radius(&self) -> f64 {
        self.width() / 2.0
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    /// Whether `point` lies on or inside the circle inscribed in this rect.
    pub fn disc_contains(&self, point: Point) -> bool {
        let radius = self.radius();
        point.distance_squared(self.center()) <= radius * radius
    }

    /// Shrinks every side by `amount`, never past the center.
    pub fn inset(&self, amount: f64) -> Self {
        let limit = (self.width().min(self.height()) / 2.0).max(0.0);
        let amount = amount.min(limit);
        Self::new(
            self.left + amount,
            self.top + amount,
            self.right - amount,
            self.bottom - amount,
        )
    }

    /// Grows every side by `amount`.
    pub fn expand(&self, amount: f64) -> Self {
        Self::new(
            self.left - amount,
            self.top - amount,
            self.right + amount,
            self.bottom + amount,
        )
    }
}
