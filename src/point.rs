use crate::angle;
use crate::angle::Quadrant;
use crate::vector;
use crate::vector::Operand;
use geo::Coord;
use geo::Rect;
use num_traits::Zero;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde_json::json;
use std::fmt;
use std::ops::Add;
use std::ops::Div;
use std::ops::Mul;
use std::ops::Rem;
use std::ops::Sub;

pub type Distance = f64;

/// Anything with a pair of Cartesian coordinates.
pub trait Position {
    fn x(&self) -> Distance;
    fn y(&self) -> Distance;
}

impl Position for Coord<Distance> {
    fn x(&self) -> Distance {
        self.x
    }
    fn y(&self) -> Distance {
        self.y
    }
}

impl Position for (Distance, Distance) {
    fn x(&self) -> Distance {
        self.0
    }
    fn y(&self) -> Distance {
        self.1
    }
}

impl Position for [Distance; 2] {
    fn x(&self) -> Distance {
        self[0]
    }
    fn y(&self) -> Distance {
        self[1]
    }
}

/// A 2D point carrying both its Cartesian coordinates and cached polar
/// attributes (length from the origin, degree angle, reference radian angle,
/// quadrant).
///
/// The Cartesian pair is authoritative: every constructor and almost every
/// mutation rederives the polar cache from `(x, y)`. The one inversion is an
/// angle update ([`Point::set_angle`], or [`Point::set`] with an angle), which
/// rederives `(x, y)` from the cached length and the new angle instead.
///
/// ```
/// use planar::point::Point;
/// let p = Point::new(3.0, 4.0);
/// assert_eq!(p.length(), 5.0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Point {
    x: Distance,
    y: Distance,
    length: Distance,
    angle: Distance,
    angle_in_radians: Distance,
    quadrant: Quadrant,
    selected: bool,
}

/// A partial update for [`Point::set`]. Fields left unset are not touched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Update {
    x: Option<Distance>,
    y: Option<Distance>,
    angle: Option<Distance>,
}

impl Update {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn x(self, x: Distance) -> Self {
        Update { x: Some(x), ..self }
    }

    pub fn y(self, y: Distance) -> Self {
        Update { y: Some(y), ..self }
    }

    pub fn angle(self, angle: Distance) -> Self {
        Update {
            angle: Some(angle),
            ..self
        }
    }
}

impl Point {
    pub fn new(x: Distance, y: Distance) -> Self {
        let length = Point::distance(&(x, y), &Coord::zero());
        let props = angle::cartesian_angle_props(x, y);
        Point {
            x,
            y,
            length,
            angle: props.angle,
            angle_in_radians: props.angle_in_radians,
            quadrant: props.quadrant,
            selected: false,
        }
    }

    pub fn from_position(position: &impl Position) -> Self {
        Point::new(position.x(), position.y())
    }

    pub fn x(&self) -> Distance {
        self.x
    }

    pub fn y(&self) -> Distance {
        self.y
    }

    /// Distance from the origin.
    pub fn length(&self) -> Distance {
        self.length
    }

    /// Angle against the positive x axis, in degrees.
    pub fn angle(&self) -> Distance {
        self.angle
    }

    /// The absolute arctangent of the slope `y/x`, i.e. the first-quadrant
    /// reference angle, not the radian form of [`Point::angle`]. After
    /// [`Point::rotate`] or an angle update it holds the pre-mutation degree
    /// angle converted to radians.
    pub fn angle_in_radians(&self) -> Distance {
        self.angle_in_radians
    }

    pub fn quadrant(&self) -> Quadrant {
        self.quadrant
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    /// Applies a partial update. An angle update rederives `(x, y)` from the
    /// cached length; it is applied first, so x/y values in the same update
    /// win. An x or y update refreshes the length but leaves the cached
    /// angle and quadrant untouched.
    pub fn set(&mut self, update: Update) {
        if let Some(target) = update.angle {
            let previous_radians = self.angle.to_radians();
            let scale = angle::scale_props(target);
            self.angle = scale.angle;
            self.angle_in_radians = previous_radians;
            self.quadrant = scale.quadrant;
            self.x = self.length * scale.x_scale;
            self.y = self.length * scale.y_scale;
        }
        if let Some(x) = update.x {
            self.x = x;
            self.length = Point::distance(self, &Coord::zero());
        }
        if let Some(y) = update.y {
            self.y = y;
            self.length = Point::distance(self, &Coord::zero());
        }
    }

    pub fn set_x(&mut self, x: Distance) {
        self.set(Update::new().x(x));
    }

    pub fn set_y(&mut self, y: Distance) {
        self.set(Update::new().y(y));
    }

    pub fn set_angle(&mut self, angle: Distance) {
        self.set(Update::new().angle(angle));
    }

    /// Rotates the point clockwise by `angle` degrees around `center`,
    /// keeping its length, and mutates it in place.
    pub fn rotate(&mut self, angle: Distance, center: &impl Position) {
        let angle = angle::normalize(angle);
        let target = self.angle - angle;
        let previous_radians = self.angle.to_radians();
        let scale = angle::scale_props(target);
        self.x = center.x() + scale.x_scale * self.length;
        self.y = center.y() + scale.y_scale * self.length;
        self.angle = scale.angle;
        self.angle_in_radians = previous_radians;
        self.quadrant = scale.quadrant;
    }

    pub fn distance_to(&self, other: &impl Position) -> Distance {
        Point::distance(self, other)
    }

    /// Whether the point falls inside `rect`. The lower bounds and the
    /// x upper bound come from the rect's corner and width; the y upper
    /// bound is the rect's height itself.
    pub fn is_inside(&self, rect: &Rect<Distance>) -> bool {
        self.x >= rect.min().x
            && self.x <= rect.min().x + rect.width()
            && self.y >= rect.min().y
            && self.y <= rect.height()
    }

    /// Whether `other` lies within `tolerance` of this point.
    pub fn is_close(&self, other: &impl Position, tolerance: Distance) -> bool {
        Point::distance(self, other) <= tolerance
    }

    /// Slope comparison; with a zero x on either side the quotients go
    /// through infinity or NaN and the comparison stays silent.
    pub fn is_collinear(&self, other: &impl Position) -> bool {
        self.y / self.x == other.y() / other.x()
    }

    pub fn is_orthogonal(&self, other: &impl Position) -> bool {
        (self.y / self.x) * other.y() / other.x() == -1.0
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Whether the point lies in `quadrant`. On an axis-aligned angle the
    /// point belongs to both adjacent quadrants.
    pub fn is_in_quadrant(&self, quadrant: Quadrant) -> bool {
        if self.angle == 0.0 || self.angle == 360.0 {
            quadrant == Quadrant::One || quadrant == Quadrant::Four
        } else if self.angle == 90.0 {
            quadrant == Quadrant::One || quadrant == Quadrant::Two
        } else if self.angle == 180.0 {
            quadrant == Quadrant::Three || quadrant == Quadrant::Two
        } else if self.angle == 270.0 {
            quadrant == Quadrant::Three || quadrant == Quadrant::Four
        } else {
            self.quadrant == quadrant
        }
    }

    pub fn dot(&self, other: &impl Position) -> Distance {
        self.x * other.x() + self.y * other.y()
    }

    pub fn cross(&self, other: &impl Position) -> Distance {
        self.x * other.y() - self.y * other.x()
    }

    /// Projects this point onto the line through `other` and the origin,
    /// via the intersection of that line with the perpendicular through
    /// this point.
    pub fn project(&self, other: &impl Position) -> Point {
        let a = other.y() / other.x();
        let b = other.y() - a * other.x();
        let m = self.x + a * self.y;
        let x = (m - a * b) / (a * a + 1.0);
        Point::new(x, a * x + b)
    }

    pub fn round(&self) -> Point {
        Point::new(self.x.round(), self.y.round())
    }

    pub fn ceil(&self) -> Point {
        Point::new(self.x.ceil(), self.y.ceil())
    }

    pub fn floor(&self) -> Point {
        Point::new(self.x.floor(), self.y.floor())
    }

    pub fn abs(&self) -> Point {
        Point::new(self.x.abs(), self.y.abs())
    }
}

impl Point {
    /// Component-wise minimum across a collection of positions.
    pub fn min<'a, P, I>(points: I) -> Point
    where
        P: Position + 'a,
        I: IntoIterator<Item = &'a P>,
    {
        let mut min_x = Distance::MAX;
        let mut min_y = Distance::MAX;
        for point in points {
            min_x = min_x.min(point.x());
            min_y = min_y.min(point.y());
        }
        Point::new(min_x, min_y)
    }

    /// Component-wise maximum across a collection of positions.
    pub fn max<'a, P, I>(points: I) -> Point
    where
        P: Position + 'a,
        I: IntoIterator<Item = &'a P>,
    {
        let mut max_x = Distance::MIN;
        let mut max_y = Distance::MIN;
        for point in points {
            max_x = max_x.max(point.x());
            max_y = max_y.max(point.y());
        }
        Point::new(max_x, max_y)
    }

    /// A point with both coordinates drawn uniformly from `[0, 1)`.
    pub fn random() -> Point {
        Point::random_with(&mut rand::thread_rng())
    }

    pub fn random_with(rng: &mut impl rand::Rng) -> Point {
        Point::new(rng.gen::<Distance>(), rng.gen::<Distance>())
    }

    /// Exact coordinate equality, no tolerance.
    pub fn equals(a: &impl Position, b: &impl Position) -> bool {
        a.x() == b.x() && a.y() == b.y()
    }

    /// Euclidean distance between two positions.
    pub fn distance(p1: &impl Position, p2: &impl Position) -> Distance {
        ((p1.x() - p2.x()).powi(2) + (p1.y() - p2.y()).powi(2)).sqrt()
    }
}

impl Position for Point {
    fn x(&self) -> Distance {
        self.x
    }
    fn y(&self) -> Distance {
        self.y
    }
}

impl Default for Point {
    fn default() -> Self {
        Point::new(0.0, 0.0)
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        Point::equals(self, other)
    }
}

impl Zero for Point {
    fn zero() -> Self {
        Point::new(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        Point::is_zero(self)
    }
}

impl From<Coord<Distance>> for Point {
    fn from(coord: Coord<Distance>) -> Self {
        Point::new(coord.x, coord.y)
    }
}

impl From<(Distance, Distance)> for Point {
    fn from((x, y): (Distance, Distance)) -> Self {
        Point::new(x, y)
    }
}

impl From<[Distance; 2]> for Point {
    fn from([x, y]: [Distance; 2]) -> Self {
        Point::new(x, y)
    }
}

impl From<&[Distance]> for Point {
    fn from(components: &[Distance]) -> Self {
        match *components {
            [] => Point::new(0.0, 0.0),
            [x] => Point::new(x, 0.0),
            [x, y, ..] => Point::new(x, y),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", json!({ "x": self.x, "y": self.y }))
    }
}

#[derive(Deserialize, Serialize)]
struct RawPoint {
    x: Distance,
    y: Distance,
}

impl Serialize for Point {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        RawPoint {
            x: self.x,
            y: self.y,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawPoint::deserialize(deserializer)?;
        Ok(Point::new(raw.x, raw.y))
    }
}

impl<T: Into<Operand>> Add<T> for Point {
    type Output = Point;

    fn add(self, rhs: T) -> Self::Output {
        vector::add(&self, rhs)
    }
}

impl<T: Into<Operand>> Sub<T> for Point {
    type Output = Point;

    fn sub(self, rhs: T) -> Self::Output {
        vector::subtract(&self, rhs)
    }
}

impl<T: Into<Operand>> Mul<T> for Point {
    type Output = Point;

    fn mul(self, rhs: T) -> Self::Output {
        vector::multiply(&self, rhs)
    }
}

impl<T: Into<Operand>> Div<T> for Point {
    type Output = Point;

    fn div(self, rhs: T) -> Self::Output {
        vector::divide(&self, rhs)
    }
}

impl<T: Into<Operand>> Rem<T> for Point {
    type Output = Point;

    fn rem(self, rhs: T) -> Self::Output {
        vector::modulo(&self, rhs)
    }
}
