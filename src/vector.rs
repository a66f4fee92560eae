use crate::point::Distance;
use crate::point::Point;
use crate::point::Position;
use geo::Coord;

/// Right-hand side of a vector operation: a scalar broadcast to both
/// components, or a component-wise pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Scalar(Distance),
    Components(Distance, Distance),
}

impl From<Distance> for Operand {
    fn from(scalar: Distance) -> Self {
        Operand::Scalar(scalar)
    }
}

impl From<Point> for Operand {
    fn from(point: Point) -> Self {
        Operand::Components(point.x(), point.y())
    }
}

impl From<&Point> for Operand {
    fn from(point: &Point) -> Self {
        Operand::Components(point.x(), point.y())
    }
}

impl From<Coord<Distance>> for Operand {
    fn from(coord: Coord<Distance>) -> Self {
        Operand::Components(coord.x, coord.y)
    }
}

impl From<(Distance, Distance)> for Operand {
    fn from((x, y): (Distance, Distance)) -> Self {
        Operand::Components(x, y)
    }
}

impl From<[Distance; 2]> for Operand {
    fn from([x, y]: [Distance; 2]) -> Self {
        Operand::Components(x, y)
    }
}

pub fn add(p: &impl Position, rhs: impl Into<Operand>) -> Point {
    let mut x = p.x();
    let mut y = p.y();
    match rhs.into() {
        Operand::Scalar(scalar) => {
            x += scalar;
            y += scalar;
        }
        Operand::Components(other_x, other_y) => {
            x += other_x;
            y += other_y;
        }
    }
    Point::new(x, y)
}

pub fn subtract(p: &impl Position, rhs: impl Into<Operand>) -> Point {
    let mut x = p.x();
    let mut y = p.y();
    match rhs.into() {
        Operand::Scalar(scalar) => {
            x -= scalar;
            y -= scalar;
        }
        Operand::Components(other_x, other_y) => {
            x -= other_x;
            y -= other_y;
        }
    }
    Point::new(x, y)
}

pub fn multiply(p: &impl Position, rhs: impl Into<Operand>) -> Point {
    let mut x = p.x();
    let mut y = p.y();
    match rhs.into() {
        Operand::Scalar(scalar) => {
            x *= scalar;
            y *= scalar;
        }
        Operand::Components(other_x, other_y) => {
            x *= other_x;
            y *= other_y;
        }
    }
    Point::new(x, y)
}

/// Component-wise or scalar division. A zero divisor saturates the affected
/// component(s) to 0 instead of producing infinity or NaN.
pub fn divide(p: &impl Position, rhs: impl Into<Operand>) -> Point {
    let mut x = p.x();
    let mut y = p.y();
    match rhs.into() {
        Operand::Scalar(scalar) => {
            if scalar == 0.0 {
                x = 0.0;
                y = 0.0;
            } else {
                x /= scalar;
                y /= scalar;
            }
        }
        Operand::Components(other_x, other_y) => {
            x = if other_x == 0.0 { 0.0 } else { x / other_x };
            y = if other_y == 0.0 { 0.0 } else { y / other_y };
        }
    }
    Point::new(x, y)
}

/// Component-wise or scalar remainder, with the same zero-saturation policy
/// as [`divide`].
pub fn modulo(p: &impl Position, rhs: impl Into<Operand>) -> Point {
    let mut x = p.x();
    let mut y = p.y();
    match rhs.into() {
        Operand::Scalar(scalar) => {
            if scalar == 0.0 {
                x = 0.0;
                y = 0.0;
            } else {
                x %= scalar;
                y %= scalar;
            }
        }
        Operand::Components(other_x, other_y) => {
            x = if other_x == 0.0 { 0.0 } else { x % other_x };
            y = if other_y == 0.0 { 0.0 } else { y % other_y };
        }
    }
    Point::new(x, y)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn add_broadcasts_scalars_and_pairs_components() {
        assert_eq!(add(&(1.0, 2.0), 3.0), Point::new(4.0, 5.0));
        assert_eq!(add(&(1.0, 2.0), (3.0, 4.0)), Point::new(4.0, 6.0));
    }

    #[test]
    fn subtract_mirrors_add() {
        assert_eq!(subtract(&(4.0, 6.0), 1.0), Point::new(3.0, 5.0));
        assert_eq!(subtract(&(4.0, 6.0), (3.0, 4.0)), Point::new(1.0, 2.0));
    }

    #[test]
    fn multiply_broadcasts_scalars_and_pairs_components() {
        assert_eq!(multiply(&(1.0, 2.0), 3.0), Point::new(3.0, 6.0));
        assert_eq!(multiply(&(1.0, 2.0), (3.0, 4.0)), Point::new(3.0, 8.0));
    }

    #[test]
    fn divide_by_zero_saturates_to_zero() {
        assert_eq!(divide(&(4.0, 9.0), 0.0), Point::new(0.0, 0.0));
        assert_eq!(divide(&(4.0, 9.0), (0.0, 3.0)), Point::new(0.0, 3.0));
        assert_eq!(divide(&(4.0, 9.0), (2.0, 0.0)), Point::new(2.0, 0.0));
    }

    #[test]
    fn divide_splits_components() {
        assert_eq!(divide(&(4.0, 9.0), 2.0), Point::new(2.0, 4.5));
        assert_eq!(divide(&(4.0, 9.0), (4.0, 3.0)), Point::new(1.0, 3.0));
    }

    #[test]
    fn modulo_by_zero_saturates_to_zero() {
        assert_eq!(modulo(&(4.0, 9.0), 0.0), Point::new(0.0, 0.0));
        assert_eq!(modulo(&(4.0, 9.0), (0.0, 4.0)), Point::new(0.0, 1.0));
    }

    #[test]
    fn modulo_keeps_the_dividend_sign() {
        assert_eq!(modulo(&(7.0, -7.0), 3.0), Point::new(1.0, -1.0));
        assert_eq!(modulo(&(7.5, 2.0), (2.0, 5.0)), Point::new(1.5, 2.0));
    }

    #[test]
    fn every_operand_shape_converts() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(Operand::from(2.0), Operand::Scalar(2.0));
        assert_eq!(Operand::from(p), Operand::Components(3.0, 4.0));
        assert_eq!(Operand::from(&p), Operand::Components(3.0, 4.0));
        assert_eq!(
            Operand::from(Coord { x: 3.0, y: 4.0 }),
            Operand::Components(3.0, 4.0)
        );
        assert_eq!(Operand::from([3.0, 4.0]), Operand::Components(3.0, 4.0));
    }

    #[test]
    fn results_are_fresh_points_with_derived_attributes() {
        let sum = add(&(3.0, 0.0), (0.0, 4.0));
        assert_eq!(sum.length(), 5.0);
        assert!(!sum.selected());
    }
}
