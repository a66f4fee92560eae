use crate::point::Distance;
use std::f64::consts::PI;

/// One of the four 90° sectors of the plane, numbered counterclockwise
/// starting from the positive-x/positive-y sector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Quadrant {
    #[default]
    One,
    Two,
    Three,
    Four,
}

impl Quadrant {
    pub const fn index(self) -> u8 {
        match self {
            Quadrant::One => 1,
            Quadrant::Two => 2,
            Quadrant::Three => 3,
            Quadrant::Four => 4,
        }
    }
}

impl From<Quadrant> for u8 {
    fn from(quadrant: Quadrant) -> Self {
        quadrant.index()
    }
}

/// Polar attributes derived from a Cartesian pair.
///
/// `angle_in_radians` is the absolute arctangent of the slope `y/x`, i.e. the
/// first-quadrant reference angle, not the full-circle radian form of `angle`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleProps {
    pub angle: Distance,
    pub angle_in_radians: Distance,
    pub quadrant: Quadrant,
}

/// Quadrant and `(cos, sin)` scale factors projecting a length along `angle`
/// onto the Cartesian axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleProps {
    pub angle: Distance,
    pub quadrant: Quadrant,
    pub x_scale: Distance,
    pub y_scale: Distance,
}

/// Derives the degree angle, reference radian angle and quadrant for `(x, y)`.
/// The origin is degenerate: angle 0, quadrant one.
pub fn cartesian_angle_props(x: Distance, y: Distance) -> AngleProps {
    if x == 0.0 && y == 0.0 {
        return AngleProps {
            angle: 0.0,
            angle_in_radians: 0.0,
            quadrant: Quadrant::One,
        };
    }

    let slope = y / x;
    let angle_in_radians = slope.atan().abs();

    let quadrant = if x >= 0.0 && y >= 0.0 {
        Quadrant::One
    } else if x < 0.0 && y >= 0.0 {
        Quadrant::Two
    } else if x <= 0.0 && y < 0.0 {
        Quadrant::Three
    } else {
        Quadrant::Four
    };

    let angle = if angle_in_radians == 0.0 {
        // flat angle, disambiguated by the sign of x
        if x >= 0.0 {
            0.0
        } else {
            180.0
        }
    } else {
        180.0 * angle_in_radians / PI + (quadrant.index() - 1) as Distance * 90.0
    };

    AngleProps {
        angle,
        angle_in_radians,
        quadrant,
    }
}

/// Brings an angle back into range by repeatedly adding or subtracting a full
/// turn. The guard is strict, so a full turn itself stays at 360:
///
/// ```
/// use planar::angle::normalize;
/// assert_eq!(normalize(-90.0), 270.0);
/// assert_eq!(normalize(450.0), 90.0);
/// assert_eq!(normalize(360.0), 360.0);
/// ```
pub fn normalize(angle: Distance) -> Distance {
    let mut angle = angle;
    if angle > 0.0 {
        while angle > 360.0 {
            angle -= 360.0;
        }
    } else {
        while angle < 0.0 {
            angle += 360.0;
        }
    }
    angle
}

/// Normalizes `angle` and resolves its quadrant and unit-circle scale factors
/// from the equivalent first-quadrant reference angle, with signs flipped per
/// quadrant.
pub fn scale_props(angle: Distance) -> ScaleProps {
    let angle = normalize(angle);
    let (quadrant, x_scale, y_scale) = if angle > 270.0 {
        let reference = (360.0 - angle).to_radians();
        (Quadrant::Four, reference.cos(), -reference.sin())
    } else if angle > 180.0 {
        let reference = (angle - 180.0).to_radians();
        (Quadrant::Three, -reference.cos(), -reference.sin())
    } else if angle > 90.0 {
        let reference = (180.0 - angle).to_radians();
        (Quadrant::Two, -reference.cos(), reference.sin())
    } else {
        (Quadrant::One, angle.to_radians().cos(), angle.to_radians().sin())
    };

    ScaleProps {
        angle,
        quadrant,
        x_scale,
        y_scale,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const EPSILON: Distance = 1e-9;

    #[test]
    fn origin_is_degenerate() {
        let props = cartesian_angle_props(0.0, 0.0);
        assert_eq!(props.angle, 0.0);
        assert_eq!(props.angle_in_radians, 0.0);
        assert_eq!(props.quadrant, Quadrant::One);
    }

    #[test]
    fn axis_aligned_angles() {
        assert_eq!(cartesian_angle_props(1.0, 0.0).angle, 0.0);
        assert_eq!(cartesian_angle_props(0.0, 1.0).angle, 90.0);
        assert_eq!(cartesian_angle_props(-1.0, 0.0).angle, 180.0);
        assert_eq!(cartesian_angle_props(0.0, -1.0).angle, 270.0);
    }

    #[test]
    fn quadrants_follow_the_sign_table() {
        assert_eq!(cartesian_angle_props(1.0, 1.0).quadrant, Quadrant::One);
        assert_eq!(cartesian_angle_props(-1.0, 1.0).quadrant, Quadrant::Two);
        assert_eq!(cartesian_angle_props(-1.0, -1.0).quadrant, Quadrant::Three);
        assert_eq!(cartesian_angle_props(1.0, -1.0).quadrant, Quadrant::Four);
        // axes fall into the lower-numbered quadrant of each pair
        assert_eq!(cartesian_angle_props(0.0, 1.0).quadrant, Quadrant::One);
        assert_eq!(cartesian_angle_props(-1.0, 0.0).quadrant, Quadrant::Two);
        assert_eq!(cartesian_angle_props(0.0, -1.0).quadrant, Quadrant::Three);
    }

    #[test]
    fn diagonal_angles_per_quadrant() {
        assert!((cartesian_angle_props(1.0, 1.0).angle - 45.0).abs() < EPSILON);
        assert!((cartesian_angle_props(-1.0, 1.0).angle - 135.0).abs() < EPSILON);
        assert!((cartesian_angle_props(-1.0, -1.0).angle - 225.0).abs() < EPSILON);
        assert!((cartesian_angle_props(1.0, -1.0).angle - 315.0).abs() < EPSILON);
    }

    #[test]
    fn reference_radians_stay_in_the_first_quadrant() {
        // |atan(slope)|, never the radian form of the degree angle
        let props = cartesian_angle_props(-1.0, 1.0);
        assert!((props.angle - 135.0).abs() < EPSILON);
        assert!((props.angle_in_radians - PI / 4.0).abs() < EPSILON);
    }

    #[test]
    fn normalize_wraps_both_directions() {
        assert_eq!(normalize(0.0), 0.0);
        assert_eq!(normalize(90.0), 90.0);
        assert_eq!(normalize(450.0), 90.0);
        assert_eq!(normalize(-90.0), 270.0);
        assert_eq!(normalize(-360.0), 0.0);
    }

    #[test]
    fn normalize_keeps_full_turns_at_360() {
        assert_eq!(normalize(360.0), 360.0);
        assert_eq!(normalize(720.0), 360.0);
    }

    #[test]
    fn scale_factors_per_quadrant() {
        let q1 = scale_props(30.0);
        assert_eq!(q1.quadrant, Quadrant::One);
        assert!((q1.x_scale - 30f64.to_radians().cos()).abs() < EPSILON);
        assert!((q1.y_scale - 30f64.to_radians().sin()).abs() < EPSILON);

        let q2 = scale_props(150.0);
        assert_eq!(q2.quadrant, Quadrant::Two);
        assert!((q2.x_scale + 30f64.to_radians().cos()).abs() < EPSILON);
        assert!((q2.y_scale - 30f64.to_radians().sin()).abs() < EPSILON);

        let q3 = scale_props(210.0);
        assert_eq!(q3.quadrant, Quadrant::Three);
        assert!((q3.x_scale + 30f64.to_radians().cos()).abs() < EPSILON);
        assert!((q3.y_scale + 30f64.to_radians().sin()).abs() < EPSILON);

        let q4 = scale_props(330.0);
        assert_eq!(q4.quadrant, Quadrant::Four);
        assert!((q4.x_scale - 30f64.to_radians().cos()).abs() < EPSILON);
        assert!((q4.y_scale + 30f64.to_radians().sin()).abs() < EPSILON);
    }

    #[test]
    fn scale_props_normalizes_its_input() {
        let wrapped = scale_props(-30.0);
        assert_eq!(wrapped.angle, 330.0);
        assert_eq!(wrapped.quadrant, Quadrant::Four);
    }

    #[test]
    fn full_turn_lands_in_quadrant_four() {
        let full = scale_props(360.0);
        assert_eq!(full.angle, 360.0);
        assert_eq!(full.quadrant, Quadrant::Four);
        assert!((full.x_scale - 1.0).abs() < EPSILON);
        assert!(full.y_scale.abs() < EPSILON);
    }
}
