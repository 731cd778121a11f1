//! Joint angle and distance math
//!
//! Calculates the interior angle at a joint from the directions of the
//! two limb segments meeting there.

use super::joints::Point;

/// Euclidean distance between two joints
pub fn calculate_distance(p1: Point, p2: Point) -> f32 {
    let dx = p1.x - p2.x;
    let dy = p1.y - p2.y;
    (dx * dx + dy * dy).sqrt()
}

/// Calculate the interior angle at joint `b` in degrees
///
/// `b` is the center point (e.g. the elbow for an arm angle).
///
/// Takes the difference of the atan2 headings of b→c and b→a, folded
/// into [0, 180]:
/// - 180° = the three joints lie on a line (arm fully extended)
/// - 90° = fully bent
///
/// Symmetric in `a` and `c`, and unaffected by the handedness of the
/// coordinate frame.
pub fn calculate_angle(a: Point, b: Point, c: Point) -> f32 {
    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let mut angle = radians.to_degrees().abs();

    if angle > 180.0 {
        angle = 360.0 - angle;
    }
    angle
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_straight_arm() {
        // Arm in a straight line
        let shoulder = Point::new(0.0, 0.0);
        let elbow = Point::new(0.5, 0.0);
        let wrist = Point::new(1.0, 0.0);
        let angle = calculate_angle(shoulder, elbow, wrist);
        assert!((angle - 180.0).abs() < 1.0);
    }

    #[test]
    fn test_bent_arm() {
        // Arm bent at 90 degrees
        let shoulder = Point::new(0.0, 0.0);
        let elbow = Point::new(0.5, 0.0);
        let wrist = Point::new(0.5, 0.5);
        let angle = calculate_angle(shoulder, elbow, wrist);
        assert!((angle - 90.0).abs() < 1.0);
    }

    #[test]
    fn test_reflex_angle_folds_back() {
        // Raw heading difference is 340°; interior angle is 20°
        let center = Point::new(0.0, 0.0);
        let a = Point::new(170f32.to_radians().cos(), 170f32.to_radians().sin());
        let c = Point::new((-170f32).to_radians().cos(), (-170f32).to_radians().sin());
        let angle = calculate_angle(a, center, c);
        assert!((angle - 20.0).abs() < 0.01);
    }

    #[test]
    fn test_angle_symmetry() {
        let a = Point::new(0.2, 0.8);
        let b = Point::new(0.5, 0.3);
        let c = Point::new(0.9, 0.6);
        assert_eq!(calculate_angle(a, b, c), calculate_angle(c, b, a));
    }

    #[test]
    fn test_angle_stays_in_range() {
        // Sweep one endpoint around the vertex
        let b = Point::new(0.5, 0.5);
        let a = Point::new(0.9, 0.5);
        for step in 0..36 {
            let theta = (step as f32) * 10f32.to_radians();
            let c = Point::new(b.x + theta.cos() * 0.4, b.y + theta.sin() * 0.4);
            let angle = calculate_angle(a, b, c);
            assert!((0.0..=180.0).contains(&angle), "angle {} out of range", angle);
        }
    }

    #[test]
    fn test_distance() {
        let p1 = Point::new(0.0, 0.0);
        let p2 = Point::new(0.3, 0.4);
        assert!((calculate_distance(p1, p2) - 0.5).abs() < 1e-6);
    }
}
