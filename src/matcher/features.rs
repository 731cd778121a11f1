//! Pose feature extraction
//!
//! Reduces one frame's arm/shoulder joints to a five-number feature
//! vector. The vector is scale-invariant: angles ignore uniform scaling,
//! and wrist distances are expressed in shoulder widths, so the same pose
//! closer to or farther from the camera extracts the same values.

use serde::{Deserialize, Serialize};

use super::angles::{calculate_angle, calculate_distance};
use super::joints::{ArmLandmark, JointSet};

/// Shoulder widths below this are degenerate (coincident shoulders);
/// the frame is skipped instead of dividing by near-zero.
pub const MIN_SHOULDER_WIDTH: f32 = 1e-4;

/// Scale-invariant summary of one frame's arm/shoulder pose
///
/// Angles carry 1 decimal place, ratios 2. The rounding is part of the
/// comparison contract: a saved target vector and a fresh current vector
/// go through identical rounding before they are scored.
///
/// Serialized field names match the JSON the web app exports.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoseFeatures {
    /// Interior elbow angle of the left arm, degrees in [0, 180]
    pub left_arm_angle: f32,
    /// Interior elbow angle of the right arm, degrees in [0, 180]
    pub right_arm_angle: f32,
    /// Deviation of the shoulder line from horizontal, degrees, sign discarded
    pub shoulder_tilt: f32,
    /// Left wrist-to-shoulder distance in shoulder widths
    pub left_wrist_ratio: f32,
    /// Right wrist-to-shoulder distance in shoulder widths
    pub right_wrist_ratio: f32,
}

impl PoseFeatures {
    /// The five features in published order (for flat export to JS)
    pub fn as_array(&self) -> [f32; 5] {
        [
            self.left_arm_angle,
            self.right_arm_angle,
            self.shoulder_tilt,
            self.left_wrist_ratio,
            self.right_wrist_ratio,
        ]
    }
}

/// Round to a fixed number of decimal places
fn round_to(value: f32, decimals: i32) -> f32 {
    let factor = 10f32.powi(decimals);
    (value * factor).round() / factor
}

/// Extract the feature vector for one frame
///
/// Returns None when any of the six required joints is missing, or when
/// the shoulders are degenerate; callers skip such frames.
pub fn extract_pose_features(joints: &JointSet) -> Option<PoseFeatures> {
    let left_shoulder = joints.get(ArmLandmark::LeftShoulder)?;
    let right_shoulder = joints.get(ArmLandmark::RightShoulder)?;
    let left_elbow = joints.get(ArmLandmark::LeftElbow)?;
    let right_elbow = joints.get(ArmLandmark::RightElbow)?;
    let left_wrist = joints.get(ArmLandmark::LeftWrist)?;
    let right_wrist = joints.get(ArmLandmark::RightWrist)?;

    let left_arm_angle = calculate_angle(left_shoulder, left_elbow, left_wrist);
    let right_arm_angle = calculate_angle(right_shoulder, right_elbow, right_wrist);

    // Angle of the shoulder line relative to the horizon. The image origin
    // is top-left with y increasing downward, so level shoulders share the
    // same y. Tilt direction is discarded.
    let shoulder_tilt = (right_shoulder.y - left_shoulder.y)
        .atan2(right_shoulder.x - left_shoulder.x)
        .to_degrees()
        .abs();

    // Shoulder width is the scale unit for the whole vector
    let shoulder_width = calculate_distance(left_shoulder, right_shoulder);
    if shoulder_width < MIN_SHOULDER_WIDTH {
        return None;
    }

    let left_wrist_ratio = calculate_distance(left_shoulder, left_wrist) / shoulder_width;
    let right_wrist_ratio = calculate_distance(right_shoulder, right_wrist) / shoulder_width;

    Some(PoseFeatures {
        left_arm_angle: round_to(left_arm_angle, 1),
        right_arm_angle: round_to(right_arm_angle, 1),
        shoulder_tilt: round_to(shoulder_tilt, 1),
        left_wrist_ratio: round_to(left_wrist_ratio, 2),
        right_wrist_ratio: round_to(right_wrist_ratio, 2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::joints::Point;

    /// Left arm straight out, right arm bent 90°, level shoulders
    fn t_pose_points() -> [(ArmLandmark, Point); 6] {
        [
            (ArmLandmark::LeftShoulder, Point::new(0.4, 0.5)),
            (ArmLandmark::RightShoulder, Point::new(0.6, 0.5)),
            (ArmLandmark::LeftElbow, Point::new(0.2, 0.5)),
            (ArmLandmark::RightElbow, Point::new(0.8, 0.5)),
            (ArmLandmark::LeftWrist, Point::new(0.0, 0.5)),
            (ArmLandmark::RightWrist, Point::new(0.8, 0.7)),
        ]
    }

    fn joints_from(points: &[(ArmLandmark, Point)]) -> JointSet {
        let mut joints = JointSet::new();
        for (landmark, point) in points {
            joints.set(*landmark, *point);
        }
        joints
    }

    #[test]
    fn test_t_pose_features() {
        let features = extract_pose_features(&joints_from(&t_pose_points())).unwrap();
        assert_eq!(features.left_arm_angle, 180.0);
        assert_eq!(features.right_arm_angle, 90.0);
        assert_eq!(features.shoulder_tilt, 0.0);
        // Left wrist is 0.4 away from the shoulder; shoulder width is 0.2
        assert_eq!(features.left_wrist_ratio, 2.0);
        // Right wrist is sqrt(0.08) ≈ 0.2828 away
        assert_eq!(features.right_wrist_ratio, 1.41);
    }

    #[test]
    fn test_any_missing_joint_skips_frame() {
        let points = t_pose_points();
        for missing in ArmLandmark::ALL {
            let mut joints = JointSet::new();
            for (landmark, point) in points {
                if landmark != missing {
                    joints.set(landmark, point);
                }
            }
            assert!(
                extract_pose_features(&joints).is_none(),
                "frame without {:?} should be skipped",
                missing
            );
        }
    }

    #[test]
    fn test_scale_invariance() {
        let base = joints_from(&t_pose_points());

        let scaled_points: Vec<_> = t_pose_points()
            .iter()
            .map(|(landmark, p)| (*landmark, Point::new(p.x * 2.5, p.y * 2.5)))
            .collect();
        let scaled = joints_from(&scaled_points);

        assert_eq!(
            extract_pose_features(&base).unwrap(),
            extract_pose_features(&scaled).unwrap()
        );
    }

    #[test]
    fn test_coincident_shoulders_skip_frame() {
        let mut points = t_pose_points();
        points[1].1 = points[0].1; // right shoulder on top of left
        assert!(extract_pose_features(&joints_from(&points)).is_none());
    }

    #[test]
    fn test_rounding_precision() {
        // Shoulder line along a 3-4-5 triangle: tilt = atan2(0.4, 0.3) ≈ 53.1301°
        let points = [
            (ArmLandmark::LeftShoulder, Point::new(0.0, 0.0)),
            (ArmLandmark::RightShoulder, Point::new(0.3, 0.4)),
            (ArmLandmark::LeftElbow, Point::new(0.05, 0.1)),
            (ArmLandmark::RightElbow, Point::new(0.35, 0.5)),
            // Left wrist at distance sqrt(0.05) ≈ 0.22361, ratio ≈ 0.44721
            (ArmLandmark::LeftWrist, Point::new(0.1, 0.2)),
            (ArmLandmark::RightWrist, Point::new(0.4, 0.6)),
        ];
        let features = extract_pose_features(&joints_from(&points)).unwrap();
        assert!((features.shoulder_tilt - 53.1).abs() < 1e-4);
        assert!((features.left_wrist_ratio - 0.45).abs() < 1e-4);
    }

    #[test]
    fn test_serialized_field_names() {
        let features = extract_pose_features(&joints_from(&t_pose_points())).unwrap();
        let json = serde_json::to_value(features).unwrap();
        let object = json.as_object().unwrap();
        for field in [
            "leftArmAngle",
            "rightArmAngle",
            "shoulderTilt",
            "leftWristRatio",
            "rightWristRatio",
        ] {
            assert!(object.contains_key(field), "missing field {}", field);
        }
        assert_eq!(object.len(), 5);
    }
}
