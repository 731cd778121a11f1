//! Similarity scoring with a weighted normalized-error model
//!
//! Compares a saved target vector against the current frame's vector.
//! Each feature difference is normalized into [0, 1], weighted, and
//! summed; the score is the remaining similarity as a whole percentage.

use super::features::PoseFeatures;

/// Weights and normalization spans for the weighted error model
///
/// The five weights sum to 1.0, so the weighted error lands in [0, 1]
/// without a final clamp. Arm angles dominate the score; shoulder tilt
/// matters least.
#[derive(Clone, Copy, Debug)]
pub struct ScoringConfig {
    pub left_arm_weight: f32,
    pub right_arm_weight: f32,
    pub tilt_weight: f32,
    pub left_ratio_weight: f32,
    pub right_ratio_weight: f32,
    /// Arm angle difference treated as maximal, degrees
    pub angle_span: f32,
    /// Tilt difference treated as maximal, degrees
    pub tilt_span: f32,
    /// Wrist ratio difference treated as maximal (one shoulder width)
    pub ratio_span: f32,
}

impl ScoringConfig {
    pub const DEFAULT: ScoringConfig = ScoringConfig {
        left_arm_weight: 0.25,
        right_arm_weight: 0.25,
        tilt_weight: 0.10,
        left_ratio_weight: 0.20,
        right_ratio_weight: 0.20,
        angle_span: 180.0,
        tilt_span: 45.0,
        ratio_span: 1.0,
    };

    /// Weighted error between two feature vectors, in [0, 1]
    pub fn weighted_error(&self, target: &PoseFeatures, current: &PoseFeatures) -> f32 {
        let diff_left_angle =
            normalized_diff(target.left_arm_angle, current.left_arm_angle, self.angle_span);
        let diff_right_angle =
            normalized_diff(target.right_arm_angle, current.right_arm_angle, self.angle_span);
        let diff_tilt = normalized_diff(target.shoulder_tilt, current.shoulder_tilt, self.tilt_span);
        let diff_left_ratio =
            normalized_diff(target.left_wrist_ratio, current.left_wrist_ratio, self.ratio_span);
        let diff_right_ratio =
            normalized_diff(target.right_wrist_ratio, current.right_wrist_ratio, self.ratio_span);

        diff_left_angle * self.left_arm_weight
            + diff_right_angle * self.right_arm_weight
            + diff_tilt * self.tilt_weight
            + diff_left_ratio * self.left_ratio_weight
            + diff_right_ratio * self.right_ratio_weight
    }

    /// Score two feature vectors as a whole percentage in [0, 100]
    ///
    /// The percentage is floored, not rounded: a similarity of 79.99%
    /// reports as 79. Threshold checks in the caller depend on that.
    pub fn score(&self, target: &PoseFeatures, current: &PoseFeatures) -> u32 {
        let similarity = (1.0 - self.weighted_error(target, current)).max(0.0);
        (similarity * 100.0).floor() as u32
    }
}

/// Absolute difference scaled by `span` and capped at 1.0
fn normalized_diff(target: f32, current: f32, span: f32) -> f32 {
    ((target - current).abs() / span).min(1.0)
}

/// Score a target/current pair with the default weights
///
/// Returns 0 when either vector is absent, so the caller shows a neutral
/// score before a target has been captured or while no pose is detected.
pub fn calculate_similarity(
    target: Option<&PoseFeatures>,
    current: Option<&PoseFeatures>,
) -> u32 {
    match (target, current) {
        (Some(target), Some(current)) => ScoringConfig::DEFAULT.score(target, current),
        _ => 0,
    }
}
