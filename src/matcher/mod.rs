//! Matcher module - pose feature extraction and similarity scoring
//!
//! Pure math, no wasm dependency. The bridge module feeds it per-frame
//! joint data and holds the saved target pose.

mod angles;
mod features;
mod joints;
mod similarity;

pub use angles::{calculate_angle, calculate_distance};
pub use features::{extract_pose_features, PoseFeatures, MIN_SHOULDER_WIDTH};
pub use joints::{ArmLandmark, JointSet, Point};
pub use similarity::{calculate_similarity, ScoringConfig};
