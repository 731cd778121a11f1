//! PoseMatch Web - copy-the-pose matching game core
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - wasm_bindgen entry points that delegate to submodules
//!
//! MediaPipe Pose runs in JavaScript; this module receives its landmarks,
//! reduces them to a scale-invariant feature vector, and scores the live
//! pose against a saved target pose.

mod bridge;
mod matcher;

use wasm_bindgen::prelude::*;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    get_current_features, get_target_features, has_target_pose, pose_similarity,
    reset_target_pose, save_target_pose, update_landmarks,
};

// Re-export the pure matching core for Rust consumers
pub use matcher::{
    calculate_angle, calculate_distance, calculate_similarity, extract_pose_features,
    ArmLandmark, JointSet, Point, PoseFeatures, ScoringConfig,
};

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
