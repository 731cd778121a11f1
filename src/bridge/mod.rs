//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod matcher_integration;

pub use landmarks::{
    // WASM entry points
    update_landmarks,
    // Internal API
    required_joints,
    Landmark,
    // Constants
    LEFT_SHOULDER, RIGHT_SHOULDER,
    LEFT_ELBOW, RIGHT_ELBOW,
    LEFT_WRIST, RIGHT_WRIST,
    LANDMARK_COUNT, LANDMARK_STRIDE, MIN_VISIBILITY,
};

pub use matcher_integration::{
    get_current_features,
    get_target_features,
    has_target_pose,
    pose_similarity,
    reset_target_pose,
    save_target_pose,
};
