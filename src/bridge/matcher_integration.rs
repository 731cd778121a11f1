//! Matcher integration - connects the pose matcher with landmark data
//!
//! Holds the saved target pose and the current frame's feature vector,
//! and exports the scoring entry points for JS. Threshold checks and the
//! MATCHED badge stay in JavaScript.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use crate::matcher::{calculate_similarity, extract_pose_features, JointSet, PoseFeatures};

/// Matcher state
#[derive(Default)]
struct MatcherState {
    /// Feature vector of the most recent complete frame
    current: Option<PoseFeatures>,

    /// Saved target pose (None until the user captures one)
    target: Option<PoseFeatures>,
}

thread_local! {
    static MATCHER_STATE: RefCell<MatcherState> = RefCell::new(MatcherState::default());
}

/// Process one frame for matching (called from update_landmarks)
///
/// An incomplete frame clears the current vector, so the score never
/// compares against a stale pose.
pub fn process_matcher_frame(joints: &JointSet) {
    let features = extract_pose_features(joints);
    MATCHER_STATE.with(|state_cell| {
        state_cell.borrow_mut().current = features;
    });
}

/// Capture the current frame's features as the target pose
///
/// Returns false when no complete pose is available to save.
#[wasm_bindgen]
pub fn save_target_pose() -> bool {
    MATCHER_STATE.with(|state_cell| {
        let mut state = state_cell.borrow_mut();
        match state.current {
            Some(features) => {
                state.target = Some(features);
                web_sys::console::log_1(&"📌 Target pose saved".into());
                true
            }
            None => false,
        }
    })
}

/// Clear the saved target pose
#[wasm_bindgen]
pub fn reset_target_pose() {
    MATCHER_STATE.with(|state_cell| {
        state_cell.borrow_mut().target = None;
    });
}

/// Check whether a target pose has been saved
#[wasm_bindgen]
pub fn has_target_pose() -> bool {
    MATCHER_STATE.with(|state_cell| state_cell.borrow().target.is_some())
}

/// Score the current frame against the saved target (0-100)
///
/// 0 before a target is saved or while the current frame is incomplete.
#[wasm_bindgen]
pub fn pose_similarity() -> u32 {
    MATCHER_STATE.with(|state_cell| {
        let state = state_cell.borrow();
        calculate_similarity(state.target.as_ref(), state.current.as_ref())
    })
}

/// Current frame's feature values in published order
/// (leftArmAngle, rightArmAngle, shoulderTilt, leftWristRatio, rightWristRatio)
///
/// Returns None while no complete pose is detected. Used by the JS debug
/// readout.
#[wasm_bindgen]
pub fn get_current_features() -> Option<Vec<f32>> {
    MATCHER_STATE.with(|state_cell| {
        state_cell
            .borrow()
            .current
            .map(|features| features.as_array().to_vec())
    })
}

/// Saved target's feature values in published order
///
/// Returns None until a target has been saved. JS serializes these for
/// the pose download button.
#[wasm_bindgen]
pub fn get_target_features() -> Option<Vec<f32>> {
    MATCHER_STATE.with(|state_cell| {
        state_cell
            .borrow()
            .target
            .map(|features| features.as_array().to_vec())
    })
}
