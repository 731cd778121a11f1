//! Landmark storage and JS bridge
//!
//! Receives MediaPipe landmarks from JavaScript and stores them
//! for the matcher to read.

use wasm_bindgen::prelude::*;
use std::cell::RefCell;

use crate::matcher::{ArmLandmark, JointSet, Point};

// ============================================================================
// LANDMARK INDICES (MediaPipe Pose - 33 total)
// ============================================================================

pub const LEFT_SHOULDER: usize = 11;
pub const RIGHT_SHOULDER: usize = 12;
pub const LEFT_ELBOW: usize = 13;
pub const RIGHT_ELBOW: usize = 14;
pub const LEFT_WRIST: usize = 15;
pub const RIGHT_WRIST: usize = 16;

/// Landmarks per MediaPipe pose frame
pub const LANDMARK_COUNT: usize = 33;

/// Floats per landmark on the wire (x, y, z, visibility)
pub const LANDMARK_STRIDE: usize = 4;

/// Landmarks reported below this visibility count as missing for the frame
pub const MIN_VISIBILITY: f32 = 0.5;

// ============================================================================
// LANDMARK DATA STRUCTURE
// ============================================================================

/// A single 2D landmark point (normalized coordinates)
#[derive(Clone, Copy, Default)]
pub struct Landmark {
    pub x: f32,          // 0-1 normalized
    pub y: f32,          // 0-1 normalized
    pub visibility: f32, // detection confidence, 0-1
}

/// Internal storage for current frame's landmarks
struct LandmarkStore {
    landmarks: [Landmark; LANDMARK_COUNT],
    has_data: bool,
}

impl Default for LandmarkStore {
    fn default() -> Self {
        Self {
            landmarks: [Landmark::default(); LANDMARK_COUNT],
            has_data: false,
        }
    }
}

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static LANDMARKS: RefCell<LandmarkStore> = RefCell::new(LandmarkStore::default());
}

// ============================================================================
// WASM-BINDGEN ENTRY POINTS
// ============================================================================

/// Called from JavaScript with flat Float32Array of 132 values
/// (33 landmarks × 4 values: x, y, z, visibility)
#[wasm_bindgen]
pub fn update_landmarks(data: &[f32]) {
    if data.len() != LANDMARK_COUNT * LANDMARK_STRIDE {
        web_sys::console::warn_1(
            &format!(
                "Invalid landmark data length: {} (expected {})",
                data.len(),
                LANDMARK_COUNT * LANDMARK_STRIDE
            )
            .into(),
        );
        return;
    }

    LANDMARKS.with(|store_cell| {
        let mut store = store_cell.borrow_mut();

        for i in 0..LANDMARK_COUNT {
            let base = i * LANDMARK_STRIDE;
            // z (data[base + 2]) is skipped: matching is 2D
            store.landmarks[i] = Landmark {
                x: data[base],
                y: data[base + 1],
                visibility: data[base + 3],
            };
        }
        store.has_data = true;
    });

    // Feed the fresh frame to the matcher
    super::matcher_integration::process_matcher_frame(&required_joints());
}

// ============================================================================
// INTERNAL API (no wasm_bindgen)
// ============================================================================

fn landmark_index(landmark: ArmLandmark) -> usize {
    match landmark {
        ArmLandmark::LeftShoulder => LEFT_SHOULDER,
        ArmLandmark::RightShoulder => RIGHT_SHOULDER,
        ArmLandmark::LeftElbow => LEFT_ELBOW,
        ArmLandmark::RightElbow => RIGHT_ELBOW,
        ArmLandmark::LeftWrist => LEFT_WRIST,
        ArmLandmark::RightWrist => RIGHT_WRIST,
    }
}

/// Collect the current frame's required joints for the matcher
///
/// Joints below the visibility threshold stay unset, so an occluded arm
/// makes the frame incomplete rather than feeding garbage coordinates in.
pub fn required_joints() -> JointSet {
    LANDMARKS.with(|store_cell| {
        let store = store_cell.borrow();
        let mut joints = JointSet::new();

        if !store.has_data {
            return joints;
        }

        for landmark in ArmLandmark::ALL {
            let raw = store.landmarks[landmark_index(landmark)];
            if raw.visibility >= MIN_VISIBILITY {
                joints.set(landmark, Point::new(raw.x, raw.y));
            }
        }
        joints
    })
}
