//! Joint identifiers and per-frame joint collections
//!
//! "Missing landmark" is a first-class case: a JointSet slot holds None
//! when the detector did not report that joint for the frame (or reported
//! it below the visibility threshold).

/// A single 2D joint position (normalized image coordinates,
/// origin top-left, y increasing downward)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The six joints required for feature extraction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArmLandmark {
    LeftShoulder,
    RightShoulder,
    LeftElbow,
    RightElbow,
    LeftWrist,
    RightWrist,
}

impl ArmLandmark {
    /// All required joints, for iteration
    pub const ALL: [ArmLandmark; 6] = [
        ArmLandmark::LeftShoulder,
        ArmLandmark::RightShoulder,
        ArmLandmark::LeftElbow,
        ArmLandmark::RightElbow,
        ArmLandmark::LeftWrist,
        ArmLandmark::RightWrist,
    ];

    fn slot(self) -> usize {
        match self {
            ArmLandmark::LeftShoulder => 0,
            ArmLandmark::RightShoulder => 1,
            ArmLandmark::LeftElbow => 2,
            ArmLandmark::RightElbow => 3,
            ArmLandmark::LeftWrist => 4,
            ArmLandmark::RightWrist => 5,
        }
    }
}

/// One frame's worth of required joints, each possibly missing
#[derive(Clone, Copy, Debug, Default)]
pub struct JointSet {
    slots: [Option<Point>; 6],
}

impl JointSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, landmark: ArmLandmark, point: Point) {
        self.slots[landmark.slot()] = Some(point);
    }

    pub fn get(&self, landmark: ArmLandmark) -> Option<Point> {
        self.slots[landmark.slot()]
    }
}
