use serde::{Deserialize, Serialize};

use crate::Point3D;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_FINGER_MCP: usize = 5;
pub const INDEX_FINGER_PIP: usize = 6;
pub const INDEX_FINGER_DIP: usize = 7;
pub const INDEX_FINGER_TIP: usize = 8;
pub const MIDDLE_FINGER_MCP: usize = 9;
pub const MIDDLE_FINGER_PIP: usize = 10;
pub const MIDDLE_FINGER_DIP: usize = 11;
pub const MIDDLE_FINGER_TIP: usize = 12;
pub const RING_FINGER_MCP: usize = 13;
pub const RING_FINGER_PIP: usize = 14;
pub const RING_FINGER_DIP: usize = 15;
pub const RING_FINGER_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

/// Number of landmarks in a fully detected hand
pub const HAND_LANDMARK_COUNT: usize = 21;

/// Fingertips whose centroid drives the cube translation
pub const TRANSLATION_FINGERTIPS: [usize; 4] =
    [THUMB_TIP, INDEX_FINGER_TIP, MIDDLE_FINGER_TIP, PINKY_TIP];

/// Edges of the 21-point hand skeleton, as drawn over the video
pub const HAND_CONNECTIONS: [(usize, usize); 21] = [
    (WRIST, THUMB_CMC),
    (THUMB_CMC, THUMB_MCP),
    (THUMB_MCP, THUMB_IP),
    (THUMB_IP, THUMB_TIP),
    (WRIST, INDEX_FINGER_MCP),
    (INDEX_FINGER_MCP, INDEX_FINGER_PIP),
    (INDEX_FINGER_PIP, INDEX_FINGER_DIP),
    (INDEX_FINGER_DIP, INDEX_FINGER_TIP),
    (INDEX_FINGER_MCP, MIDDLE_FINGER_MCP),
    (MIDDLE_FINGER_MCP, MIDDLE_FINGER_PIP),
    (MIDDLE_FINGER_PIP, MIDDLE_FINGER_DIP),
    (MIDDLE_FINGER_DIP, MIDDLE_FINGER_TIP),
    (MIDDLE_FINGER_MCP, RING_FINGER_MCP),
    (RING_FINGER_MCP, RING_FINGER_PIP),
    (RING_FINGER_PIP, RING_FINGER_DIP),
    (RING_FINGER_DIP, RING_FINGER_TIP),
    (RING_FINGER_MCP, PINKY_MCP),
    (WRIST, PINKY_MCP),
    (PINKY_MCP, PINKY_PIP),
    (PINKY_PIP, PINKY_DIP),
    (PINKY_DIP, PINKY_TIP),
];

/// A single normalised landmark, as produced by the hand detector.
/// x and y are relative to the frame width/height, z is relative depth.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Landmark { x, y, z }
    }
}

/// Convert a normalised landmark into render-surface pixels.
///
/// Depth is scaled by the surface height, the same as y.
pub fn to_pixel(landmark: &Landmark, width: f32, height: f32) -> Point3D {
    (landmark.x * width, landmark.y * height, landmark.z * height)
}

/// All landmarks of one detected hand in one frame, indexed by landmark id.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct HandSnapshot {
    landmarks: Vec<Landmark>,
}

impl HandSnapshot {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        HandSnapshot { landmarks }
    }

    pub fn landmark(&self, id: usize) -> Option<&Landmark> {
        self.landmarks.get(id)
    }

    pub fn landmarks(&self) -> &[Landmark] {
        &self.landmarks
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// True if every id of the 21-point topology is present
    pub fn is_complete(&self) -> bool {
        self.landmarks.len() >= HAND_LANDMARK_COUNT
    }

    /// Pixel position of every requested landmark, or None if any is missing
    pub fn pixel_points(&self, ids: &[usize], width: f32, height: f32) -> Option<Vec<Point3D>> {
        ids.iter()
            .map(|id| self.landmark(*id).map(|l| to_pixel(l, width, height)))
            .collect()
    }
}

/// Hands reported by the detector for one frame. `None` means the detector
/// reported no hand list at all; both that and an empty list mean "no hands".
pub type FrameHands = Option<Vec<HandSnapshot>>;

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LandmarkFrame {
    #[serde(default)]
    pub hands: FrameHands,
    /// Render surface size for this frame; falls back to the configured size
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl LandmarkFrame {
    pub fn new(hands: FrameHands) -> Self {
        LandmarkFrame {
            hands,
            width: None,
            height: None,
        }
    }

    pub fn hand_count(&self) -> usize {
        self.hands.as_ref().map(|h| h.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand_of(count: usize) -> HandSnapshot {
        HandSnapshot::new(
            (0..count)
                .map(|i| Landmark::new(i as f32 / 100., 0.5, -0.25))
                .collect(),
        )
    }

    #[test]
    fn test_to_pixel_scales_depth_by_height() {
        let l = Landmark::new(0.5, 0.25, -0.5);
        assert_eq!(to_pixel(&l, 1280., 720.), (640., 180., -360.));
    }

    #[test]
    fn test_short_hand_is_not_complete() {
        let hand = hand_of(9);
        assert!(!hand.is_complete());
        assert!(hand.landmark(INDEX_FINGER_TIP).is_some());
        assert!(hand.landmark(MIDDLE_FINGER_TIP).is_none());
        assert!(hand_of(21).is_complete());
    }

    #[test]
    fn test_pixel_points_requires_every_id() {
        let hand = hand_of(10);
        assert!(hand
            .pixel_points(&[THUMB_TIP, INDEX_FINGER_TIP], 100., 100.)
            .is_some());
        assert!(hand
            .pixel_points(&TRANSLATION_FINGERTIPS, 100., 100.)
            .is_none());
    }

    #[test]
    fn test_connections_stay_inside_topology() {
        for (a, b) in HAND_CONNECTIONS {
            assert!(a < HAND_LANDMARK_COUNT && b < HAND_LANDMARK_COUNT);
        }
    }

    #[test]
    fn test_frame_parses_detector_shaped_json() {
        let text = r#"{"hands":[[{"x":0.1,"y":0.2,"z":0.0,"visibility":0.9}]],"width":640}"#;
        let frame: LandmarkFrame = serde_json::from_str(text).unwrap();
        assert_eq!(frame.hand_count(), 1);
        assert_eq!(frame.width, Some(640.));
        assert_eq!(frame.height, None);

        let empty: LandmarkFrame = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.hands, None);
        assert_eq!(empty.hand_count(), 0);
    }
}
