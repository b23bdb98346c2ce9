use log::{debug, error};

use crate::{
    geometry_utils::centroid_3d,
    landmarks::{HandSnapshot, TRANSLATION_FINGERTIPS},
    Point2D, Point3D,
};

use super::history::LandmarkHistory;

/// Pixel-space fingertip centroid of the first hand in a frame, if that hand
/// has every fingertip we need.
fn fingertip_centroid(hands: Option<&[HandSnapshot]>, width: f32, height: f32) -> Option<Point3D> {
    let hand = hands?.first()?;
    if !hand.is_complete() {
        debug!("Hand has only {} landmarks; no translation", hand.len());
        return None;
    }
    let points = hand.pixel_points(&TRANSLATION_FINGERTIPS, width, height)?;
    match centroid_3d(&points) {
        Ok(c) => Some(c),
        Err(e) => {
            error!("Fingertip centroid failed: {}", e);
            None
        }
    }
}

/// How far the hand moved (pixels) between the previous and the current frame.
///
/// Uses the centroid of the thumb, index, middle and pinky tips of the first
/// hand in each frame. Depth takes part in the centroid but not in the result.
/// If either frame has no usable hand, there is no movement: `(0, 0)`.
pub fn estimate_translation(history: &LandmarkHistory, width: f32, height: f32) -> Point2D {
    match (
        fingertip_centroid(history.previous(), width, height),
        fingertip_centroid(history.latest(), width, height),
    ) {
        (Some((px, py, _)), Some((cx, cy, _))) => (cx - px, cy - py),
        _ => (0., 0.),
    }
}
