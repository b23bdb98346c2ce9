use log::debug;
use serde::{Deserialize, Serialize};

use crate::landmarks::{to_pixel, HandSnapshot, INDEX_FINGER_TIP, THUMB_TIP};

use super::cube_tracker::HitRegion;

/// A hand needs at least this many landmarks for both thumb and index tips to exist
pub const MIN_LANDMARKS_FOR_GRAB: usize = INDEX_FINGER_TIP + 1;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GrabState {
    #[default]
    Idle,
    Grabbing,
}

impl GrabState {
    pub fn is_grabbing(&self) -> bool {
        matches!(self, GrabState::Grabbing)
    }
}

impl From<bool> for GrabState {
    fn from(grabbing: bool) -> Self {
        if grabbing {
            GrabState::Grabbing
        } else {
            GrabState::Idle
        }
    }
}

/// Is exactly one hand pinching inside the hit region's band?
///
/// Both the index fingertip and the thumb tip must lie strictly between the
/// inner and outer radius. With no hands, with more than one hand, or with a
/// hand too short to have both tips, nobody is grabbing.
pub fn is_grabbing(hands: &[HandSnapshot], hit_region: &HitRegion, width: f32, height: f32) -> bool {
    let hand = match hands {
        [hand] => hand,
        _ => {
            if hands.len() > 1 {
                debug!("{} hands detected; ignoring for grab", hands.len());
            }
            return false;
        }
    };

    if hand.len() < MIN_LANDMARKS_FOR_GRAB {
        debug!(
            "Hand has only {} landmarks, need {} to detect a grab",
            hand.len(),
            MIN_LANDMARKS_FOR_GRAB
        );
        return false;
    }

    match (hand.landmark(INDEX_FINGER_TIP), hand.landmark(THUMB_TIP)) {
        (Some(index_tip), Some(thumb_tip)) => {
            let (ix, iy, _) = to_pixel(index_tip, width, height);
            let (tx, ty, _) = to_pixel(thumb_tip, width, height);
            hit_region.contains(&(ix, iy)) && hit_region.contains(&(tx, ty))
        }
        _ => false,
    }
}
