pub mod cube_tracker;
pub mod grab_detection;
pub mod history;
pub mod translation;

use cube_tracker::CubeTracker;
use history::LandmarkHistory;
use log::info;

use crate::session_config::SessionConfig;

/// Everything that persists from one frame to the next within a session
pub struct Systems {
    pub history: LandmarkHistory,
    pub cube_tracker: CubeTracker,
    pub frames_processed: u64,
}

impl Systems {
    pub fn new(config: &SessionConfig) -> Systems {
        let cube_tracker = CubeTracker::new(config);
        info!(
            "Cube starts at {:?}, hit region {:?}",
            cube_tracker.pose(),
            cube_tracker.hit_region()
        );

        Systems {
            history: LandmarkHistory::new(),
            cube_tracker,
            frames_processed: 0,
        }
    }
}
