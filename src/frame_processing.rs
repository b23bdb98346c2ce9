use log::{debug, info};

use crate::{
    drawing::{draw_cube, draw_hands, draw_hit_region, Canvas},
    landmarks::LandmarkFrame,
    session_config::SessionConfig,
    systems::{
        grab_detection::{is_grabbing, GrabState},
        translation::estimate_translation,
        Systems,
    },
};

/// Run one full update cycle for a newly arrived frame of landmarks:
/// remember the hands, test for a grab, move the cube if grabbed, and draw.
pub fn handle_landmarks_frame(
    frame: &LandmarkFrame,
    config: &SessionConfig,
    systems: &mut Systems,
    canvas: &mut impl Canvas,
) -> GrabState {
    let Systems {
        history,
        cube_tracker,
        frames_processed,
    } = systems;

    let width = frame.width.unwrap_or(config.surface_width);
    let height = frame.height.unwrap_or(config.surface_height);

    history.push(frame.hands.clone());
    *frames_processed += 1;

    let hands = history.latest().unwrap_or_default();

    let state = GrabState::from(is_grabbing(
        hands,
        cube_tracker.hit_region(),
        width,
        height,
    ));

    if state.is_grabbing() {
        let (dx, dy) = estimate_translation(history, width, height);
        debug!("Grabbing; move cube by ({}, {})", dx, dy);
        cube_tracker.translate(dx, dy);
    }

    if config.draw_hands {
        draw_hands(canvas, hands, width, height, &config.hand_style);
    }
    draw_hit_region(canvas, cube_tracker.hit_region(), state, config);
    draw_cube(canvas, cube_tracker);

    state
}

/// Put the cube back where it started. Applied between frames.
pub fn handle_reset(systems: &mut Systems) {
    info!("Reset requested");
    systems.cube_tracker.reset();
}
