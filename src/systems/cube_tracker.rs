use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    geometry_utils::{distance_points, midpoint},
    session_config::{CubePose, SessionConfig},
    Point2D,
};

/// Annulus around the cube's circumscribing circle, used only for deciding
/// whether fingertips are "on" the cube. It is not the cube's silhouette.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct HitRegion {
    pub cx: f32,
    pub cy: f32,
    /// Radius of the circumscribing circle
    pub r: f32,
    /// Outer radius, r + h
    pub r1: f32,
    /// Inner radius, r - h
    pub r2: f32,
}

impl HitRegion {
    pub fn center(&self) -> Point2D {
        (self.cx, self.cy)
    }

    /// Strictly between the inner and outer radius
    pub fn contains(&self, p: &Point2D) -> bool {
        let d = distance_points(p, &self.center());
        d < self.r1 && d > self.r2
    }
}

/// Snapshot of the cube, as sent to whoever renders it
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CubeState {
    pub pose: CubePose,
    pub hit_region: HitRegion,
    pub colour: String,
    pub stroke_colour: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CubeTracker {
    x: f32,
    y: f32,
    wx: f32,
    wy: f32,
    h: f32,
    colour: String,
    stroke_colour: String,
    hit_region: HitRegion,
    reset_pose: CubePose,
    reset_colour: String,
}

impl CubeTracker {
    pub fn new(config: &SessionConfig) -> Self {
        let CubePose { x, y, wx, wy, h } = config.start_pose;
        let mut tracker = CubeTracker {
            x,
            y,
            wx,
            wy,
            h,
            colour: config.cube_colour.clone(),
            stroke_colour: config.cube_stroke_colour.clone(),
            hit_region: HitRegion {
                cx: x,
                cy: y,
                r: 0.,
                r1: 0.,
                r2: 0.,
            },
            reset_pose: config.reset_pose,
            reset_colour: config.cube_colour.clone(),
        };
        tracker.recompute_hit_region();
        tracker
    }

    /// Left-face and right-face reference corners of the projected cube
    pub fn reference_corners(&self) -> (Point2D, Point2D) {
        let left = (self.x - self.wx, self.y - self.wx * 0.5);
        let right = (self.x + self.wy, self.y - self.h - self.wy * 0.5);
        (left, right)
    }

    /// Derive the circle through the two reference corners (as a diameter)
    /// and the annulus around it, from the current pose.
    pub fn recompute_hit_region(&mut self) {
        let (left, right) = self.reference_corners();
        let (cx, cy) = midpoint(&left, &right);
        let r = distance_points(&left, &right) / 2.;
        self.hit_region = HitRegion {
            cx,
            cy,
            r,
            r1: r + self.h,
            r2: r - self.h,
        };
        debug!("Hit region recomputed: {:?}", self.hit_region);
    }

    /// Move the cube and carry the hit region along with it; the radii are
    /// left as they are.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
        self.hit_region.cx += dx;
        self.hit_region.cy += dy;
    }

    pub fn reset(&mut self) {
        let CubePose { x, y, wx, wy, h } = self.reset_pose;
        self.x = x;
        self.y = y;
        self.wx = wx;
        self.wy = wy;
        self.h = h;
        self.colour = self.reset_colour.clone();
        self.recompute_hit_region();
        info!("Cube reset to {:?}", self.reset_pose);
    }

    pub fn position(&self) -> Point2D {
        (self.x, self.y)
    }

    pub fn pose(&self) -> CubePose {
        CubePose::new(self.x, self.y, self.wx, self.wy, self.h)
    }

    pub fn hit_region(&self) -> &HitRegion {
        &self.hit_region
    }

    pub fn colour(&self) -> &str {
        &self.colour
    }

    pub fn stroke_colour(&self) -> &str {
        &self.stroke_colour
    }

    pub fn state(&self) -> CubeState {
        CubeState {
            pose: self.pose(),
            hit_region: self.hit_region,
            colour: self.colour.clone(),
            stroke_colour: self.stroke_colour.clone(),
        }
    }
}
