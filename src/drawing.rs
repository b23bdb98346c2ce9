//! Shape descriptors handed to whatever actually paints the overlay.
//!
//! Nothing here touches pixels: a [`Canvas`] receives [`DrawCommand`]s, and
//! [`DrawList`] simply records them so they can be sent along with the frame.

use serde::{Deserialize, Serialize};

use crate::{
    landmarks::{to_pixel, HandSnapshot, HAND_CONNECTIONS},
    session_config::{HandStyle, SessionConfig},
    systems::{cube_tracker::CubeTracker, cube_tracker::HitRegion, grab_detection::GrabState},
    Point2D,
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "shape", rename_all = "camelCase")]
pub enum DrawCommand {
    #[serde(rename_all = "camelCase")]
    Circle {
        center: Point2D,
        radius: f32,
        colour: String,
        line_width: f32,
    },
    /// Closed polygon, optionally filled and/or stroked
    Polygon {
        points: Vec<Point2D>,
        fill: Option<String>,
        stroke: Option<String>,
    },
    /// Dots of a fixed radius
    #[serde(rename_all = "camelCase")]
    Points {
        points: Vec<Point2D>,
        colour: String,
        radius: f32,
        line_width: f32,
    },
    #[serde(rename_all = "camelCase")]
    Segments {
        segments: Vec<(Point2D, Point2D)>,
        colour: String,
        line_width: f32,
    },
}

/// Something that can draw shapes onto the render surface
pub trait Canvas {
    fn draw(&mut self, command: DrawCommand);
}

/// Canvas that only remembers what it was asked to draw, in order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        DrawList::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl Canvas for DrawList {
    fn draw(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

/// The three visible faces (left, right, top) of an isometric cube standing on
/// its anchor point `(x, y)`.
pub fn cube_faces(x: f32, y: f32, wx: f32, wy: f32, h: f32) -> [[Point2D; 4]; 3] {
    let left = [
        (x, y),
        (x - wx, y - wx * 0.5),
        (x - wx, y - h - wx * 0.5),
        (x, y - h),
    ];
    let right = [
        (x, y),
        (x + wy, y - wy * 0.5),
        (x + wy, y - h - wy * 0.5),
        (x, y - h),
    ];
    let top = [
        (x, y - h),
        (x - wx, y - h - wx * 0.5),
        (x - wx + wy, y - h - (wx * 0.5 + wy * 0.5)),
        (x + wy, y - h - wy * 0.5),
    ];
    [left, right, top]
}

pub fn draw_cube(canvas: &mut impl Canvas, tracker: &CubeTracker) {
    let pose = tracker.pose();
    for face in cube_faces(pose.x, pose.y, pose.wx, pose.wy, pose.h) {
        canvas.draw(DrawCommand::Polygon {
            points: face.to_vec(),
            fill: Some(tracker.colour().to_string()),
            stroke: Some(tracker.stroke_colour().to_string()),
        });
    }
}

/// Outline of the hit region's outer radius, coloured by grab state
pub fn draw_hit_region(
    canvas: &mut impl Canvas,
    hit_region: &HitRegion,
    state: GrabState,
    config: &SessionConfig,
) {
    let colour = match state {
        GrabState::Idle => &config.idle_highlight_colour,
        GrabState::Grabbing => &config.grab_highlight_colour,
    };
    canvas.draw(DrawCommand::Circle {
        center: hit_region.center(),
        radius: hit_region.r1,
        colour: colour.clone(),
        line_width: config.highlight_line_width,
    });
}

/// Skeleton connectors, then landmark dots, for every detected hand
pub fn draw_hands(
    canvas: &mut impl Canvas,
    hands: &[HandSnapshot],
    width: f32,
    height: f32,
    style: &HandStyle,
) {
    for hand in hands {
        let points: Vec<Point2D> = hand
            .landmarks()
            .iter()
            .map(|l| {
                let (x, y, _) = to_pixel(l, width, height);
                (x, y)
            })
            .collect();

        let segments: Vec<(Point2D, Point2D)> = HAND_CONNECTIONS
            .iter()
            .filter_map(|(a, b)| Some((*points.get(*a)?, *points.get(*b)?)))
            .collect();

        if !segments.is_empty() {
            canvas.draw(DrawCommand::Segments {
                segments,
                colour: style.connector_colour.clone(),
                line_width: style.connector_line_width,
            });
        }
        if !points.is_empty() {
            canvas.draw(DrawCommand::Points {
                points,
                colour: style.landmark_colour.clone(),
                radius: style.landmark_radius,
                line_width: style.landmark_line_width,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::Landmark;

    #[test]
    fn test_cube_faces_share_anchor_edges() {
        let [left, right, top] = cube_faces(320., 280., 50., 50., 50.);
        assert_eq!(left[0], (320., 280.));
        assert_eq!(right[0], (320., 280.));
        assert_eq!(left[1], (270., 255.));
        assert_eq!(right[2], (370., 205.));
        // top face starts where both side faces end
        assert_eq!(top[0], left[3]);
        assert_eq!(top[0], right[3]);
        assert_eq!(top[1], left[2]);
        assert_eq!(top[3], right[2]);
        assert_eq!(top[2], (320., 180.));
    }

    #[test]
    fn test_draw_cube_emits_three_faces() {
        let config = SessionConfig::default();
        let tracker = CubeTracker::new(&config);
        let mut canvas = DrawList::new();
        draw_cube(&mut canvas, &tracker);
        assert_eq!(canvas.commands().len(), 3);
        for command in canvas.commands() {
            match command {
                DrawCommand::Polygon {
                    points,
                    fill,
                    stroke,
                } => {
                    assert_eq!(points.len(), 4);
                    assert_eq!(fill.as_deref(), Some("#ff8200"));
                    assert_eq!(stroke.as_deref(), Some("#ff6000"));
                }
                other => panic!("unexpected command {:?}", other),
            }
        }
    }

    #[test]
    fn test_hit_region_colour_follows_state() {
        let config = SessionConfig::default();
        let tracker = CubeTracker::new(&config);
        let mut canvas = DrawList::new();
        draw_hit_region(&mut canvas, tracker.hit_region(), GrabState::Idle, &config);
        draw_hit_region(&mut canvas, tracker.hit_region(), GrabState::Grabbing, &config);
        let colours: Vec<&str> = canvas
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::Circle { colour, radius, .. } => {
                    assert_eq!(*radius, tracker.hit_region().r1);
                    colour.as_str()
                }
                other => panic!("unexpected command {:?}", other),
            })
            .collect();
        assert_eq!(colours, vec!["#6100cf", "#22ed07"]);
    }

    #[test]
    fn test_partial_hand_only_draws_known_connections() {
        let hand = HandSnapshot::new(vec![Landmark::new(0.5, 0.5, 0.); 5]);
        let mut canvas = DrawList::new();
        draw_hands(&mut canvas, &[hand], 100., 100., &HandStyle::default());
        match &canvas.commands()[0] {
            DrawCommand::Segments { segments, .. } => assert_eq!(segments.len(), 4),
            other => panic!("unexpected command {:?}", other),
        }
        match &canvas.commands()[1] {
            DrawCommand::Points { points, .. } => assert_eq!(points.len(), 5),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_take_empties_the_list() {
        let mut canvas = DrawList::new();
        canvas.draw(DrawCommand::Polygon {
            points: vec![],
            fill: None,
            stroke: None,
        });
        assert_eq!(canvas.take().len(), 1);
        assert!(canvas.commands().is_empty());
    }

    #[test]
    fn test_commands_are_tagged_by_shape() {
        let command = DrawCommand::Circle {
            center: (1., 2.),
            radius: 3.,
            colour: String::from("#ffffff"),
            line_width: 5.,
        };
        let value = serde_json::to_value(&command).unwrap();
        assert_eq!(value["shape"], "circle");
        assert_eq!(value["lineWidth"], 5.0);
    }
}
