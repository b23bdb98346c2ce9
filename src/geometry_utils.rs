use anyhow::{bail, Result};

use crate::{Point2D, Point3D};

pub fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    ((x2 - x1).powf(2.0) + (y2 - y1).powf(2.0)).sqrt()
}

pub fn distance_points(a: &Point2D, b: &Point2D) -> f32 {
    let (x1, y1) = *a;
    let (x2, y2) = *b;

    f32::sqrt(f32::powi(x1 - x2, 2) + f32::powi(y1 - y2, 2))
}

pub fn midpoint(a: &Point2D, b: &Point2D) -> Point2D {
    ((a.0 + b.0) / 2., (a.1 + b.1) / 2.)
}

/// Arithmetic mean of a non-empty set of points.
///
/// Calling this with no points is a bug on the caller's side, so it fails
/// immediately instead of producing NaNs.
pub fn centroid(points: &[Point2D]) -> Result<Point2D> {
    let count = points.len();
    match points
        .iter()
        .cloned()
        .reduce(|acc, el| (acc.0 + el.0, acc.1 + el.1))
    {
        Some((x, y)) => Ok((x / count as f32, y / count as f32)),
        None => bail!("invalid input: cannot take the centroid of an empty point set"),
    }
}

/// Same as [`centroid`], for points carrying a depth component.
pub fn centroid_3d(points: &[Point3D]) -> Result<Point3D> {
    let count = points.len();
    match points
        .iter()
        .cloned()
        .reduce(|acc, el| (acc.0 + el.0, acc.1 + el.1, acc.2 + el.2))
    {
        Some((x, y, z)) => Ok((x / count as f32, y / count as f32, z / count as f32)),
        None => bail!("invalid input: cannot take the centroid of an empty point set"),
    }
}
