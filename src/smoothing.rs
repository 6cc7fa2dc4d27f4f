use crate::{Point, WalkboxRegistry};

/// Rasterizes the line from `a` to `b` and checks that every Pixel on it is walkable.
///
/// Both endpoints are included, so a Point outside of every Walkbox never has a line of sight,
/// not even to itself.
pub(crate) fn line_of_sight(walkboxes: &WalkboxRegistry, a: Point, b: Point) -> bool {
    // i64 so that lines across the whole i32 range can't overflow
    let (mut x, mut y) = (a.0 as i64, a.1 as i64);
    let (x2, y2) = (b.0 as i64, b.1 as i64);
    let dx = (x2 - x).abs();
    let dy = -(y2 - y).abs();
    let sx = if x < x2 { 1 } else { -1 };
    let sy = if y < y2 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        // always between a and b, so it fits back into a Point
        let pixel = (x as i32, y as i32);
        if !walkboxes.is_walkable(pixel) {
            log::trace!("No line of sight from {:?} to {:?}: blocked at {:?}", a, b, pixel);
            return false;
        }
        if pixel == b {
            return true;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}

/// Removes every Waypoint that can be skipped by walking in a straight line.
///
/// From each Waypoint the candidates are tried from the end of the Path backwards, and the
/// first one in sight becomes the next Waypoint. The first and last Points never change.
pub(crate) fn smooth(walkboxes: &WalkboxRegistry, mut path: Vec<Point>) -> Vec<Point> {
    let raw_len = path.len();
    let mut current = 0;
    while path.len() - current > 2 {
        let from = path[current];
        let target = (current + 2..path.len()).rfind(|&i| line_of_sight(walkboxes, from, path[i]));
        if let Some(target) = target {
            path.drain(current + 1..target);
        }
        current += 1;
    }
    if path.len() != raw_len {
        log::trace!("Smoothed Path from {} to {} Points", raw_len, path.len());
    }
    path
}
