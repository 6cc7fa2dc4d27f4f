use crate::Point;

#[allow(clippy::wrong_self_convention)]
pub trait IterExt<T>: Iterator<Item = T> {
    fn to_vec(self) -> Vec<T>;
}
impl<T, I: Iterator<Item = T>> IterExt<T> for I {
    #[allow(clippy::wrong_self_convention)]
    fn to_vec(self) -> Vec<T> {
        self.collect()
    }
}

// differences of two i32 always fit into an i64
fn delta(a: i32, b: i32) -> i64 {
    a as i64 - b as i64
}

pub fn euclidean_distance(a: Point, b: Point) -> f32 {
    let dx = delta(a.0, b.0) as f64;
    let dy = delta(a.1, b.1) as f64;
    (dx * dx + dy * dy).sqrt() as f32
}

pub fn horizontal_distance(a: Point, b: Point) -> f32 {
    delta(a.0, b.0).abs() as f32
}

/// squared distance, for comparisons where the actual value doesn't matter
pub fn distance_sq(a: Point, b: Point) -> i128 {
    let dx = delta(a.0, b.0) as i128;
    let dy = delta(a.1, b.1) as i128;
    dx * dx + dy * dy
}

/// the midpoint between `a` and `b`, rounded towards zero
pub fn midpoint(a: i32, b: i32) -> i32 {
    ((a as i64 + b as i64) / 2) as i32
}
