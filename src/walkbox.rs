use crate::{Point, WalkboxError};
use std::fmt;

/// The Type used to reference a Walkbox within its Room
///
/// Ids are handed out by [`PathfindingContext::add_walkbox`](crate::PathfindingContext::add_walkbox)
/// in registration order and stay valid for the lifetime of the Room.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WalkboxId(pub(crate) usize);

impl WalkboxId {
    /// The position of the Walkbox in registration order
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for WalkboxId {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "#{}", self.0)
    }
}

/// An axis-aligned Rectangle of a Room that Agents may walk within.
///
/// Both corners are part of the Walkbox, so a Walkbox from `(0, 0)` to `(10, 10)` contains
/// `(10, 10)`, and two Walkboxes that merely touch are still considered to overlap.
#[derive(Clone, Debug, PartialEq)]
pub struct Walkbox {
    name: Option<String>,
    p1: Point,
    p2: Point,
    scale: f32,
    speed: f32,
    disabled: bool,
}

impl Walkbox {
    /// Creates a new, enabled and unnamed Walkbox spanning from `p1` (top-left) to `p2`
    /// (bottom-right), with both multipliers set to `1.0`.
    ///
    /// Returns [`WalkboxError::MalformedRect`] if `p1` is not above and left of `p2`.
    ///
    /// ## Examples
    /// ```
    /// # use walkbox_pathfinding::{Walkbox, WalkboxError};
    /// let walkbox = Walkbox::new((0, 0), (100, 100))?
    ///     .with_name("stairs")
    ///     .with_speed(0.5);
    /// assert_eq!(walkbox.name(), Some("stairs"));
    ///
    /// assert!(Walkbox::new((100, 0), (0, 100)).is_err());
    /// # Ok::<(), WalkboxError>(())
    /// ```
    pub fn new(p1: Point, p2: Point) -> Result<Walkbox, WalkboxError> {
        if p1.0 > p2.0 || p1.1 > p2.1 {
            return Err(WalkboxError::MalformedRect { p1, p2 });
        }
        Ok(Walkbox {
            name: None,
            p1,
            p2,
            scale: 1.0,
            speed: 1.0,
            disabled: false,
        })
    }

    /// Sets the name used to enable, disable and trigger the Walkbox
    pub fn with_name(mut self, name: impl Into<String>) -> Walkbox {
        self.name = Some(name.into());
        self
    }
    /// Sets the visual scale applied to Agents standing in the Walkbox
    pub fn with_scale(mut self, scale: f32) -> Walkbox {
        self.scale = scale;
        self
    }
    /// Sets the factor applied to the walking speed of Agents in the Walkbox
    pub fn with_speed(mut self, speed: f32) -> Walkbox {
        self.speed = speed;
        self
    }
    /// Sets whether the Walkbox starts out disabled
    pub fn with_disabled(mut self, disabled: bool) -> Walkbox {
        self.disabled = disabled;
        self
    }

    /// The name of the Walkbox, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
    /// The top-left corner
    pub fn p1(&self) -> Point {
        self.p1
    }
    /// The bottom-right corner
    pub fn p2(&self) -> Point {
        self.p2
    }
    /// The visual scale multiplier
    pub fn scale(&self) -> f32 {
        self.scale
    }
    /// The walking speed multiplier
    pub fn speed(&self) -> f32 {
        self.speed
    }
    /// `true` if the Walkbox is currently ignored by all queries
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub(crate) fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    pub(crate) fn has_name(&self, name: &str) -> bool {
        self.name
            .as_deref()
            .map_or(false, |own| own.eq_ignore_ascii_case(name))
    }

    pub(crate) fn validate(&self) -> Result<(), WalkboxError> {
        for (field, value) in [("scale", self.scale), ("speed", self.speed)] {
            if !value.is_finite() || value < 0.0 {
                return Err(WalkboxError::InvalidMultiplier { field, value });
            }
        }
        Ok(())
    }

    /// Checks if `point` lies within the Walkbox, borders included.
    ///
    /// Disabled Walkboxes never contain anything.
    pub fn contains(&self, point: Point) -> bool {
        !self.disabled
            && point.0 >= self.p1.0
            && point.1 >= self.p1.1
            && point.0 <= self.p2.0
            && point.1 <= self.p2.1
    }

    /// Checks if both Walkboxes are enabled and share at least one Point.
    ///
    /// ## Examples
    /// ```
    /// # use walkbox_pathfinding::{Walkbox, WalkboxError};
    /// let a = Walkbox::new((0, 0), (10, 10))?;
    /// let b = Walkbox::new((10, 5), (20, 20))?;
    /// assert!(a.overlaps(&b));
    /// assert!(b.overlaps(&a));
    ///
    /// let b = b.with_disabled(true);
    /// assert!(!a.overlaps(&b));
    /// # Ok::<(), WalkboxError>(())
    /// ```
    pub fn overlaps(&self, other: &Walkbox) -> bool {
        !self.disabled
            && !other.disabled
            && self.p1.0 <= other.p2.0
            && self.p2.0 >= other.p1.0
            && self.p1.1 <= other.p2.1
            && self.p2.1 >= other.p1.1
    }

    /// Calculates the Rectangle where both Walkboxes overlap, as a (top-left, bottom-right) pair.
    ///
    /// Returns `None` if they don't overlap or either of them is disabled. The result may be a
    /// line or a single Point if the Walkboxes only touch.
    ///
    /// ## Examples
    /// ```
    /// # use walkbox_pathfinding::{Walkbox, WalkboxError};
    /// let a = Walkbox::new((0, 0), (10, 10))?;
    /// let b = Walkbox::new((5, -5), (20, 7))?;
    /// assert_eq!(a.intersection(&b), Some(((5, 0), (10, 7))));
    /// # Ok::<(), WalkboxError>(())
    /// ```
    pub fn intersection(&self, other: &Walkbox) -> Option<(Point, Point)> {
        if self.disabled || other.disabled {
            return None;
        }
        let x1 = self.p1.0.max(other.p1.0);
        let x2 = self.p2.0.min(other.p2.0);
        let y1 = self.p1.1.max(other.p1.1);
        let y2 = self.p2.1.min(other.p2.1);
        if x1 > x2 || y1 > y2 {
            return None;
        }
        Some(((x1, y1), (x2, y2)))
    }

    /// The Point of the Walkbox closest to `point`. Points inside are returned unchanged.
    pub fn clamp(&self, point: Point) -> Point {
        (
            point.0.clamp(self.p1.0, self.p2.0),
            point.1.clamp(self.p1.1, self.p2.1),
        )
    }
}

impl fmt::Display for Walkbox {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(
            fmt,
            "'{}' [{},{}] <-> [{},{}]",
            self.name().unwrap_or("unnamed"),
            self.p1.0,
            self.p1.1,
            self.p2.0,
            self.p2.1
        )?;
        if self.disabled {
            write!(fmt, " (disabled)")?;
        }
        Ok(())
    }
}

/// A Walkbox as it is described by Room scripts or data files.
///
/// Everything but the coordinates is optional, so `..Default::default()` fills in an enabled,
/// unnamed Walkbox with neutral multipliers.
///
/// ## Examples
/// ```
/// # use walkbox_pathfinding::{Walkbox, WalkboxDef, WalkboxError};
/// let def = WalkboxDef {
///     name: Some("bridge".into()),
///     x1: 40,
///     y1: 100,
///     x2: 200,
///     y2: 120,
///     ..Default::default()
/// };
/// let walkbox = Walkbox::try_from(def)?;
/// assert_eq!(walkbox.p2(), (200, 120));
/// assert_eq!(walkbox.speed(), 1.0);
/// # Ok::<(), WalkboxError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WalkboxDef {
    /// the name used to enable, disable and trigger the Walkbox
    pub name: Option<String>,
    /// left edge
    pub x1: i32,
    /// top edge
    pub y1: i32,
    /// right edge
    pub x2: i32,
    /// bottom edge
    pub y2: i32,
    /// visual scale multiplier (defaults to `1.0`)
    pub scale: f32,
    /// walking speed multiplier (defaults to `1.0`)
    pub speed: f32,
    /// whether the Walkbox starts out disabled (defaults to `false`)
    pub disabled: bool,
}

impl Default for WalkboxDef {
    fn default() -> WalkboxDef {
        WalkboxDef {
            name: None,
            x1: 0,
            y1: 0,
            x2: 0,
            y2: 0,
            scale: 1.0,
            speed: 1.0,
            disabled: false,
        }
    }
}

impl TryFrom<WalkboxDef> for Walkbox {
    type Error = WalkboxError;

    fn try_from(def: WalkboxDef) -> Result<Walkbox, WalkboxError> {
        let walkbox = Walkbox {
            name: def.name,
            ..Walkbox::new((def.x1, def.y1), (def.x2, def.y2))?
        }
        .with_scale(def.scale)
        .with_speed(def.speed)
        .with_disabled(def.disabled);
        walkbox.validate()?;
        Ok(walkbox)
    }
}
