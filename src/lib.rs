#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unstable_features,
    unused_import_braces,
    unused_qualifications
)]

//! A crate to find Walking Paths across the Walkboxes of a Room.
//!
//! ## Introduction
//! Point-and-click adventures describe the walkable floor of a Room as a set of axis-aligned
//! Rectangles, usually called Walkboxes. Every Walkbox is convex, so two Points inside the same
//! Walkbox can always be connected by a straight line. Getting from one Walkbox to another is
//! where Pathfinding comes in.
//!
//! This crate treats the Places where two Walkboxes overlap as Portals: every overlap contributes
//! the Corners (and optionally the Edge Midpoints) of the intersection Rectangle as Nodes of a
//! small Graph. Two Nodes are connected if they lie on a common Walkbox. Finding a Path is then
//! a matter of inserting the Start and Goal into that Graph, running A* over it and finally
//! removing any Waypoints that can be skipped because there is a direct line of sight.
//!
//! Since Rooms rarely have more than a few dozen Walkboxes, the Portal Graph is rebuilt from
//! scratch whenever the Walkboxes change instead of being updated incrementally.
//!
//! ## Examples
//! Creating a Room and finding a Path:
//! ```
//! use walkbox_pathfinding::prelude::*;
//!
//! let mut room = PathfindingContext::new();
//!
//! // a corridor along the top and a hallway leading down on its right side
//! room.add_walkbox(Walkbox::new((0, 0), (100, 20))?)?;
//! room.add_walkbox(Walkbox::new((80, 0), (100, 100))?.with_name("hallway"))?;
//!
//! // adding Walkboxes does not rebuild the Graph on its own
//! room.recalculate();
//!
//! let path = room.find_path((10, 10), (90, 90));
//! assert_eq!(path, vec![(10, 10), (80, 20), (90, 90)]);
//! # Ok::<(), WalkboxError>(())
//! ```
//!
//! Goals outside of every Walkbox are moved to the closest Point of a Walkbox first:
//! ```
//! # use walkbox_pathfinding::prelude::*;
//! # let mut room = PathfindingContext::new();
//! # room.add_walkbox(Walkbox::new((0, 0), (100, 20))?)?;
//! # room.add_walkbox(Walkbox::new((80, 0), (100, 100))?.with_name("hallway"))?;
//! # room.recalculate();
//! let path = room.find_path((10, 10), (150, 10));
//! assert_eq!(path, vec![(10, 10), (100, 10)]);
//! # Ok::<(), WalkboxError>(())
//! ```
//!
//! ### Enabling and disabling Walkboxes
//! Named Walkboxes can be switched on and off at runtime, for example when a Door closes.
//! Doing so rebuilds the Graph immediately:
//! ```
//! # use walkbox_pathfinding::prelude::*;
//! # let mut room = PathfindingContext::new();
//! # room.add_walkbox(Walkbox::new((0, 0), (100, 20))?)?;
//! # room.add_walkbox(Walkbox::new((80, 0), (100, 100))?.with_name("hallway"))?;
//! # room.recalculate();
//! room.disable_walkbox("hallway")?;
//! assert!(room.find_path((10, 10), (90, 90)).is_empty()); // the hallway is closed off
//!
//! room.enable_walkbox("HALLWAY")?; // names are case-insensitive
//! assert_eq!(room.find_path((10, 10), (90, 90)).last(), Some(&(90, 90)));
//!
//! assert!(room.enable_walkbox("door").is_err());
//! # Ok::<(), WalkboxError>(())
//! ```
//!
//! ### Configuration
//! [`PathfindingContext::with_config`] accepts a [`PathfindingConfig`] to control how Distances
//! are measured, how many Portal Nodes are generated and whether Paths are smoothed.
//! ```
//! use walkbox_pathfinding::prelude::*;
//!
//! let room = PathfindingContext::with_config(PathfindingConfig {
//!     smooth_paths: false,
//!     ..PathfindingConfig::LEGACY
//! });
//!
//! assert_eq!(room.config().distance, DistanceMetric::HorizontalOnly);
//! ```

/// A shorthand for Points in Room space, measured in Pixels
pub type Point = (i32, i32);

mod utils;

mod error;
pub use self::error::WalkboxError;

mod config;
pub use self::config::{DistanceMetric, PathfindingConfig};

mod walkbox;
pub use self::walkbox::{Walkbox, WalkboxDef, WalkboxId};

mod registry;
pub use self::registry::WalkboxRegistry;

mod graph;
pub use self::graph::PortalNode;

mod path;
pub use self::path::{Cost, Path};

mod smoothing;

mod context;
pub use self::context::PathfindingContext;

mod tracker;
pub use self::tracker::{WalkboxChange, WalkboxTracker};

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        DistanceMetric, PathfindingConfig, PathfindingContext, Point, Walkbox, WalkboxDef,
        WalkboxError, WalkboxId, WalkboxTracker,
    };
}
