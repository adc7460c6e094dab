//! Trailtone Track Library
//!
//! This crate turns recorded outdoor tracks (ordered waypoint lists with
//! elevation) into the flat distance/elevation profile consumed by
//! `trailtone-core`.
//!
//! # Overview
//!
//! A [`Track`] is a list of [`Segment`]s, each a continuous recording of
//! [`Waypoint`]s. [`Track::elevation_profile`] sums planar 2D distances
//! between consecutive points within each segment and concatenates segments
//! with a seam offset, producing an [`ElevationProfile`] whose distances are
//! non-decreasing across the whole tour.
//!
//! # Example
//!
//! ```
//! use trailtone_track::{Segment, Track, Waypoint};
//!
//! let segment = Segment::new(vec![
//!     Waypoint::new(2.1234, 5.1234, 1234.0),
//!     Waypoint::new(2.1235, 5.1235, 1235.0),
//! ]);
//! let track = Track::new("morning ride", vec![segment]);
//!
//! let profile = track.elevation_profile()?;
//! assert_eq!(profile.len(), 2);
//! assert_eq!(profile.distance[0], 0.0);
//! # Ok::<(), trailtone_track::TrackError>(())
//! ```

pub mod distance;
pub mod error;
pub mod profile;
pub mod track;

pub use distance::planar_distance;
pub use error::{TrackError, TrackResult};
pub use profile::ElevationProfile;
pub use track::{Segment, Track, Waypoint};
