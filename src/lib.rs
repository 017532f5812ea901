//! decksect - Transfer bridge deck cross-sections between CAD tools
//!
//! A deck cross-section is an exterior boundary polygon plus interior void
//! polygons. This crate derives section properties (area, centroid, winding),
//! infers slab/web centerlines and cutlines for structural idealization, and
//! round-trips sections through a versioned JSON interchange file.

pub mod builder;
pub mod config;
pub mod derive;
pub mod domain;
pub mod error;
pub mod geometry;
pub mod interchange;
pub mod sink;
