//! lab-core: stable foundation for labbench.
//!
//! Contains:
//! - geometry (canvas positions, offsets, bounding boxes)
//! - units (uom SI types + constructors)
//! - numeric (finiteness checks, display formatting)
//! - ids (catalog identifiers for tools and experiments)
//! - kind (closed tool and experiment discriminants)
//! - error (shared error types)

pub mod error;
pub mod geometry;
pub mod ids;
pub mod kind;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{LabError, LabResult};
pub use geometry::*;
pub use ids::*;
pub use kind::{ExperimentKind, ToolKind};
pub use numeric::*;
pub use units::*;
