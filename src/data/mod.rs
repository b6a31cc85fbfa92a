//! Catalog boundary module
//!
//! Maps raw Space-Track-shaped catalog records into validated
//! [`OrbitalElements`](crate::propagation::OrbitalElements). All field
//! parsing and record filtering happens here, so the propagation kernel
//! only ever sees elements that passed validation.

mod loader;
mod satcat;

pub use loader::{load_catalog, parse_catalog, CatalogStats, TrackedSatellite};
pub use satcat::{SatCatRecord, SatCatResponse};
