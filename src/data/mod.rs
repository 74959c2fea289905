//! Data ingestion: graph snapshots and auxiliary node data

pub mod auxiliary;
pub mod snapshot;

pub use auxiliary::{Attributes, AuxiliarySource, EmbeddedAttributes, InterestsFile};
pub use snapshot::{load_snapshot, Snapshot};
