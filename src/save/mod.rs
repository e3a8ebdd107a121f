//! Save files: the snapshot format and where snapshots live on disk.

mod snapshot;
mod store;

pub use snapshot::Snapshot;
pub use store::SaveStore;
