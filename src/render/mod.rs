// Tree rendering: serializable snapshots and the ASCII canvas
pub mod canvas;
pub mod snapshot;

pub use canvas::draw;
pub use snapshot::{read_snapshot, write_snapshot, SnapshotError, TreeSnapshot};
