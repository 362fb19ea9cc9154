pub mod loader;
pub mod traits;

pub use loader::{FileSnapshot, DEFAULT_FRAME_NAME};
pub use traits::SnapshotSource;
