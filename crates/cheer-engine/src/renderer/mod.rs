pub mod snapshot;

pub use snapshot::{FrameSnapshot, SpriteDraw};
