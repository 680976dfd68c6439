//! I/O layer: decoding the source image (`reader`) and encoding icons to disk
//! (`writers`).
pub mod reader;
pub use reader::{SourceImage, load_source};

pub mod writers;
