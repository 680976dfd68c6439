pub mod pipeline;
pub mod resize;
