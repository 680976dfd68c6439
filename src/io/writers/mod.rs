pub mod icon;

pub use icon::write_icon;
