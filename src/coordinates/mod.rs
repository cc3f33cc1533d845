pub mod planar;

pub use planar::Planar;
