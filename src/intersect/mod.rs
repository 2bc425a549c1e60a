pub mod plane_3d;
pub mod polygon;
pub mod segment_2d;
