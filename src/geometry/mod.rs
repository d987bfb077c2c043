pub mod axis;
pub mod line;
pub mod point;
pub mod segment;
pub mod vector;

pub use axis::Axis;
pub use line::ParametrizedLine;
pub use point::Point3;
pub use segment::Segment3;
pub use vector::Vector3;
