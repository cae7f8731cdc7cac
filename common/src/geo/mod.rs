pub mod coordinate;
pub mod result;
pub mod system;
pub mod transformation;

pub use coordinate::Coordinate;
pub use result::TransformationResult;
pub use system::ReferenceSystem;
pub use transformation::Transformation;
