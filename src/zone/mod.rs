pub mod data;
pub mod loader;
pub mod model;

pub use model::BoundaryZone;
pub use model::Jurisdiction;
