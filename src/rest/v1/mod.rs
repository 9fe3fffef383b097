pub mod address;
pub mod distance;
pub mod jurisdiction;
pub mod zones;
