pub mod batch;
pub mod params;
pub mod staging;
pub mod template;
