//! Material domain entities.

pub mod model;

pub use model::Material;
