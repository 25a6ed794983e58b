//! Domain definitions.

pub mod amenity;
pub mod package;
pub mod property;
pub mod quote;
pub mod room;

pub use self::{package::Package, property::Property};
