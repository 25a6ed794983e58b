//! Background [`Task`]s definitions.

mod background;
pub mod refresh_catalog;

pub use common::Handler as Task;

pub use self::{background::Background, refresh_catalog::RefreshCatalog};
