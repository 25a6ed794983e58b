//! [`Catalog`]-related implementations.

pub mod memory;

use derive_more::{Display, Error as StdError, From};
use serde::{Deserialize, Serialize};

use crate::domain::{package, property, Package, Property};

pub use self::memory::InMemory;

/// Catalog operation.
///
/// Catalog is the source of [`Property`]s and [`Package`]s being quoted.
pub use common::Handler as Catalog;

/// Consistent state of a [`Catalog`] at some moment.
///
/// [`Snapshot`]s are never mutated in place, but replaced as a whole, so a
/// single quote always observes a consistent state.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Snapshot {
    /// [`Property`]s offering rooms.
    #[serde(default)]
    pub properties: Vec<Property>,

    /// Bookable [`Package`]s.
    #[serde(default)]
    pub packages: Vec<Package>,
}

impl Snapshot {
    /// Looks up a [`Property`] by its [`property::Id`].
    #[must_use]
    pub fn property(&self, id: property::Id) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Looks up a [`Package`] by its [`package::Id`].
    #[must_use]
    pub fn package(&self, id: package::Id) -> Option<&Package> {
        self.packages.iter().find(|p| p.id == id)
    }
}

/// Operation of reloading a [`Catalog`] from its source.
#[derive(Clone, Copy, Debug)]
pub struct Reload;

/// [`Catalog`] error.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    #[cfg(feature = "catalog-file")]
    /// Catalog file cannot be read.
    #[display("cannot read catalog file: {_0}")]
    Io(std::io::Error),

    #[cfg(feature = "catalog-file")]
    /// Catalog file contains malformed [`Snapshot`].
    #[display("malformed catalog file: {_0}")]
    Json(serde_json::Error),
}
