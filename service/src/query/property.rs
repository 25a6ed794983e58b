//! [`Query`] collection related to a single [`Property`].

use common::operations::By;

use crate::domain::{property, Property};
#[cfg(doc)]
use crate::Query;

use super::SnapshotLookup;

/// Looks up a [`Property`] by its [`property::Id`] in the current catalog
/// snapshot.
pub type ById = SnapshotLookup<By<Option<Property>, property::Id>>;
