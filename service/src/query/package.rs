//! [`Query`] collection related to a single [`Package`].

use common::operations::By;

use crate::domain::{package, Package};
#[cfg(doc)]
use crate::Query;

use super::SnapshotLookup;

/// Looks up a [`Package`] by its [`package::Id`] in the current catalog
/// snapshot.
pub type ById = SnapshotLookup<By<Option<Package>, package::Id>>;
