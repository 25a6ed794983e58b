//! [`Package`]-related definitions.

use common::Money;
use derive_more::{AsRef, Display, From, Into};
use juniper::{GraphQLObject, GraphQLScalar};
use service::domain;
use uuid::Uuid;

use crate::api::scalar;

/// Fixed-itinerary travel package.
#[derive(Clone, Debug, GraphQLObject)]
pub struct Package {
    /// Unique identifier of this `Package`.
    pub id: Id,

    /// Name of this `Package`.
    pub name: Name,

    /// Price of this `Package` per guest.
    pub price: Money,

    /// Free-text description of this `Package` duration, like
    /// `5 Days / 4 Nights`.
    pub duration: String,
}

impl From<domain::Package> for Package {
    fn from(package: domain::Package) -> Self {
        let domain::Package {
            id,
            name,
            price,
            duration,
        } = package;
        Self {
            id: id.into(),
            name: name.into(),
            price,
            duration: duration.into(),
        }
    }
}

/// Unique identifier of a `Package`.
#[derive(Clone, Copy, Debug, Display, Into, From, GraphQLScalar)]
#[from(domain::package::Id)]
#[into(domain::package::Id)]
#[graphql(name = "PackageId", transparent)]
pub struct Id(Uuid);

/// Name of a `Package`.
#[derive(AsRef, Clone, Debug, Display, From, GraphQLScalar, Into)]
#[graphql(name = "PackageName", with = scalar::Via::<domain::package::Name>)]
pub struct Name(domain::package::Name);
