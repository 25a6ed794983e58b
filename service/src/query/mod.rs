//! [`Query`] definition.
//!
//! Every [`Query`] reads from the [`Snapshot`] currently loaded into the
//! [`Catalog`]. A catalog refresh replaces the [`Snapshot`] as a whole, so a
//! query observes either the previous or the next state, never a mix.
//!
//! [`Snapshot`]: catalog::Snapshot

pub mod package;
pub mod package_quote;
pub mod property;
pub mod room_groups;
pub mod stay_quote;

use common::operations::{By, Select};
use tracerr::Traced;

use crate::{
    infra::{catalog, Catalog},
    Service,
};

pub use self::{
    package_quote::PackageQuote, room_groups::RoomGroups,
    stay_quote::StayQuote,
};

/// [`Query`] of the [`Service`].
pub use common::Handler as Query;

/// [`Query`] looking up a single catalog entry `W` by its key `B`.
///
/// Resolves against the [`Snapshot`] loaded at the moment of execution, so
/// an entry missing there is reported as absent rather than as an error.
///
/// [`Snapshot`]: catalog::Snapshot
#[derive(Clone, Copy, Debug)]
pub struct SnapshotLookup<T>(T);

impl<W, B> SnapshotLookup<By<W, B>> {
    /// Creates a new [`SnapshotLookup`] of a `W` keyed by the provided `B`.
    #[must_use]
    pub fn by(by: B) -> Self {
        Self(By::new(by))
    }
}

impl<C, W, B> Query<SnapshotLookup<By<W, B>>> for Service<C>
where
    C: Catalog<Select<By<W, B>>, Ok = W, Err = Traced<catalog::Error>>,
{
    type Ok = W;
    type Err = Traced<catalog::Error>;

    async fn execute(
        &self,
        SnapshotLookup(by): SnapshotLookup<By<W, B>>,
    ) -> Result<Self::Ok, Self::Err> {
        self.catalog()
            .execute(Select(by))
            .await
            .map_err(tracerr::wrap!())
    }
}

#[cfg(test)]
mod spec {
    use common::{Handler as _, Money};

    use crate::{
        domain::{package, property, Package, Property},
        infra::{catalog::Snapshot, InMemory},
        Config, Service,
    };

    use super::{package::ById as PackageById, property::ById as PropertyById};

    fn snapshot() -> Snapshot {
        Snapshot {
            properties: vec![Property {
                id: property::Id::new(),
                name: "Mara Camp".into(),
                rooms: vec![],
            }],
            packages: vec![Package {
                id: package::Id::new(),
                name: package::Name::new("Serengeti Explorer").unwrap(),
                price: Money::whole(2000),
                duration: "5 Days / 4 Nights".into(),
            }],
        }
    }

    #[tokio::test]
    async fn looks_up_current_snapshot() {
        let snapshot = snapshot();
        let property_id = snapshot.properties[0].id;
        let package_id = snapshot.packages[0].id;
        let (svc, _) = Service::new(Config::default(), InMemory::new(snapshot));

        let property = svc.execute(PropertyById::by(property_id)).await.unwrap();
        assert_eq!(property.map(|p| p.id), Some(property_id));
        let package = svc.execute(PackageById::by(package_id)).await.unwrap();
        assert_eq!(package.map(|p| p.id), Some(package_id));

        svc.catalog().replace(Snapshot::default()).await;

        let property = svc.execute(PropertyById::by(property_id)).await.unwrap();
        assert!(property.is_none());
        let package = svc.execute(PackageById::by(package_id)).await.unwrap();
        assert!(package.is_none());
    }
}
