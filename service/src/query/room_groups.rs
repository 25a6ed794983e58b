//! [`RoomGroups`] [`Query`].

use common::operations::{By, Select};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{property, quote::inventory, room, Property},
    infra::{catalog, Catalog},
    Query, Service,
};

/// [`Query`] for room [`Type`]s of a [`Property`], grouped by their names.
///
/// [`Type`]: room::Type
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RoomGroups {
    /// ID of the [`Property`] to group rooms of.
    pub property_id: property::Id,
}

impl RoomGroups {
    /// Creates a new [`RoomGroups`] [`Query`] for the [`Property`] with the
    /// provided [`property::Id`].
    #[must_use]
    pub fn by(property_id: property::Id) -> Self {
        Self { property_id }
    }
}

impl<C> Query<RoomGroups> for Service<C>
where
    C: Catalog<
        Select<By<Option<Property>, property::Id>>,
        Ok = Option<Property>,
        Err = Traced<catalog::Error>,
    >,
{
    type Ok = Vec<room::Type>;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        RoomGroups { property_id }: RoomGroups,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let property = self
            .catalog()
            .execute(Select(By::new(property_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PropertyNotExists(property_id))
            .map_err(tracerr::wrap!())?;

        Ok(inventory::group_by_name(&property.rooms))
    }
}

/// Error of [`RoomGroups`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Catalog`] error.
    #[display("`Catalog` operation failed: {_0}")]
    #[from]
    Catalog(catalog::Error),

    /// [`Property`] with the provided ID does not exist.
    #[display("`Property(id: {_0})` does not exist")]
    PropertyNotExists(#[error(not(source))] property::Id),
}

#[cfg(test)]
mod spec {
    use common::{Handler as _, Money};

    use crate::{
        domain::{property, room, Property},
        infra::{catalog::Snapshot, InMemory},
        Config, Service,
    };

    use super::{ExecutionError, RoomGroups};

    fn instance(name: &str, is_available: bool) -> room::Instance {
        room::Instance {
            id: room::Id::new(),
            name: room::Name::new(name).unwrap(),
            max_guests: 2,
            price_per_night: Money::whole(100),
            is_available,
            images: vec![],
            amenities: vec![],
        }
    }

    #[tokio::test]
    async fn groups_rooms_of_property() {
        let property = Property {
            id: property::Id::new(),
            name: "Mara Camp".into(),
            rooms: vec![
                instance("Safari Tent", true),
                instance("Lodge Suite", true),
                instance("Safari Tent", false),
            ],
        };
        let property_id = property.id;
        let (svc, _) = Service::new(
            Config::default(),
            InMemory::new(Snapshot {
                properties: vec![property],
                packages: vec![],
            }),
        );

        let groups = svc.execute(RoomGroups::by(property_id)).await.unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name.to_string(), "Safari Tent");
        assert_eq!(groups[0].total_units, 2);
        assert_eq!(groups[0].available_units, 1);
        assert_eq!(groups[1].name.to_string(), "Lodge Suite");
    }

    #[tokio::test]
    async fn fails_for_unknown_property() {
        let (svc, _) =
            Service::new(Config::default(), InMemory::new(Snapshot::default()));
        let property_id = property::Id::new();

        let err = svc.execute(RoomGroups::by(property_id)).await.unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::PropertyNotExists(id) if *id == property_id,
        ));
    }
}
