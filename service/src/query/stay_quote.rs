//! [`StayQuote`] [`Query`].

use common::{
    operations::{By, Select},
    Date,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        amenity, property,
        quote::{
            self, CheckInDate, CheckOutDate, Inventory, PaymentTerm,
            RoomRequest, StaySelection, Violations,
        },
        Property,
    },
    infra::{catalog, Catalog},
    Query, Service,
};

/// [`Query`] for quoting a stay at a [`Property`].
#[derive(Clone, Debug)]
pub struct StayQuote {
    /// ID of the [`Property`] to stay at.
    pub property_id: property::Id,

    /// Date of arrival.
    pub check_in: Option<CheckInDate>,

    /// Date of departure.
    pub check_out: Option<CheckOutDate>,

    /// Requested rooms.
    pub rooms: Vec<RoomRequest>,

    /// Selected add-ons.
    pub amenities: Vec<amenity::Selection>,

    /// Selected [`PaymentTerm`].
    pub term: PaymentTerm,

    /// Current date the payment schedule is computed relative to.
    pub today: Date,
}

/// Output of the [`StayQuote`] [`Query`].
pub type Output = quote::StayQuote;

impl<C> Query<StayQuote> for Service<C>
where
    C: Catalog<
        Select<By<Option<Property>, property::Id>>,
        Ok = Option<Property>,
        Err = Traced<catalog::Error>,
    >,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(&self, query: StayQuote) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let StayQuote {
            property_id,
            check_in,
            check_out,
            rooms,
            amenities,
            term,
            today,
        } = query;

        let property = self
            .catalog()
            .execute(Select(By::new(property_id)))
            .await
            .map_err(tracerr::map_from_and_wrap!(=> E))?
            .ok_or(E::PropertyNotExists(property_id))
            .map_err(tracerr::wrap!())?;
        let inventory = Inventory::new(&property.rooms);

        let selection = StaySelection {
            check_in,
            check_out,
            rooms,
            amenities,
            term,
        };
        selection
            .quote(
                &inventory,
                today,
                &self.config().pricing,
                &self.config().payment,
            )
            .map_err(E::Rejected)
            .map_err(tracerr::wrap!())
    }
}

/// Error of [`StayQuote`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Catalog`] error.
    #[display("`Catalog` operation failed: {_0}")]
    #[from]
    Catalog(catalog::Error),

    /// [`Property`] with the provided ID does not exist.
    #[display("`Property(id: {_0})` does not exist")]
    PropertyNotExists(#[error(not(source))] property::Id),

    /// Selection cannot be quoted.
    #[display("stay cannot be quoted: {_0}")]
    Rejected(Violations),
}
