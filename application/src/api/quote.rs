//! Quote-related definitions.

use common::{Date, Money};
use derive_more::From;
use juniper::{GraphQLEnum, GraphQLInputObject, GraphQLObject, GraphQLUnion};
use service::{domain, query};
use uuid::Uuid;

use crate::{
    api::{self, package, property, room},
    define_error, AsError, Error,
};

/// Way a quote total is paid.
#[derive(Clone, Copy, Debug, Default, Eq, GraphQLEnum, PartialEq)]
#[graphql(name = "PaymentTerm")]
pub enum Term {
    /// Only the deposit is paid now, and the balance later.
    #[default]
    Deposit,

    /// The whole total is paid now.
    Full,
}

impl From<Term> for domain::quote::PaymentTerm {
    fn from(term: Term) -> Self {
        match term {
            Term::Deposit => Self::Deposit,
            Term::Full => Self::Full,
        }
    }
}

impl From<domain::quote::PaymentTerm> for Term {
    fn from(term: domain::quote::PaymentTerm) -> Self {
        use domain::quote::PaymentTerm as T;
        match term {
            T::Deposit => Self::Deposit,
            T::Full => Self::Full,
        }
    }
}

/// Requested rooms of a `RoomGroup`.
#[derive(Clone, Debug, GraphQLInputObject)]
pub struct RoomRequestInput {
    /// Name of the requested `RoomGroup`.
    pub room: room::Name,

    /// Number of requested rooms.
    pub quantity: i32,

    /// Number of guests staying in the requested rooms.
    pub guests: i32,
}

impl TryFrom<RoomRequestInput> for domain::quote::RoomRequest {
    type Error = Error;

    fn try_from(input: RoomRequestInput) -> Result<Self, Self::Error> {
        Ok(Self {
            room: input.room.into(),
            quantity: api::count(input.quantity)?,
            guests: api::count(input.guests)?,
        })
    }
}

/// Selected optional add-on.
#[derive(Clone, Copy, Debug, GraphQLInputObject)]
pub struct AmenityInput {
    /// Unique identifier of the add-on.
    pub id: Uuid,

    /// Price of a single unit of the add-on.
    pub unit_price: Money,

    /// Number of selected units.
    pub quantity: i32,
}

impl TryFrom<AmenityInput> for domain::amenity::Selection {
    type Error = Error;

    fn try_from(input: AmenityInput) -> Result<Self, Self::Error> {
        Ok(Self {
            id: input.id.into(),
            unit_price: api::amount(input.unit_price)?,
            quantity: api::count(input.quantity)?,
        })
    }
}

/// Selection of a stay to be quoted.
#[derive(Clone, Debug, GraphQLInputObject)]
pub struct StayQuoteInput {
    /// ID of the property to stay at.
    pub property_id: property::Id,

    /// Date of arrival.
    pub check_in: Option<Date>,

    /// Date of departure.
    pub check_out: Option<Date>,

    /// Requested rooms.
    pub rooms: Vec<RoomRequestInput>,

    /// Selected add-ons.
    #[graphql(default)]
    pub amenities: Vec<AmenityInput>,

    /// Selected payment term.
    #[graphql(default)]
    pub term: Term,
}

impl StayQuoteInput {
    /// Converts this [`StayQuoteInput`] into a [`query::StayQuote`] as of the
    /// provided `today` date.
    ///
    /// # Errors
    ///
    /// If any of the provided counts is negative.
    pub fn into_query(self, today: Date) -> Result<query::StayQuote, Error> {
        let Self {
            property_id,
            check_in,
            check_out,
            rooms,
            amenities,
            term,
        } = self;
        Ok(query::StayQuote {
            property_id: property_id.into(),
            check_in: check_in.map(Date::coerce),
            check_out: check_out.map(Date::coerce),
            rooms: rooms
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_, _>>()?,
            amenities: amenities
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_, _>>()?,
            term: term.into(),
            today,
        })
    }
}

/// Selection of a package to be quoted.
#[derive(Clone, Debug, GraphQLInputObject)]
pub struct PackageQuoteInput {
    /// ID of the chosen `Package`.
    pub package_id: Option<package::Id>,

    /// First day of the `Package`.
    pub start_date: Option<Date>,

    /// Number of guests the `Package` is booked for.
    pub guests: i32,

    /// Selected add-ons.
    #[graphql(default)]
    pub amenities: Vec<AmenityInput>,

    /// Selected payment term.
    #[graphql(default)]
    pub term: Term,
}

impl PackageQuoteInput {
    /// Converts this [`PackageQuoteInput`] into a [`query::PackageQuote`] as
    /// of the provided `today` date.
    ///
    /// # Errors
    ///
    /// If any of the provided counts is negative.
    pub fn into_query(
        self,
        today: Date,
    ) -> Result<query::PackageQuote, Error> {
        let Self {
            package_id,
            start_date,
            guests,
            amenities,
            term,
        } = self;
        Ok(query::PackageQuote {
            package_id: package_id.map(Into::into),
            start_date: start_date.map(Date::coerce),
            guests: api::count(guests)?,
            amenities: amenities
                .into_iter()
                .map(TryInto::try_into)
                .collect::<Result<_, _>>()?,
            term: term.into(),
            today,
        })
    }
}

/// Installments a quote total is paid in.
#[derive(Clone, Copy, Debug, GraphQLObject)]
pub struct PaymentSchedule {
    /// Amount of the deposit.
    pub deposit_amount: Money,

    /// Amount of the balance.
    pub balance_amount: Money,

    /// Date the deposit is due at.
    pub deposit_due_date: Date,

    /// Date the balance is due at.
    pub balance_due_date: Date,

    /// Indicator whether arrival is too close for the balance to be deferred,
    /// so it's due immediately.
    pub balance_due_now: bool,
}

impl From<domain::quote::PaymentSchedule> for PaymentSchedule {
    fn from(schedule: domain::quote::PaymentSchedule) -> Self {
        Self {
            deposit_amount: schedule.deposit_amount,
            balance_amount: schedule.balance_amount,
            deposit_due_date: schedule.deposit_due_date.coerce(),
            balance_due_date: schedule.balance_due_date.coerce(),
            balance_due_now: schedule.balance_due_now,
        }
    }
}

/// Cost of the rooms of a single `RoomGroup` in a `StayQuote`.
#[derive(Clone, Debug, GraphQLObject)]
pub struct StayLineItem {
    /// Name of the `RoomGroup`.
    pub room: room::Name,

    /// Number of rooms.
    pub quantity: i32,

    /// Number of guests staying in the rooms.
    pub guests: i32,

    /// Cost of the guests staying in the rooms.
    pub base_rate: Money,

    /// Surcharge for guests exceeding capacity.
    pub extra_guest_fee: Money,

    /// Total cost of the rooms.
    pub total: Money,

    /// Indicator whether guests exceed the advertised capacity of the rooms,
    /// being accommodated at the full rate.
    pub over_capacity: bool,
}

impl From<domain::quote::cost::LineItem> for StayLineItem {
    fn from(item: domain::quote::cost::LineItem) -> Self {
        Self {
            room: item.room.into(),
            quantity: api::int(item.quantity),
            guests: api::int(item.guests),
            base_rate: item.cost.base_rate,
            extra_guest_fee: item.cost.extra_guest_fee,
            total: item.cost.total,
            over_capacity: item.over_capacity,
        }
    }
}

/// Itemized quote of a stay.
#[derive(Clone, Debug, GraphQLObject)]
pub struct StayQuote {
    /// Number of nights of the stay.
    pub nights: i32,

    /// Costs of the requested rooms.
    pub line_items: Vec<StayLineItem>,

    /// Sum of all room costs.
    pub base_rate: Money,

    /// Sum of all extra-guest surcharges.
    pub extra_guest_fee: Money,

    /// Total of the selected add-ons.
    pub amenities_total: Money,

    /// Room costs with the add-ons.
    pub subtotal: Money,

    /// Service fee charged on the subtotal.
    pub service_fee: Money,

    /// Taxes charged on the subtotal.
    pub taxes: Money,

    /// Grand total.
    pub total: Money,

    /// Installments of the total, if there is anything to pay.
    pub schedule: Option<PaymentSchedule>,

    /// Selected payment term.
    pub term: Term,

    /// Amount to be paid now under the selected payment term.
    pub amount_due_now: Money,
}

impl From<query::stay_quote::Output> for StayQuote {
    fn from(quote: query::stay_quote::Output) -> Self {
        let domain::quote::StayQuote {
            breakdown,
            schedule,
            term,
            amount_due_now,
        } = quote;
        Self {
            nights: api::int(breakdown.nights),
            line_items: breakdown
                .line_items
                .into_iter()
                .map(Into::into)
                .collect(),
            base_rate: breakdown.base_rate,
            extra_guest_fee: breakdown.extra_guest_fee,
            amenities_total: breakdown.amenities_total,
            subtotal: breakdown.subtotal,
            service_fee: breakdown.service_fee,
            taxes: breakdown.taxes,
            total: breakdown.total,
            schedule: schedule.map(Into::into),
            term: term.into(),
            amount_due_now,
        }
    }
}

/// Itemized quote of a package.
#[derive(Clone, Debug, GraphQLObject)]
pub struct PackageQuote {
    /// Price of the `Package` for all the guests.
    pub base_price: Money,

    /// Total of the selected add-ons.
    pub amenities_total: Money,

    /// Base price with the add-ons.
    pub subtotal: Money,

    /// Service fee charged on the subtotal.
    pub service_fee: Money,

    /// Taxes charged on the subtotal.
    pub taxes: Money,

    /// Grand total.
    pub total: Money,

    /// First day of the `Package`.
    pub start_date: Date,

    /// Last day of the `Package`, inclusive.
    pub end_date: Date,

    /// Number of days the `Package` spans.
    pub days: i32,

    /// Explanation of an assumed duration, if the `Package` duration cannot
    /// be understood.
    pub warning: Option<String>,

    /// Installments of the total, if there is anything to pay.
    pub schedule: Option<PaymentSchedule>,

    /// Selected payment term.
    pub term: Term,

    /// Amount to be paid now under the selected payment term.
    pub amount_due_now: Money,
}

impl From<query::package_quote::Output> for PackageQuote {
    fn from(quote: query::package_quote::Output) -> Self {
        let domain::quote::PackageQuote {
            breakdown,
            start_date,
            end_date,
            days,
            warning,
            schedule,
            term,
            amount_due_now,
        } = quote;
        Self {
            base_price: breakdown.base_price,
            amenities_total: breakdown.amenities_total,
            subtotal: breakdown.subtotal,
            service_fee: breakdown.service_fee,
            taxes: breakdown.taxes,
            total: breakdown.total,
            start_date: start_date.coerce(),
            end_date: end_date.coerce(),
            days: api::int(days),
            warning: warning.map(|w| w.to_string()),
            schedule: schedule.map(Into::into),
            term: term.into(),
            amount_due_now,
        }
    }
}

/// Single reason a selection cannot be quoted.
#[derive(Clone, Debug, GraphQLObject)]
pub struct Violation {
    /// Machine-readable code: `OVERBOOKING`, `INVALID_DATE_RANGE`,
    /// `EMPTY_SELECTION` or `AMOUNT_OVERFLOW`.
    pub code: String,

    /// Human-readable description.
    pub message: String,
}

/// Rejection of a selection, listing everything wrong with it at once.
#[derive(Clone, Debug, GraphQLObject)]
pub struct QuoteRejection {
    /// Reasons the selection cannot be quoted.
    pub violations: Vec<Violation>,
}

impl From<&domain::quote::Violations> for QuoteRejection {
    fn from(violations: &domain::quote::Violations) -> Self {
        Self {
            violations: violations
                .iter()
                .map(|v| Violation {
                    code: v.code().to_owned(),
                    message: v.to_string(),
                })
                .collect(),
        }
    }
}

/// Result of quoting a stay.
#[derive(Clone, Debug, From, GraphQLUnion)]
pub enum StayQuoteResult {
    /// Successful quote.
    Quote(StayQuote),

    /// Rejected selection.
    Rejection(QuoteRejection),
}

/// Result of quoting a package.
#[derive(Clone, Debug, From, GraphQLUnion)]
pub enum PackageQuoteResult {
    /// Successful quote.
    Quote(PackageQuote),

    /// Rejected selection.
    Rejection(QuoteRejection),
}

define_error! {
    enum PropertyError {
        #[code = "PROPERTY_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Property` with the specified ID does not exist"]
        NotExists,
    }
}

define_error! {
    enum PackageError {
        #[code = "PACKAGE_NOT_EXISTS"]
        #[status = NOT_FOUND]
        #[message = "`Package` with the specified ID does not exist"]
        NotExists,
    }
}

impl AsError for query::room_groups::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Catalog(e) => e.try_as_error(),
            Self::PropertyNotExists(_) => Some(PropertyError::NotExists.into()),
        }
    }
}

impl AsError for query::stay_quote::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Catalog(e) => e.try_as_error(),
            Self::PropertyNotExists(_) => Some(PropertyError::NotExists.into()),
            // Represented as `QuoteRejection` rather than an error.
            Self::Rejected(_) => None,
        }
    }
}

impl AsError for query::package_quote::ExecutionError {
    fn try_as_error(&self) -> Option<Error> {
        match self {
            Self::Catalog(e) => e.try_as_error(),
            Self::PackageNotExists(_) => Some(PackageError::NotExists.into()),
            // Represented as `QuoteRejection` rather than an error.
            Self::Rejected(_) => None,
        }
    }
}
