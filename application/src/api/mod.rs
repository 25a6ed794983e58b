//! GraphQL API definitions.

pub mod package;
pub mod property;
mod query;
pub mod quote;
pub mod room;
pub mod scalar;

use common::Money;
use juniper::{EmptyMutation, EmptySubscription};

use crate::{error::InputError, Context, Error};

pub use self::{
    package::Package, property::Property, query::Query, room::RoomGroup,
};

/// GraphQL schema.
pub type Schema = juniper::RootNode<
    'static,
    Query,
    EmptyMutation<Context>,
    EmptySubscription<Context>,
>;

/// Creates a new [`Schema`].
#[must_use]
pub fn schema() -> Schema {
    Schema::new(Query, EmptyMutation::new(), EmptySubscription::new())
}

/// Converts an engine count into a GraphQL `Int`, saturating on overflow.
pub(crate) fn int(count: u32) -> i32 {
    i32::try_from(count).unwrap_or(i32::MAX)
}

/// Largest [`Money`] amount accepted as an input.
const MAX_INPUT_AMOUNT: u32 = 1_000_000_000;

/// Checks the provided input [`Money`] amount against the
/// [`MAX_INPUT_AMOUNT`].
///
/// # Errors
///
/// If the provided `value` exceeds the [`MAX_INPUT_AMOUNT`].
pub(crate) fn amount(value: Money) -> Result<Money, Error> {
    if value > Money::whole(MAX_INPUT_AMOUNT) {
        return Err(InputError::AmountTooLarge.into());
    }
    Ok(value)
}

/// Converts a GraphQL `Int` into an engine count.
///
/// # Errors
///
/// If the provided `value` is negative.
pub(crate) fn count(value: i32) -> Result<u32, Error> {
    u32::try_from(value).map_err(|_| InputError::NegativeCount.into())
}

#[cfg(test)]
mod spec {
    use common::{Date, Money};
    use juniper::{graphql_value, Variables};
    use service::{
        domain::{package, property, room, Package, Property},
        infra::{catalog::Snapshot, InMemory},
    };

    use crate::{Context, Service};

    use super::schema;

    fn room() -> room::Instance {
        room::Instance {
            id: room::Id::new(),
            name: room::Name::new("Safari Tent").unwrap(),
            max_guests: 2,
            price_per_night: Money::whole(100),
            is_available: true,
            images: vec![],
            amenities: vec![],
        }
    }

    fn context() -> (Context, property::Id, package::Id) {
        let property = Property {
            id: property::Id::new(),
            name: "Mara Camp".into(),
            rooms: vec![room(), room()],
        };
        let package = Package {
            id: package::Id::new(),
            name: package::Name::new("Serengeti Explorer").unwrap(),
            price: Money::whole(2000),
            duration: "5 Days / 4 Nights".to_owned().into(),
        };
        let (property_id, package_id) = (property.id, package.id);
        let catalog = InMemory::new(Snapshot {
            properties: vec![property],
            packages: vec![package],
        });
        let (service, _) = Service::new(service::Config::default(), catalog);
        let today = "2026-10-16".parse::<Date>().unwrap();
        (Context::new(service, today), property_id, package_id)
    }

    #[tokio::test]
    async fn quotes_stay() {
        let (ctx, property_id, _) = context();
        let query = format!(
            r#"{{
                stayQuote(input: {{
                    propertyId: "{property_id}"
                    checkIn: "2026-11-30"
                    checkOut: "2026-12-04"
                    rooms: [{{ room: "Safari Tent", quantity: 2, guests: 3 }}]
                }}) {{
                    __typename
                    ... on StayQuote {{
                        nights
                        total
                        amountDueNow
                        schedule {{ depositDueDate balanceDueDate }}
                    }}
                }}
            }}"#,
        );

        let (res, errs) =
            juniper::execute(&query, None, &schema(), &Variables::new(), &ctx)
                .await
                .unwrap();

        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        assert_eq!(
            res,
            graphql_value!({"stayQuote": {
                "__typename": "StayQuote",
                "nights": 4,
                "total": "1500.00",
                "amountDueNow": "450.00",
                "schedule": {
                    "depositDueDate": "2026-10-23",
                    "balanceDueDate": "2026-10-31",
                },
            }}),
        );
    }

    #[tokio::test]
    async fn rejects_stay_selection() {
        let (ctx, property_id, _) = context();
        let query = format!(
            r#"{{
                stayQuote(input: {{
                    propertyId: "{property_id}"
                    checkIn: "2026-11-30"
                    rooms: [{{ room: "Safari Tent", quantity: 3, guests: 3 }}]
                }}) {{
                    ... on QuoteRejection {{ violations {{ code }} }}
                }}
            }}"#,
        );

        let (res, errs) =
            juniper::execute(&query, None, &schema(), &Variables::new(), &ctx)
                .await
                .unwrap();

        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        assert_eq!(
            res,
            graphql_value!({"stayQuote": {"violations": [
                {"code": "INVALID_DATE_RANGE"},
                {"code": "OVERBOOKING"},
            ]}}),
        );
    }

    #[tokio::test]
    async fn quotes_package() {
        let (ctx, _, package_id) = context();
        let query = format!(
            r#"{{
                packageQuote(input: {{
                    packageId: "{package_id}"
                    startDate: "2026-12-01"
                    guests: 2
                    term: FULL
                }}) {{
                    ... on PackageQuote {{
                        days
                        endDate
                        total
                        amountDueNow
                        warning
                    }}
                }}
            }}"#,
        );

        let (res, errs) =
            juniper::execute(&query, None, &schema(), &Variables::new(), &ctx)
                .await
                .unwrap();

        assert!(errs.is_empty(), "unexpected errors: {errs:?}");
        assert_eq!(
            res,
            graphql_value!({"packageQuote": {
                "days": 5,
                "endDate": "2026-12-05",
                "total": "4880.00",
                "amountDueNow": "4880.00",
                "warning": null,
            }}),
        );
    }

    #[tokio::test]
    async fn reports_unknown_property() {
        let (ctx, ..) = context();
        let query = format!(
            r#"{{ roomGroups(propertyId: "{}") {{ name }} }}"#,
            property::Id::new(),
        );

        let (_, errs) =
            juniper::execute(&query, None, &schema(), &Variables::new(), &ctx)
                .await
                .unwrap();

        assert_eq!(errs.len(), 1);
        assert_eq!(
            ctx.error_status_code(),
            http::StatusCode::NOT_FOUND,
        );
    }

    #[tokio::test]
    async fn rejects_negative_counts() {
        let (ctx, _, package_id) = context();
        let query = format!(
            r#"{{
                packageQuote(input: {{
                    packageId: "{package_id}"
                    startDate: "2026-12-01"
                    guests: -1
                }}) {{ __typename }}
            }}"#,
        );

        let (_, errs) =
            juniper::execute(&query, None, &schema(), &Variables::new(), &ctx)
                .await
                .unwrap();

        assert_eq!(errs.len(), 1);
        assert_eq!(
            ctx.error_status_code(),
            http::StatusCode::BAD_REQUEST,
        );
    }
}
