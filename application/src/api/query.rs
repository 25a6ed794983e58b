//! GraphQL [`Query`]s definitions.

use juniper::graphql_object;
use service::{
    query::{self, package_quote, stay_quote},
    Query as _,
};

use crate::{
    api::{
        self,
        quote::{
            PackageError, PackageQuoteResult, PropertyError, QuoteRejection,
            StayQuoteResult,
        },
    },
    AsError, Context, Error,
};

/// Root of all GraphQL queries.
#[derive(Clone, Copy, Debug)]
pub struct Query;

impl Query {
    /// Name of the [`tracing::Span`] for the queries.
    pub(crate) const SPAN_NAME: &'static str = "GraphQL query";
}

#[graphql_object(context = Context)]
impl Query {
    /// Returns the `Property` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `PROPERTY_NOT_EXISTS` - the `Property` with the specified ID does
    ///                           not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "property",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn property(
        id: api::property::Id,
        ctx: &Context,
    ) -> Result<api::Property, Error> {
        ctx.service()
            .execute(query::property::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| PropertyError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Returns the `RoomGroup`s of the `Property` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `PROPERTY_NOT_EXISTS` - the `Property` with the specified ID does
    ///                           not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "roomGroups",
            otel.name = Self::SPAN_NAME,
            property_id = %property_id,
        ),
    )]
    pub async fn room_groups(
        property_id: api::property::Id,
        ctx: &Context,
    ) -> Result<Vec<api::RoomGroup>, Error> {
        ctx.service()
            .execute(query::RoomGroups::by(property_id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())
            .map(|groups| groups.into_iter().map(Into::into).collect())
    }

    /// Returns the `Package` with the specified ID.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `PACKAGE_NOT_EXISTS` - the `Package` with the specified ID does not
    ///                          exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "package",
            id = %id,
            otel.name = Self::SPAN_NAME,
        ),
    )]
    pub async fn package(
        id: api::package::Id,
        ctx: &Context,
    ) -> Result<api::Package, Error> {
        ctx.service()
            .execute(query::package::ById::by(id.into()))
            .await
            .map_err(AsError::into_error)
            .map_err(ctx.error())?
            .ok_or_else(|| PackageError::NotExists.into())
            .map_err(ctx.error())
            .map(Into::into)
    }

    /// Quotes a stay at a `Property`.
    ///
    /// Selections which cannot be quoted resolve into a `QuoteRejection`
    /// listing all the reasons at once.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `NEGATIVE_COUNT` - a quantity or a guest count is negative;
    /// - `AMOUNT_TOO_LARGE` - an add-on unit price exceeds the accepted
    ///                        maximum;
    /// - `PROPERTY_NOT_EXISTS` - the `Property` with the specified ID does
    ///                           not exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "stayQuote",
            otel.name = Self::SPAN_NAME,
            property_id = %input.property_id,
        ),
    )]
    pub async fn stay_quote(
        input: api::quote::StayQuoteInput,
        ctx: &Context,
    ) -> Result<StayQuoteResult, Error> {
        let query = input.into_query(ctx.today()).map_err(ctx.error())?;
        let e = match ctx.service().execute(query).await {
            Ok(quote) => return Ok(api::quote::StayQuote::from(quote).into()),
            Err(e) => e,
        };
        if let stay_quote::ExecutionError::Rejected(violations) = e.as_ref() {
            return Ok(QuoteRejection::from(violations).into());
        }
        Err(ctx.error()(e.into_error()))
    }

    /// Quotes a `Package`.
    ///
    /// Selections which cannot be quoted resolve into a `QuoteRejection`
    /// listing all the reasons at once.
    ///
    /// # Errors
    ///
    /// Possible error codes:
    /// - `NEGATIVE_COUNT` - the guest count or a quantity is negative;
    /// - `AMOUNT_TOO_LARGE` - an add-on unit price exceeds the accepted
    ///                        maximum;
    /// - `PACKAGE_NOT_EXISTS` - the `Package` with the specified ID does not
    ///                          exist.
    #[tracing::instrument(
        skip_all,
        fields(
            gql.name = "packageQuote",
            otel.name = Self::SPAN_NAME,
            package_id = ?input.package_id.map(|id| id.to_string()),
        ),
    )]
    pub async fn package_quote(
        input: api::quote::PackageQuoteInput,
        ctx: &Context,
    ) -> Result<PackageQuoteResult, Error> {
        let query = input.into_query(ctx.today()).map_err(ctx.error())?;
        let e = match ctx.service().execute(query).await {
            Ok(quote) => return Ok(api::quote::PackageQuote::from(quote).into()),
            Err(e) => e,
        };
        if let package_quote::ExecutionError::Rejected(violations) = e.as_ref() {
            return Ok(QuoteRejection::from(violations).into());
        }
        Err(ctx.error()(e.into_error()))
    }
}
