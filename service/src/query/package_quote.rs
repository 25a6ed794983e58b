//! [`PackageQuote`] [`Query`].

use common::{
    operations::{By, Select},
    Date,
};
use derive_more::{Display, Error, From};
use tracerr::Traced;

use crate::{
    domain::{
        amenity, package,
        quote::{
            self, PackageSelection, PaymentTerm, StartDate, Violations,
        },
        Package,
    },
    infra::{catalog, Catalog},
    Query, Service,
};

/// [`Query`] for quoting a [`Package`].
#[derive(Clone, Debug)]
pub struct PackageQuote {
    /// ID of the chosen [`Package`].
    pub package_id: Option<package::Id>,

    /// First day of the [`Package`].
    pub start_date: Option<StartDate>,

    /// Number of guests the [`Package`] is booked for.
    pub guests: u32,

    /// Selected add-ons.
    pub amenities: Vec<amenity::Selection>,

    /// Selected [`PaymentTerm`].
    pub term: PaymentTerm,

    /// Current date the payment schedule is computed relative to.
    pub today: Date,
}

/// Output of the [`PackageQuote`] [`Query`].
pub type Output = quote::PackageQuote;

impl<C> Query<PackageQuote> for Service<C>
where
    C: Catalog<
        Select<By<Option<Package>, package::Id>>,
        Ok = Option<Package>,
        Err = Traced<catalog::Error>,
    >,
{
    type Ok = Output;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        query: PackageQuote,
    ) -> Result<Self::Ok, Self::Err> {
        use ExecutionError as E;

        let PackageQuote {
            package_id,
            start_date,
            guests,
            amenities,
            term,
            today,
        } = query;

        let package = match package_id {
            Some(id) => Some(
                self.catalog()
                    .execute(Select(By::new(id)))
                    .await
                    .map_err(tracerr::map_from_and_wrap!(=> E))?
                    .ok_or(E::PackageNotExists(id))
                    .map_err(tracerr::wrap!())?,
            ),
            None => None,
        };

        let selection = PackageSelection {
            package,
            start_date,
            guests,
            amenities,
            term,
        };
        selection
            .quote(today, &self.config().pricing, &self.config().payment)
            .map_err(E::Rejected)
            .map_err(tracerr::wrap!())
    }
}

/// Error of [`PackageQuote`] [`Query`] execution.
#[derive(Debug, Display, Error, From)]
pub enum ExecutionError {
    /// [`Catalog`] error.
    #[display("`Catalog` operation failed: {_0}")]
    #[from]
    Catalog(catalog::Error),

    /// [`Package`] with the provided ID does not exist.
    #[display("`Package(id: {_0})` does not exist")]
    PackageNotExists(#[error(not(source))] package::Id),

    /// Selection cannot be quoted.
    #[display("package cannot be quoted: {_0}")]
    Rejected(Violations),
}

#[cfg(test)]
mod spec {
    use common::{Date, Handler as _, Money};

    use crate::{
        domain::{
            package,
            quote::{
                violation::{EmptySelection, InvalidDateRange},
                PaymentTerm, Violation, Warning,
            },
            Package,
        },
        infra::{catalog::Snapshot, InMemory},
        Config, Service,
    };

    use super::{ExecutionError, PackageQuote};

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn service(duration: &str) -> (Service<InMemory>, package::Id) {
        let package = Package {
            id: package::Id::new(),
            name: package::Name::new("Serengeti Explorer").unwrap(),
            price: Money::whole(2000),
            duration: duration.into(),
        };
        let id = package.id;
        let catalog = InMemory::new(Snapshot {
            properties: vec![],
            packages: vec![package],
        });
        (Service::new(Config::default(), catalog).0, id)
    }

    fn query(package_id: package::Id, today: Date) -> PackageQuote {
        PackageQuote {
            package_id: Some(package_id),
            start_date: Some(today.add_days(60).coerce()),
            guests: 2,
            amenities: vec![],
            term: PaymentTerm::Full,
            today,
        }
    }

    #[tokio::test]
    async fn quotes_package() {
        let (svc, package_id) = service("7 Days / 6 Nights");
        let today = date("2026-10-16");

        let quote = svc.execute(query(package_id, today)).await.unwrap();

        assert_eq!(quote.breakdown.base_price, Money::whole(4000));
        assert_eq!(quote.breakdown.total, Money::whole(4880));
        assert_eq!(quote.amount_due_now, Money::whole(4880));
        assert_eq!(quote.days, 7);
        assert_eq!(quote.end_date.coerce::<()>(), today.add_days(66));
        assert!(quote.warning.is_none());
    }

    #[tokio::test]
    async fn warns_about_unparseable_duration() {
        let (svc, package_id) = service("Half Board");

        let quote = svc
            .execute(query(package_id, date("2026-10-16")))
            .await
            .unwrap();

        assert_eq!(quote.days, 1);
        assert!(matches!(
            quote.warning,
            Some(Warning::UnparseableDuration { assumed: 1, .. }),
        ));
    }

    #[tokio::test]
    async fn rejects_missing_package_and_start_date() {
        let (svc, _) = service("5 Days");

        let err = svc
            .execute(PackageQuote {
                package_id: None,
                start_date: None,
                ..query(package::Id::new(), date("2026-10-16"))
            })
            .await
            .unwrap_err();

        let ExecutionError::Rejected(violations) = err.as_ref() else {
            panic!("expected rejection, got: {err}");
        };
        assert_eq!(
            violations.as_slice(),
            [
                Violation::from(EmptySelection::NoPackage),
                Violation::from(InvalidDateRange::MissingStartDate),
            ],
        );
    }

    #[tokio::test]
    async fn fails_for_unknown_package() {
        let (svc, _) = service("5 Days");
        let id = package::Id::new();

        let err = svc
            .execute(query(id, date("2026-10-16")))
            .await
            .unwrap_err();

        assert!(matches!(
            err.as_ref(),
            ExecutionError::PackageNotExists(missing) if *missing == id,
        ));
    }
}
