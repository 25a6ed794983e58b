//! [`RefreshCatalog`] [`Task`].

use std::{convert::Infallible, error::Error, time};

use common::operations::{By, Perform, Start};
use smart_default::SmartDefault;
use tokio::time::interval;
use tracerr::Traced;
use tracing as log;

use crate::{
    infra::{catalog, Catalog},
    Service,
};

use super::Task;

/// Configuration for [`RefreshCatalog`] [`Task`].
#[derive(Clone, Copy, Debug, SmartDefault)]
pub struct Config {
    /// Interval between [`Catalog`] reloads.
    ///
    /// Zero disables reloading.
    #[default(time::Duration::from_secs(5 * 60))]
    pub interval: time::Duration,
}

/// [`Task`] for periodic reloading of the [`Catalog`] snapshot.
#[derive(Clone, Copy, Debug)]
pub struct RefreshCatalog<S> {
    /// [`Config`] of this [`Task`].
    config: Config,

    /// [`Service`] instance.
    service: S,
}

impl<C> Task<Start<By<RefreshCatalog<Self>, Config>>> for Service<C>
where
    RefreshCatalog<Service<C>>: Task<Perform<()>, Ok = (), Err: Error>,
    Self: Clone,
{
    type Ok = ();
    type Err = Infallible;

    async fn execute(
        &self,
        Start(by): Start<By<RefreshCatalog<Self>, Config>>,
    ) -> Result<Self::Ok, Self::Err> {
        let config = by.into_inner();
        if config.interval.is_zero() {
            log::info!("`task::RefreshCatalog` is disabled");
            return Ok(());
        }
        let task = RefreshCatalog {
            config,
            service: self.clone(),
        };

        let mut interval = interval(task.config.interval);
        // First tick completes immediately, while the catalog is fresh.
        let _ = interval.tick().await;
        loop {
            let _ = interval.tick().await;
            _ = task.execute(Perform(())).await.map_err(|e| {
                log::error!("`task::RefreshCatalog` failed: {e}");
            });
        }
    }
}

impl<C> Task<Perform<()>> for RefreshCatalog<Service<C>>
where
    C: Catalog<Perform<catalog::Reload>, Ok = (), Err = Traced<catalog::Error>>,
{
    type Ok = ();
    type Err = ExecutionError;

    async fn execute(&self, _: Perform<()>) -> Result<Self::Ok, Self::Err> {
        self.service
            .catalog()
            .execute(Perform(catalog::Reload))
            .await
            .map_err(tracerr::wrap!())
    }
}

/// Error of [`RefreshCatalog`] execution.
pub type ExecutionError = Traced<catalog::Error>;

#[cfg(test)]
mod spec {
    use std::time;

    use common::{
        operations::{By, Perform, Start},
        Handler as _,
    };

    use crate::{
        infra::{catalog::Snapshot, InMemory},
        Config, Service,
    };

    use super::{Config as TaskConfig, RefreshCatalog};

    fn service(interval: time::Duration) -> Service<InMemory> {
        let config = Config {
            refresh_catalog: TaskConfig { interval },
            ..Config::default()
        };
        Service::new(config, InMemory::new(Snapshot::default())).0
    }

    #[tokio::test]
    async fn finishes_when_disabled() {
        let svc = service(time::Duration::ZERO);

        svc.execute(Start(By::<RefreshCatalog<_>, _>::new(
            svc.config().refresh_catalog,
        )))
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn performs_reload() {
        let svc = service(time::Duration::from_secs(60));
        let task = RefreshCatalog {
            config: svc.config().refresh_catalog,
            service: svc.clone(),
        };

        task.execute(Perform(())).await.unwrap();
    }
}
