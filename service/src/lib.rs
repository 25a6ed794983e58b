//! Service contains the business logic of the application.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod domain;
pub mod infra;
pub mod query;
pub mod task;

use std::error::Error;

use common::operations::{By, Start};

use crate::domain::quote;
#[cfg(doc)]
use crate::infra::Catalog;

pub use self::{query::Query, task::Task};

/// [`Service`] configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    /// Rates applied to quote subtotals.
    pub pricing: quote::Pricing,

    /// Parameters of quote payment schedules.
    pub payment: quote::Policy,

    /// [`task::RefreshCatalog`] configuration.
    pub refresh_catalog: task::refresh_catalog::Config,
}

/// Domain service.
#[derive(Clone, Debug)]
pub struct Service<C> {
    /// Configuration of this [`Service`].
    config: Config,

    /// [`Catalog`] of this [`Service`].
    catalog: C,
}

impl<C> Service<C> {
    /// Creates a new [`Service`] with the provided parameters.
    pub fn new(config: Config, catalog: C) -> (Self, task::Background)
    where
        Self: Task<
                Start<
                    By<
                        task::RefreshCatalog<Self>,
                        task::refresh_catalog::Config,
                    >,
                >,
                Ok = (),
                Err: Error,
            > + Clone
            + 'static,
    {
        let this = Service { config, catalog };

        let mut bg = task::Background::default();
        let svc = this.clone();
        bg.spawn("refresh_catalog", async move {
            svc.execute(Start(By::new(svc.config().refresh_catalog)))
                .await
        });

        (this, bg)
    }

    /// Returns [`Config`] of this [`Service`].
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns [`Catalog`] of this [`Service`].
    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }
}
