//! In-memory [`Catalog`] implementation.

#[cfg(feature = "catalog-file")]
use std::path::{Path, PathBuf};
use std::sync::Arc;

use common::operations::{By, Perform, Select};
use tokio::sync::RwLock;
use tracerr::Traced;
use tracing as log;

use crate::domain::{package, property, Package, Property};

use super::{Catalog, Error, Reload, Snapshot};

/// [`Catalog`] keeping its [`Snapshot`] in memory, optionally backed by a
/// JSON file it's reloaded from.
#[derive(Clone, Debug, Default)]
pub struct InMemory {
    /// Current [`Snapshot`].
    snapshot: Arc<RwLock<Arc<Snapshot>>>,

    /// Path to the JSON file the [`Snapshot`] is reloaded from.
    #[cfg(feature = "catalog-file")]
    source: Option<Arc<Path>>,
}

impl InMemory {
    /// Creates a new [`InMemory`] [`Catalog`] holding the provided
    /// [`Snapshot`].
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(Arc::new(snapshot))),
            #[cfg(feature = "catalog-file")]
            source: None,
        }
    }

    /// Loads a new [`InMemory`] [`Catalog`] from the JSON file at the
    /// provided `path`, remembering it for further [`Reload`]s.
    ///
    /// # Errors
    ///
    /// If the file cannot be read or contains a malformed [`Snapshot`].
    #[cfg(feature = "catalog-file")]
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, Traced<Error>> {
        let path = Arc::<Path>::from(path.into());
        let snapshot = read_file(&path).await.map_err(tracerr::wrap!())?;
        Ok(Self {
            source: Some(path),
            ..Self::new(snapshot)
        })
    }

    /// Returns the current [`Snapshot`].
    pub async fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&*self.snapshot.read().await)
    }

    /// Replaces the current [`Snapshot`] with the provided one.
    pub async fn replace(&self, snapshot: Snapshot) {
        *self.snapshot.write().await = Arc::new(snapshot);
    }
}

/// Reads a [`Snapshot`] from the JSON file at the provided `path`.
#[cfg(feature = "catalog-file")]
async fn read_file(path: &Path) -> Result<Snapshot, Traced<Error>> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(tracerr::from_and_wrap!(=> Error))?;
    serde_json::from_slice(&bytes).map_err(tracerr::from_and_wrap!(=> Error))
}

impl Catalog<Select<By<Option<Property>, property::Id>>> for InMemory {
    type Ok = Option<Property>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Property>, property::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.snapshot().await.property(by.into_inner()).cloned())
    }
}

impl Catalog<Select<By<Option<Package>, package::Id>>> for InMemory {
    type Ok = Option<Package>;
    type Err = Traced<Error>;

    async fn execute(
        &self,
        Select(by): Select<By<Option<Package>, package::Id>>,
    ) -> Result<Self::Ok, Self::Err> {
        Ok(self.snapshot().await.package(by.into_inner()).cloned())
    }
}

impl Catalog<Perform<Reload>> for InMemory {
    type Ok = ();
    type Err = Traced<Error>;

    async fn execute(&self, _: Perform<Reload>) -> Result<Self::Ok, Self::Err> {
        #[cfg(feature = "catalog-file")]
        if let Some(path) = &self.source {
            let snapshot = read_file(path).await.map_err(tracerr::wrap!())?;
            log::debug!(
                path = %path.display(),
                properties = snapshot.properties.len(),
                packages = snapshot.packages.len(),
                "catalog reloaded"
            );
            self.replace(snapshot).await;
            return Ok(());
        }

        log::trace!("catalog has no source to be reloaded from");
        Ok(())
    }
}

#[cfg(test)]
mod spec {
    use common::{
        operations::{By, Perform, Select},
        Handler as _, Money,
    };

    use crate::domain::{package, property, Package, Property};

    use super::{InMemory, Reload, Snapshot};

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
    async fn selects_by_id() {
        let snapshot = snapshot();
        let property_id = snapshot.properties[0].id;
        let package_id = snapshot.packages[0].id;
        let catalog = InMemory::new(snapshot);

        let property = catalog
            .execute(Select(By::<Option<Property>, _>::new(property_id)))
            .await
            .unwrap();
        assert_eq!(property.map(|p| p.id), Some(property_id));

        let package = catalog
            .execute(Select(By::<Option<Package>, _>::new(package_id)))
            .await
            .unwrap();
        assert_eq!(package.map(|p| p.id), Some(package_id));

        let missing = catalog
            .execute(Select(By::<Option<Package>, _>::new(package::Id::new())))
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn replaces_snapshot_whole() {
        let catalog = InMemory::new(snapshot());
        let before = catalog.snapshot().await;

        catalog.replace(Snapshot::default()).await;

        assert_eq!(before.packages.len(), 1);
        assert!(catalog.snapshot().await.packages.is_empty());
    }

    #[tokio::test]
    async fn reloads_without_source_as_noop() {
        let catalog = InMemory::new(snapshot());

        catalog.execute(Perform(Reload)).await.unwrap();

        assert_eq!(catalog.snapshot().await.properties.len(), 1);
    }

    #[cfg(feature = "catalog-file")]
    #[tokio::test]
    async fn loads_and_reloads_from_file() {
        let path = std::env::temp_dir()
            .join(format!("catalog-{}.json", uuid::Uuid::new_v4()));
        std::fs::write(&path, serde_json::to_vec(&snapshot()).unwrap())
            .unwrap();

        let catalog = InMemory::load(&path).await.unwrap();
        assert_eq!(catalog.snapshot().await.packages.len(), 1);

        std::fs::write(&path, r#"{"packages": []}"#).unwrap();
        catalog.execute(Perform(Reload)).await.unwrap();
        assert!(catalog.snapshot().await.packages.is_empty());

        std::fs::write(&path, "not json").unwrap();
        assert!(catalog.execute(Perform(Reload)).await.is_err());
        assert!(catalog.snapshot().await.packages.is_empty());

        std::fs::remove_file(&path).unwrap();
    }
}
