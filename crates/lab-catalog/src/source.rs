//! Catalog lookups behind a trait, so sessions can run against any store.

use lab_core::{ExperimentId, ToolId};
use tracing::debug;

use crate::demo::demo_catalog;
use crate::schema::{CatalogDef, ExperimentDescriptor, Tool};
use crate::validate::validate_catalog;
use crate::{CatalogError, CatalogResult};

/// Read-only experiment/tool source.
pub trait Catalog {
    /// All experiments in catalog order.
    fn experiments(&self) -> CatalogResult<Vec<ExperimentDescriptor>>;

    /// One experiment; `CatalogError::NotFound` when the id is unknown.
    fn experiment(&self, id: ExperimentId) -> CatalogResult<ExperimentDescriptor>;

    /// Tools of one experiment. An unknown experiment yields an empty list.
    fn tools_for(&self, id: ExperimentId) -> CatalogResult<Vec<Tool>>;
}

/// In-memory catalog backed by a validated [`CatalogDef`].
#[derive(Debug, Clone)]
pub struct MemCatalog {
    def: CatalogDef,
}

impl MemCatalog {
    pub fn from_def(def: CatalogDef) -> CatalogResult<Self> {
        validate_catalog(&def)?;
        debug!(
            experiments = def.experiments.len(),
            tools = def.tools.len(),
            "catalog loaded"
        );
        Ok(Self { def })
    }

    pub fn demo() -> CatalogResult<Self> {
        Self::from_def(demo_catalog()?)
    }

    pub fn def(&self) -> &CatalogDef {
        &self.def
    }

    pub fn tool(&self, id: ToolId) -> Option<&Tool> {
        self.def.tools.iter().find(|t| t.id == id)
    }
}

impl Catalog for MemCatalog {
    fn experiments(&self) -> CatalogResult<Vec<ExperimentDescriptor>> {
        Ok(self.def.experiments.clone())
    }

    fn experiment(&self, id: ExperimentId) -> CatalogResult<ExperimentDescriptor> {
        self.def
            .experiment(id)
            .cloned()
            .ok_or(CatalogError::NotFound { experiment: id })
    }

    fn tools_for(&self, id: ExperimentId) -> CatalogResult<Vec<Tool>> {
        Ok(self.def.tools_for(id).cloned().collect())
    }
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn experiments(&self) -> CatalogResult<Vec<ExperimentDescriptor>> {
        (**self).experiments()
    }

    fn experiment(&self, id: ExperimentId) -> CatalogResult<ExperimentDescriptor> {
        (**self).experiment(id)
    }

    fn tools_for(&self, id: ExperimentId) -> CatalogResult<Vec<Tool>> {
        (**self).tools_for(id)
    }
}
