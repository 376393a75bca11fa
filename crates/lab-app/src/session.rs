//! Navigation between the experiment list and one experiment's workspace.

use std::time::Instant;

use lab_catalog::{Catalog, ExperimentDescriptor};
use lab_core::ExperimentId;
use lab_sim::{LatestResult, RunRecord, SimulationResult};
use tracing::{info, warn};

use crate::config::LabConfig;
use crate::workspace::Workspace;

pub const EXPERIMENTS_LOAD_ERROR: &str =
    "There was an error loading the experiments. Please try again later.";
pub const EXPERIMENT_LOAD_ERROR: &str =
    "There was an error loading the experiment. Please try again later.";

/// What the session is showing.
#[derive(Debug, Default)]
pub enum ViewState {
    #[default]
    Home,
    Browsing {
        experiments: Vec<ExperimentDescriptor>,
    },
    Experiment(Box<Workspace>),
    /// Display only; navigating again is the only way out.
    Error {
        message: String,
    },
}

#[derive(Debug)]
pub struct LabSession<C: Catalog> {
    catalog: C,
    config: LabConfig,
    view: ViewState,
    latest: LatestResult,
}

impl<C: Catalog> LabSession<C> {
    pub fn new(catalog: C, config: LabConfig) -> Self {
        Self {
            catalog,
            config,
            view: ViewState::Home,
            latest: LatestResult::new(),
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn config(&self) -> &LabConfig {
        &self.config
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Show the experiment list.
    pub fn home(&mut self) -> &ViewState {
        let view = match self.catalog.experiments() {
            Ok(experiments) => ViewState::Browsing { experiments },
            Err(err) => {
                warn!(error = %err, "failed to load experiments");
                ViewState::Error {
                    message: EXPERIMENTS_LOAD_ERROR.to_string(),
                }
            }
        };
        self.show(view)
    }

    /// Open an experiment with an empty workspace.
    ///
    /// The previous workspace, its engine and the last result are dropped.
    pub fn open_experiment(&mut self, id: ExperimentId) -> &ViewState {
        let loaded = self
            .catalog
            .experiment(id)
            .and_then(|experiment| Ok((experiment, self.catalog.tools_for(id)?)));
        let view = match loaded {
            Ok((experiment, tools)) => {
                info!(experiment = %id, tools = tools.len(), "experiment opened");
                ViewState::Experiment(Box::new(Workspace::new(
                    experiment,
                    tools,
                    self.config.workspace,
                    self.config.run,
                )))
            }
            Err(err) => {
                warn!(experiment = %id, error = %err, "failed to load experiment");
                ViewState::Error {
                    message: EXPERIMENT_LOAD_ERROR.to_string(),
                }
            }
        };
        self.show(view)
    }

    fn show(&mut self, view: ViewState) -> &ViewState {
        self.latest.take();
        self.view = view;
        &self.view
    }

    pub fn workspace(&self) -> Option<&Workspace> {
        match &self.view {
            ViewState::Experiment(ws) => Some(&**ws),
            _ => None,
        }
    }

    pub fn workspace_mut(&mut self) -> Option<&mut Workspace> {
        match &mut self.view {
            ViewState::Experiment(ws) => Some(&mut **ws),
            _ => None,
        }
    }

    /// Deliver a due result of the open workspace into the results panel.
    pub fn poll(&mut self, now: Instant) -> Option<RunRecord> {
        let ViewState::Experiment(ws) = &mut self.view else {
            return None;
        };
        ws.poll(now, &mut self.latest)
    }

    pub fn latest_result(&self) -> Option<&SimulationResult> {
        self.latest.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lab_catalog::{CatalogError, CatalogResult, MemCatalog, Tool};
    use lab_core::ToolId;

    /// Experiment lookups always fail; listing fails on request.
    struct Flaky {
        inner: MemCatalog,
        fail_list: bool,
    }

    impl Catalog for Flaky {
        fn experiments(&self) -> CatalogResult<Vec<ExperimentDescriptor>> {
            if self.fail_list {
                return Err(CatalogError::Unavailable {
                    message: "offline".into(),
                });
            }
            self.inner.experiments()
        }

        fn experiment(&self, _id: ExperimentId) -> CatalogResult<ExperimentDescriptor> {
            Err(CatalogError::Unavailable {
                message: "offline".into(),
            })
        }

        fn tools_for(&self, id: ExperimentId) -> CatalogResult<Vec<Tool>> {
            self.inner.tools_for(id)
        }
    }

    fn demo_session() -> LabSession<MemCatalog> {
        LabSession::new(MemCatalog::demo().unwrap(), LabConfig::default())
    }

    #[test]
    fn starts_at_home() {
        let session = demo_session();
        assert!(matches!(session.view(), ViewState::Home));
        assert!(session.workspace().is_none());
    }

    #[test]
    fn home_lists_experiments() {
        let mut session = demo_session();
        let ViewState::Browsing { experiments } = session.home() else {
            panic!("expected experiment list");
        };
        assert_eq!(experiments.len(), 3);
    }

    #[test]
    fn open_gives_empty_workspace() {
        let mut session = demo_session();
        session.open_experiment(ExperimentId(2));
        let ws = session.workspace().unwrap();
        assert_eq!(ws.experiment().title, "Free Fall Motion");
        assert!(ws.components().is_empty());
        assert_eq!(ws.tools().len(), 6);
    }

    #[test]
    fn unknown_experiment_is_error_view() {
        let mut session = demo_session();
        let view = session.open_experiment(ExperimentId(99));
        assert!(matches!(
            view,
            ViewState::Error { message } if message == EXPERIMENT_LOAD_ERROR
        ));
    }

    #[test]
    fn failing_catalog_is_error_view() {
        let mut session = LabSession::new(
            Flaky {
                inner: MemCatalog::demo().unwrap(),
                fail_list: true,
            },
            LabConfig::default(),
        );
        assert!(matches!(
            session.home(),
            ViewState::Error { message } if message == EXPERIMENTS_LOAD_ERROR
        ));

        session.catalog = Flaky {
            inner: MemCatalog::demo().unwrap(),
            fail_list: false,
        };
        assert!(matches!(session.home(), ViewState::Browsing { .. }));
        assert!(matches!(
            session.open_experiment(ExperimentId(1)),
            ViewState::Error { .. }
        ));
    }

    #[test]
    fn navigating_away_drops_workspace() {
        let mut session = demo_session();
        session.open_experiment(ExperimentId(1));
        session
            .workspace_mut()
            .unwrap()
            .place(ToolId(1), 100.0, 100.0)
            .unwrap();

        session.open_experiment(ExperimentId(1));
        assert!(session.workspace().unwrap().components().is_empty());

        session.home();
        assert!(session.workspace().is_none());
        assert!(session.poll(Instant::now()).is_none());
    }
}
