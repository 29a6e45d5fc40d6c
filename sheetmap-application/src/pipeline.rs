use super::*;

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use usecases::RetryPolicy;

use crate::fetch_places::fetch_places;

/// Observable state of a [`Pipeline`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineState {
    pub is_loading: bool,
    /// The places of the last successful run.
    ///
    /// `None` until a run succeeds. Failed runs leave it untouched.
    pub places: Option<Vec<ResolvedPlace>>,
}

#[derive(Clone)]
pub struct Gateways {
    pub rows: Arc<dyn RowSourceGateway + Send + Sync>,
    pub geocoder: Arc<dyn GeoCodingGateway + Send + Sync>,
    pub pacer: Arc<dyn Pacer + Send + Sync>,
    pub session: Arc<dyn SessionStore + Send + Sync>,
    pub notify: Arc<dyn NotificationGateway + Send + Sync>,
}

/// Resolves submitted references and keeps the resulting places.
///
/// Runs are executed synchronously on the calling thread. The state
/// can be shared with other threads through [`Pipeline::state_handle`],
/// submissions from other threads are refused while a run is loading.
#[derive(Clone)]
pub struct Pipeline {
    gateways: Gateways,
    policy: RetryPolicy,
    state: Arc<RwLock<PipelineState>>,
}

impl Pipeline {
    pub fn new(gateways: Gateways, policy: RetryPolicy) -> Self {
        Self {
            gateways,
            policy,
            state: Default::default(),
        }
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> PipelineState {
        self.read_state().clone()
    }

    pub fn state_handle(&self) -> Arc<RwLock<PipelineState>> {
        Arc::clone(&self.state)
    }

    /// Replay the reference of the last successful run, if any.
    pub fn start_up(&self) -> Option<Result<Vec<ResolvedPlace>>> {
        let saved = match self.gateways.session.get(LAST_DATASET_REFERENCE_KEY) {
            Ok(saved) => saved?,
            Err(err) => {
                warn!("Unable to read the saved reference: {err:#}");
                return None;
            }
        };
        self.gateways
            .notify
            .notify(NotificationEvent::UsingSavedReference { reference: &saved });
        Some(self.submit(&saved))
    }

    /// Resolve all places of the referenced dataset.
    ///
    /// On success the reference is saved for the next session before the
    /// places replace the current ones. On failure the current places are
    /// kept. Empty input and submissions while loading are refused
    /// without any side effects.
    pub fn submit(&self, input: &str) -> Result<Vec<ResolvedPlace>> {
        let input = input.trim();
        if input.is_empty() {
            return Err(PipelineError::EmptyReference);
        }
        let _loading = self.begin_loading()?;
        info!("Loading location data of {input}");
        match self.run(input) {
            Ok((reference, places)) => {
                if let Err(err) = self
                    .gateways
                    .session
                    .set(LAST_DATASET_REFERENCE_KEY, reference.as_str())
                {
                    warn!("Unable to save reference {reference}: {err:#}");
                }
                self.write_state().places = Some(places.clone());
                info!("Loaded {} places of {reference}", places.len());
                self.gateways.notify.notify(NotificationEvent::Resolved {
                    reference: &reference,
                    places: &places,
                });
                Ok(places)
            }
            Err(err) => {
                info!("Loading location data of {input} failed");
                let message = err.to_string();
                self.gateways
                    .notify
                    .notify(NotificationEvent::Failed { message: &message });
                Err(err)
            }
        }
    }

    fn run(&self, input: &str) -> Result<(DatasetReference, Vec<ResolvedPlace>)> {
        let reference = input.parse::<DatasetReference>()?;
        let Gateways {
            rows,
            geocoder,
            pacer,
            ..
        } = &self.gateways;
        let places = fetch_places(
            rows.as_ref(),
            geocoder.as_ref(),
            pacer.as_ref(),
            &self.policy,
            &reference,
        )?;
        Ok((reference, places))
    }

    fn begin_loading(&self) -> Result<Loading<'_>> {
        let mut state = self.write_state();
        if state.is_loading {
            return Err(PipelineError::Busy);
        }
        state.is_loading = true;
        Ok(Loading(self))
    }

    fn read_state(&self) -> RwLockReadGuard<'_, PipelineState> {
        self.state.read().unwrap_or_else(|err| {
            error!("Pipeline state lock is poisoned: {err}");
            err.into_inner()
        })
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, PipelineState> {
        self.state.write().unwrap_or_else(|err| {
            error!("Pipeline state lock is poisoned: {err}");
            err.into_inner()
        })
    }
}

/// Resets the loading flag when a run ends, including by unwinding.
struct Loading<'a>(&'a Pipeline);

impl Drop for Loading<'_> {
    fn drop(&mut self) {
        self.0.write_state().is_loading = false;
    }
}
