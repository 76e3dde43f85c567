// ABOUTME: The autocomplete controller event loop tying debounce, fetch, and state together
// ABOUTME: Owns SuggestState exclusively; one task serializes every transition

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use typeahead_events::{DiscardReason, InputEvent, Key, RequestId, SourceError};
use typeahead_logging::{debug, info, instrument, warn};
use typeahead_types::{Candidate, RenderFrame, RenderUpdate};

use crate::debounce::{DebounceConfig, Debouncer};
use crate::projection::project;
use crate::source::MatchSource;
use crate::state::SuggestState;

/// Controller tuning knobs.
#[derive(Debug, Clone, Copy)]
pub struct ControllerConfig {
    pub debounce: DebounceConfig,
    /// Capacity of the channels between UI, controller, and fetch tasks.
    pub channel_capacity: usize,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            debounce: DebounceConfig::default(),
            channel_capacity: 32,
        }
    }
}

/// Cloneable sender half handed to the UI collaborator.
///
/// All three input streams (text changes, key presses, pointer presses) feed
/// through here into the controller task.
#[derive(Clone)]
pub struct ControllerHandle {
    events_tx: mpsc::Sender<InputEvent>,
}

impl ControllerHandle {
    /// Forward an input event. Returns false once the controller has stopped.
    pub async fn send(&self, event: InputEvent) -> bool {
        self.events_tx.send(event).await.is_ok()
    }

    pub async fn text_changed(&self, value: impl Into<String>) -> bool {
        self.send(InputEvent::TextChanged(value.into())).await
    }

    pub async fn key(&self, key: Key) -> bool {
        self.send(InputEvent::Key(key)).await
    }

    pub async fn pointer(&self, row: Option<usize>) -> bool {
        self.send(InputEvent::Pointer { row }).await
    }
}

/// Result of one spawned fetch, reported back to the controller task.
struct FetchOutcome {
    request: RequestId,
    query: String,
    result: Result<Vec<Candidate>, SourceError>,
}

/// The autocomplete controller.
///
/// Single-threaded and event-driven: one tokio task owns the state and
/// reacts to input events, debounce firings, and fetch outcomes; no
/// transition blocks. Fetches run in spawned tasks and report back over a
/// channel, tagged with a monotonically increasing [`RequestId`] so an
/// out-of-order response for a superseded query can never clobber state.
pub struct Controller {
    state: SuggestState,
    source: Arc<dyn MatchSource>,
    /// The controller's view of the field text: updated by change events and
    /// by its own field overrides. Needed to compute the ghost overlay.
    field_value: String,
    latest: RequestId,
    events_rx: mpsc::Receiver<InputEvent>,
    updates_tx: mpsc::Sender<RenderUpdate>,
    debouncer: Debouncer<String>,
    settled_rx: mpsc::Receiver<String>,
    outcome_tx: mpsc::Sender<FetchOutcome>,
    outcome_rx: mpsc::Receiver<FetchOutcome>,
}

impl Controller {
    /// Build a controller bound to `source`. Returns the controller itself,
    /// the handle the UI feeds events into, and the stream of render updates
    /// the UI paints from.
    pub fn new(
        source: Arc<dyn MatchSource>,
        config: ControllerConfig,
    ) -> (Self, ControllerHandle, mpsc::Receiver<RenderUpdate>) {
        let (events_tx, events_rx) = mpsc::channel(config.channel_capacity);
        let (updates_tx, updates_rx) = mpsc::channel(config.channel_capacity);
        let (settled_tx, settled_rx) = mpsc::channel(config.channel_capacity);
        let (outcome_tx, outcome_rx) = mpsc::channel(config.channel_capacity);

        let controller = Self {
            state: SuggestState::new(),
            source,
            field_value: String::new(),
            latest: RequestId::default(),
            events_rx,
            updates_tx,
            debouncer: Debouncer::new(config.debounce, settled_tx),
            settled_rx,
            outcome_tx,
            outcome_rx,
        };

        (controller, ControllerHandle { events_tx }, updates_rx)
    }

    /// Build and spawn the run loop on the current runtime.
    pub fn spawn(
        source: Arc<dyn MatchSource>,
        config: ControllerConfig,
    ) -> (ControllerHandle, mpsc::Receiver<RenderUpdate>, JoinHandle<()>) {
        let (controller, handle, updates_rx) = Self::new(source, config);
        let task = tokio::spawn(controller.run());
        (handle, updates_rx, task)
    }

    /// Main event loop. Runs until the input stream closes.
    #[instrument(skip(self))]
    pub async fn run(mut self) {
        info!("typeahead controller started");

        loop {
            tokio::select! {
                maybe_event = self.events_rx.recv() => match maybe_event {
                    Some(event) => self.handle_input(event).await,
                    None => break,
                },
                Some(query) = self.settled_rx.recv() => self.value_changed(query).await,
                Some(outcome) = self.outcome_rx.recv() => self.apply_outcome(outcome).await,
            }
        }

        info!("typeahead controller stopped; input stream closed");
    }

    async fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::TextChanged(value) => {
                debug!(value = %value, "field text changed");
                self.field_value = value.clone();
                // The ghost hides as soon as the text moves; the list stays
                // until the debounced transition decides what replaces it.
                self.state.clear_ghost();
                self.debouncer.call(value);
                self.emit(RenderUpdate::new(self.frame())).await;
            }
            InputEvent::Key(key) => self.handle_key(key).await,
            InputEvent::Pointer { row } => self.handle_pointer(row).await,
        }
    }

    /// Debounce-settled value change: record the edit, reset on empty text,
    /// otherwise issue a tagged fetch.
    async fn value_changed(&mut self, query: String) {
        self.state.begin_edit(&query);

        if query.is_empty() {
            debug!("empty query; resetting without fetch");
            self.state.reset();
            self.emit(RenderUpdate::new(self.frame())).await;
            return;
        }

        self.latest = self.latest.next();
        let request = self.latest;
        let source = Arc::clone(&self.source);
        let outcome_tx = self.outcome_tx.clone();

        debug!(
            request_id = request.as_u64(),
            query = %query,
            "issuing match request"
        );

        tokio::spawn(async move {
            let result = source.fetch(&query).await;
            let _ = outcome_tx
                .send(FetchOutcome {
                    request,
                    query,
                    result,
                })
                .await;
        });
    }

    async fn apply_outcome(&mut self, outcome: FetchOutcome) {
        if outcome.request != self.latest {
            debug!(
                request_id = outcome.request.as_u64(),
                latest_id = self.latest.as_u64(),
                reason = ?DiscardReason::Superseded,
                "discarding fetch outcome"
            );
            return;
        }

        match outcome.result {
            Ok(matches) => {
                info!(
                    request_id = outcome.request.as_u64(),
                    query = %outcome.query,
                    match_count = matches.len(),
                    "applying fetch response"
                );
                self.state.apply_matches(matches);
                self.emit(RenderUpdate::new(self.frame())).await;
            }
            Err(error) => {
                warn!(
                    request_id = outcome.request.as_u64(),
                    query = %outcome.query,
                    error = %error,
                    reason = ?DiscardReason::SourceFailed,
                    "match request failed; state left untouched"
                );
            }
        }
    }

    async fn handle_key(&mut self, key: Key) {
        match key {
            Key::Tab => {
                let committed = self.state.best_candidate().map(|c| c.name.clone());
                let suppress = committed.is_some();
                if let Some(name) = &committed {
                    debug!(value = %name, "tab-accepting ghost completion");
                    self.field_value = name.clone();
                }
                self.state.reset();
                let mut update = RenderUpdate::new(self.frame());
                update.field_override = committed;
                update.suppress_default = suppress;
                self.emit(update).await;
            }
            Key::Enter => {
                // Whatever the field shows (typed text, or a candidate
                // previewed during navigation) is kept; the menu just closes.
                self.state.reset();
                self.emit(RenderUpdate::new(self.frame())).await;
            }
            Key::Escape => {
                let restored = self.state.previous_value.clone();
                if let Some(value) = &restored {
                    debug!(value = %value, "escape; reverting field to pre-edit value");
                    self.field_value = value.clone();
                }
                self.state.reset();
                let mut update = RenderUpdate::new(self.frame());
                update.field_override = restored;
                self.emit(update).await;
            }
            Key::ArrowDown | Key::ArrowUp => {
                if key == Key::ArrowDown {
                    self.state.select_next();
                } else {
                    self.state.select_prev();
                }
                // Moving the highlight previews that candidate in the field
                // without closing the menu.
                let preview = self.state.selected_candidate().map(|c| c.name.clone());
                if let Some(name) = &preview {
                    self.field_value = name.clone();
                }
                let mut update = RenderUpdate::new(self.frame());
                update.field_override = preview;
                update.suppress_default = true;
                self.emit(update).await;
            }
            Key::Other => {}
        }
    }

    async fn handle_pointer(&mut self, row: Option<usize>) {
        // A press that does not land on a candidate row is a no-op.
        let Some(index) = row else { return };
        let Some(name) = self.state.matches.get(index).map(|c| c.name.clone()) else {
            return;
        };

        debug!(row = index, value = %name, "pointer-accepting candidate");
        self.field_value = name.clone();
        self.state.reset();
        let mut update = RenderUpdate::new(self.frame());
        update.field_override = Some(name);
        update.suppress_default = true;
        self.emit(update).await;
    }

    fn frame(&self) -> RenderFrame {
        project(&self.state, &self.field_value)
    }

    async fn emit(&self, update: RenderUpdate) {
        if self.updates_tx.send(update).await.is_err() {
            warn!("render update receiver dropped");
        }
    }
}
