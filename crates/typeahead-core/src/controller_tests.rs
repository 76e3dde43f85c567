// ABOUTME: End-to-end tests for the controller event loop with a scripted match source
// ABOUTME: Uses tokio's paused clock to drive debounce and fetch timing deterministically

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::time::{advance, timeout};
use typeahead_events::{Key, SourceError};
use typeahead_types::{Candidate, RenderFrame, RenderUpdate};

use crate::controller::{Controller, ControllerConfig, ControllerHandle};
use crate::source::MatchSource;

#[derive(Clone)]
struct ScriptedResponse {
    latency: Duration,
    result: Result<Vec<Candidate>, SourceError>,
}

/// Match source test double: canned responses per query, optional per-call
/// latency, and a record of every query it was asked for.
#[derive(Default)]
struct ScriptedSource {
    responses: HashMap<String, ScriptedResponse>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedSource {
    fn new() -> Self {
        Self::default()
    }

    fn respond(self, query: &str, names: &[&str]) -> Self {
        self.respond_after(query, names, Duration::ZERO)
    }

    fn respond_after(mut self, query: &str, names: &[&str], latency: Duration) -> Self {
        self.responses.insert(
            query.to_string(),
            ScriptedResponse {
                latency,
                result: Ok(names.iter().map(|name| Candidate::new(*name)).collect()),
            },
        );
        self
    }

    fn fail(mut self, query: &str, error: SourceError) -> Self {
        self.responses.insert(
            query.to_string(),
            ScriptedResponse {
                latency: Duration::ZERO,
                result: Err(error),
            },
        );
        self
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MatchSource for ScriptedSource {
    async fn fetch(&self, query: &str) -> Result<Vec<Candidate>, SourceError> {
        self.calls.lock().unwrap().push(query.to_string());
        let response = self.responses.get(query).cloned().unwrap_or(ScriptedResponse {
            latency: Duration::ZERO,
            result: Ok(Vec::new()),
        });
        if !response.latency.is_zero() {
            tokio::time::sleep(response.latency).await;
        }
        response.result
    }
}

fn start(
    source: ScriptedSource,
) -> (
    Arc<ScriptedSource>,
    ControllerHandle,
    mpsc::Receiver<RenderUpdate>,
) {
    let source = Arc::new(source);
    let (controller, handle, updates) = Controller::new(
        source.clone() as Arc<dyn MatchSource>,
        ControllerConfig::default(),
    );
    tokio::spawn(controller.run());
    (source, handle, updates)
}

async fn next_update(updates: &mut mpsc::Receiver<RenderUpdate>) -> RenderUpdate {
    timeout(Duration::from_secs(5), updates.recv())
        .await
        .expect("timed out waiting for a render update")
        .expect("controller dropped its update sender")
}

async fn no_update(updates: &mut mpsc::Receiver<RenderUpdate>) {
    let extra = timeout(Duration::from_secs(1), updates.recv()).await;
    assert!(extra.is_err(), "unexpected render update: {extra:?}");
}

/// Let the controller task and any spawned fetches get polled.
async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

/// Type a query and drain the two updates it produces (immediate ghost
/// clear, then the applied fetch response), returning the second.
async fn type_and_fetch(
    handle: &ControllerHandle,
    updates: &mut mpsc::Receiver<RenderUpdate>,
    text: &str,
) -> RenderUpdate {
    assert!(handle.text_changed(text).await);
    next_update(updates).await;
    next_update(updates).await
}

#[tokio::test(start_paused = true)]
async fn test_fetch_populates_list_and_ghost() {
    let (_source, handle, mut updates) =
        start(ScriptedSource::new().respond("ap", &["apple", "apricot"]));

    assert!(handle.text_changed("ap").await);

    // Immediate ghost clear while the debounce runs; nothing fetched yet.
    let cleared = next_update(&mut updates).await;
    assert!(!cleared.frame.visible);

    let shown = next_update(&mut updates).await;
    assert!(shown.frame.visible);
    assert_eq!(shown.frame.items, vec!["apple", "apricot"]);
    assert_eq!(shown.frame.highlighted, None);
    assert_eq!(shown.frame.overlay, "apple");
    assert_eq!(shown.field_override, None);
    assert!(!shown.suppress_default);
}

#[tokio::test(start_paused = true)]
async fn test_rapid_typing_debounces_to_one_fetch() {
    let (source, handle, mut updates) =
        start(ScriptedSource::new().respond("apr", &["apricot"]));

    assert!(handle.text_changed("a").await);
    settle().await;
    advance(Duration::from_millis(50)).await;
    assert!(handle.text_changed("ap").await);
    settle().await;
    advance(Duration::from_millis(50)).await;
    assert!(handle.text_changed("apr").await);
    settle().await;

    // One ghost-clear update per change event.
    for _ in 0..3 {
        next_update(&mut updates).await;
    }

    let shown = next_update(&mut updates).await;
    assert_eq!(shown.frame.items, vec!["apricot"]);
    assert_eq!(source.calls(), vec!["apr"]);
}

#[tokio::test(start_paused = true)]
async fn test_empty_text_resets_without_fetch() {
    let (source, handle, mut updates) = start(ScriptedSource::new());

    assert!(handle.text_changed("").await);
    next_update(&mut updates).await; // ghost clear

    let reset = next_update(&mut updates).await; // debounced reset
    assert_eq!(reset.frame, RenderFrame::hidden());
    assert_eq!(reset.field_override, None);
    assert!(source.calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_tab_commits_ghost_and_resets() {
    let (_source, handle, mut updates) =
        start(ScriptedSource::new().respond("ap", &["apple", "apricot"]));
    type_and_fetch(&handle, &mut updates, "ap").await;

    assert!(handle.key(Key::Tab).await);
    let update = next_update(&mut updates).await;
    assert_eq!(update.field_override.as_deref(), Some("apple"));
    assert!(update.suppress_default);
    assert_eq!(update.frame, RenderFrame::hidden());
}

#[tokio::test(start_paused = true)]
async fn test_tab_without_ghost_only_resets() {
    let (_source, handle, mut updates) = start(ScriptedSource::new());

    assert!(handle.key(Key::Tab).await);
    let update = next_update(&mut updates).await;
    assert_eq!(update.field_override, None);
    // Default focus-advance must proceed when nothing was committed.
    assert!(!update.suppress_default);
    assert_eq!(update.frame, RenderFrame::hidden());
}

#[tokio::test(start_paused = true)]
async fn test_navigation_previews_candidates() {
    let (_source, handle, mut updates) =
        start(ScriptedSource::new().respond("ap", &["apple", "apricot"]));
    type_and_fetch(&handle, &mut updates, "ap").await;

    assert!(handle.key(Key::ArrowDown).await);
    let down = next_update(&mut updates).await;
    assert_eq!(down.frame.highlighted, Some(0));
    assert_eq!(down.field_override.as_deref(), Some("apple"));
    assert!(down.suppress_default);
    // Manual navigation supersedes the ghost.
    assert_eq!(down.frame.overlay, "");

    assert!(handle.key(Key::ArrowUp).await);
    let up = next_update(&mut updates).await;
    assert_eq!(up.frame.highlighted, Some(1));
    assert_eq!(up.field_override.as_deref(), Some("apricot"));
}

#[tokio::test(start_paused = true)]
async fn test_escape_restores_pre_edit_value_after_preview() {
    let (_source, handle, mut updates) =
        start(ScriptedSource::new().respond("ap", &["apple", "apricot"]));
    type_and_fetch(&handle, &mut updates, "ap").await;

    assert!(handle.key(Key::ArrowDown).await);
    next_update(&mut updates).await;
    assert!(handle.key(Key::ArrowDown).await);
    let previewed = next_update(&mut updates).await;
    assert_eq!(previewed.field_override.as_deref(), Some("apricot"));

    assert!(handle.key(Key::Escape).await);
    let reverted = next_update(&mut updates).await;
    assert_eq!(reverted.field_override.as_deref(), Some("ap"));
    assert_eq!(reverted.frame, RenderFrame::hidden());
}

#[tokio::test(start_paused = true)]
async fn test_enter_closes_menu_keeping_field() {
    let (_source, handle, mut updates) =
        start(ScriptedSource::new().respond("ap", &["apple", "apricot"]));
    type_and_fetch(&handle, &mut updates, "ap").await;

    assert!(handle.key(Key::ArrowDown).await);
    next_update(&mut updates).await;

    assert!(handle.key(Key::Enter).await);
    let update = next_update(&mut updates).await;
    assert_eq!(update.frame, RenderFrame::hidden());
    assert_eq!(update.field_override, None);
    assert!(!update.suppress_default);
}

#[tokio::test(start_paused = true)]
async fn test_arrows_with_no_matches_keep_selection_empty() {
    let (_source, handle, mut updates) = start(ScriptedSource::new());

    assert!(handle.key(Key::ArrowDown).await);
    let update = next_update(&mut updates).await;
    assert_eq!(update.frame.highlighted, None);
    assert_eq!(update.field_override, None);
    assert!(update.suppress_default);
}

#[tokio::test(start_paused = true)]
async fn test_pointer_press_commits_row() {
    let (_source, handle, mut updates) =
        start(ScriptedSource::new().respond("ap", &["apple", "apricot"]));
    type_and_fetch(&handle, &mut updates, "ap").await;

    assert!(handle.pointer(Some(1)).await);
    let update = next_update(&mut updates).await;
    assert_eq!(update.field_override.as_deref(), Some("apricot"));
    assert!(update.suppress_default);
    assert_eq!(update.frame, RenderFrame::hidden());
}

#[tokio::test(start_paused = true)]
async fn test_pointer_press_off_rows_is_ignored() {
    let (_source, handle, mut updates) =
        start(ScriptedSource::new().respond("ap", &["apple", "apricot"]));
    let shown = type_and_fetch(&handle, &mut updates, "ap").await;
    assert!(shown.frame.visible);

    assert!(handle.pointer(None).await);
    no_update(&mut updates).await;

    // Same for a row index beyond the current list.
    assert!(handle.pointer(Some(7)).await);
    no_update(&mut updates).await;
}

#[tokio::test(start_paused = true)]
async fn test_other_keys_are_ignored() {
    let (_source, handle, mut updates) =
        start(ScriptedSource::new().respond("ap", &["apple", "apricot"]));
    type_and_fetch(&handle, &mut updates, "ap").await;

    assert!(handle.key(Key::Other).await);
    no_update(&mut updates).await;
}

#[tokio::test(start_paused = true)]
async fn test_source_failure_leaves_menu_alone() {
    let source = ScriptedSource::new()
        .respond("ap", &["apple"])
        .fail("apx", SourceError::Transport("connection refused".into()));
    let (_source, handle, mut updates) = start(source);
    type_and_fetch(&handle, &mut updates, "ap").await;

    assert!(handle.text_changed("apx").await);
    // The immediate ghost clear still shows the stale-but-present list.
    let cleared = next_update(&mut updates).await;
    assert!(cleared.frame.visible);
    assert_eq!(cleared.frame.items, vec!["apple"]);
    assert_eq!(cleared.frame.overlay, "");

    // The failed fetch never updates state.
    no_update(&mut updates).await;
}

#[tokio::test(start_paused = true)]
async fn test_slow_earlier_response_cannot_clobber_later_one() {
    let source = ScriptedSource::new()
        .respond_after("a", &["ant"], Duration::from_millis(500))
        .respond_after("ap", &["apple"], Duration::from_millis(10));
    let (source, handle, mut updates) = start(source);

    assert!(handle.text_changed("a").await);
    next_update(&mut updates).await; // ghost clear
    // Let the debounce fire and the slow fetch go in flight.
    advance(Duration::from_millis(300)).await;
    settle().await;

    assert!(handle.text_changed("ap").await);
    next_update(&mut updates).await; // ghost clear

    // The fast response for the later query lands and wins.
    let shown = next_update(&mut updates).await;
    assert_eq!(shown.frame.items, vec!["apple"]);

    // The slow response for the superseded query arrives afterwards and is
    // discarded without producing an update.
    no_update(&mut updates).await;
    assert_eq!(source.calls(), vec!["a", "ap"]);
}
