//! Search controller
//!
//! Owns the search input's lifecycle and turns submitted queries into
//! rendered results. Every handler runs on the event loop thread; the search
//! itself is dispatched fire-and-forget and its completion comes back
//! through [`SearchController::on_response`].

use super::input::{SearchInput, TextTransform};
use crate::api::{ObjectType, RequestId, SearchCompletion, SearchDispatcher, SearchRequest};
use crate::format::HASH_LENGTH;
use crate::history::HistoryState;
use crate::view::{Renderer, ResultsView};

/// Key delivered to the search input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

/// Whether a key press should still perform its default action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    /// Let the key edit the input as usual
    Continue,
    /// The key was consumed
    Stop,
}

/// What happened to a search completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// A renderer was invoked for this object type
    Rendered(ObjectType),
    /// The backend returned an object type nobody renders
    UnknownType(String),
    /// The backend reported a failure
    Failed(Option<String>),
    /// A newer search was submitted since; the response was dropped
    Stale,
}

/// Parameters the explorer was started with
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchParams {
    /// Query to submit right away
    pub search: Option<String>,
}

impl LaunchParams {
    /// Read the `search` parameter from an explorer URL
    ///
    /// Unparseable URLs yield no parameters.
    #[must_use]
    pub fn from_url(url: &str) -> Self {
        let search = reqwest::Url::parse(url).ok().and_then(|url| {
            url.query_pairs()
                .find(|(key, _)| key == "search")
                .map(|(_, value)| value.into_owned())
        });
        Self { search }
    }
}

/// Drives the search input and dispatches results to a renderer
#[derive(Debug)]
pub struct SearchController<D> {
    input: SearchInput,
    focused: bool,
    loading: bool,
    dispatcher: D,
    next_request: u64,
    latest_request: Option<RequestId>,
    ignore_stale: bool,
}

impl<D: SearchDispatcher> SearchController<D> {
    /// Create a controller submitting searches through `dispatcher`
    #[must_use]
    pub fn new(dispatcher: D) -> Self {
        Self {
            input: SearchInput::new(),
            focused: false,
            loading: false,
            dispatcher,
            next_request: 1,
            latest_request: None,
            ignore_stale: false,
        }
    }

    /// Drop responses to searches older than the latest submission
    #[must_use]
    pub const fn with_ignore_stale(mut self, ignore: bool) -> Self {
        self.ignore_stale = ignore;
        self
    }

    /// Input state
    #[must_use]
    pub const fn input(&self) -> &SearchInput {
        &self.input
    }

    /// Whether the input has focus
    #[must_use]
    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the loading indicator is visible
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Dispatcher in use
    #[must_use]
    pub const fn dispatcher(&self) -> &D {
        &self.dispatcher
    }

    /// The input gained focus: select everything so typing replaces it
    pub fn on_focus(&mut self) {
        self.focused = true;
        self.input.select_all();
    }

    /// The input lost focus
    pub const fn on_blur(&mut self) {
        self.focused = false;
        self.input.deselect();
    }

    /// Key press: submits on Enter with a non-empty value
    ///
    /// Returns [`Propagation::Stop`] when the key started a search.
    pub fn on_key_press(&mut self, key: Key) -> Propagation {
        if self.input.is_empty() {
            return Propagation::Continue;
        }
        if key != Key::Enter {
            return Propagation::Continue;
        }

        self.loading = true;

        let id = RequestId(self.next_request);
        self.next_request += 1;
        self.latest_request = Some(id);

        let query = self.input.value().to_string();
        tracing::info!(request = id.0, %query, "search submitted");
        self.dispatcher.dispatch(SearchRequest::new(id, query));

        self.on_blur();
        Propagation::Stop
    }

    /// Default action of a key that was not consumed by [`Self::on_key_press`]
    pub fn apply_key(&mut self, key: Key) {
        match key {
            Key::Char(c) => self.input.insert_char(c),
            Key::Backspace => self.input.backspace(),
            Key::Delete => self.input.delete(),
            Key::Left => self.input.cursor_left(),
            Key::Right => self.input.cursor_right(),
            Key::Home => self.input.cursor_home(),
            Key::End => self.input.cursor_end(),
            Key::Enter => {}
        }
    }

    /// Key release: show full-length hashes in upper case
    pub fn on_key_up(&mut self) {
        let transform = if self.input.len() == HASH_LENGTH {
            TextTransform::Uppercase
        } else {
            TextTransform::None
        };
        self.input.set_transform(transform);
    }

    /// Handle a search completion
    pub fn on_response(
        &mut self,
        completion: SearchCompletion,
        renderer: &mut dyn Renderer,
    ) -> DispatchOutcome {
        if self.ignore_stale && self.latest_request != Some(completion.request_id) {
            tracing::debug!(request = completion.request_id.0, "stale search response dropped");
            return DispatchOutcome::Stale;
        }

        self.loading = false;

        let result = completion.result;
        if !result.was_success {
            let message = result.error_message;
            tracing::warn!(
                request = completion.request_id.0,
                "search failed: {}",
                message.as_deref().unwrap_or("no error message")
            );
            return DispatchOutcome::Failed(message);
        }

        match &result.object_type {
            ObjectType::Block | ObjectType::BlockHeader => renderer.render_block(&result.object),
            ObjectType::Address => renderer.render_address(&result.object),
            ObjectType::Transaction => renderer.render_transaction(&result.object),
            ObjectType::Unknown(raw) => {
                tracing::warn!(request = completion.request_id.0, "Unknown ObjectType: {raw}");
                return DispatchOutcome::UnknownType(raw.clone());
            }
        }

        tracing::info!(request = completion.request_id.0, object_type = ?result.object_type, "search rendered");
        DispatchOutcome::Rendered(result.object_type)
    }

    /// Start-up: submit the `search` launch parameter, if any
    pub fn on_load(&mut self, params: &LaunchParams) {
        if let Some(query) = &params.search {
            self.input.set_value(query.clone());
            self.on_key_press(Key::Enter);
        }
    }

    /// Back/forward navigation restored `state`
    ///
    /// A state with a non-empty hash replays that search; anything else
    /// returns to the empty landing page.
    pub fn on_history_pop(&mut self, state: Option<&HistoryState>, results: &mut ResultsView) {
        let hash = state
            .and_then(|state| state.hash.as_deref())
            .filter(|hash| !hash.is_empty());
        if let Some(hash) = hash {
            self.input.set_value(hash);
            self.on_key_press(Key::Enter);
        } else {
            self.input.clear();
            results.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::SearchResult;
    use crate::testing::{RecordingDispatcher, RecordingRenderer, RenderCall, sample_hash};
    use serde_json::json;
    use tracing_test::traced_test;

    fn controller() -> SearchController<RecordingDispatcher> {
        SearchController::new(RecordingDispatcher::default())
    }

    fn type_text(controller: &mut SearchController<RecordingDispatcher>, text: &str) {
        for c in text.chars() {
            let key = Key::Char(c);
            if controller.on_key_press(key) == Propagation::Continue {
                controller.apply_key(key);
            }
            controller.on_key_up();
        }
    }

    fn completion(id: u64, result: SearchResult) -> SearchCompletion {
        SearchCompletion {
            request_id: RequestId(id),
            result,
        }
    }

    #[test]
    fn test_uppercase_only_at_hash_length() {
        let mut controller = controller();
        let hash = sample_hash(1);

        type_text(&mut controller, &hash[..63]);
        assert_eq!(controller.input().transform(), TextTransform::None);

        type_text(&mut controller, &hash[63..]);
        assert_eq!(controller.input().transform(), TextTransform::Uppercase);
        assert_eq!(controller.input().value(), hash);

        type_text(&mut controller, "0");
        assert_eq!(controller.input().transform(), TextTransform::None);

        controller.apply_key(Key::Backspace);
        controller.on_key_up();
        assert_eq!(controller.input().transform(), TextTransform::Uppercase);
    }

    #[test]
    fn test_empty_enter_does_nothing() {
        let mut controller = controller();

        assert_eq!(controller.on_key_press(Key::Enter), Propagation::Continue);
        assert!(!controller.is_loading());
        assert!(controller.dispatcher().requests().is_empty());
    }

    #[test]
    fn test_non_enter_keys_do_not_submit() {
        let mut controller = controller();
        type_text(&mut controller, "12345");

        assert_eq!(controller.on_key_press(Key::Char('6')), Propagation::Continue);
        assert!(controller.dispatcher().requests().is_empty());
    }

    #[test]
    fn test_enter_submits_and_blurs() {
        let mut controller = controller();
        controller.on_focus();
        type_text(&mut controller, "650000");

        assert_eq!(controller.on_key_press(Key::Enter), Propagation::Stop);
        assert!(controller.is_loading());
        assert!(!controller.is_focused());

        let requests = controller.dispatcher().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].query, "650000");
        assert_eq!(requests[0].id, RequestId(1));
    }

    #[test]
    fn test_focus_selects_all() {
        let mut controller = controller();
        type_text(&mut controller, "old");
        controller.on_focus();
        assert!(controller.input().is_selected_all());

        type_text(&mut controller, "n");
        assert_eq!(controller.input().value(), "n");
    }

    #[test]
    fn test_dispatch_by_object_type() {
        let cases = [
            (ObjectType::Block, RenderCall::Block),
            (ObjectType::BlockHeader, RenderCall::Block),
            (ObjectType::Address, RenderCall::Address),
            (ObjectType::Transaction, RenderCall::Transaction),
        ];

        for (object_type, expected) in cases {
            let mut controller = controller();
            let mut renderer = RecordingRenderer::default();
            type_text(&mut controller, "query");
            controller.on_key_press(Key::Enter);

            let object = json!({ "hash": sample_hash(2) });
            let outcome = controller.on_response(
                completion(1, SearchResult::success(object_type.clone(), object.clone())),
                &mut renderer,
            );

            assert_eq!(outcome, DispatchOutcome::Rendered(object_type));
            assert_eq!(renderer.calls, vec![(expected, object)]);
            assert!(!controller.is_loading());
        }
    }

    #[test]
    #[traced_test]
    fn test_unknown_type_is_logged() {
        let mut controller = controller();
        let mut renderer = RecordingRenderer::default();
        type_text(&mut controller, "query");
        controller.on_key_press(Key::Enter);

        let result = SearchResult::success(ObjectType::Unknown("SLP_TOKEN".into()), json!({}));
        let outcome = controller.on_response(completion(1, result), &mut renderer);

        assert_eq!(outcome, DispatchOutcome::UnknownType("SLP_TOKEN".into()));
        assert!(renderer.calls.is_empty());
        assert!(!controller.is_loading());
        assert!(logs_contain("Unknown ObjectType: SLP_TOKEN"));
    }

    #[test]
    #[traced_test]
    fn test_failure_is_logged() {
        let mut controller = controller();
        let mut renderer = RecordingRenderer::default();
        type_text(&mut controller, "nonsense");
        controller.on_key_press(Key::Enter);

        let outcome = controller.on_response(
            completion(1, SearchResult::failure("Invalid search parameter.")),
            &mut renderer,
        );

        assert_eq!(
            outcome,
            DispatchOutcome::Failed(Some("Invalid search parameter.".into()))
        );
        assert!(renderer.calls.is_empty());
        assert!(!controller.is_loading());
        assert!(logs_contain("search failed: Invalid search parameter."));
    }

    #[test]
    fn test_overlapping_responses_last_write_wins() {
        let mut controller = controller();
        let mut renderer = RecordingRenderer::default();

        type_text(&mut controller, "first");
        controller.on_key_press(Key::Enter);
        controller.on_focus();
        type_text(&mut controller, "second");
        controller.on_key_press(Key::Enter);

        // Second answer arrives first
        let second = json!({ "hash": "second" });
        let first = json!({ "hash": "first" });
        controller.on_response(
            completion(2, SearchResult::success(ObjectType::Transaction, second.clone())),
            &mut renderer,
        );
        controller.on_response(
            completion(1, SearchResult::success(ObjectType::Block, first.clone())),
            &mut renderer,
        );

        assert_eq!(
            renderer.calls,
            vec![(RenderCall::Transaction, second), (RenderCall::Block, first)]
        );
    }

    #[test]
    fn test_ignore_stale_responses() {
        let mut controller = controller().with_ignore_stale(true);
        let mut renderer = RecordingRenderer::default();

        type_text(&mut controller, "first");
        controller.on_key_press(Key::Enter);
        controller.on_focus();
        type_text(&mut controller, "second");
        controller.on_key_press(Key::Enter);

        let outcome = controller.on_response(
            completion(1, SearchResult::success(ObjectType::Block, json!({}))),
            &mut renderer,
        );
        assert_eq!(outcome, DispatchOutcome::Stale);
        assert!(controller.is_loading());
        assert!(renderer.calls.is_empty());
    }

    #[test]
    fn test_load_submits_search_parameter() {
        let mut controller = controller();
        controller.on_load(&LaunchParams {
            search: Some("650000".into()),
        });

        assert_eq!(controller.input().value(), "650000");
        assert!(controller.is_loading());
        assert_eq!(controller.dispatcher().requests()[0].query, "650000");
    }

    #[test]
    fn test_load_without_parameter() {
        let mut controller = controller();
        controller.on_load(&LaunchParams::default());
        assert!(controller.dispatcher().requests().is_empty());
    }

    #[test]
    fn test_launch_params_from_url() {
        let params = LaunchParams::from_url("http://localhost:8081/?search=abc%20def&x=1");
        assert_eq!(params.search.as_deref(), Some("abc def"));

        assert_eq!(LaunchParams::from_url("http://localhost:8081/"), LaunchParams::default());
        assert_eq!(LaunchParams::from_url("::"), LaunchParams::default());
    }

    #[test]
    fn test_history_pop_with_hash_replays_search() {
        let mut controller = controller();
        let mut results = ResultsView::new();
        let hash = sample_hash(3);

        controller.on_history_pop(Some(&HistoryState::with_hash(hash.clone())), &mut results);

        assert_eq!(controller.input().value(), hash);
        assert_eq!(controller.dispatcher().requests()[0].query, hash);
    }

    #[test]
    fn test_history_pop_without_hash_clears() {
        let mut controller = controller();
        let mut results = ResultsView::new();
        let container = results.create("Block");
        results.push(container);
        type_text(&mut controller, "something");

        controller.on_history_pop(Some(&HistoryState::default()), &mut results);

        assert!(controller.input().is_empty());
        assert!(results.is_empty());
        assert!(controller.dispatcher().requests().is_empty());
    }

    #[test]
    fn test_history_pop_with_empty_hash_clears() {
        let mut controller = controller();
        let mut results = ResultsView::new();
        let container = results.create("Block");
        results.push(container);
        type_text(&mut controller, "something");

        controller.on_history_pop(Some(&HistoryState::with_hash("")), &mut results);

        assert!(controller.input().is_empty());
        assert!(results.is_empty());
        assert!(controller.dispatcher().requests().is_empty());
    }
}
