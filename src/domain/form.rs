//! The shortener form: input, result and copy confirmation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;

use tracing::{debug, info, warn};

use super::gateways::{ClipboardWriter, ShortenGateway};
use super::result::{FailureKind, ShortenResult};
use super::view::FormView;
use crate::error::ShortenError;
use crate::utils::url_validation::UrlValidation;

/// How long the copied flag stays set after a successful copy.
pub const COPIED_FEEDBACK: Duration = Duration::from_millis(1000);

#[derive(Debug, Default)]
struct FormState {
    input: String,
    result: Option<ShortenResult>,
    copied: bool,
    copy_generation: u64,
}

/// Form that validates a URL, sends it to the shortening service and offers
/// the result for copying.
///
/// All operations take `&self`, so several submits may be in flight at once.
/// Each submit takes a generation number before its first await and its
/// response is applied only if no later submit has started since. The last
/// submit *started* wins, not the last response to arrive.
///
/// # Example
///
/// ```rust,ignore
/// let form = ShortenerForm::new(gateway, clipboard, UrlValidation::Heuristic);
/// form.set_input("example.com");
/// form.submit().await;
/// if form.copy().await {
///     assert!(form.is_copied());
/// }
/// ```
pub struct ShortenerForm<G: ShortenGateway, C: ClipboardWriter> {
    gateway: Arc<G>,
    clipboard: Arc<C>,
    validation: UrlValidation,
    state: Arc<RwLock<FormState>>,
    submit_generation: AtomicU64,
}

impl<G: ShortenGateway, C: ClipboardWriter> ShortenerForm<G, C> {
    /// Creates an empty form.
    pub fn new(gateway: Arc<G>, clipboard: Arc<C>, validation: UrlValidation) -> Self {
        Self {
            gateway,
            clipboard,
            validation,
            state: Arc::new(RwLock::new(FormState::default())),
            submit_generation: AtomicU64::new(0),
        }
    }

    /// Replaces the entered URL. No validation happens here.
    pub fn set_input(&self, input: impl Into<String>) {
        self.write_state().input = input.into();
    }

    pub fn input(&self) -> String {
        self.read_state().input.clone()
    }

    /// The result currently on display, if any.
    pub fn result(&self) -> Option<ShortenResult> {
        self.read_state().result.clone()
    }

    pub fn is_copied(&self) -> bool {
        self.read_state().copied
    }

    pub fn validation(&self) -> UrlValidation {
        self.validation
    }

    pub fn view(&self) -> FormView {
        let state = self.read_state();
        FormView::new(&state.input, state.result.as_ref(), state.copied)
    }

    /// Validates the current input and, if it passes, shortens it.
    ///
    /// Invalid input produces [`FailureKind::InvalidUrl`] without any request.
    /// Otherwise exactly one call is made to the gateway; any error it
    /// reports is logged and becomes [`FailureKind::ServiceUnavailable`].
    ///
    /// Returns the result of this submit. It is only displayed if no newer
    /// submit started while this one was waiting.
    pub async fn submit(&self) -> ShortenResult {
        let input = self.input();
        let generation = self.submit_generation.fetch_add(1, Ordering::SeqCst) + 1;

        if !self.validation.accepts(&input) {
            debug!(input = %input, policy = %self.validation, "Rejected input before submit");
            let result = ShortenResult::Failed(FailureKind::InvalidUrl);
            self.apply_result(generation, result.clone());
            return result;
        }

        let result = match self.gateway.shorten(&input).await {
            Ok(short_url) => {
                info!(url = %input, short_url = %short_url, "URL shortened");
                ShortenResult::Shortened(short_url)
            }
            Err(e) => {
                log_shorten_failure(&input, &e);
                ShortenResult::Failed(FailureKind::ServiceUnavailable)
            }
        };

        self.apply_result(generation, result.clone());
        result
    }

    /// Copies the displayed result text to the clipboard.
    ///
    /// Does nothing when there is no result or its text is empty. On a
    /// successful write the copied flag is set and cleared again
    /// [`COPIED_FEEDBACK`] after the most recent copy. Clipboard errors are
    /// logged and leave the flag untouched.
    ///
    /// Returns whether the text was written.
    pub async fn copy(&self) -> bool {
        let Some(text) = self.result_text() else {
            return false;
        };

        if let Err(e) = self.clipboard.write_text(&text).await {
            warn!(error = %e, "Failed to copy result to clipboard");
            return false;
        }

        let generation = {
            let mut state = self.write_state();
            state.copied = true;
            state.copy_generation += 1;
            state.copy_generation
        };
        self.schedule_copied_reset(generation);

        true
    }

    fn result_text(&self) -> Option<String> {
        self.read_state()
            .result
            .as_ref()
            .map(|result| result.text().to_string())
            .filter(|text| !text.is_empty())
    }

    fn apply_result(&self, generation: u64, result: ShortenResult) {
        let mut state = self.write_state();
        let latest = self.submit_generation.load(Ordering::SeqCst);
        if generation != latest {
            debug!(generation, latest, "Discarding superseded submit result");
            return;
        }
        state.result = Some(result);
    }

    /// The reset task holds only a weak reference, so a dropped form is
    /// never kept alive by it.
    fn schedule_copied_reset(&self, generation: u64) {
        let state = Arc::downgrade(&self.state);
        tokio::spawn(async move {
            tokio::time::sleep(COPIED_FEEDBACK).await;
            let Some(shared) = state.upgrade() else {
                return;
            };
            let mut state = shared.write().unwrap_or_else(PoisonError::into_inner);
            if state.copy_generation == generation {
                state.copied = false;
            }
        });
    }

    fn read_state(&self) -> RwLockReadGuard<'_, FormState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, FormState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn log_shorten_failure(input: &str, error: &ShortenError) {
    match error {
        ShortenError::Status { status, detail } => warn!(
            url = %input,
            status = *status,
            detail = detail.as_deref().unwrap_or("-"),
            "Shortening service returned an error status"
        ),
        other => warn!(url = %input, error = %other, "Failed to shorten URL"),
    }
}
