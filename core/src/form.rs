//! Form controller shared by the create and edit screens.
//!
//! # Design
//! The controller is a plain record moved through synchronous transitions:
//! `apply_edit`, `validate`, `begin_submit`, `complete_submit`, `reset` and
//! `request_cancel`. The network call sits between `begin_submit` and
//! `complete_submit`; `submit` runs the whole cycle against a gateway, while
//! hosts that drive I/O themselves can call the two halves directly.
//!
//! Validation always runs before a request is produced, so a draft that
//! fails it never reaches the network. A failed request leaves the draft as
//! the user typed it and only attaches a banner message.

use tracing::{debug, warn};

use crate::error::ApiError;
use crate::messages;
use crate::transport::{ArticleGateway, Transport};
use crate::types::{Article, ArticleId, ArticleInput};
use crate::validation::{self, char_len, Field, FieldErrors};

/// In-progress copy of an article's editable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub description: String,
}

impl Draft {
    pub fn from_article(article: &Article) -> Self {
        Self {
            title: article.title.clone(),
            description: article.description.clone(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Description => &self.description,
        }
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Title => &mut self.title,
            Field::Description => &mut self.description,
        }
    }

    pub fn to_input(&self) -> ArticleInput {
        ArticleInput {
            title: self.title.clone(),
            description: self.description.clone(),
        }
    }

    fn matches(&self, article: &Article) -> bool {
        self.title == article.title && self.description == article.description
    }
}

/// Whether the form creates a new article or edits a fetched one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit { original: Article },
}

/// Submission lifecycle. Validation happens inside `begin_submit` and never
/// leaves the controller in an intermediate state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    /// Terminal: the host navigates back to the list.
    Succeeded,
}

/// The request a successful validation pass asks the host to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    Create(ArticleInput),
    Update { id: ArticleId, input: ArticleInput },
}

/// Result of `begin_submit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    /// Field errors were recorded; nothing is sent.
    Rejected,
    /// Edit with nothing changed: navigate away without a request.
    Skip,
    /// A request is already in flight or the form is finished.
    Ignored,
    Send(SubmitRequest),
}

/// Result of `request_cancel`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelDecision {
    /// Navigate back to the list now.
    Leave,
    /// Unsaved edits: ask the user before leaving.
    ConfirmDiscard { prompt: &'static str },
    /// Controls are disabled while submitting.
    Blocked,
}

#[derive(Debug, Clone)]
pub struct FormController {
    mode: FormMode,
    draft: Draft,
    errors: FieldErrors,
    submit_error: Option<String>,
    phase: Phase,
}

impl FormController {
    /// Empty form for the create screen.
    pub fn create() -> Self {
        Self::with_mode(FormMode::Create, Draft::default())
    }

    /// Form seeded from a fetched article for the edit screen.
    pub fn edit(original: Article) -> Self {
        let draft = Draft::from_article(&original);
        Self::with_mode(FormMode::Edit { original }, draft)
    }

    fn with_mode(mode: FormMode, draft: Draft) -> Self {
        Self {
            mode,
            draft,
            errors: FieldErrors::new(),
            submit_error: None,
            phase: Phase::Idle,
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Banner shown at the top of the form after a failed request.
    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Inputs and buttons are disabled while a request is in flight.
    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// True when the draft differs from the fetched article. Always false on
    /// the create screen.
    pub fn has_changes(&self) -> bool {
        match &self.mode {
            FormMode::Create => false,
            FormMode::Edit { original } => !self.draft.matches(original),
        }
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        match self.mode {
            FormMode::Create => true,
            FormMode::Edit { .. } => self.has_changes(),
        }
    }

    /// Whether the reset button is offered.
    pub fn can_reset(&self) -> bool {
        self.phase == Phase::Idle && self.has_changes()
    }

    /// Character counter shown under a field, e.g. `12/100 caractères`.
    pub fn counter(&self, field: Field) -> String {
        format!("{}/{} caractères", char_len(self.draft.get(field)), field.max_len())
    }

    /// Replace a field's value with what the user typed.
    ///
    /// The value is capped at the field maximum, and any error previously
    /// recorded for that field is cleared. Returns false when the form is not
    /// editable.
    pub fn apply_edit(&mut self, field: Field, value: &str) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        let max = field.max_len();
        let capped = if char_len(value) > max {
            value.chars().take(max).collect()
        } else {
            value.to_string()
        };
        *self.draft.slot(field) = capped;
        self.errors.clear(field);
        true
    }

    /// Validate every field, replacing the recorded errors. The submission
    /// banner is dropped as well: it belongs to the previous attempt.
    pub fn validate(&mut self) -> bool {
        self.errors = validation::validate(&self.draft.title, &self.draft.description);
        self.submit_error = None;
        self.errors.is_empty()
    }

    /// Validate, then decide what the submit button does.
    pub fn begin_submit(&mut self) -> SubmitAction {
        if self.phase != Phase::Idle {
            return SubmitAction::Ignored;
        }
        if !self.validate() {
            debug!(errors = self.errors.len(), "form rejected");
            return SubmitAction::Rejected;
        }
        let request = match &self.mode {
            FormMode::Create => SubmitRequest::Create(self.draft.to_input()),
            FormMode::Edit { original } => {
                if self.draft.matches(original) {
                    self.phase = Phase::Succeeded;
                    return SubmitAction::Skip;
                }
                SubmitRequest::Update {
                    id: original.id,
                    input: self.draft.to_input(),
                }
            }
        };
        self.phase = Phase::Submitting;
        SubmitAction::Send(request)
    }

    /// Record the outcome of the request produced by `begin_submit`.
    pub fn complete_submit(&mut self, result: Result<(), ApiError>) -> Phase {
        if self.phase != Phase::Submitting {
            return self.phase;
        }
        match result {
            Ok(()) => self.phase = Phase::Succeeded,
            Err(err) => {
                let message = match self.mode {
                    FormMode::Create => messages::CREATE_FAILED,
                    FormMode::Edit { .. } => messages::UPDATE_FAILED,
                };
                warn!(error = %err, "article submission failed");
                self.submit_error = Some(message.to_string());
                self.phase = Phase::Idle;
            }
        }
        self.phase
    }

    /// Run one submission against `gateway`. At most one request is sent.
    pub fn submit<T: Transport>(&mut self, gateway: &ArticleGateway<T>) -> Phase {
        match self.begin_submit() {
            SubmitAction::Send(SubmitRequest::Create(input)) => {
                let result = gateway.create(&input);
                self.complete_submit(result)
            }
            SubmitAction::Send(SubmitRequest::Update { id, input }) => {
                let result = gateway.update(id, &input);
                self.complete_submit(result)
            }
            SubmitAction::Rejected | SubmitAction::Skip | SubmitAction::Ignored => self.phase,
        }
    }

    /// Restore the fetched values and clear every error. No-op on the create
    /// screen or while submitting.
    pub fn reset(&mut self) {
        if self.phase != Phase::Idle {
            return;
        }
        if let FormMode::Edit { original } = &self.mode {
            self.draft = Draft::from_article(original);
            self.errors.clear_all();
            self.submit_error = None;
        }
    }

    pub fn request_cancel(&self) -> CancelDecision {
        if self.phase == Phase::Submitting {
            CancelDecision::Blocked
        } else if self.has_changes() {
            CancelDecision::ConfirmDiscard {
                prompt: messages::DISCARD_CHANGES_PROMPT,
            }
        } else {
            CancelDecision::Leave
        }
    }
}
