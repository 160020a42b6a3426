// SPDX-License-Identifier: MPL-2.0
//! Contact form component.
//!
//! The form is a small state machine: `Idle → Submitting → Submitted → Idle`.
//! Submission is simulated; there is no transport. The observable effect of a
//! completed submission is a structured log line with the draft contents.
//!
//! Both timed transitions (the simulated latency and the success-message
//! linger) are scheduled as tasks by the parent and tagged with the current
//! submission generation. A timer that fires after the form was reset or
//! superseded no-ops instead of mutating state it no longer owns.
//!
//! A real transport would add an `Error` state reachable from `Submitting`
//! with the draft preserved for resubmission; see DESIGN.md.

mod view;

pub use view::{view, ViewContext};

use std::time::Duration;

/// Simulated network latency for a submission.
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(1500);

/// How long the success message stays up before the form returns to idle.
pub const SUBMITTED_LINGER: Duration = Duration::from_secs(5);

/// The form's input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    /// i18n key for the field label.
    #[must_use]
    pub fn label_key(self) -> &'static str {
        match self {
            Field::Name => "contact-field-name",
            Field::Email => "contact-field-email",
            Field::Subject => "contact-field-subject",
            Field::Message => "contact-field-message",
        }
    }

    /// i18n key for the field placeholder.
    #[must_use]
    pub fn placeholder_key(self) -> &'static str {
        match self {
            Field::Name => "contact-placeholder-name",
            Field::Email => "contact-placeholder-email",
            Field::Subject => "contact-placeholder-subject",
            Field::Message => "contact-placeholder-message",
        }
    }
}

/// In-progress form values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Draft {
    /// Returns the value of one field.
    #[must_use]
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    /// Sets the value of one field.
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    /// Fields that are still blank (empty or whitespace-only).
    #[must_use]
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.get(*field).trim().is_empty())
            .collect()
    }

    /// Returns `true` when every required field has content.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Submission lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Submitting,
    Submitted,
}

/// Messages emitted by the contact form.
#[derive(Debug, Clone)]
pub enum Message {
    FieldEdited(Field, String),
    SubmitPressed,
    /// The simulated latency elapsed for the tagged submission.
    SubmissionCompleted(u64),
    /// The success message linger elapsed for the tagged submission.
    SubmittedCleared(u64),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    /// A submission entered `Submitting`; the parent schedules the latency
    /// timer tagged with this generation.
    SubmissionStarted(u64),
    /// A submission completed; the parent logs the draft and schedules the
    /// linger timer tagged with this generation.
    SubmissionFinished { generation: u64, draft: Draft },
}

/// Contact form state.
#[derive(Debug, Default)]
pub struct State {
    draft: Draft,
    status: Status,
    validation_errors: Vec<Field>,
    /// Bumped on every submission and reset; timed transitions must present
    /// a matching generation to be applied.
    generation: u64,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    /// Fields flagged by the last rejected submit.
    #[must_use]
    pub fn validation_errors(&self) -> &[Field] {
        &self.validation_errors
    }

    /// Whether `field` was flagged missing by the last rejected submit.
    #[must_use]
    pub fn is_missing(&self, field: Field) -> bool {
        self.validation_errors.contains(&field)
    }

    /// Edits one field. Accepted only while `Idle`.
    pub fn edit(&mut self, field: Field, value: String) {
        if self.status != Status::Idle {
            return;
        }
        self.draft.set(field, value);
        // The inline error disappears as soon as the field has content
        self.validation_errors
            .retain(|f| self.draft.get(*f).trim().is_empty());
    }

    /// Attempts to submit the draft.
    ///
    /// Returns the generation to tag the latency timer with, or `None` when
    /// the submit was rejected (wrong state or missing fields).
    pub fn submit(&mut self) -> Option<u64> {
        if self.status != Status::Idle {
            return None;
        }

        let missing = self.draft.missing_fields();
        if !missing.is_empty() {
            self.validation_errors = missing;
            return None;
        }

        self.validation_errors.clear();
        self.generation += 1;
        self.status = Status::Submitting;
        Some(self.generation)
    }

    /// Applies a finished submission, returning the draft for logging.
    ///
    /// No-ops (returns `None`) when the generation is stale or the form is
    /// not submitting.
    pub fn complete_submission(&mut self, generation: u64) -> Option<Draft> {
        if generation != self.generation || self.status != Status::Submitting {
            return None;
        }
        self.status = Status::Submitted;
        Some(std::mem::take(&mut self.draft))
    }

    /// Returns the form to `Idle` after the success message lingered.
    ///
    /// No-ops when the generation is stale or the form is not in `Submitted`.
    pub fn clear_submitted(&mut self, generation: u64) {
        if generation != self.generation || self.status != Status::Submitted {
            return;
        }
        self.status = Status::Idle;
        self.draft = Draft::default();
    }

    /// Hard reset: back to an empty idle form, invalidating pending timers.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.status = Status::Idle;
        self.draft = Draft::default();
        self.validation_errors.clear();
    }
}

/// Process a contact form message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::FieldEdited(field, value) => {
            state.edit(field, value);
            Event::None
        }
        Message::SubmitPressed => match state.submit() {
            Some(generation) => Event::SubmissionStarted(generation),
            None => Event::None,
        },
        Message::SubmissionCompleted(generation) => {
            match state.complete_submission(generation) {
                Some(draft) => Event::SubmissionFinished { generation, draft },
                None => Event::None,
            }
        }
        Message::SubmittedCleared(generation) => {
            state.clear_submitted(generation);
            Event::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> State {
        let mut state = State::new();
        state.edit(Field::Name, "Ada".to_string());
        state.edit(Field::Email, "ada@example.com".to_string());
        state.edit(Field::Subject, "Collaboration".to_string());
        state.edit(Field::Message, "Let's build something.".to_string());
        state
    }

    #[test]
    fn new_form_is_idle_and_empty() {
        let state = State::new();
        assert_eq!(state.status(), Status::Idle);
        assert_eq!(state.draft(), &Draft::default());
        assert!(state.validation_errors().is_empty());
    }

    #[test]
    fn edit_updates_one_field() {
        let mut state = State::new();
        state.edit(Field::Email, "ada@example.com".to_string());

        assert_eq!(state.draft().email, "ada@example.com");
        assert_eq!(state.draft().name, "");
    }

    #[test]
    fn submit_with_missing_fields_is_rejected() {
        let mut state = State::new();
        state.edit(Field::Name, "A".to_string());

        assert!(state.submit().is_none());
        assert_eq!(state.status(), Status::Idle);
        assert_eq!(
            state.validation_errors(),
            &[Field::Email, Field::Subject, Field::Message]
        );
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let mut state = filled_state();
        state.edit(Field::Subject, "   ".to_string());

        assert!(state.submit().is_none());
        assert!(state.is_missing(Field::Subject));
    }

    #[test]
    fn editing_a_flagged_field_clears_its_error() {
        let mut state = State::new();
        assert!(state.submit().is_none());
        assert!(state.is_missing(Field::Name));

        state.edit(Field::Name, "Ada".to_string());
        assert!(!state.is_missing(Field::Name));
        // Other errors remain
        assert!(state.is_missing(Field::Email));
    }

    #[test]
    fn complete_submission_lifecycle() {
        let mut state = filled_state();

        let generation = state.submit().expect("valid draft submits");
        assert_eq!(state.status(), Status::Submitting);

        let draft = state
            .complete_submission(generation)
            .expect("latency elapsed");
        assert_eq!(draft.name, "Ada");
        assert_eq!(state.status(), Status::Submitted);
        assert_eq!(state.draft(), &Draft::default());

        state.clear_submitted(generation);
        assert_eq!(state.status(), Status::Idle);
        assert_eq!(state.draft(), &Draft::default());
    }

    #[test]
    fn edits_are_ignored_while_submitting() {
        let mut state = filled_state();
        state.submit().expect("valid draft submits");

        state.edit(Field::Name, "Grace".to_string());
        assert_eq!(state.draft().name, "Ada");
    }

    #[test]
    fn submit_is_rejected_while_submitting() {
        let mut state = filled_state();
        state.submit().expect("valid draft submits");

        assert!(state.submit().is_none());
        assert_eq!(state.status(), Status::Submitting);
    }

    #[test]
    fn stale_completion_after_reset_is_discarded() {
        let mut state = filled_state();
        let generation = state.submit().expect("valid draft submits");

        // Component torn down / reset while the timer is in flight
        state.reset();
        assert!(state.complete_submission(generation).is_none());
        assert_eq!(state.status(), Status::Idle);
    }

    #[test]
    fn stale_linger_does_not_clear_a_newer_submission() {
        let mut state = filled_state();
        let first = state.submit().expect("valid draft submits");
        state.complete_submission(first).expect("first completes");
        state.clear_submitted(first);

        // Second submission
        let mut state2 = filled_state();
        let second = state2.submit().expect("valid draft submits");
        state2.complete_submission(second).expect("second completes");

        // A linger timer from a previous generation must not touch it
        state2.clear_submitted(second - 1);
        assert_eq!(state2.status(), Status::Submitted);
    }

    #[test]
    fn completion_with_wrong_generation_is_discarded() {
        let mut state = filled_state();
        let generation = state.submit().expect("valid draft submits");

        assert!(state.complete_submission(generation + 1).is_none());
        assert_eq!(state.status(), Status::Submitting);
    }

    #[test]
    fn update_emits_started_event_on_valid_submit() {
        let mut state = filled_state();

        let event = update(&mut state, Message::SubmitPressed);
        assert!(matches!(event, Event::SubmissionStarted(_)));
    }

    #[test]
    fn update_emits_finished_event_with_draft() {
        let mut state = filled_state();
        let generation = match update(&mut state, Message::SubmitPressed) {
            Event::SubmissionStarted(generation) => generation,
            other => panic!("expected SubmissionStarted, got {:?}", other),
        };

        let event = update(&mut state, Message::SubmissionCompleted(generation));
        match event {
            Event::SubmissionFinished { draft, .. } => assert_eq!(draft.email, "ada@example.com"),
            other => panic!("expected SubmissionFinished, got {:?}", other),
        }
    }

    #[test]
    fn update_invalid_submit_is_silent() {
        let mut state = State::new();
        let event = update(&mut state, Message::SubmitPressed);
        assert!(matches!(event, Event::None));
        assert_eq!(state.validation_errors().len(), 4);
    }
}
