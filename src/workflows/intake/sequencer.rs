use tracing::debug;

use super::fields::{FieldValue, FieldValues};
use super::rules::ValidationErrors;
use super::schema::{StepDefinition, StepSchema};

/// Result of asking the sequencer to move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    Advanced { step: usize },
    /// The final step validated; there is nowhere further to go.
    AtFinalStep,
    Blocked { error_count: usize },
}

/// Receives the accumulated answers once the final step validates.
pub trait CompletionHandler {
    type Output;

    fn complete(&mut self, values: &FieldValues) -> Result<Self::Output, CompletionError>;
}

/// Raised by a completion handler that cannot interpret the accumulated answers.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CompletionError {
    #[error("field {0} was never answered")]
    MissingField(&'static str),
    #[error("field {field} is not usable: {reason}")]
    InvalidField { field: &'static str, reason: String },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("submission is only possible from the final step (currently on {current} of {total})")]
    NotFinalStep { current: usize, total: usize },
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(ValidationErrors),
    #[error(transparent)]
    Completion(#[from] CompletionError),
}

/// Generic multi-step form controller gated by per-step validation.
#[derive(Debug, Clone)]
pub struct StepSequencer {
    schema: StepSchema,
    current_step: usize,
    values: FieldValues,
    errors: ValidationErrors,
}

impl StepSequencer {
    pub fn new(schema: StepSchema) -> Self {
        Self::with_values(schema, FieldValues::new())
    }

    /// Start on step 1 with a pre-populated record (e.g. defaults chosen by the flow).
    pub fn with_values(schema: StepSchema, values: FieldValues) -> Self {
        Self {
            schema,
            current_step: 1,
            values,
            errors: ValidationErrors::new(),
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    pub fn total_steps(&self) -> usize {
        self.schema.total_steps()
    }

    pub fn is_final_step(&self) -> bool {
        self.current_step == self.total_steps()
    }

    pub fn current_definition(&self) -> Option<&StepDefinition> {
        self.schema.step(self.current_step)
    }

    pub fn schema(&self) -> &StepSchema {
        &self.schema
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Share of the form reached so far, as shown on the progress bar.
    pub fn progress_percent(&self) -> u8 {
        ((self.current_step * 100) / self.total_steps()) as u8
    }

    /// Record an answer. Any stale error message for that field is dropped.
    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) {
        self.values.set(name, value);
        self.errors.remove(name);
    }

    pub fn advance(&mut self) -> AdvanceOutcome {
        if let Err(error_count) = self.gate() {
            return AdvanceOutcome::Blocked { error_count };
        }

        if let Some(effect) = self.current_definition().and_then(|step| step.on_leave) {
            effect.apply(&mut self.values);
        }

        if self.is_final_step() {
            return AdvanceOutcome::AtFinalStep;
        }

        self.current_step += 1;
        debug!(step = self.current_step, total = self.total_steps(), "advanced intake step");
        AdvanceOutcome::Advanced {
            step: self.current_step,
        }
    }

    /// Move back one step. Never validates and never touches answers or errors.
    pub fn retreat(&mut self) -> usize {
        if self.current_step > 1 {
            self.current_step -= 1;
            debug!(step = self.current_step, "retreated intake step");
        }
        self.current_step
    }

    /// Validate the final step and hand the answers to `handler`.
    pub fn submit<H>(&mut self, handler: &mut H) -> Result<H::Output, SubmitError>
    where
        H: CompletionHandler,
    {
        if !self.is_final_step() {
            return Err(SubmitError::NotFinalStep {
                current: self.current_step,
                total: self.total_steps(),
            });
        }

        if self.gate().is_err() {
            return Err(SubmitError::Invalid(self.errors.clone()));
        }

        Ok(handler.complete(&self.values)?)
    }

    fn gate(&mut self) -> Result<(), usize> {
        let errors = self.schema.validate(self.current_step, &self.values);
        if errors.is_empty() {
            self.errors.clear();
            return Ok(());
        }

        let count = errors.len();
        debug!(step = self.current_step, errors = count, "intake step blocked by validation");
        self.errors = errors;
        Err(count)
    }
}
