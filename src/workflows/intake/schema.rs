use std::collections::BTreeSet;

use super::fields::{FieldValue, FieldValues};
use super::rules::{FieldSpec, ValidationErrors};

/// Side effect applied to the record when the user moves forward off a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeaveEffect {
    /// Truncate or zero-fill an age list so its length equals a declared size.
    ResizeAges {
        size_field: &'static str,
        list_field: &'static str,
    },
}

impl LeaveEffect {
    pub fn apply(&self, values: &mut FieldValues) {
        match self {
            LeaveEffect::ResizeAges {
                size_field,
                list_field,
            } => {
                let Some(size) = values.number(size_field) else {
                    return;
                };
                if size < 0.0 || size.fract() != 0.0 {
                    return;
                }

                let size = size as usize;
                let current = values.ages(list_field);
                if current.len() == size && values.get(list_field).is_some() {
                    return;
                }

                let mut resized = current.to_vec();
                resized.resize(size, 0);
                values.set(*list_field, FieldValue::Ages(resized));
            }
        }
    }
}

/// One page of a guided form: the fields it owns and how they are checked.
#[derive(Debug, Clone, PartialEq)]
pub struct StepDefinition {
    pub key: &'static str,
    pub title: &'static str,
    pub fields: Vec<FieldSpec>,
    pub on_leave: Option<LeaveEffect>,
}

impl StepDefinition {
    pub fn new(key: &'static str, title: &'static str) -> Self {
        Self {
            key,
            title,
            fields: Vec::new(),
            on_leave: None,
        }
    }

    pub fn field(mut self, field: FieldSpec) -> Self {
        self.fields.push(field);
        self
    }

    pub fn on_leave(mut self, effect: LeaveEffect) -> Self {
        self.on_leave = Some(effect);
        self
    }

    pub fn owns(&self, field: &str) -> bool {
        self.fields.iter().any(|spec| spec.name == field)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("a step schema needs at least one step")]
    Empty,
    #[error("field {0} is declared by more than one step")]
    DuplicateField(&'static str),
}

/// Ordered list of steps. Step numbers are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct StepSchema {
    steps: Vec<StepDefinition>,
}

impl StepSchema {
    pub fn new(steps: Vec<StepDefinition>) -> Result<Self, SchemaError> {
        if steps.is_empty() {
            return Err(SchemaError::Empty);
        }

        let mut seen = BTreeSet::new();
        for field in steps.iter().flat_map(|step| step.fields.iter()) {
            if !seen.insert(field.name) {
                return Err(SchemaError::DuplicateField(field.name));
            }
        }

        Ok(Self { steps })
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn step(&self, step: usize) -> Option<&StepDefinition> {
        step.checked_sub(1).and_then(|index| self.steps.get(index))
    }

    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    /// Check only the fields owned by `step`; an empty result means the step passes.
    pub fn validate(&self, step: usize, values: &FieldValues) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        let Some(definition) = self.step(step) else {
            return errors;
        };

        for field in &definition.fields {
            if let Some(message) = field.evaluate(values) {
                errors.insert(field.name, message);
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::intake::rules::FieldRule;

    fn resize() -> LeaveEffect {
        LeaveEffect::ResizeAges {
            size_field: "householdSize",
            list_field: "householdMembers",
        }
    }

    #[test]
    fn rejects_empty_and_duplicate_schemas() {
        assert_eq!(StepSchema::new(Vec::new()), Err(SchemaError::Empty));

        let duplicate = StepSchema::new(vec![
            StepDefinition::new("one", "One").field(FieldSpec::new("zipCode")),
            StepDefinition::new("two", "Two").field(FieldSpec::new("zipCode")),
        ]);
        assert_eq!(duplicate, Err(SchemaError::DuplicateField("zipCode")));
    }

    #[test]
    fn validation_is_scoped_to_the_requested_step() {
        let schema = StepSchema::new(vec![
            StepDefinition::new("one", "One")
                .field(FieldSpec::new("firstName").check(FieldRule::Required, "first")),
            StepDefinition::new("two", "Two")
                .field(FieldSpec::new("email").check(FieldRule::Required, "email")),
        ])
        .expect("schema");
        let values = FieldValues::new();

        let errors = schema.validate(1, &values);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("firstName"), Some("first"));
        assert!(schema.validate(3, &values).is_empty());
        assert!(schema.validate(0, &values).is_empty());
    }

    #[test]
    fn resize_truncates_and_zero_fills() {
        let mut values = FieldValues::new();
        values.set("householdSize", "3");
        values.set("householdMembers", vec![41u32, 39, 12, 9]);

        resize().apply(&mut values);
        assert_eq!(values.ages("householdMembers"), &[41, 39, 12]);

        values.set("householdSize", "5");
        resize().apply(&mut values);
        assert_eq!(values.ages("householdMembers"), &[41, 39, 12, 0, 0]);
    }

    #[test]
    fn resize_is_idempotent() {
        let mut values = FieldValues::new();
        values.set("householdSize", "2");

        resize().apply(&mut values);
        let once = values.clone();
        resize().apply(&mut values);

        assert_eq!(values, once);
        assert_eq!(values.ages("householdMembers"), &[0, 0]);
    }
}
