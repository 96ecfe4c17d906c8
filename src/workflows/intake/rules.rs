use std::collections::BTreeMap;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::fields::{FieldValue, FieldValues};

/// Shape checks applied to free-text answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Five digit ZIP code.
    PostalCode,
    /// `NNN-NN-NNNN` social security number.
    NationalId,
    /// `(NNN) NNN-NNNN` phone number.
    Phone,
    Email,
    /// `YYYY-MM-DD` calendar date.
    IsoDate,
}

impl PatternKind {
    fn regex(self) -> &'static Regex {
        static POSTAL: OnceLock<Regex> = OnceLock::new();
        static NATIONAL_ID: OnceLock<Regex> = OnceLock::new();
        static PHONE: OnceLock<Regex> = OnceLock::new();
        static EMAIL: OnceLock<Regex> = OnceLock::new();
        static DATE: OnceLock<Regex> = OnceLock::new();

        let (cell, source) = match self {
            PatternKind::PostalCode => (&POSTAL, r"^\d{5}$"),
            PatternKind::NationalId => (&NATIONAL_ID, r"^\d{3}-\d{2}-\d{4}$"),
            PatternKind::Phone => (&PHONE, r"^\(\d{3}\) \d{3}-\d{4}$"),
            PatternKind::Email => (&EMAIL, r"^[^\s@]+@[^\s@]+\.[^\s@]+$"),
            PatternKind::IsoDate => (&DATE, r"^\d{4}-\d{2}-\d{2}$"),
        };

        cell.get_or_init(|| Regex::new(source).expect("static field pattern compiles"))
    }

    pub fn matches(self, text: &str) -> bool {
        if !self.regex().is_match(text) {
            return false;
        }

        match self {
            PatternKind::IsoDate => chrono::NaiveDate::parse_from_str(text, "%Y-%m-%d").is_ok(),
            _ => true,
        }
    }
}

/// Declarative constraint evaluated against one field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRule {
    Required,
    WholeNumber,
    Range { min: f64, max: f64 },
    NonNegative,
    Pattern(PatternKind),
    OneOf(&'static [&'static str]),
    /// Every entry of an age list must sit inside the bounds.
    AgesEach { min: u32, max: u32 },
    /// The only cross-field rule: age list length equals the declared household size.
    AgesMatchHouseholdSize { size_field: &'static str },
}

impl FieldRule {
    fn holds(&self, value: &FieldValue, values: &FieldValues) -> bool {
        match self {
            FieldRule::Required => !value.is_blank(),
            FieldRule::WholeNumber => value
                .as_number()
                .map(|number| number.fract() == 0.0)
                .unwrap_or(false),
            FieldRule::Range { min, max } => value
                .as_number()
                .map(|number| number >= *min && number <= *max)
                .unwrap_or(false),
            FieldRule::NonNegative => value.as_number().map(|n| n >= 0.0).unwrap_or(false),
            FieldRule::Pattern(kind) => value
                .as_text()
                .map(|text| kind.matches(text.trim()))
                .unwrap_or(false),
            FieldRule::OneOf(choices) => value
                .as_text()
                .map(|text| choices.iter().any(|choice| *choice == text))
                .unwrap_or(false),
            FieldRule::AgesEach { min, max } => value
                .as_ages()
                .map(|ages| ages.iter().all(|age| age >= min && age <= max))
                .unwrap_or(false),
            FieldRule::AgesMatchHouseholdSize { size_field } => {
                let declared = values.number(size_field);
                let recorded = value.as_ages().map(<[u32]>::len).unwrap_or(0);
                declared
                    .map(|size| size >= 0.0 && size.fract() == 0.0 && recorded == size as usize)
                    .unwrap_or(false)
            }
        }
    }
}

/// A rule paired with the message shown when it fails.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleCheck {
    pub rule: FieldRule,
    pub message: &'static str,
}

impl RuleCheck {
    pub const fn new(rule: FieldRule, message: &'static str) -> Self {
        Self { rule, message }
    }
}

/// Field owned by a step together with its ordered rule checks.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub checks: Vec<RuleCheck>,
}

impl FieldSpec {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            checks: Vec::new(),
        }
    }

    pub fn check(mut self, rule: FieldRule, message: &'static str) -> Self {
        self.checks.push(RuleCheck::new(rule, message));
        self
    }

    /// First failing check wins; `None` means the field is valid.
    pub fn evaluate(&self, values: &FieldValues) -> Option<&'static str> {
        let empty = FieldValue::Empty;
        let value = values.get(self.name).unwrap_or(&empty);

        self.checks
            .iter()
            .find(|check| !check.rule.holds(value, values))
            .map(|check| check.message)
    }
}

/// Field name to display message for every field that failed on the last pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.errors.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }
}
