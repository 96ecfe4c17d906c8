use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Scalar or list value captured for a single form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Empty,
    Flag(bool),
    Number(f64),
    Text(String),
    Ages(Vec<u32>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// True when the value carries nothing a user would consider an answer.
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Empty => true,
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Number(number) => !number.is_finite(),
            FieldValue::Flag(_) => false,
            FieldValue::Ages(ages) => ages.is_empty(),
        }
    }

    /// Numeric reading of the value. Text is parsed the way an HTML number input reports it.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(number) if number.is_finite() => Some(*number),
            FieldValue::Text(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Any non-blank answer rendered as trimmed text. Whole numbers drop the fraction.
    pub fn to_answer_text(&self) -> Option<String> {
        let rendered = match self {
            FieldValue::Empty => return None,
            FieldValue::Text(text) => text.trim().to_string(),
            FieldValue::Number(number) if !number.is_finite() => return None,
            FieldValue::Number(number) if number.fract() == 0.0 => format!("{number:.0}"),
            FieldValue::Number(number) => number.to_string(),
            FieldValue::Flag(flag) => flag.to_string(),
            FieldValue::Ages(ages) => ages
                .iter()
                .map(u32::to_string)
                .collect::<Vec<_>>()
                .join(","),
        };
        Some(rendered).filter(|text| !text.is_empty())
    }

    pub fn as_flag(&self) -> bool {
        matches!(self, FieldValue::Flag(true))
    }

    pub fn as_ages(&self) -> Option<&[u32]> {
        match self {
            FieldValue::Ages(ages) => Some(ages.as_slice()),
            _ => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<Vec<u32>> for FieldValue {
    fn from(value: Vec<u32>) -> Self {
        Self::Ages(value)
    }
}

/// Mutable record of every answer captured so far, keyed by field name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldValues {
    values: BTreeMap<String, FieldValue>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(FieldValue::as_number)
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(FieldValue::as_text)
    }

    /// Unset flags read as `false`, matching an unchecked checkbox.
    pub fn flag(&self, name: &str) -> bool {
        self.get(name).map(FieldValue::as_flag).unwrap_or(false)
    }

    pub fn ages(&self, name: &str) -> &[u32] {
        self.get(name).and_then(FieldValue::as_ages).unwrap_or(&[])
    }

    pub fn is_blank(&self, name: &str) -> bool {
        self.get(name).map(FieldValue::is_blank).unwrap_or(true)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}
