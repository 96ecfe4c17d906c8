use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

const BASE36_UPPER: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const SUFFIX_LEN: usize = 9;

/// Confirmation number handed to the applicant, e.g. `APP-K3F9Z02QX`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationNumber(pub String);

impl fmt::Display for ApplicationNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Source of application numbers. Kept apart from everything deterministic.
pub trait ApplicationNumberGenerator {
    fn next_number(&mut self) -> ApplicationNumber;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RandomApplicationNumbers;

impl ApplicationNumberGenerator for RandomApplicationNumbers {
    fn next_number(&mut self) -> ApplicationNumber {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| BASE36_UPPER[rng.gen_range(0..BASE36_UPPER.len())] as char)
            .collect();
        ApplicationNumber(format!("APP-{suffix}"))
    }
}

/// Predictable numbers (`APP-000000001`, `APP-000000002`, ...).
#[derive(Debug, Clone)]
pub struct SequentialApplicationNumbers {
    next: u64,
}

impl SequentialApplicationNumbers {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl Default for SequentialApplicationNumbers {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl ApplicationNumberGenerator for SequentialApplicationNumbers {
    fn next_number(&mut self) -> ApplicationNumber {
        let value = self.next;
        self.next += 1;
        ApplicationNumber(format!("APP-{}", format_base36(value, SUFFIX_LEN)))
    }
}

fn format_base36(mut value: u64, width: usize) -> String {
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_UPPER[(value % 36) as usize] as char);
        value /= 36;
    }
    digits.reverse();

    let rendered: String = digits.into_iter().collect();
    format!("{rendered:0>width$}")
}
