//! As-you-type formatting for identity and phone inputs.

fn digits(raw: &str, limit: usize) -> String {
    raw.chars().filter(char::is_ascii_digit).take(limit).collect()
}

/// `123456789` -> `123-45-6789`, leaving partial input partially formatted.
pub fn format_national_id(raw: &str) -> String {
    let numbers = digits(raw, 9);
    match numbers.len() {
        0..=3 => numbers,
        4..=5 => format!("{}-{}", &numbers[..3], &numbers[3..]),
        _ => format!("{}-{}-{}", &numbers[..3], &numbers[3..5], &numbers[5..]),
    }
}

/// `5155550134` -> `(515) 555-0134`.
pub fn format_phone(raw: &str) -> String {
    let numbers = digits(raw, 10);
    match numbers.len() {
        0..=3 => numbers,
        4..=6 => format!("({}) {}", &numbers[..3], &numbers[3..]),
        _ => format!("({}) {}-{}", &numbers[..3], &numbers[3..6], &numbers[6..]),
    }
}

/// Hide all but the last four digits of a national id.
pub fn mask_national_id(formatted: &str) -> String {
    let numbers = digits(formatted, 9);
    let tail = if numbers.len() >= 4 {
        &numbers[numbers.len() - 4..]
    } else {
        ""
    };
    format!("***-**-{tail}")
}
