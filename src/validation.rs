//! Request validation helpers: ordered messages and the ISBN checksum rule

use validator::{Validate, ValidationError, ValidationErrors};

/// Request structs that can report their violations as a flat, ordered list
/// of human-readable messages. Messages come out in struct field declaration
/// order, one per violated rule.
pub trait ValidateRequest: Validate {
    /// Field names in declaration order, matching the keys produced by the
    /// derive.
    fn field_order() -> &'static [&'static str];

    fn validation_messages(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => ordered_messages(&errors, Self::field_order()),
        }
    }
}

pub fn ordered_messages(errors: &ValidationErrors, field_order: &[&str]) -> Vec<String> {
    let by_field = errors.field_errors();
    let mut messages = Vec::new();
    for field in field_order {
        if let Some(violations) = by_field.get(field) {
            for violation in violations.iter() {
                match &violation.message {
                    Some(message) => messages.push(message.to_string()),
                    None => messages.push(format!("{} is invalid", field)),
                }
            }
        }
    }
    messages
}

/// ISBN-10/13 checksum validation. Hyphens and spaces are ignored; ISBN-10
/// accepts a trailing `X` check digit.
pub fn validate_isbn(value: &str) -> Result<(), ValidationError> {
    let normalized: Vec<char> = value
        .chars()
        .filter(|c| *c != '-' && *c != ' ')
        .collect();

    let valid = match normalized.len() {
        10 => isbn10_checksum(&normalized),
        13 => isbn13_checksum(&normalized),
        _ => false,
    };

    if valid {
        Ok(())
    } else {
        Err(ValidationError::new("isbn"))
    }
}

fn isbn10_checksum(digits: &[char]) -> bool {
    let mut sum: u32 = 0;
    for (i, c) in digits.iter().enumerate() {
        let value = match c.to_digit(10) {
            Some(d) => d,
            // X stands for 10, in the check-digit position only
            None if (*c == 'X' || *c == 'x') && i == 9 => 10,
            None => return false,
        };
        sum += value * (10 - i as u32);
    }
    sum % 11 == 0
}

fn isbn13_checksum(digits: &[char]) -> bool {
    let mut sum: u32 = 0;
    for (i, c) in digits.iter().enumerate() {
        let value = match c.to_digit(10) {
            Some(d) => d,
            None => return false,
        };
        sum += value * if i % 2 == 0 { 1 } else { 3 };
    }
    sum % 10 == 0
}
