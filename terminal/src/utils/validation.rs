/// Validation utilities for amount input

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }
}

fn is_separator(c: char) -> bool {
    c == '.' || c == ','
}

/// Keystroke filter for amount fields: `^[0-9]*[.,]?[0-9]*$`.
///
/// The empty string passes so a field can be cleared.
pub fn is_valid_amount_input(input: &str) -> bool {
    let mut separators = 0;
    for c in input.chars() {
        if is_separator(c) {
            separators += 1;
            if separators > 1 {
                return false;
            }
        } else if !c.is_ascii_digit() {
            return false;
        }
    }
    true
}

/// Whether an accepted amount is complete enough to ask for a quote.
///
/// Empty, bare zero and a trailing separator are still being typed.
pub fn check_quotable(input: &str) -> ValidationResult {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return ValidationResult::err("Amount is empty");
    }

    if trimmed == "0" {
        return ValidationResult::err("Amount is zero");
    }

    if trimmed.ends_with(is_separator) {
        return ValidationResult::err("Amount ends with a decimal separator");
    }

    if !is_valid_amount_input(trimmed) {
        return ValidationResult::err("Amount is not a decimal number");
    }

    ValidationResult::ok()
}
