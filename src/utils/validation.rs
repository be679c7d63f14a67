//! Input validation helpers
//!
//! Shared by checkout and the contact client. All checks run locally
//! before anything is persisted or sent over the wire.

use super::error::{AppError, AppResult};

pub const MAX_NAME_LEN: usize = 200;
pub const MAX_EMAIL_LEN: usize = 254;
pub const MAX_SHORT_TEXT_LEN: usize = 100;
pub const MAX_ADDRESS_LEN: usize = 500;
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Reject empty (after trim) or over-long text fields.
pub fn validate_required_text(value: &str, field_name: &str, max_len: usize) -> AppResult<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation(format!("{field_name} must not be empty")));
    }
    if trimmed.len() > max_len {
        return Err(AppError::validation(format!(
            "{field_name} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

/// Loose email shape check: no whitespace, text before one `@`, and a
/// dot somewhere after it that is not the final character.
pub fn is_valid_email(email: &str) -> bool {
    if email.bytes().any(|b| b.is_ascii_whitespace()) {
        return false;
    }
    let bytes = email.as_bytes();
    let Some(at) = bytes.iter().position(|&b| b == b'@') else {
        return false;
    };
    if at == 0 {
        return false;
    }
    bytes[at + 1..]
        .iter()
        .enumerate()
        .any(|(i, &b)| b == b'.' && i > 0 && at + 1 + i < bytes.len() - 1)
}

/// Exactly ten ASCII digits.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit())
}

/// Sixteen digits, ignoring spaces (cards are often typed in groups).
pub fn is_valid_card_number(number: &str) -> bool {
    let digits: Vec<u8> = number.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    digits.len() == 16 && digits.iter().all(|b| b.is_ascii_digit())
}

/// Three or four digits.
pub fn is_valid_cvv(cvv: &str) -> bool {
    (cvv.len() == 3 || cvv.len() == 4) && cvv.bytes().all(|b| b.is_ascii_digit())
}

/// Non-blank and contains an `@`. Providers define the rest of the
/// format themselves, so nothing stricter is checked locally.
pub fn is_valid_upi(id: &str) -> bool {
    !id.trim().is_empty() && id.contains('@')
}
