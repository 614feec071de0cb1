use crate::error::LinkError;

/// Validate a raw phone number for use in a `wa.me` deep link.
///
/// Strips every whitespace character, then requires the remainder to be a
/// non-empty run of ASCII digits (international prefix included, no `+` or
/// separators). Returns the normalized digit string.
///
/// Rejection is never fatal at the override site: callers fall back to the
/// stored configuration instead of failing the render.
pub fn validate_phone(raw: &str) -> Result<String, LinkError> {
    let digits: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(LinkError::InvalidPhoneNumber);
    }

    Ok(digits)
}
