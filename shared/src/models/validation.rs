//! Input validation helpers shared by the payload types
//!
//! SQLite TEXT has no built-in length enforcement, so limits live here.

use std::borrow::Cow;
use validator::ValidationError;

/// Entity names: client, product
pub const MAX_NAME_LEN: u64 = 200;

/// Client login handles
pub const MAX_LOGIN_LEN: u64 = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: u64 = 254;

/// Reject empty and whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some(Cow::Borrowed("must not be blank"));
        return Err(err);
    }
    Ok(())
}
