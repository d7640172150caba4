//! Field rules for account creation and login.
//!
//! A field counts as present only when it is a non-empty string; fields are
//! checked in request order and the first missing one is reported.

pub const MSG_FULL_NAME_REQUIRED: &str = "Full Name is required";
pub const MSG_EMAIL_REQUIRED: &str = "Email is required";
pub const MSG_PASSWORD_REQUIRED: &str = "Password is required";

/// Return the value when it is a non-empty string, otherwise `message`.
pub fn require<'a>(value: Option<&'a str>, message: &str) -> Result<&'a str, String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(message.to_string()),
    }
}

/// Validated create-account fields, borrowed from the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewAccount<'a> {
    pub full_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

/// Validated login fields, borrowed from the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Credentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

pub fn validate_new_account<'a>(
    full_name: Option<&'a str>,
    email: Option<&'a str>,
    password: Option<&'a str>,
) -> Result<NewAccount<'a>, String> {
    Ok(NewAccount {
        full_name: require(full_name, MSG_FULL_NAME_REQUIRED)?,
        email: require(email, MSG_EMAIL_REQUIRED)?,
        password: require(password, MSG_PASSWORD_REQUIRED)?,
    })
}

pub fn validate_credentials<'a>(
    email: Option<&'a str>,
    password: Option<&'a str>,
) -> Result<Credentials<'a>, String> {
    Ok(Credentials {
        email: require(email, MSG_EMAIL_REQUIRED)?,
        password: require(password, MSG_PASSWORD_REQUIRED)?,
    })
}
