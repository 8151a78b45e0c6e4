//! Auth Forms Logic
//!
//! Advisory field checks, the password strength meter, and the login and
//! registration flows. The backend has the final word on every rule here.

use std::sync::LazyLock;

use regex::Regex;

use crate::api::{ApiClient, Transport};
use crate::error::{ApiResult, ValidationError};
use crate::models::{Credential, NewUser};
use crate::session::{self, KeyValueStore};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));
static USERNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_]{3,20}$").expect("valid username regex"));

pub const MIN_PASSWORD_LEN: usize = 8;

/// Form inputs that get checked on blur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Username,
    Email,
    Password,
    ConfirmPassword,
}

/// Check one input. All fields are required; some also have a format.
pub fn validate_field(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    match field {
        Field::Email if !EMAIL_RE.is_match(value) => Err(ValidationError::InvalidEmail),
        Field::Username if !USERNAME_RE.is_match(value) => Err(ValidationError::InvalidUsername),
        Field::Password if value.chars().count() < MIN_PASSWORD_LEN => {
            Err(ValidationError::PasswordTooShort)
        }
        _ => Ok(()),
    }
}

// ========================
// Password Strength
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strength {
    Weak,
    Medium,
    Strong,
}

impl Strength {
    pub fn label(self) -> &'static str {
        match self {
            Strength::Weak => "Weak",
            Strength::Medium => "Medium",
            Strength::Strong => "Strong",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Strength::Weak => "strength-weak",
            Strength::Medium => "strength-medium",
            Strength::Strong => "strength-strong",
        }
    }
}

/// One point each for length >= 8, length >= 12, lowercase, uppercase,
/// digit, and anything else. `None` for an empty password.
pub fn password_strength(password: &str) -> Option<Strength> {
    if password.is_empty() {
        return None;
    }
    let len = password.chars().count();
    let checks = [
        len >= 8,
        len >= 12,
        password.chars().any(|c| c.is_ascii_lowercase()),
        password.chars().any(|c| c.is_ascii_uppercase()),
        password.chars().any(|c| c.is_ascii_digit()),
        password.chars().any(|c| !c.is_ascii_alphanumeric()),
    ];
    let score = checks.iter().filter(|&&ok| ok).count();
    Some(match score {
        0..=2 => Strength::Weak,
        3..=4 => Strength::Medium,
        _ => Strength::Strong,
    })
}

// ========================
// Flows
// ========================

/// Raw registration inputs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    /// Only the password confirmation blocks submission; the rest is advisory
    pub fn to_new_user(&self) -> Result<NewUser, ValidationError> {
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(NewUser {
            full_name: self.full_name.clone(),
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
            role: "user".to_string(),
        })
    }
}

/// Exchange credentials for a token and persist it
pub async fn login<T: Transport, S: KeyValueStore>(
    client: &ApiClient<T, S>,
    username: &str,
    password: &str,
) -> ApiResult<Credential> {
    let credential = client.login(username, password).await?;
    session::save_credential(client.storage(), &credential);
    log::info!("Logged in as {}", username);
    Ok(credential)
}

pub async fn register<T, S>(client: &ApiClient<T, S>, user: &NewUser) -> ApiResult<()>
where
    T: Transport,
    S: KeyValueStore,
{
    client.register(user).await?;
    log::info!("Registered {}", user.username);
    Ok(())
}
