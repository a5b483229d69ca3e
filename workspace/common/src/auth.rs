//! Demo credential gate.
//!
//! This is a client-side stand-in for real authentication: a hard-coded
//! credential pair, a local format check, and a static cookie marker. It is
//! explicitly not a security boundary; productionizing it means replacing
//! `verify` with a call to an identity service.

use thiserror::Error;

/// Credentials accepted by the demo gate.
pub const DEMO_EMAIL: &str = "admin@crimeanalyzer.org";
pub const DEMO_PASSWORD: &str = "Admin@123";

pub const MIN_PASSWORD_LEN: usize = 8;

/// Cookie holding the static authentication marker.
pub const AUTH_COOKIE_NAME: &str = "auth_token";
pub const AUTH_COOKIE_VALUE: &str = "mock_jwt_token";
const AUTH_COOKIE_MAX_AGE_SECS: u32 = 86_400;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
    #[error("Invalid email or password. Please try again.")]
    InvalidCredentials,
}

/// Shape check: something before the `@`, a domain with a dot, no
/// whitespace anywhere. Deliberately loose; the backend would be the real
/// judge if there were one.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Full gate: format checks first, then a byte-for-byte comparison against
/// the demo pair. Format failures are cheap and callers surface them before
/// simulating any network latency.
pub fn verify(email: &str, password: &str) -> Result<(), AuthError> {
    if !validate_email(email) {
        return Err(AuthError::InvalidEmail);
    }
    if !validate_password(password) {
        return Err(AuthError::PasswordTooShort);
    }
    if email == DEMO_EMAIL && password == DEMO_PASSWORD {
        Ok(())
    } else {
        Err(AuthError::InvalidCredentials)
    }
}

/// The `document.cookie` assignment string for a successful login.
pub fn cookie_string() -> String {
    format!(
        "{AUTH_COOKIE_NAME}={AUTH_COOKIE_VALUE}; max-age={AUTH_COOKIE_MAX_AGE_SECS}; path=/; secure; samesite=strict"
    )
}

/// The assignment string that expires the marker immediately.
pub fn cookie_clear_string() -> String {
    format!("{AUTH_COOKIE_NAME}=; max-age=0; path=/; secure; samesite=strict")
}

/// Whether a raw `document.cookie` value carries the auth marker.
pub fn cookie_has_marker(raw_cookies: &str) -> bool {
    raw_cookies
        .split(';')
        .any(|pair| pair.trim() == format!("{AUTH_COOKIE_NAME}={AUTH_COOKIE_VALUE}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_pair_passes() {
        assert_eq!(verify(DEMO_EMAIL, DEMO_PASSWORD), Ok(()));
    }

    #[test]
    fn single_character_deviation_is_rejected() {
        assert_eq!(
            verify("admin@crimeanalyzer.orb", DEMO_PASSWORD),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            verify(DEMO_EMAIL, "Admin@124"),
            Err(AuthError::InvalidCredentials)
        );
        assert_eq!(
            verify("Admin@crimeanalyzer.org", DEMO_PASSWORD),
            Err(AuthError::InvalidCredentials)
        );
    }

    #[test]
    fn malformed_email_fails_before_credentials_are_compared() {
        assert_eq!(verify("not-an-email", DEMO_PASSWORD), Err(AuthError::InvalidEmail));
        assert_eq!(verify("a b@x.com", DEMO_PASSWORD), Err(AuthError::InvalidEmail));
        assert_eq!(verify("@x.com", DEMO_PASSWORD), Err(AuthError::InvalidEmail));
        assert_eq!(verify("user@nodot", DEMO_PASSWORD), Err(AuthError::InvalidEmail));
        assert_eq!(verify("user@.com", DEMO_PASSWORD), Err(AuthError::InvalidEmail));
    }

    #[test]
    fn short_password_is_rejected_locally() {
        assert_eq!(verify(DEMO_EMAIL, "Admin@1"), Err(AuthError::PasswordTooShort));
        assert!(validate_password("12345678"));
        assert!(!validate_password("1234567"));
    }

    #[test]
    fn email_shape_accepts_dotted_hosts() {
        assert!(validate_email("analyst@data.crimeanalyzer.org"));
        assert!(validate_email("a@b.co"));
        assert!(!validate_email("a@b@c.co"));
    }

    #[test]
    fn cookie_marker_round_trip() {
        assert!(cookie_has_marker("auth_token=mock_jwt_token"));
        assert!(cookie_has_marker("theme=dark; auth_token=mock_jwt_token"));
        assert!(!cookie_has_marker("auth_token=forged"));
        assert!(!cookie_has_marker(""));
        assert!(cookie_string().starts_with("auth_token=mock_jwt_token; max-age=86400"));
    }
}
