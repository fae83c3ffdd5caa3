use thiserror::Error;

use crate::notify::{self, Notice};

const DEMO_EMAIL: &str = "alex@smith.com";
const DEMO_PASSWORD: &str = "password";

#[derive(Debug, Clone, Default)]
pub struct Credential {
    pub email: String,
    pub password: String,
}

impl Credential {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self { email: email.into(), password: password.into() }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("invalid email or password")]
    InvalidCredentials,
}

impl LoginError {
    pub fn notice(&self) -> Notice {
        match self {
            LoginError::InvalidCredentials => notify::LOGIN_FAILED,
        }
    }
}

/// Compares against the single demo account. No trimming or case folding.
pub fn verify(cred: &Credential) -> Result<(), LoginError> {
    if cred.email == DEMO_EMAIL && cred.password == DEMO_PASSWORD {
        Ok(())
    } else {
        Err(LoginError::InvalidCredentials)
    }
}

/// Checks the credential and picks the toast for the outcome: the
/// welcome notice on success, the error's notice otherwise.
pub fn login(cred: &Credential) -> Result<Notice, LoginError> {
    verify(cred).map(|()| notify::LOGIN_SUCCESS)
}

pub fn forgot_password() -> Notice {
    notify::PASSWORD_RESET
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::Severity;

    #[test]
    fn demo_account_logs_in() {
        assert_eq!(verify(&Credential::new("alex@smith.com", "password")), Ok(()));
    }

    #[test]
    fn anything_else_is_rejected() {
        let cases = [
            ("alex@smith.com", "Password"),
            ("Alex@smith.com", "password"),
            (" alex@smith.com", "password"),
            ("alex@smith.com", "password "),
            ("alex@smith.com", ""),
            ("", "password"),
            ("", ""),
            ("password", "alex@smith.com"),
        ];
        for (email, password) in cases {
            assert_eq!(
                verify(&Credential::new(email, password)),
                Err(LoginError::InvalidCredentials),
                "{email:?} / {password:?}"
            );
        }
    }

    #[test]
    fn rejection_maps_to_destructive_notice() {
        let notice = LoginError::InvalidCredentials.notice();
        assert_eq!(notice.title, "Login failed");
        assert!(notice.is_destructive());
        assert!(!forgot_password().is_destructive());
    }

    #[test]
    fn login_announces_each_outcome() {
        let welcome = login(&Credential::new("alex@smith.com", "password")).unwrap();
        assert_eq!(welcome.title, "Login successful");
        assert_eq!(welcome.description, "Welcome back, Alex Smith!");
        assert_eq!(welcome.severity, Severity::Default);

        let err = login(&Credential::new("alex@smith.com", "hunter2")).unwrap_err();
        let failure = err.notice();
        assert_eq!(failure.title, "Login failed");
        assert_eq!(failure.description, "Invalid email or password");
        assert_eq!(failure.severity, Severity::Destructive);
    }
}
