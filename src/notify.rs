//! Transient toast notices shown by the login form and the assistant.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Default,
    Destructive,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
    pub severity: Severity,
}

impl Notice {
    const fn info(title: &'static str, description: &'static str) -> Self {
        Self { title, description, severity: Severity::Default }
    }

    const fn destructive(title: &'static str, description: &'static str) -> Self {
        Self { title, description, severity: Severity::Destructive }
    }

    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

pub const LOGIN_SUCCESS: Notice = Notice::info("Login successful", "Welcome back, Alex Smith!");
pub const LOGIN_FAILED: Notice = Notice::destructive("Login failed", "Invalid email or password");
pub const PASSWORD_RESET: Notice =
    Notice::info("Password Reset", "Check your email for reset instructions.");
pub const TRANSFER_SUCCESS: Notice =
    Notice::info("Transfer Successful", "Your transfer has been processed.");
pub const INVALID_SECURITY_CODE: Notice =
    Notice::destructive("Invalid Security Code", "Please try again.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_are_destructive() {
        assert!(LOGIN_FAILED.is_destructive());
        assert!(INVALID_SECURITY_CODE.is_destructive());
    }

    #[test]
    fn outcomes_use_default_styling() {
        for n in [LOGIN_SUCCESS, PASSWORD_RESET, TRANSFER_SUCCESS] {
            assert_eq!(n.severity, Severity::Default, "{}", n.title);
        }
    }
}
