//! Client-side form validation and the login form state machine

use std::rc::Rc;
use yew::prelude::*;

/// Syntactic email check: one `@`, a non-empty local part, and a dotted
/// domain whose labels are non-empty. No whitespace anywhere.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Per-field validation messages for the login form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFieldErrors {
    pub email: Option<&'static str>,
    pub password: Option<&'static str>,
}

impl LoginFieldErrors {
    pub const fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

pub fn validate_login(email: &str, password: &str) -> Result<(), LoginFieldErrors> {
    let email = email.trim();
    let errors = LoginFieldErrors {
        email: if email.is_empty() {
            Some("Please enter your email")
        } else if !is_valid_email(email) {
            Some("Please enter a valid email")
        } else {
            None
        },
        password: password
            .is_empty()
            .then_some("Please enter your password"),
    };

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

/// Login view state: `Idle -> Submitting -> (Succeeded | back to Idle with an error)`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginFormState {
    pub phase: LoginPhase,
    /// At most one message is shown at a time
    pub error: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum LoginFormAction {
    Submit,
    Succeeded,
    Failed(String),
    /// The attempt was abandoned; back to idle with no message
    Cancelled,
    DismissError,
}

impl LoginFormState {
    pub fn is_submitting(&self) -> bool {
        self.phase == LoginPhase::Submitting
    }
}

impl Reducible for LoginFormState {
    type Action = LoginFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            // A second submit while one is in flight is ignored
            LoginFormAction::Submit if self.is_submitting() => self,
            LoginFormAction::Submit => Rc::new(Self {
                phase: LoginPhase::Submitting,
                error: None,
            }),
            LoginFormAction::Succeeded => Rc::new(Self {
                phase: LoginPhase::Succeeded,
                error: None,
            }),
            LoginFormAction::Failed(message) => Rc::new(Self {
                phase: LoginPhase::Idle,
                error: Some(message),
            }),
            LoginFormAction::Cancelled => Rc::new(Self::default()),
            LoginFormAction::DismissError => Rc::new(Self {
                error: None,
                ..(*self).clone()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_syntax() {
        for valid in ["user@test.com", "a.b+c@sub.example.org", "x@y.io"] {
            assert!(is_valid_email(valid), "{valid}");
        }
        for invalid in [
            "",
            "user",
            "@test.com",
            "user@",
            "user@test",
            "user@@test.com",
            "user@test..com",
            "user@.com",
            "us er@test.com",
        ] {
            assert!(!is_valid_email(invalid), "{invalid}");
        }
    }

    #[test]
    fn test_validate_login_reports_each_field() {
        assert_eq!(validate_login("user@test.com", "secret"), Ok(()));

        let errors = validate_login("", "").unwrap_err();
        assert_eq!(errors.email, Some("Please enter your email"));
        assert_eq!(errors.password, Some("Please enter your password"));

        let errors = validate_login("not-an-email", "secret").unwrap_err();
        assert_eq!(errors.email, Some("Please enter a valid email"));
        assert_eq!(errors.password, None);
    }

    #[test]
    fn test_surrounding_whitespace_is_tolerated() {
        assert_eq!(validate_login("  user@test.com ", "secret"), Ok(()));
    }

    #[test]
    fn test_failed_submit_returns_to_idle_with_one_error() {
        let state = Rc::new(LoginFormState::default())
            .reduce(LoginFormAction::Submit)
            .reduce(LoginFormAction::Failed("Invalid email or password.".into()));

        assert_eq!(state.phase, LoginPhase::Idle);
        assert_eq!(state.error.as_deref(), Some("Invalid email or password."));

        // Resubmitting replaces the old message
        let state = state.reduce(LoginFormAction::Submit);
        assert!(state.is_submitting());
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_submit_while_submitting_is_ignored() {
        let submitting = Rc::new(LoginFormState::default()).reduce(LoginFormAction::Submit);
        let again = Rc::clone(&submitting).reduce(LoginFormAction::Submit);
        assert!(Rc::ptr_eq(&submitting, &again));
    }

    #[test]
    fn test_dismiss_keeps_phase() {
        let state = Rc::new(LoginFormState::default())
            .reduce(LoginFormAction::Failed("boom".into()))
            .reduce(LoginFormAction::DismissError);
        assert_eq!(*state, LoginFormState::default());

        let state = Rc::new(LoginFormState::default())
            .reduce(LoginFormAction::Submit)
            .reduce(LoginFormAction::Succeeded);
        assert_eq!(state.phase, LoginPhase::Succeeded);
    }

    #[test]
    fn test_cancelled_attempt_shows_nothing() {
        let state = Rc::new(LoginFormState::default())
            .reduce(LoginFormAction::Submit)
            .reduce(LoginFormAction::Cancelled);
        assert_eq!(*state, LoginFormState::default());
    }
}
