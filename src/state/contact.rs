// Contact form state - fields, validation and submission status
use crate::error::{FolioError, Result};
use std::time::{Duration, Instant};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(FolioError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(FolioError::MissingField("email"));
        }
        if self.message.trim().is_empty() {
            return Err(FolioError::MissingField("message"));
        }

        match self.email.trim().split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(FolioError::InvalidEmail),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ContactStatus {
    Idle,
    Sending,
    Sent { at: Instant },
    Failed(String),
}

pub struct ContactState {
    pub form: ContactForm,
    pub status: ContactStatus,
    reset_after: Duration,
}

impl ContactState {
    pub fn new(reset_after: Duration) -> Self {
        Self {
            form: ContactForm::default(),
            status: ContactStatus::Idle,
            reset_after,
        }
    }

    pub fn is_sending(&self) -> bool {
        self.status == ContactStatus::Sending
    }

    /// Validate and switch to `Sending`, returning the snapshot to deliver.
    pub fn begin_submit(&mut self) -> Result<ContactForm> {
        if self.is_sending() {
            return Err(FolioError::SubmissionInFlight);
        }
        self.form.validate()?;
        self.status = ContactStatus::Sending;
        Ok(self.form.clone())
    }

    pub fn finish_submit(&mut self, result: std::result::Result<(), String>, now: Instant) {
        match result {
            Ok(()) => {
                self.form = ContactForm::default();
                self.status = ContactStatus::Sent { at: now };
            }
            Err(reason) => self.status = ContactStatus::Failed(reason),
        }
    }

    /// Return a `Sent` status to `Idle` once it has been shown long enough.
    pub fn expire_status(&mut self, now: Instant) {
        if let ContactStatus::Sent { at } = self.status {
            if now.saturating_duration_since(at) >= self.reset_after {
                self.status = ContactStatus::Idle;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            message: "Hola".to_string(),
        }
    }

    #[test]
    fn test_validation() {
        assert!(filled().validate().is_ok());

        let mut form = filled();
        form.name = "   ".to_string();
        assert!(matches!(form.validate(), Err(FolioError::MissingField("name"))));

        let mut form = filled();
        form.message.clear();
        assert!(matches!(form.validate(), Err(FolioError::MissingField("message"))));

        for email in ["ana", "@example.com", "ana@"] {
            let mut form = filled();
            form.email = email.to_string();
            assert!(matches!(form.validate(), Err(FolioError::InvalidEmail)), "{}", email);
        }
    }

    #[test]
    fn test_successful_submission_clears_form() {
        let mut state = ContactState::new(Duration::from_secs(5));
        state.form = filled();

        let snapshot = state.begin_submit().unwrap();
        assert_eq!(snapshot, filled());
        assert!(state.is_sending());
        assert!(matches!(state.begin_submit(), Err(FolioError::SubmissionInFlight)));

        let now = Instant::now();
        state.finish_submit(Ok(()), now);
        assert_eq!(state.form, ContactForm::default());
        assert_eq!(state.status, ContactStatus::Sent { at: now });

        state.expire_status(now + Duration::from_secs(4));
        assert!(matches!(state.status, ContactStatus::Sent { .. }));
        state.expire_status(now + Duration::from_secs(5));
        assert_eq!(state.status, ContactStatus::Idle);
    }

    #[test]
    fn test_failed_submission_keeps_form() {
        let mut state = ContactState::new(Duration::from_secs(5));
        state.form = filled();
        state.begin_submit().unwrap();
        state.finish_submit(Err("disk full".to_string()), Instant::now());
        assert_eq!(state.form, filled());
        assert_eq!(state.status, ContactStatus::Failed("disk full".to_string()));

        // Failure stays until the next attempt
        state.expire_status(Instant::now() + Duration::from_secs(60));
        assert!(matches!(state.status, ContactStatus::Failed(_)));
        assert!(state.begin_submit().is_ok());
    }

    #[test]
    fn test_invalid_form_does_not_start_sending() {
        let mut state = ContactState::new(Duration::from_secs(5));
        assert!(state.begin_submit().is_err());
        assert_eq!(state.status, ContactStatus::Idle);
    }
}
