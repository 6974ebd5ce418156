use chrono::Utc;

use super::repository::Repository;
use super::types::{SignupProgress, StepPayload, StepSubmission};

/// Collects step answers for the signup wizard
#[derive(Clone)]
pub struct SignupActions {
    repository: Repository,
}

impl SignupActions {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn submit_signup_step(
        &self,
        step_name: &str,
        provided_dependencies: &[&str],
        payload: StepPayload,
    ) -> Result<(), String> {
        log::debug!("submit step {step_name}: {payload:?}");
        self.repository.insert_submission(StepSubmission {
            step_name: step_name.to_string(),
            provided_dependencies: provided_dependencies
                .iter()
                .map(|d| d.to_string())
                .collect(),
            payload,
            submitted: Utc::now(),
        })
    }

    pub fn progress(&self) -> SignupProgress {
        self.repository.progress().unwrap_or_default()
    }
}
