use serde::Serialize;
use sqlx::PgPool;
use utoipa::ToSchema;

use crate::catalog::Catalog;
use crate::error::{Result, StorageError};
use crate::models::Runner;
use crate::notify::{Notifier, NotifyError};
use crate::repository::{RunRepository, RunnerRepository};

const SITE_NAME: &str = "Delverank";

/// Result of a flag operation. The flag itself is the authoritative state;
/// notification is best-effort and its failure never rolls the flag back.
#[derive(Debug, Serialize, ToSchema)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FlagOutcome {
    Flagged,
    FlaggedButNotNotified { cause: String },
}

pub struct ModerationService<'a> {
    pool: &'a PgPool,
    catalog: &'a Catalog,
}

impl<'a> ModerationService<'a> {
    pub fn new(pool: &'a PgPool, catalog: &'a Catalog) -> Self {
        Self { pool, catalog }
    }

    /// Flag a run with a removal reason, excluding it from rankings, and
    /// notify the owner if they opted in. Authorization is the caller's
    /// concern; this trusts whoever invokes it.
    pub async fn flag(
        &self,
        run_id: i64,
        reason: &str,
        notifier: &dyn Notifier,
    ) -> Result<FlagOutcome> {
        if reason.trim().is_empty() {
            return Err(StorageError::ConstraintViolation(
                "flag reason must not be empty".to_string(),
            ));
        }

        let runs = RunRepository::new(self.pool);
        let run = runs.find_by_id(run_id).await?;
        let runner = RunnerRepository::new(self.pool)
            .find_by_id(run.runner_id)
            .await?;

        runs.set_flag(run_id, reason).await?;
        tracing::info!(run_id, reason, "run flagged");

        if !wants_flag_mail(&runner) {
            return Ok(FlagOutcome::Flagged);
        }

        let category_name = self
            .catalog
            .category_by_id(run.category_id)
            .map(|c| c.name.as_str())
            .unwrap_or("(unknown category)");
        let (subject, body) = flag_mail(&runner.username, category_name, reason);

        match notifier.send(&runner.email, &subject, &body).await {
            Ok(()) => Ok(FlagOutcome::Flagged),
            Err(NotifyError(cause)) => {
                tracing::warn!(run_id, %cause, "run flagged but owner not notified");
                Ok(FlagOutcome::FlaggedButNotNotified { cause })
            }
        }
    }

    /// Permanently delete a run. Subsequent lookups of the id are NotFound.
    pub async fn delete(&self, run_id: i64) -> Result<()> {
        RunRepository::new(self.pool).delete(run_id).await?;
        tracing::info!(run_id, "run deleted");
        Ok(())
    }
}

fn wants_flag_mail(runner: &Runner) -> bool {
    runner.email_on_flag && !runner.email.is_empty()
}

fn flag_mail(username: &str, category_name: &str, reason: &str) -> (String, String) {
    let subject = format!("{SITE_NAME} run flagged");
    let body = format!(
        "Hi {username}.\n\nThis is to inform you that your {SITE_NAME} run \
         in the category {category_name} has been flagged as violating the \
         rules by one of the moderators. The reason they gave was the \
         following:\n\n{reason}"
    );
    (subject, body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn runner(email: &str, email_on_flag: bool) -> Runner {
        Runner {
            runner_id: 1,
            username: "delver".to_string(),
            email: email.to_string(),
            country: "SE".to_string(),
            steam_id: 0,
            email_on_flag,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_notification_requires_opt_in_and_address() {
        assert!(wants_flag_mail(&runner("d@example.com", true)));
        assert!(!wants_flag_mail(&runner("d@example.com", false)));
        assert!(!wants_flag_mail(&runner("", true)));
    }

    #[test]
    fn test_flag_mail_names_category_and_reason() {
        let (subject, body) = flag_mail("delver", "Any% Speedrun", "spliced video");
        assert_eq!(subject, "Delverank run flagged");
        assert!(body.starts_with("Hi delver."));
        assert!(body.contains("in the category Any% Speedrun"));
        assert!(body.ends_with("spliced video"));
    }
}
