use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("Notification failed: {0}")]
pub struct NotifyError(pub String);

/// Outbound mail seam consumed by the moderation pipeline. The production
/// implementation lives at the application edge; tests substitute a
/// recording stub.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn send(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> std::result::Result<(), NotifyError>;
}
