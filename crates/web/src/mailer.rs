use anyhow::{Context, Result};
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use storage::notify::{Notifier, NotifyError};

use crate::config::SmtpConfig;

/// SMTP-backed implementation of the storage notifier seam. One message
/// per call; moderation traffic is far too small to warrant connection
/// reuse.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self> {
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)
            .context("Failed to build SMTP transport")?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        let sender = config
            .sender
            .parse()
            .context("MAIL_SENDER is not a valid address")?;

        Ok(Self { transport, sender })
    }
}

#[async_trait::async_trait]
impl Notifier for SmtpMailer {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<(), NotifyError> {
        let to: Mailbox = recipient
            .parse()
            .map_err(|_| NotifyError(format!("invalid recipient address {recipient:?}")))?;

        let message = Message::builder()
            .from(self.sender.clone())
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| NotifyError(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotifyError(e.to_string()))?;

        Ok(())
    }
}
