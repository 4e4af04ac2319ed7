use crate::error::{NotifyError, Result};
use crate::Reporter;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing;
use vigil_common::Finding;

const SUBJECT: &str = "Vigil alert";

/// Sends one plain-text alert email per run, all recipients on the same
/// message.
pub struct EmailReporter {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
    to: Vec<String>,
}

impl EmailReporter {
    pub fn new(
        smtp_host: &str,
        smtp_port: u16,
        username: Option<&str>,
        password: Option<&str>,
        from: &str,
        to: &[String],
    ) -> Result<Self> {
        if to.is_empty() {
            return Err(NotifyError::InvalidConfig(
                "smtp.to must list at least one recipient".to_string(),
            ));
        }

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_host)?.port(smtp_port);
        if let (Some(user), Some(pass)) = (username, password) {
            builder = builder.credentials(Credentials::new(user.to_string(), pass.to_string()));
        }

        Ok(Self {
            transport: builder.build(),
            from: from.to_string(),
            to: to.to_vec(),
        })
    }

    /// One `<title>: <message>` line per finding.
    pub fn format_body(findings: &[Finding]) -> String {
        findings
            .iter()
            .map(|f| format!("{}: {}\n", f.title, f.message))
            .collect()
    }
}

#[async_trait]
impl Reporter for EmailReporter {
    async fn report(&self, findings: &[Finding]) -> Result<()> {
        let mut builder = Message::builder()
            .from(self.from.parse()?)
            .subject(SUBJECT)
            .header(ContentType::TEXT_PLAIN);
        for recipient in &self.to {
            builder = builder.to(recipient.parse()?);
        }
        let email = builder.body(Self::format_body(findings))?;

        self.transport.send(email).await?;
        tracing::info!(
            recipients = self.to.len(),
            findings = findings.len(),
            "Alert email sent"
        );
        Ok(())
    }

    fn channel_name(&self) -> &str {
        "email"
    }
}
