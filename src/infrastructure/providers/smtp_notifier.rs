use crate::domain::ports::Notifier;
use async_trait::async_trait;
use lettre::{
    message::header::ContentType, transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

/// Sends notification emails over SMTP with implicit TLS, authenticated as
/// the business mailbox. The business address doubles as the sender.
pub struct SmtpNotifier {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpNotifier {
    pub fn new(
        server: &str,
        port: u16,
        email_address: &str,
        email_password: &str,
    ) -> Result<Self, lettre::transport::smtp::Error> {
        let creds = Credentials::new(email_address.to_string(), email_password.to_string());
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(server)?
            .port(port)
            .credentials(creds)
            .build();
        Ok(Self {
            mailer,
            from_address: email_address.to_string(),
        })
    }
}

#[async_trait]
impl Notifier for SmtpNotifier {
    async fn notify(&self, recipient: &str, subject: &str, body: &str) -> Result<(), String> {
        let email = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|e| format!("Invalid from address: {}", e))?,
            )
            .to(recipient
                .parse()
                .map_err(|e| format!("Invalid recipient address: {}", e))?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| format!("Failed to build email: {}", e))?;

        self.mailer
            .send(email)
            .await
            .map_err(|e| format!("SMTP send error: {}", e))?;

        tracing::debug!(%recipient, "notification email sent");
        Ok(())
    }

    fn provider_name(&self) -> &'static str {
        "email"
    }
}
