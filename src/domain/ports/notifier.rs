use async_trait::async_trait;

/// Outbound notification channel. Delivery is best-effort: the dispatcher
/// logs and swallows failures, so implementations only need to report them.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, recipient: &str, subject: &str, body: &str) -> Result<(), String>;

    fn provider_name(&self) -> &'static str;
}
