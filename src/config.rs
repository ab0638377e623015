use crate::domain::entities::calendar::DEFAULT_BOOKING_WINDOW_DAYS;
use std::env;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct Config {
    /// Directory holding the tickets and appointments documents.
    pub data_dir: PathBuf,
    pub smtp_server: String,
    pub smtp_port: u16,
    /// Business mailbox: notification sender and default recipient.
    pub email_address: String,
    pub email_password: String,
    pub booking_window_days: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let data_dir = env::var("DATA_DIR").unwrap_or_else(|_| ".".to_string()).into();

        let smtp_server =
            env::var("SMTP_SERVER").unwrap_or_else(|_| "smtp.hostinger.com".to_string());

        let smtp_port = env::var("SMTP_PORT")
            .unwrap_or_else(|_| "465".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidSmtpPort)?;

        let email_address =
            env::var("EMAIL_ADDRESS").map_err(|_| ConfigError::MissingEmailAddress)?;

        let email_password =
            env::var("EMAIL_PASSWORD").map_err(|_| ConfigError::MissingEmailPassword)?;

        let booking_window_days = env::var("BOOKING_WINDOW_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_BOOKING_WINDOW_DAYS);

        Ok(Config {
            data_dir,
            smtp_server,
            smtp_port,
            email_address,
            email_password,
            booking_window_days,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("EMAIL_ADDRESS environment variable not set")]
    MissingEmailAddress,

    #[error("EMAIL_PASSWORD environment variable not set")]
    MissingEmailPassword,

    #[error("Invalid SMTP port number")]
    InvalidSmtpPort,
}
