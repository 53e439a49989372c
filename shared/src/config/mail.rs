//! Outbound email configuration module

use serde::{Deserialize, Serialize};

use super::{non_empty, parse_or, Lookup};

/// Email transport selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Deliver through an SMTP relay
    Smtp,
    /// Write messages to the log instead of sending them
    Log,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "smtp" | "gmail" => Ok(MailProvider::Smtp),
            "log" | "mock" | "console" => Ok(MailProvider::Log),
            _ => Err(format!("Invalid mail provider: {}", s)),
        }
    }
}

/// Outbound email configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Transport used to deliver messages
    pub provider: MailProvider,

    /// SMTP relay host
    pub smtp_host: String,

    /// SMTP relay port; 465 uses implicit TLS, anything else STARTTLS
    pub smtp_port: u16,

    /// SMTP username, also the default sender address
    #[serde(default)]
    pub username: Option<String>,

    /// SMTP password or app password
    #[serde(default, skip_serializing)]
    pub password: Option<String>,

    /// Display name on outgoing messages
    pub from_name: String,

    /// Sender address, defaults to `username`
    #[serde(default)]
    pub from_address: Option<String>,

    /// Seconds before an SMTP exchange is abandoned
    pub timeout_secs: u64,
}

impl std::fmt::Debug for MailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MailConfig")
            .field("provider", &self.provider)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("from_name", &self.from_name)
            .field("from_address", &self.from_address)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::Log,
            smtp_host: String::from("smtp.gmail.com"),
            smtp_port: 465,
            username: None,
            password: None,
            from_name: String::from("CareerCatalyst"),
            from_address: None,
            timeout_secs: 30,
        }
    }
}

impl MailConfig {
    /// Address messages are sent from
    pub fn sender_address(&self) -> Option<&str> {
        self.from_address
            .as_deref()
            .or(self.username.as_deref())
    }

    pub(crate) fn from_lookup(lookup: Lookup<'_>) -> Self {
        let defaults = Self::default();
        let username = non_empty(lookup, "EMAIL_USER");
        let password = non_empty(lookup, "EMAIL_PASS");

        Self {
            provider: non_empty(lookup, "MAIL_PROVIDER")
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(defaults.provider),
            smtp_host: non_empty(lookup, "SMTP_HOST").unwrap_or(defaults.smtp_host),
            smtp_port: parse_or(lookup, "SMTP_PORT", defaults.smtp_port),
            username,
            password,
            from_name: non_empty(lookup, "MAIL_FROM_NAME").unwrap_or(defaults.from_name),
            from_address: non_empty(lookup, "MAIL_FROM_ADDRESS"),
            timeout_secs: parse_or(lookup, "SMTP_TIMEOUT_SECS", defaults.timeout_secs),
        }
    }

    pub(crate) fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.provider == MailProvider::Smtp {
            if self.username.is_none() {
                problems.push("EMAIL_USER is required when MAIL_PROVIDER=smtp".to_string());
            }
            if self.password.is_none() {
                problems.push("EMAIL_PASS is required when MAIL_PROVIDER=smtp".to_string());
            }
        }
        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_address_prefers_explicit_from() {
        let mut config = MailConfig {
            username: Some("smtp-user@gmail.com".to_string()),
            ..Default::default()
        };
        assert_eq!(config.sender_address(), Some("smtp-user@gmail.com"));

        config.from_address = Some("noreply@careercatalyst.app".to_string());
        assert_eq!(config.sender_address(), Some("noreply@careercatalyst.app"));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = MailConfig {
            password: Some("hunter2".to_string()),
            ..Default::default()
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
