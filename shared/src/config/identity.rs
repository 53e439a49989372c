//! Identity provider configuration module

use serde::{Deserialize, Serialize};

use super::{non_empty, parse_or, Lookup};

/// Identity provider selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityProviderKind {
    /// Firebase Authentication through the Identity Toolkit REST API
    Firebase,
    /// Process-local account list, for development and tests
    Memory,
}

impl std::str::FromStr for IdentityProviderKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "firebase" => Ok(IdentityProviderKind::Firebase),
            "memory" | "mock" => Ok(IdentityProviderKind::Memory),
            _ => Err(format!("Invalid identity provider: {}", s)),
        }
    }
}

/// Identity provider configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct IdentityConfig {
    /// Which account system to talk to
    pub provider: IdentityProviderKind,

    /// Firebase project identifier
    #[serde(default)]
    pub project_id: Option<String>,

    /// OAuth2 bearer token with Identity Toolkit admin scope
    #[serde(default, skip_serializing)]
    pub access_token: Option<String>,

    /// Identity Toolkit base URL
    pub api_base_url: String,

    /// Seconds before a provider request is abandoned
    pub request_timeout_secs: u64,

    /// Accounts known to the in-memory provider
    #[serde(default)]
    pub seed_accounts: Vec<String>,
}

impl std::fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityConfig")
            .field("provider", &self.provider)
            .field("project_id", &self.project_id)
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("seed_accounts", &self.seed_accounts.len())
            .finish()
    }
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            provider: IdentityProviderKind::Memory,
            project_id: None,
            access_token: None,
            api_base_url: String::from("https://identitytoolkit.googleapis.com/v1"),
            request_timeout_secs: 10,
            seed_accounts: vec![],
        }
    }
}

impl IdentityConfig {
    pub(crate) fn from_lookup(lookup: Lookup<'_>) -> Self {
        let defaults = Self::default();
        Self {
            provider: non_empty(lookup, "IDENTITY_PROVIDER")
                .and_then(|raw| raw.parse().ok())
                .unwrap_or(defaults.provider),
            project_id: non_empty(lookup, "FIREBASE_PROJECT_ID"),
            access_token: non_empty(lookup, "FIREBASE_ACCESS_TOKEN"),
            api_base_url: non_empty(lookup, "IDENTITY_API_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base_url),
            request_timeout_secs: parse_or(
                lookup,
                "IDENTITY_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            ),
            seed_accounts: non_empty(lookup, "IDENTITY_SEED_ACCOUNTS")
                .map(|raw| {
                    raw.split(',')
                        .map(|email| email.trim().to_string())
                        .filter(|email| !email.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        }
    }

    pub(crate) fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if self.provider == IdentityProviderKind::Firebase {
            if self.project_id.is_none() {
                problems.push("FIREBASE_PROJECT_ID is required when IDENTITY_PROVIDER=firebase".to_string());
            }
            if self.access_token.is_none() {
                problems.push("FIREBASE_ACCESS_TOKEN is required when IDENTITY_PROVIDER=firebase".to_string());
            }
        }
        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_accounts_are_split_and_trimmed() {
        let lookup = |key: &str| match key {
            "IDENTITY_SEED_ACCOUNTS" => Some(" ada@example.com, ,grace@example.com ".to_string()),
            "IDENTITY_API_BASE_URL" => Some("http://localhost:9099/identitytoolkit.googleapis.com/v1/".to_string()),
            _ => None,
        };
        let config = IdentityConfig::from_lookup(&lookup);
        assert_eq!(config.seed_accounts, vec!["ada@example.com", "grace@example.com"]);
        assert_eq!(
            config.api_base_url,
            "http://localhost:9099/identitytoolkit.googleapis.com/v1"
        );
    }
}
