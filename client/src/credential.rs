use chimectl_core::time::{now, DateTime};
use chimectl_core::utils::Redact;
use chimectl_core::SigningCredential;
use std::fmt::{Debug, Formatter};

/// Credential that holds the access_key and secret_key.
#[derive(Default, Clone)]
pub struct Credential {
    /// Access key id for the service.
    pub access_key_id: String,
    /// Secret access key for the service.
    pub secret_access_key: String,
    /// Session token, present when the credential comes from a temporary
    /// security grant.
    pub session_token: Option<String>,
    /// Expiration time for this credential.
    pub expires_in: Option<DateTime>,
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("session_token", &Redact::from(&self.session_token))
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

impl SigningCredential for Credential {
    fn is_valid(&self) -> bool {
        if self.access_key_id.is_empty() || self.secret_access_key.is_empty() {
            return false;
        }
        // Take 120s as buffer to avoid edge cases.
        if let Some(valid) = self
            .expires_in
            .map(|v| v > now() + chrono::TimeDelta::try_minutes(2).expect("in bounds"))
        {
            return valid;
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_requires_both_key_parts() {
        let cred = Credential {
            access_key_id: "AKIDEXAMPLE".to_string(),
            secret_access_key: "secret".to_string(),
            ..Default::default()
        };
        assert!(cred.is_valid());

        let missing_secret = Credential {
            access_key_id: "AKIDEXAMPLE".to_string(),
            ..Default::default()
        };
        assert!(!missing_secret.is_valid());
        assert!(!Credential::default().is_valid());
    }

    #[test]
    fn test_is_valid_honors_expiry() {
        let expired = Credential {
            access_key_id: "AKIDEXAMPLE".to_string(),
            secret_access_key: "secret".to_string(),
            expires_in: Some(now() - chrono::TimeDelta::try_minutes(1).unwrap()),
            ..Default::default()
        };
        assert!(!expired.is_valid());

        let live = Credential {
            access_key_id: "AKIDEXAMPLE".to_string(),
            secret_access_key: "secret".to_string(),
            expires_in: Some(now() + chrono::TimeDelta::try_hours(1).unwrap()),
            ..Default::default()
        };
        assert!(live.is_valid());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let cred = Credential {
            access_key_id: "AKIDEXAMPLEKEYID".to_string(),
            secret_access_key: "super-secret-value".to_string(),
            session_token: Some("short".to_string()),
            expires_in: None,
        };

        let out = format!("{cred:?}");
        assert!(!out.contains("super-secret-value"));
        assert!(!out.contains("short"));
    }
}
