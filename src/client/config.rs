use serde::Deserialize;

/// Environment variable holding the account username.
pub const USERNAME_ENV: &str = "SMSBROADCAST_USERNAME";
/// Environment variable holding the account password.
pub const PASSWORD_ENV: &str = "SMSBROADCAST_PASSWORD";
/// Environment variable holding the optional sender id.
pub const SENDER_ENV: &str = "SMSBROADCAST_SENDER";

/// Settings a [`SmsBroadcastClient`](super::SmsBroadcastClient) is constructed from.
///
/// Deserializable from any serde source (TOML, JSON, a `config` layer, ...).
/// `username` and `password` are required at construction even though they
/// are optional here, so a partially filled source yields a typed error
/// instead of a deserialization failure.
#[derive(Clone, Default, Deserialize)]
pub struct ClientConfig {
    /// Same username as for the SMS Broadcast website.
    #[serde(default)]
    pub username: Option<String>,
    /// Same password as for the SMS Broadcast website.
    #[serde(default)]
    pub password: Option<String>,
    /// Sender id applied at construction; leave unset for the gateway default.
    #[serde(default, alias = "sender")]
    pub sender_name: Option<String>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("sender_name", &self.sender_name)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            password: Some(password.into()),
            sender_name: None,
        }
    }

    pub fn with_sender_name(mut self, sender_name: impl Into<String>) -> Self {
        self.sender_name = Some(sender_name.into());
        self
    }

    /// Read `SMSBROADCAST_USERNAME`, `SMSBROADCAST_PASSWORD` and `SMSBROADCAST_SENDER`.
    ///
    /// Unset variables stay `None`.
    pub fn from_env() -> Self {
        Self {
            username: std::env::var(USERNAME_ENV).ok(),
            password: std::env::var(PASSWORD_ENV).ok(),
            sender_name: std::env::var(SENDER_ENV).ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_partial_sources() {
        let config: ClientConfig =
            serde_json::from_str(r#"{ "username": "user", "sender": "MyShop" }"#).unwrap();
        assert_eq!(config.username.as_deref(), Some("user"));
        assert_eq!(config.password, None);
        assert_eq!(config.sender_name.as_deref(), Some("MyShop"));

        let config: ClientConfig = serde_json::from_str("{}").unwrap();
        assert!(config.username.is_none());
    }

    #[test]
    fn builder_methods_fill_fields() {
        let config = ClientConfig::new("user", "pass").with_sender_name("MyShop");
        assert_eq!(config.username.as_deref(), Some("user"));
        assert_eq!(config.password.as_deref(), Some("pass"));
        assert_eq!(config.sender_name.as_deref(), Some("MyShop"));
    }

    #[test]
    fn debug_hides_password() {
        let rendered = format!("{:?}", ClientConfig::new("user", "hunter2"));
        assert!(rendered.contains("user"));
        assert!(!rendered.contains("hunter2"));
    }
}
