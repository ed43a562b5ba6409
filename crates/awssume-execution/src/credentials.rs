//! Temporary credentials and their environment-variable form.

/// AWS Access Key ID environment variable name
pub const AWS_ACCESS_KEY_ID_ENV_VAR: &str = "AWS_ACCESS_KEY_ID";

/// AWS Secret Access Key environment variable name
pub const AWS_SECRET_ACCESS_KEY_ENV_VAR: &str = "AWS_SECRET_ACCESS_KEY";

/// Session token under the name current SDKs read
pub const AWS_SESSION_TOKEN_ENV_VAR: &str = "AWS_SESSION_TOKEN";

/// Session token under the name older tools (boto2 and friends) read
pub const AWS_SECURITY_TOKEN_ENV_VAR: &str = "AWS_SECURITY_TOKEN";

/// Short-lived credentials returned by `sts:AssumeRole`.
#[derive(Clone, PartialEq, Eq)]
pub struct TemporaryCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
}

impl TemporaryCredentials {
    /// The variables added to the child's environment.
    ///
    /// The session token is exported twice, once per variable name.
    pub fn env_vars(&self) -> Vec<(String, String)> {
        vec![
            (AWS_ACCESS_KEY_ID_ENV_VAR.to_string(), self.access_key_id.clone()),
            (
                AWS_SECRET_ACCESS_KEY_ENV_VAR.to_string(),
                self.secret_access_key.clone(),
            ),
            (AWS_SESSION_TOKEN_ENV_VAR.to_string(), self.session_token.clone()),
            (AWS_SECURITY_TOKEN_ENV_VAR.to_string(), self.session_token.clone()),
        ]
    }
}

// Secrets stay out of logs and panic messages.
impl std::fmt::Debug for TemporaryCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemporaryCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("session_token", &"** redacted **")
            .finish()
    }
}
