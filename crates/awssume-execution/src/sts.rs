//! The STS collaborator.
//!
//! [`RoleAssumer`] is the narrow seam the executor depends on;
//! [`StsRoleAssumer`] implements it with the AWS SDK.

use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sts::error::DisplayErrorContext;

use awssume_core::{AwssumeError, Result};

use crate::credentials::TemporaryCredentials;

/// Input of a single `sts:AssumeRole` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssumeRoleRequest {
    pub role_arn: String,
    pub role_session_name: String,
    pub duration_seconds: i64,
}

/// Exchanges a Role reference for temporary credentials.
#[async_trait]
pub trait RoleAssumer: Send + Sync {
    /// Performs exactly one AssumeRole call. Implementations must not retry.
    async fn assume_role(&self, request: &AssumeRoleRequest) -> Result<TemporaryCredentials>;
}

/// [`RoleAssumer`] backed by `aws-sdk-sts`.
#[derive(Debug, Clone)]
pub struct StsRoleAssumer {
    client: aws_sdk_sts::Client,
}

impl StsRoleAssumer {
    /// Loads the ambient AWS configuration (environment, profiles, IMDS, ...)
    /// and builds an STS client from it.
    ///
    /// Fails with [`AwssumeError::LoadAwsConfig`] if the resolved
    /// configuration has no credentials provider or no region.
    pub async fn from_env() -> Result<Self> {
        let sdk_config = aws_config::load_from_env().await;
        Self::from_sdk_config(&sdk_config)
    }

    pub fn from_sdk_config(sdk_config: &SdkConfig) -> Result<Self> {
        if sdk_config.credentials_provider().is_none() {
            return Err(AwssumeError::LoadAwsConfig(
                "no credentials provider could be resolved".to_string(),
            ));
        }
        let Some(region) = sdk_config.region() else {
            return Err(AwssumeError::LoadAwsConfig(
                "no AWS region could be resolved".to_string(),
            ));
        };

        tracing::debug!(%region, "loaded AWS config");
        Ok(Self {
            client: aws_sdk_sts::Client::new(sdk_config),
        })
    }
}

#[async_trait]
impl RoleAssumer for StsRoleAssumer {
    async fn assume_role(&self, request: &AssumeRoleRequest) -> Result<TemporaryCredentials> {
        let duration = i32::try_from(request.duration_seconds).map_err(|e| {
            AwssumeError::assume_role(&request.role_arn, format!("invalid session duration: {e}"))
        })?;

        let output = self
            .client
            .assume_role()
            .role_arn(&request.role_arn)
            .role_session_name(&request.role_session_name)
            .duration_seconds(duration)
            .send()
            .await
            .map_err(|e| {
                AwssumeError::assume_role(&request.role_arn, DisplayErrorContext(&e).to_string())
            })?;

        let credentials = output.credentials().ok_or_else(|| {
            AwssumeError::assume_role(&request.role_arn, "response contained no credentials")
        })?;

        Ok(TemporaryCredentials {
            access_key_id: credentials.access_key_id().to_string(),
            secret_access_key: credentials.secret_access_key().to_string(),
            session_token: credentials.session_token().to_string(),
        })
    }
}
