//! Format dispatch for the configuration document.
//!
//! All format selection happens here; callers pass a [`ConfigFormat`] and
//! never branch on it themselves.

use awssume_core::{AwssumeError, ConfigFormat, Result};

use crate::dto::ConfigDocument;

/// Serializes the document in the given format.
pub fn encode(format: ConfigFormat, doc: &ConfigDocument) -> Result<Vec<u8>> {
    let fmt_name = format.extension();
    match format {
        ConfigFormat::Json => {
            let mut bytes =
                serde_json::to_vec_pretty(doc).map_err(|e| AwssumeError::marshal(fmt_name, e))?;
            bytes.push(b'\n');
            Ok(bytes)
        }
        ConfigFormat::Toml => toml::to_string_pretty(doc)
            .map(String::into_bytes)
            .map_err(|e| AwssumeError::marshal(fmt_name, e)),
        ConfigFormat::Yaml => serde_yaml::to_string(doc)
            .map(String::into_bytes)
            .map_err(|e| AwssumeError::marshal(fmt_name, e)),
        ConfigFormat::Unknown => Err(AwssumeError::UnsupportedConfigFormat(fmt_name.to_string())),
    }
}

/// Deserializes the document from the given format.
///
/// Empty or whitespace-only input is an empty document in every format; this
/// is what a freshly created config file contains.
pub fn decode(format: ConfigFormat, bytes: &[u8]) -> Result<ConfigDocument> {
    let fmt_name = format.extension();
    if !format.is_known() {
        return Err(AwssumeError::UnsupportedConfigFormat(fmt_name.to_string()));
    }

    let content = std::str::from_utf8(bytes).map_err(|e| AwssumeError::unmarshal(fmt_name, e))?;
    if content.trim().is_empty() {
        return Ok(ConfigDocument::default());
    }

    match format {
        ConfigFormat::Json => {
            serde_json::from_str(content).map_err(|e| AwssumeError::unmarshal(fmt_name, e))
        }
        ConfigFormat::Toml => {
            toml::from_str(content).map_err(|e| AwssumeError::unmarshal(fmt_name, e))
        }
        ConfigFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| AwssumeError::unmarshal(fmt_name, e))
        }
        ConfigFormat::Unknown => Err(AwssumeError::UnsupportedConfigFormat(fmt_name.to_string())),
    }
}
