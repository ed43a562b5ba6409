//! Amazon Resource Names.
//!
//! An [`Arn`] is stored structurally and rendered as
//! `arn:partition:service:region:account-id:resource`. Parsing the rendered
//! form always yields the original structure.
//!
//! # Serialization
//!
//! Every format writes an ARN as a bare string scalar. On read, the bare
//! string is accepted everywhere, and a single-key wrapper object
//! `{"arn": "..."}` is accepted too. Older JSON configs were read through the
//! wrapper form, so configs written that way still load; they are rewritten
//! as bare strings on the next save.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::{AwssumeError, Result};

const PREFIX: &str = "arn:";
const SECTIONS: usize = 6;

/// A parsed Amazon Resource Name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Arn {
    pub partition: String,
    pub service: String,
    pub region: String,
    pub account_id: String,
    /// Everything after the fifth colon; may itself contain colons.
    pub resource: String,
}

impl Arn {
    /// Parses an ARN string.
    ///
    /// Fails with [`AwssumeError::MalformedIdentifier`] when the `arn:` prefix
    /// is missing or there are fewer than six colon-delimited sections.
    /// Empty sections are allowed, so `arn:::::` parses.
    pub fn parse(s: &str) -> Result<Self> {
        if !s.starts_with(PREFIX) {
            return Err(AwssumeError::malformed(s, "invalid prefix"));
        }

        let sections: Vec<&str> = s.splitn(SECTIONS, ':').collect();
        if sections.len() != SECTIONS {
            return Err(AwssumeError::malformed(s, "not enough sections"));
        }

        Ok(Self {
            partition: sections[1].to_string(),
            service: sections[2].to_string(),
            region: sections[3].to_string(),
            account_id: sections[4].to_string(),
            resource: sections[5].to_string(),
        })
    }
}

impl fmt::Display for Arn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "arn:{}:{}:{}:{}:{}",
            self.partition, self.service, self.region, self.account_id, self.resource
        )
    }
}

impl FromStr for Arn {
    type Err = AwssumeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for Arn {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Accepted on-disk shapes of an ARN.
#[derive(Deserialize)]
#[serde(untagged)]
enum ArnRepr {
    Bare(String),
    Wrapped { arn: String },
}

impl<'de> Deserialize<'de> for Arn {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = match ArnRepr::deserialize(deserializer)? {
            ArnRepr::Bare(s) => s,
            ArnRepr::Wrapped { arn } => arn,
        };
        Arn::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skunk() -> Arn {
        Arn {
            partition: "aws".to_string(),
            service: "iam".to_string(),
            region: String::new(),
            account_id: "000000000000".to_string(),
            resource: "role/skunk".to_string(),
        }
    }

    #[test]
    fn test_parse_role_arn() {
        let arn = Arn::parse("arn:aws:iam::000000000000:role/skunk").unwrap();
        assert_eq!(arn, skunk());
    }

    #[test]
    fn test_parse_invalid() {
        let err = Arn::parse("iNv@LiD").unwrap_err();
        assert!(err.is_malformed_identifier());
    }

    #[test]
    fn test_parse_too_few_sections() {
        let err = Arn::parse("arn:aws:iam:").unwrap_err();
        assert!(err.is_malformed_identifier());
        assert!(err.to_string().contains("not enough sections"));
    }

    #[test]
    fn test_parse_all_empty_sections() {
        let arn = Arn::parse("arn:::::").unwrap();
        assert_eq!(arn, Arn::default());
        assert_eq!(arn.to_string(), "arn:::::");
    }

    #[test]
    fn test_resource_keeps_colons() {
        let s = "arn:aws:logs:us-east-1:123456789012:log-group:my-group:*";
        let arn = Arn::parse(s).unwrap();
        assert_eq!(arn.resource, "log-group:my-group:*");
        assert_eq!(arn.to_string(), s);
    }

    #[test]
    fn test_string_round_trip() {
        for s in [
            "arn:aws:iam::000000000000:role/skunk",
            "arn:aws-cn:s3:::bucket/key",
            "arn:aws:sts:eu-west-1:111122223333:assumed-role/admin/session",
            "arn:::::",
        ] {
            assert_eq!(Arn::parse(s).unwrap().to_string(), s);
        }
    }

    #[test]
    fn test_json_decodes_wrapped_and_encodes_bare() {
        let arn: Arn =
            serde_json::from_str(r#"{"arn": "arn:aws:iam::000000000000:role/skunk"}"#).unwrap();
        assert_eq!(arn, skunk());

        let encoded = serde_json::to_string(&arn).unwrap();
        assert_eq!(encoded, r#""arn:aws:iam::000000000000:role/skunk""#);
    }

    #[test]
    fn test_json_decodes_bare() {
        let arn: Arn = serde_json::from_str(r#""arn:::::""#).unwrap();
        assert_eq!(arn, Arn::default());
    }

    #[test]
    fn test_yaml_is_symmetric() {
        let encoded = serde_yaml::to_string(&skunk()).unwrap();
        assert_eq!(encoded.trim(), "arn:aws:iam::000000000000:role/skunk");

        let decoded: Arn = serde_yaml::from_str(&encoded).unwrap();
        assert_eq!(decoded, skunk());
    }

    #[test]
    fn test_decode_rejects_malformed() {
        let result: std::result::Result<Arn, _> = serde_json::from_str(r#""iNv@LiD""#);
        assert!(result.is_err());
    }
}
