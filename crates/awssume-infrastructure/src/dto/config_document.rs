//! Root document of the configuration file.

use serde::{Deserialize, Serialize};

use awssume_core::{Role, RoleRegistry};

/// The persisted configuration: a single `roles` list.
///
/// ```yaml
/// roles:
///   - alias: skunk
///     arn: arn:aws:iam::000000000000:role/skunk
///     session_name: sess
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigDocument {
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl From<&RoleRegistry> for ConfigDocument {
    fn from(registry: &RoleRegistry) -> Self {
        Self {
            roles: registry.roles().to_vec(),
        }
    }
}

impl From<ConfigDocument> for RoleRegistry {
    fn from(doc: ConfigDocument) -> Self {
        RoleRegistry::from_roles(doc.roles)
    }
}
