//! In-memory role registry.

use std::collections::HashSet;

use crate::error::{AwssumeError, Result};

use super::model::Role;

/// Ordered collection of Roles with unique aliases.
///
/// `add` keeps the collection sorted by alias in descending order.
/// `update_by_alias` appends the replacement without re-sorting, so after an
/// update the order is only guaranteed to be unique, not sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleRegistry {
    roles: Vec<Role>,
}

impl RoleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps roles in their stored order.
    ///
    /// Duplicate aliases (a hand-edited file) are kept and logged; lookups
    /// return the first match.
    pub fn from_roles(roles: Vec<Role>) -> Self {
        let mut seen = HashSet::new();
        for role in &roles {
            if !seen.insert(role.alias.as_str()) {
                tracing::warn!(alias = %role.alias, "duplicate role alias; only the first is used");
            }
        }

        Self { roles }
    }

    /// All roles in their current order.
    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Role> {
        self.roles.iter()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    pub fn by_alias(&self, alias: &str) -> Result<&Role> {
        self.roles
            .iter()
            .find(|r| r.alias == alias)
            .ok_or_else(|| AwssumeError::role_not_found(alias))
    }

    pub fn by_alias_mut(&mut self, alias: &str) -> Result<&mut Role> {
        self.roles
            .iter_mut()
            .find(|r| r.alias == alias)
            .ok_or_else(|| AwssumeError::role_not_found(alias))
    }

    /// Adds a role and re-sorts the registry descending by alias.
    ///
    /// Fails with [`AwssumeError::RoleExists`] without touching the registry
    /// if the alias is already taken.
    pub fn add(&mut self, role: Role) -> Result<()> {
        if self.by_alias(&role.alias).is_ok() {
            return Err(AwssumeError::role_exists(role.alias));
        }

        tracing::debug!(alias = %role.alias, arn = %role.arn, "adding role");
        self.roles.push(role);
        self.roles.sort_by(|a, b| b.alias.cmp(&a.alias));

        Ok(())
    }

    /// Removes the role with the given alias, keeping the order of the rest.
    pub fn remove_by_alias(&mut self, alias: &str) -> Result<Role> {
        let idx = self
            .roles
            .iter()
            .position(|r| r.alias == alias)
            .ok_or_else(|| AwssumeError::role_not_found(alias))?;

        tracing::debug!(alias, "removing role");
        Ok(self.roles.remove(idx))
    }

    /// Replaces the role with the given alias by `role`, appended at the end.
    ///
    /// Renaming onto an alias held by another role fails with
    /// [`AwssumeError::RoleExists`] and leaves the registry unchanged. The
    /// registry is not re-sorted afterwards.
    pub fn update_by_alias(&mut self, alias: &str, role: Role) -> Result<()> {
        let idx = self
            .roles
            .iter()
            .position(|r| r.alias == alias)
            .ok_or_else(|| AwssumeError::role_not_found(alias))?;

        if role.alias != alias && self.by_alias(&role.alias).is_ok() {
            return Err(AwssumeError::role_exists(role.alias));
        }

        tracing::debug!(alias, new_alias = %role.alias, "updating role");
        self.roles.remove(idx);
        self.roles.push(role);

        Ok(())
    }
}

impl<'a> IntoIterator for &'a RoleRegistry {
    type Item = &'a Role;
    type IntoIter = std::slice::Iter<'a, Role>;

    fn into_iter(self) -> Self::IntoIter {
        self.roles.iter()
    }
}
