use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::constants::PLACEHOLDER_USER;
use crate::error::{ExportError, ExportResult};
use crate::models::UserRef;
use crate::source::TaskSource;

/// Display-name to output-identity lookup table, loaded from a flat
/// JSON object (`{"Alice Smith": "asmith", ...}`). The file is parsed
/// as data, never evaluated.
#[derive(Debug, Default)]
pub struct IdentityMap {
    entries: HashMap<String, String>,
}

impl IdentityMap {
    pub fn empty() -> Self {
        IdentityMap::default()
    }

    pub fn load(path: &Path) -> ExportResult<Self> {
        let text = fs::read_to_string(path)?;
        let entries: HashMap<String, String> = serde_json::from_str(&text).map_err(|e| {
            ExportError::InvalidInput(format!(
                "User map {} is not a JSON object of name to login: {}",
                path.display(),
                e
            ))
        })?;
        Ok(IdentityMap { entries })
    }

    /// Mapped identity for a display name. Empty values count as
    /// absent entries.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Applies the fallback chain for turning source users into output
/// identities. Email lookups go to the task source once per distinct
/// user and are cached for the rest of the run.
pub struct IdentityResolver {
    map: IdentityMap,
    default_user: Option<String>,
    email_cache: HashMap<String, Option<String>>,
}

impl IdentityResolver {
    pub fn new(map: IdentityMap, default_user: Option<String>) -> Self {
        IdentityResolver {
            map,
            default_user,
            email_cache: HashMap::new(),
        }
    }

    /// Identity for a task creator or comment author: map entry, then
    /// the configured default, then the user's email, then the
    /// placeholder.
    pub async fn resolve_author(
        &mut self,
        user: &UserRef,
        source: &dyn TaskSource,
    ) -> ExportResult<String> {
        if let Some(mapped) = self.map.get(&user.name) {
            return Ok(mapped.to_string());
        }
        if let Some(default_user) = &self.default_user {
            return Ok(default_user.clone());
        }
        match self.email(&user.gid, source).await? {
            Some(email) => Ok(email),
            None => Ok(PLACEHOLDER_USER.to_string()),
        }
    }

    /// Identity for a task assignee: map entry, otherwise the source
    /// display name as-is. Assignees never trigger email lookups.
    pub fn resolve_assignee(&self, user: &UserRef) -> String {
        match self.map.get(&user.name) {
            Some(mapped) => mapped.to_string(),
            None => user.name.clone(),
        }
    }

    async fn email(
        &mut self,
        user_gid: &str,
        source: &dyn TaskSource,
    ) -> ExportResult<Option<String>> {
        if let Some(cached) = self.email_cache.get(user_gid) {
            return Ok(cached.clone());
        }
        let email = source.user_email(user_gid).await?;
        self.email_cache.insert(user_gid.to_string(), email.clone());
        Ok(email)
    }
}
