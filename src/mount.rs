//! Mount point: the element id of the page region the rendered profile is
//! attached to.

use std::fmt;

use crate::error::RenderError;

pub const DEFAULT_MOUNT_ID: &str = "app";

/// Validated element id, stored without a leading `#`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountPoint(String);

impl MountPoint {
    /// Accepts `app` or the selector form `#app`.
    pub fn new(id: &str) -> Result<Self, RenderError> {
        let trimmed = id.trim();
        let bare = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if bare.is_empty() || bare.contains(|c: char| c.is_whitespace() || c == '#') {
            return Err(RenderError::InvalidMountPoint(id.to_string()));
        }

        Ok(Self(bare.to_string()))
    }

    pub fn id(&self) -> &str {
        &self.0
    }

    /// CSS selector form (`#app`)
    pub fn selector(&self) -> String {
        format!("#{}", self.0)
    }
}

impl Default for MountPoint {
    fn default() -> Self {
        Self(DEFAULT_MOUNT_ID.to_string())
    }
}

impl fmt::Display for MountPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
