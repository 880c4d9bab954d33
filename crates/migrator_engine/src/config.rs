use serde::{Deserialize, Serialize};

pub const DEFAULT_NEW_DOMAIN: &str = "forum.indowebster.com";
pub const DEFAULT_OLD_DOMAIN: &str = "www.indowebster.web.id";
pub const DEFAULT_TARGET_HOST: &str = "forum.idws.id";

/// Hosts the migrator reads links from and writes fallback titles for.
///
/// Missing fields in a serialized config fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MigratorConfig {
    /// Host of the current forum, matched when the old marker is absent.
    pub new_domain: String,
    /// Deprecated host. Its presence anywhere in a fragment selects the old pattern set.
    pub old_domain: String,
    /// Host used in synthesized `[PLAIN]` fallback titles.
    pub target_host: String,
}

impl Default for MigratorConfig {
    fn default() -> Self {
        Self {
            new_domain: DEFAULT_NEW_DOMAIN.to_string(),
            old_domain: DEFAULT_OLD_DOMAIN.to_string(),
            target_host: DEFAULT_TARGET_HOST.to_string(),
        }
    }
}
