//! Regular expressions recognizing legacy `[URL]` tags per source domain.
use regex::Regex;
use thiserror::Error;

use crate::config::MigratorConfig;
use crate::types::{PatternVariant, SourceDomain};

/// `t=<id>` query parameter. `&amp;` separators come from HTML-escaped exports.
const THREAD_PARAM: &str = r"(?i)(?:^|&(?:amp;)?)(?P<thread>t=[^&#]*)";
/// `p=<id>` query parameter.
const POST_PARAM: &str = r"(?i)(?:^|&(?:amp;)?)(?P<post>p=[^&#]*)";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{role} host must not be empty")]
    EmptyHost { role: &'static str },
    #[error("invalid pattern for {context}: {source}")]
    InvalidPattern {
        context: String,
        #[source]
        source: regex::Error,
    },
}

/// The two tag patterns for one source domain.
///
/// Both expose a `query` group holding the raw query string (absent when the
/// URL has none); `custom_title` also exposes `title`.
#[derive(Debug, Clone)]
pub struct DomainPatternSet {
    pub default: Regex,
    pub custom_title: Regex,
}

impl DomainPatternSet {
    /// Builds the pattern pair for `host`. The host is matched literally.
    pub fn for_host(host: &str) -> Result<Self, CatalogError> {
        let host_re = regex::escape(host);
        let default = format!(
            r"(?i)\[URL\]https?://{host_re}(?:/[^\s\[\]?#]*)?(?:\?(?P<query>[^\s\[\]#]*))?(?:#[^\s\[\]]*)?\s*\[/URL\]"
        );
        let custom_title = format!(
            r##"(?i)\[URL="?https?://{host_re}(?:/[^\s\[\]"?#]*)?(?:\?(?P<query>[^\s\[\]"#]*))?(?:#[^\s\[\]"]*)?\s*"?\s*\](?P<title>.*?)\[/URL\]"##
        );
        Ok(Self {
            default: compile(host, &default)?,
            custom_title: compile(host, &custom_title)?,
        })
    }

    pub fn pattern(&self, variant: PatternVariant) -> &Regex {
        match variant {
            PatternVariant::CustomTitle => &self.custom_title,
            PatternVariant::Default => &self.default,
        }
    }
}

/// Pattern sets for both source domains plus the id parameter patterns.
#[derive(Debug, Clone)]
pub struct PatternCatalog {
    new_domain: DomainPatternSet,
    old_domain: DomainPatternSet,
    old_marker: String,
    thread_param: Regex,
    post_param: Regex,
}

impl PatternCatalog {
    pub fn new(config: &MigratorConfig) -> Result<Self, CatalogError> {
        let new_host = non_empty(&config.new_domain, "new domain")?;
        let old_host = non_empty(&config.old_domain, "old domain")?;
        Ok(Self {
            new_domain: DomainPatternSet::for_host(new_host)?,
            old_domain: DomainPatternSet::for_host(old_host)?,
            old_marker: old_host.to_string(),
            thread_param: compile("thread parameter", THREAD_PARAM)?,
            post_param: compile("post parameter", POST_PARAM)?,
        })
    }

    pub fn new_domain_patterns(&self) -> &DomainPatternSet {
        &self.new_domain
    }

    pub fn old_domain_patterns(&self) -> &DomainPatternSet {
        &self.old_domain
    }

    pub fn patterns(&self, domain: SourceDomain) -> &DomainPatternSet {
        match domain {
            SourceDomain::New => &self.new_domain,
            SourceDomain::Old => &self.old_domain,
        }
    }

    /// Literal text whose presence anywhere in a fragment selects the old set.
    pub fn old_marker(&self) -> &str {
        &self.old_marker
    }

    /// Pattern with a named `thread` group, applied to a captured query.
    pub fn thread_param(&self) -> &Regex {
        &self.thread_param
    }

    /// Pattern with a named `post` group, applied to a captured query.
    pub fn post_param(&self) -> &Regex {
        &self.post_param
    }
}

fn non_empty<'a>(host: &'a str, role: &'static str) -> Result<&'a str, CatalogError> {
    let trimmed = host.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::EmptyHost { role });
    }
    Ok(trimmed)
}

pub(crate) fn compile(context: &str, pattern: &str) -> Result<Regex, CatalogError> {
    Regex::new(pattern).map_err(|source| CatalogError::InvalidPattern {
        context: context.to_string(),
        source,
    })
}
