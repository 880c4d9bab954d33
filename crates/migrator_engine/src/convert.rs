use std::sync::LazyLock;

use crate::catalog::{CatalogError, PatternCatalog};
use crate::config::MigratorConfig;
use crate::extract::PostDataExtractor;
use crate::rewrite::LineRewriter;
use crate::types::{ConversionReport, FragmentOutcome};

static DEFAULT_MIGRATOR: LazyLock<Migrator> = LazyLock::new(|| {
    Migrator::new(&MigratorConfig::default()).expect("default hosts produce valid patterns")
});

pub trait Converter: Send + Sync {
    fn convert(&self, text: &str) -> String;
}

/// Rewrites legacy forum links in BBCode posts.
///
/// Holds only compiled patterns; every call works on its own data, so one
/// instance can serve any number of callers.
#[derive(Debug, Clone)]
pub struct Migrator {
    rewriter: LineRewriter,
}

impl Migrator {
    pub fn new(config: &MigratorConfig) -> Result<Self, CatalogError> {
        let catalog = PatternCatalog::new(config)?;
        let extractor = PostDataExtractor::new(catalog);
        let rewriter = LineRewriter::new(extractor, config.target_host.trim())?;
        Ok(Self { rewriter })
    }

    pub fn rewriter(&self) -> &LineRewriter {
        &self.rewriter
    }

    pub fn convert_with_report(&self, text: &str) -> ConversionReport {
        self.rewriter.convert(text)
    }

    pub fn convert_fragment(&self, text: &str) -> FragmentOutcome {
        self.rewriter.convert_fragment(text)
    }
}

impl Converter for Migrator {
    fn convert(&self, text: &str) -> String {
        self.convert_with_report(text).output
    }
}

impl Default for Migrator {
    fn default() -> Self {
        DEFAULT_MIGRATOR.clone()
    }
}

/// Converts `text` with the default hosts.
pub fn convert(text: &str) -> String {
    DEFAULT_MIGRATOR.convert(text)
}
