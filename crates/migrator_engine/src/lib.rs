//! Migrator engine: rewrites legacy forum `[URL]` tags into `[THREAD]`/`[POST]` markup.
mod catalog;
mod config;
mod convert;
mod extract;
mod persist;
mod rewrite;
mod types;

pub use catalog::{CatalogError, DomainPatternSet, PatternCatalog};
pub use config::{MigratorConfig, DEFAULT_NEW_DOMAIN, DEFAULT_OLD_DOMAIN, DEFAULT_TARGET_HOST};
pub use convert::{convert, Converter, Migrator};
pub use extract::PostDataExtractor;
pub use persist::{AtomicFileWriter, PersistError};
pub use rewrite::{is_multiple_url_occurrence, LineRewriter, CLOSING_MARKER};
pub use types::{
    ConversionReport, ExtractedPostData, FragmentOutcome, IdStatus, LinkTarget, PatternVariant,
    SourceDomain,
};
