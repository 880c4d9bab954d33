use regex::Captures;

use crate::catalog::PatternCatalog;
use crate::types::{ExtractedPostData, PatternVariant, SourceDomain};

/// Pulls thread id, post id and custom title out of a `[URL]` fragment.
///
/// - the old pattern set is used whenever the old host text appears anywhere
///   in the fragment, otherwise the new set
/// - variants are tried in [`PatternVariant::PRECEDENCE`] order, first match wins
/// - `None` means the fragment is not a recognized tag.
#[derive(Debug, Clone)]
pub struct PostDataExtractor {
    catalog: PatternCatalog,
}

impl PostDataExtractor {
    pub fn new(catalog: PatternCatalog) -> Self {
        Self { catalog }
    }

    pub fn select_domain(&self, fragment: &str) -> SourceDomain {
        if fragment.contains(self.catalog.old_marker()) {
            SourceDomain::Old
        } else {
            SourceDomain::New
        }
    }

    pub fn extract_post_data(&self, fragment: &str) -> Option<ExtractedPostData> {
        let patterns = self.catalog.patterns(self.select_domain(fragment));
        let (variant, captures) = PatternVariant::PRECEDENCE
            .iter()
            .find_map(|&variant| {
                patterns
                    .pattern(variant)
                    .captures(fragment)
                    .map(|caps| (variant, caps))
            })?;
        Some(self.post_data_from(variant, &captures))
    }

    fn post_data_from(
        &self,
        variant: PatternVariant,
        captures: &Captures<'_>,
    ) -> ExtractedPostData {
        let query = captures.name("query").map(|m| m.as_str()).unwrap_or_default();
        let param = |re: &regex::Regex, group: &str| {
            re.captures(query)
                .and_then(|caps| caps.name(group))
                .map(|m| m.as_str().to_string())
        };

        ExtractedPostData {
            post: param(self.catalog.post_param(), "post"),
            thread: param(self.catalog.thread_param(), "thread"),
            title: match variant {
                PatternVariant::CustomTitle => {
                    captures.name("title").map(|m| m.as_str().to_string())
                }
                PatternVariant::Default => None,
            },
        }
    }
}
