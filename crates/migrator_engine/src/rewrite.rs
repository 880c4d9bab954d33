use migrator_logging::{migrate_debug, migrate_warn};
use regex::{NoExpand, Regex};

use crate::catalog::{compile, CatalogError};
use crate::extract::PostDataExtractor;
use crate::types::{ConversionReport, FragmentOutcome, IdStatus, LinkTarget};

/// Closing marker that delimits one occurrence. Compared ASCII case-insensitively.
pub const CLOSING_MARKER: &str = "[/url]";

/// Any `[url]...[/url]` or `[url=...]...[/url]` tag, regardless of host.
const URL_TAG: &str = r"(?i)\[url\].+?\[/url\]|\[url=[^\]]+\].*?\[/url\]";

/// Rewrites legacy `[URL]` tags line by line.
#[derive(Debug, Clone)]
pub struct LineRewriter {
    extractor: PostDataExtractor,
    url_tag: Regex,
    target_host: String,
}

impl LineRewriter {
    pub fn new(
        extractor: PostDataExtractor,
        target_host: impl Into<String>,
    ) -> Result<Self, CatalogError> {
        Ok(Self {
            extractor,
            url_tag: compile("url tag", URL_TAG)?,
            target_host: target_host.into(),
        })
    }

    pub fn extractor(&self) -> &PostDataExtractor {
        &self.extractor
    }

    /// Splits on `\n`, rewrites every line and joins them back.
    pub fn convert(&self, text: &str) -> ConversionReport {
        let mut report = ConversionReport::default();
        let lines: Vec<String> = text
            .split('\n')
            .map(|line| {
                report.lines += 1;
                self.convert_line(line, &mut report)
            })
            .collect();
        report.output = lines.join("\n");
        migrate_debug!(
            "Converted {} lines: {} rewritten, {} unsupported",
            report.lines,
            report.rewritten,
            report.unsupported
        );
        report
    }

    fn convert_line(&self, line: &str, report: &mut ConversionReport) -> String {
        if is_multiple_url_occurrence(line) {
            self.multiple_occurrence(line, report)
        } else {
            self.single_occurrence(line, report)
        }
    }

    /// Rewrites the first recognized tag in `text`; anything else passes through.
    pub fn single_occurrence_conversion(&self, text: &str) -> String {
        self.single_occurrence(text, &mut ConversionReport::default())
    }

    /// Rewrites a line holding several tags, one closing marker at a time.
    pub fn multiple_occurrence_conversion(&self, line: &str) -> String {
        self.multiple_occurrence(line, &mut ConversionReport::default())
    }

    fn single_occurrence(&self, text: &str, report: &mut ConversionReport) -> String {
        match self.convert_fragment(text) {
            FragmentOutcome::Unrecognized => text.to_string(),
            FragmentOutcome::Rewritten { text, .. } => {
                report.rewritten += 1;
                text
            }
            FragmentOutcome::Unsupported { post, thread } => {
                report.unsupported += 1;
                migrate_debug!("Unusable ids: post={:?} thread={:?}", post, thread);
                migrate_warn!("URL might be unsupported:\n{}", text);
                text.to_string()
            }
        }
    }

    fn multiple_occurrence(&self, line: &str, report: &mut ConversionReport) -> String {
        // ASCII lowercasing keeps byte offsets valid for `line`.
        let lowered = line.to_ascii_lowercase();
        let mut output = String::with_capacity(line.len());
        let mut start = 0;
        for (index, marker) in lowered.match_indices(CLOSING_MARKER) {
            let end = index + marker.len();
            output.push_str(&self.single_occurrence(&line[start..end], report));
            start = end;
        }
        output.push_str(&line[start..]);
        output
    }

    /// Typed conversion of one fragment. Does not log.
    pub fn convert_fragment(&self, text: &str) -> FragmentOutcome {
        let Some(data) = self.extractor.extract_post_data(text) else {
            return FragmentOutcome::Unrecognized;
        };

        let post = IdStatus::from_capture(data.post.as_deref());
        let thread = IdStatus::from_capture(data.thread.as_deref());
        let target = if let Some(id) = post.valid_id() {
            LinkTarget::Post(id.to_string())
        } else if let Some(id) = thread.valid_id() {
            LinkTarget::Thread(id.to_string())
        } else {
            return FragmentOutcome::Unsupported { post, thread };
        };

        let title = match data.title.as_deref() {
            Some(title) if !title.is_empty() => title.to_string(),
            _ => self.fallback_title(&target),
        };
        let markup = format!(
            "[U][{tag}={id}]{title}[/{tag}][/U]",
            tag = target.tag(),
            id = target.id()
        );
        let text = self.url_tag.replacen(text, 1, NoExpand(&markup)).into_owned();
        FragmentOutcome::Rewritten { text, target }
    }

    fn fallback_title(&self, target: &LinkTarget) -> String {
        format!(
            "[PLAIN]https://{}/{}/{}[/PLAIN]",
            self.target_host,
            target.path_segment(),
            target.id()
        )
    }
}

/// True when the closing marker appears more than once (ASCII case-insensitive).
///
/// Opening tags are not checked for balance.
pub fn is_multiple_url_occurrence(line: &str) -> bool {
    line.to_ascii_lowercase()
        .matches(CLOSING_MARKER)
        .nth(1)
        .is_some()
}
