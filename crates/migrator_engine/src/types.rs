use std::fmt;

/// Source domains whose legacy links are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceDomain {
    /// The current forum host (`forum.indowebster.com` by default).
    New,
    /// The deprecated host (`www.indowebster.web.id` by default).
    Old,
}

/// Shape of the `[URL]` tag a pattern recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternVariant {
    /// `[URL="<url>"]<title>[/URL]` or `[URL=<url>]<title>[/URL]`.
    CustomTitle,
    /// `[URL]<url>[/URL]`.
    Default,
}

impl PatternVariant {
    /// Order in which variants are tried. First match wins.
    pub const PRECEDENCE: [PatternVariant; 2] =
        [PatternVariant::CustomTitle, PatternVariant::Default];
}

/// Raw captures pulled out of one recognized `[URL]` fragment.
///
/// `post` and `thread` keep their `p=` / `t=` prefix. `title` is only set when
/// the custom-title variant matched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedPostData {
    pub post: Option<String>,
    pub thread: Option<String>,
    pub title: Option<String>,
}

/// Classification of one id capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdStatus {
    /// The parameter was not in the URL.
    Missing,
    /// `t=` / `p=` with nothing after it.
    Empty,
    /// A value that is not all ASCII digits.
    Malformed(String),
    Valid(String),
}

impl IdStatus {
    /// Classifies a prefixed capture such as `"t=123"`.
    pub fn from_capture(capture: Option<&str>) -> Self {
        let Some(capture) = capture else {
            return IdStatus::Missing;
        };
        let value = capture.get(2..).unwrap_or_default();
        if value.is_empty() {
            IdStatus::Empty
        } else if value.bytes().all(|b| b.is_ascii_digit()) {
            IdStatus::Valid(value.to_string())
        } else {
            IdStatus::Malformed(value.to_string())
        }
    }

    pub fn valid_id(&self) -> Option<&str> {
        match self {
            IdStatus::Valid(id) => Some(id),
            _ => None,
        }
    }
}

/// What a rewritten link points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    Thread(String),
    Post(String),
}

impl LinkTarget {
    pub fn id(&self) -> &str {
        match self {
            LinkTarget::Thread(id) | LinkTarget::Post(id) => id,
        }
    }

    /// BBCode tag name of the new markup.
    pub fn tag(&self) -> &'static str {
        match self {
            LinkTarget::Thread(_) => "THREAD",
            LinkTarget::Post(_) => "POST",
        }
    }

    /// Path segment on the target forum.
    pub fn path_segment(&self) -> &'static str {
        match self {
            LinkTarget::Thread(_) => "threads",
            LinkTarget::Post(_) => "posts",
        }
    }
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.tag(), self.id())
    }
}

/// Result of converting a single fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentOutcome {
    /// No pattern recognized the fragment.
    Unrecognized,
    /// A tag was rewritten; `text` is the whole fragment after substitution.
    Rewritten { text: String, target: LinkTarget },
    /// A pattern matched but neither id is usable.
    Unsupported { post: IdStatus, thread: IdStatus },
}

/// Output of a conversion plus counters for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub output: String,
    pub lines: usize,
    pub rewritten: usize,
    pub unsupported: usize,
}
