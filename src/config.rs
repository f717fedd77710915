//! Run configuration for the mirror loop.
//!
//! All values the original tool compiled in (base URL, lecture index range,
//! filename templates, probe timeout) live here as an explicit structure so
//! tests can point a run at a local mock server instead of the real site.

use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// Default base URL of the remote lecture tree.
pub const DEFAULT_BASE_URL: &str =
    "https://web.stanford.edu/class/archive/cs/cs166/cs166.1166/lectures/";

/// Default output directory for the mirrored tree.
pub const DEFAULT_OUTPUT_DIR: &str = "cs166_lectures";

/// First lecture index published on the course site.
pub const DEFAULT_FIRST_LECTURE: u32 = 0;

/// Last lecture index published on the course site (inclusive).
pub const DEFAULT_LAST_LECTURE: u32 = 18;

/// Default HEAD probe timeout (10 seconds).
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Pattern producing a concrete file name from a lecture index.
///
/// Renders as `<prefix><NN><extension>` with the index zero-padded to two
/// digits, e.g. `Slides07.pdf`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameTemplate {
    prefix: String,
    extension: String,
}

impl FilenameTemplate {
    /// Creates a template from a name prefix and a file extension
    /// (including the leading dot).
    #[must_use]
    pub fn new(prefix: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            extension: extension.into(),
        }
    }

    /// Renders the concrete file name for a lecture index.
    #[must_use]
    pub fn render(&self, lecture: u32) -> String {
        format!("{}{:02}{}", self.prefix, lecture, self.extension)
    }
}

/// Configuration for one mirror run.
///
/// Lecture indices are crossed with the templates, in order, to derive the
/// full target list. The template order is significant: the full slide deck
/// comes before the reduced handout variant.
#[derive(Debug, Clone)]
pub struct MirrorConfig {
    /// Base URL of the remote lecture tree. A trailing slash is not required;
    /// one is added when joining subdirectory names.
    pub base_url: Url,
    /// Local root of the mirrored tree.
    pub output_root: PathBuf,
    /// Inclusive range of lecture indices to mirror.
    pub lectures: RangeInclusive<u32>,
    /// Filename templates tried per lecture, in order.
    pub templates: Vec<FilenameTemplate>,
    /// Timeout applied to each HEAD probe.
    pub probe_timeout: Duration,
    /// Timeout applied to each GET transfer. `None` leaves transfers
    /// unbounded, matching the original tool.
    pub transfer_timeout: Option<Duration>,
}

impl MirrorConfig {
    /// Creates a configuration with the default lecture range, templates,
    /// and timeouts for the given base URL and output root.
    #[must_use]
    pub fn new(base_url: Url, output_root: impl Into<PathBuf>) -> Self {
        Self {
            base_url,
            output_root: output_root.into(),
            lectures: DEFAULT_FIRST_LECTURE..=DEFAULT_LAST_LECTURE,
            templates: default_templates(),
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
            transfer_timeout: None,
        }
    }
}

impl Default for MirrorConfig {
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        let base_url = Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid");
        Self::new(base_url, DEFAULT_OUTPUT_DIR)
    }
}

/// The two filename templates published per lecture: the full slide deck
/// and the reduced handout variant.
#[must_use]
pub fn default_templates() -> Vec<FilenameTemplate> {
    vec![
        FilenameTemplate::new("Slides", ".pdf"),
        FilenameTemplate::new("Small", ".pdf"),
    ]
}
