//! Parsed result page plus the metadata derived from it once.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::dom::{self, clean_text};
use crate::encoding::decode_html;

/// First standalone year between 1800 and 2099.
#[allow(clippy::expect_used)]
static YEAR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(1[89]\d{2}|20\d{2})\b").expect("valid regex"));

/// A stored page, parsed and ready for table lookup.
pub struct Document {
    dom: dom::Document,
    title: String,
    source: PathBuf,
}

impl Document {
    /// Parse raw page bytes read from `source`.
    ///
    /// The charset is sniffed from the page head. The title comes from
    /// `<title>`, falling back to the file name, which stored pages take from
    /// the article title.
    #[must_use]
    pub fn parse(source: impl Into<PathBuf>, bytes: &[u8]) -> Self {
        let source = source.into();
        let html = decode_html(bytes);
        let dom = dom::parse(&html);

        let title = Some(clean_text(&dom.select("title").text()))
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| title_from_path(&source));

        Self { dom, title, source }
    }

    /// The underlying DOM.
    #[must_use]
    pub fn dom(&self) -> &dom::Document {
        &self.dom
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Competition year from the title, if the title carries one.
    #[must_use]
    pub fn year(&self) -> Option<&str> {
        YEAR_RE
            .captures(&self.title)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

impl std::fmt::Debug for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Document")
            .field("title", &self.title)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

fn title_from_path(path: &Path) -> String {
    path.file_name()
        .map(|name| clean_text(&name.to_string_lossy().replace('_', " ")))
        .unwrap_or_default()
}
