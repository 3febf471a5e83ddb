//! Visible-text extraction from raw markup.
//!
//! No HTML parser is involved. The extractor picks a window (the first
//! `<article>...</article>` region, or the whole document), then walks it with
//! a two-state scanner that keeps the text found between a `>` and the next
//! `<`. Script and style bodies are not excluded and entities are not
//! decoded.

/// Opening marker of an article region.
pub const ARTICLE_OPEN: &str = "<article>";

/// Closing marker of an article region.
pub const ARTICLE_CLOSE: &str = "</article>";

/// Byte range of the document that gets scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionWindow {
    /// Offset of the first byte in the window.
    pub start: usize,
    /// Offset one past the last byte in the window.
    pub end: usize,
    /// Whether the window is an `<article>` region.
    pub article: bool,
}

impl ExtractionWindow {
    /// Selects the window for `document`.
    ///
    /// An `<article>` without a `</article>` after it is treated as if no
    /// article existed.
    pub fn locate(document: &str) -> Self {
        if let Some(open) = document.find(ARTICLE_OPEN) {
            let body = open + ARTICLE_OPEN.len();
            if let Some(close) = document[body..].find(ARTICLE_CLOSE) {
                return Self { start: open, end: body + close + ARTICLE_CLOSE.len(), article: true };
            }
            tracing::debug!(open, "unterminated article region, scanning whole document");
        }

        Self { start: 0, end: document.len(), article: false }
    }

    /// Number of bytes in the window.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the window covers no bytes.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Result of scanning a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Concatenated text segments.
    pub text: String,
    /// The window that was scanned.
    pub window: ExtractionWindow,
    /// Number of non-empty segments appended to `text`.
    pub segments: usize,
}

#[derive(Debug, Clone, Copy)]
enum ScanState {
    /// Looking for the `>` that ends the current tag.
    SeekCloser,
    /// Inside a text segment that began at `start`, looking for the next `<`.
    SeekOpener { start: usize },
}

/// Extracts the visible text of `document`.
pub fn extract_text(document: &str) -> String {
    extract(document).text
}

/// Scans `document` and reports the text along with the window used.
pub fn extract(document: &str) -> Extraction {
    let window = ExtractionWindow::locate(document);
    let region = &document[window.start..window.end];
    let bytes = region.as_bytes();

    let mut text = String::new();
    let mut segments = 0;
    let mut cursor = 0;
    let mut state = ScanState::SeekCloser;

    while cursor < region.len() {
        match state {
            ScanState::SeekCloser => {
                let Some(offset) = region[cursor..].find('>') else { break };
                let start = cursor + offset + 1;
                if start >= region.len() {
                    break;
                }

                if bytes[start] == b'<' {
                    cursor = start;
                } else {
                    state = ScanState::SeekOpener { start };
                }
            }
            ScanState::SeekOpener { start } => {
                let Some(offset) = region[start..].find('<') else { break };
                let opener = start + offset;

                let segment = clean_segment(&region[start..opener]);
                if !segment.is_empty() {
                    text.push_str(&segment);
                    segments += 1;
                }

                cursor = opener;
                state = ScanState::SeekCloser;
            }
        }
    }

    tracing::debug!(
        article = window.article,
        window_len = window.len(),
        segments,
        text_len = text.len(),
        "scanned document"
    );

    Extraction { text, window, segments }
}

/// Drops newlines and tabs, then trims surrounding whitespace.
fn clean_segment(segment: &str) -> String {
    let stripped = segment.replace(['\n', '\t'], "");
    stripped.trim().to_string()
}
