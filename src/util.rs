/// Utility functions for the SCSS namespace server.
///
/// This module contains helpers for cursor-line slicing, document
/// directory lookup, and client logging.
use std::path::PathBuf;

use tower_lsp::lsp_types::*;

use crate::Backend;

/// The text of the cursor line from its start up to `position`.
///
/// `position.character` is a UTF-16 code unit offset, as LSP specifies.
/// A column past the end of the line clamps to the line end; a line past
/// the end of the document yields an empty string.
pub fn text_before_cursor(content: &str, position: Position) -> &str {
    let Some(line) = content.split('\n').nth(position.line as usize) else {
        return "";
    };
    let line = line.strip_suffix('\r').unwrap_or(line);

    let target = position.character as usize;
    let mut units = 0usize;
    for (idx, ch) in line.char_indices() {
        if units >= target {
            return &line[..idx];
        }
        units += ch.len_utf16();
    }
    line
}

/// Directory containing the document, for `file:` URIs only.
pub fn document_dir(uri: &Url) -> Option<PathBuf> {
    if uri.scheme() != "file" {
        return None;
    }
    let path = uri.to_file_path().ok()?;
    path.parent().map(|p| p.to_path_buf())
}

impl Backend {
    pub(crate) async fn log(&self, typ: MessageType, message: String) {
        if let Some(client) = &self.client {
            client.log_message(typ, message).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(line: u32, character: u32) -> Position {
        Position { line, character }
    }

    #[test]
    fn test_text_before_cursor_slices_line() {
        let content = "@use 'a';\n.foo { @u }\n";
        assert_eq!(text_before_cursor(content, pos(1, 9)), ".foo { @u");
    }

    #[test]
    fn test_text_before_cursor_clamps_column() {
        assert_eq!(text_before_cursor("abc\r\ndef", pos(0, 99)), "abc");
    }

    #[test]
    fn test_text_before_cursor_past_last_line() {
        assert_eq!(text_before_cursor("abc", pos(5, 0)), "");
    }

    #[test]
    fn test_text_before_cursor_counts_utf16_units() {
        // `😀` is two UTF-16 code units.
        assert_eq!(text_before_cursor("/* 😀 */ @m", pos(0, 11)), "/* 😀 */ @m");
        assert_eq!(text_before_cursor("/* 😀 */ @m", pos(0, 5)), "/* 😀");
    }

    #[test]
    fn test_document_dir_for_file_uri() {
        let uri = Url::parse("file:///proj/styles/main.scss").unwrap();
        assert_eq!(document_dir(&uri), Some(PathBuf::from("/proj/styles")));
    }

    #[test]
    fn test_document_dir_rejects_other_schemes() {
        let uri = Url::parse("untitled:Untitled-1").unwrap();
        assert_eq!(document_dir(&uri), None);
    }
}
