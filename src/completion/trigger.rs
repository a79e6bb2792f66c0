//! Completion trigger detection.
//!
//! Decides from the text left of the cursor whether namespace completion
//! should fire at all.  Completion fires when:
//!
//!   - the cursor sits right after `@` or whitespace followed by a
//!     (possibly empty) run of word or hyphen characters, e.g. `  .a { @u`
//!     or `width: ma`, or
//!   - the trimmed line begins with `@use`.

/// Word characters of a partially typed identifier (`\w` plus `-`).
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Whitespace as JavaScript's `\s` sees it: Unicode `White_Space` plus the
/// byte-order mark U+FEFF.  U+0085 is also accepted, unlike `\s`.
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Whether completion should be offered for `text_before_cursor`.
pub fn should_trigger(text_before_cursor: &str) -> bool {
    // Walk backwards past any partial identifier the user may have typed
    let before_word = text_before_cursor.trim_end_matches(is_word_char);
    let after_trigger_char = before_word
        .chars()
        .next_back()
        .is_some_and(|c| c == '@' || is_space(c));

    after_trigger_char
        || text_before_cursor
            .trim_start_matches(is_space)
            .starts_with("@use")
}
