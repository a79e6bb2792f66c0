use scss_namespace_lsp::{RawImport, extract_imports};

fn raw(path: &str, alias: Option<&str>) -> RawImport {
    RawImport {
        path: path.to_string(),
        alias: alias.map(str::to_string),
    }
}

// ─── @use Extraction Tests ──────────────────────────────────────────────────

#[test]
fn test_no_use_rules_returns_empty() {
    let scss = ".button {\n  color: red;\n}\n@import 'legacy';\n";
    assert!(extract_imports(scss).is_empty());
    assert!(extract_imports("").is_empty());
}

#[test]
fn test_extracts_single_and_double_quoted_paths() {
    let scss = "@use 'src/corners';\n@use \"./theme\";\n";
    assert_eq!(
        extract_imports(scss),
        vec![raw("src/corners", None), raw("./theme", None)]
    );
}

#[test]
fn test_extracts_alias_trimmed() {
    let scss = "@use './tools'   as   t  ;\n";
    assert_eq!(extract_imports(scss), vec![raw("./tools", Some("t"))]);
}

#[test]
fn test_preserves_document_order() {
    let scss = concat!(
        "@use 'sass:math';\n",
        "@use './b' as x;\n",
        ".a { width: math.div(1, 2); }\n",
        "@use './a' as x;\n",
    );
    assert_eq!(
        extract_imports(scss),
        vec![
            raw("sass:math", None),
            raw("./b", Some("x")),
            raw("./a", Some("x")),
        ]
    );
}

#[test]
fn test_with_clause_is_not_part_of_alias() {
    let scss = "@use './library' as lib with ($black: #222, $border-radius: 0.1rem);\n";
    assert_eq!(extract_imports(scss), vec![raw("./library", Some("lib"))]);
}

#[test]
fn test_with_clause_without_alias() {
    let scss = "@use './library' with ($black: #222);\n";
    assert_eq!(extract_imports(scss), vec![raw("./library", None)]);
}

#[test]
fn test_use_in_comment_is_still_matched() {
    // The scan is textual; commented-out rules are picked up too.
    let scss = "// @use './old';\n/* @use \"./older\" as o; */\n";
    assert_eq!(
        extract_imports(scss),
        vec![raw("./old", None), raw("./older", Some("o"))]
    );
}

#[test]
fn test_malformed_rules_are_skipped() {
    for scss in [
        "@use './unterminated;\n",
        "@use ;\n",
        "@use '';\n",
        "@use'./no-space';\n",
        "@use sass:math;\n",
    ] {
        assert!(
            extract_imports(scss).is_empty(),
            "{:?} should not produce an import",
            scss
        );
    }
}

#[test]
fn test_unterminated_quote_runs_to_next_quote() {
    // Paths are not line-bounded: an open quote swallows text up to the
    // next quote character.
    let scss = "@use './a;\n@use 'b';\n";
    let imports = extract_imports(scss);
    assert_eq!(imports.len(), 1);
    assert_eq!(imports[0].path, "./a;\n@use ");
}

#[test]
fn test_several_rules_on_one_line() {
    let scss = "@use 'a' as a1; @use 'b';";
    assert_eq!(
        extract_imports(scss),
        vec![raw("a", Some("a1")), raw("b", None)]
    );
}

#[test]
fn test_star_alias_is_kept_verbatim() {
    assert_eq!(
        extract_imports("@use './globals' as *;"),
        vec![raw("./globals", Some("*"))]
    );
}
