//! Input sanitization
//!
//! Normalizes and defangs raw user text before any classifier sees it.
//! The pipeline neutralizes HTML/XSS payloads, dangerous URI schemes,
//! control characters, bidi overrides, and obvious SQL/shell tokens,
//! while preserving emoji and ordinary Unicode text.
//!
//! The output is already HTML-escaped, so it is safe to render as-is.
//! Downstream persistence layers must still use parameterized queries;
//! the SQL masking here is defense in depth, not a substitute.

use lazy_static::lazy_static;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

lazy_static! {
    /// `<script>...</script>` and `<style>...</style>` blocks, spanning newlines
    static ref SCRIPT_BLOCK: Regex = Regex::new(r"(?is)<script.*?>.*?</script\s*>").unwrap();
    static ref STYLE_BLOCK: Regex = Regex::new(r"(?is)<style.*?>.*?</style\s*>").unwrap();

    /// Inline `style="..."` attributes
    static ref STYLE_ATTR: Regex = Regex::new(r#"(?i)style\s*=\s*['"].*?['"]"#).unwrap();

    /// `onclick=`, `onerror=`, and friends
    static ref EVENT_HANDLER: Regex = Regex::new(r"(?i)on\w+\s*=").unwrap();

    /// URI schemes that can execute or exfiltrate when rendered as links
    static ref DANGEROUS_SCHEME: Regex =
        Regex::new(r"(?i)\b(javascript|data|vbscript|file|about|mocha|livescript)\s*:").unwrap();

    /// SQL keywords commonly seen in injection payloads
    static ref SQL_KEYWORD: Regex =
        Regex::new(r"(?i)\b(union|select|insert|update|delete|drop|truncate)\b").unwrap();

    /// Trailing statement terminator
    static ref TRAILING_SEMI: Regex = Regex::new(r";\s*$").unwrap();
}

/// Sanitize raw user input for display and downstream classification.
///
/// Total function: never fails, empty input yields an empty string. The
/// pre-escape length of the result is at most `max_len` characters (the
/// entity expansions in later stages may grow the byte length).
pub fn sanitize(input: &str, max_len: usize) -> String {
    // 1. Enforce max length early (defensive cap, counted in chars)
    let s: String = input.chars().take(max_len).collect();

    // 2. NFKC normalization collapses homoglyphs and width variants
    let s: String = s.nfkc().collect();

    // 3. Strip control characters and bidi overrides, keep ordinary whitespace
    let s: String = s.chars().filter(|&c| !is_forbidden_char(c)).collect();

    // 4. Nuke script/style blocks entirely
    let s = SCRIPT_BLOCK.replace_all(&s, "");
    let s = STYLE_BLOCK.replace_all(&s, "");

    // 5. Drop inline style attributes and event-handler prefixes
    let s = STYLE_ATTR.replace_all(&s, "");
    let s = EVENT_HANDLER.replace_all(&s, "");

    // 6. Neutralize dangerous URI schemes: "javascript:x" -> "javascript&#58;x"
    let s = DANGEROUS_SCHEME.replace_all(&s, |caps: &regex::Captures| {
        format!("{}&#58;", caps[1].to_lowercase())
    });

    // 7. Mask SQL keywords and comment/terminator tokens
    let s = SQL_KEYWORD.replace_all(&s, "");
    let s = s.replace("--", "\u{2011}\u{2011}");
    let s = s.replace("/*", "").replace("*/", "");
    let s = TRAILING_SEMI.replace(&s, "");

    // 8. Neuter shell metacharacters. The scheme entities from stage 6 must
    //    survive this pass; stage 3 guarantees no control characters remain,
    //    so U+0001 is free to use as a sentinel.
    let s = s.replace("&#58;", "\u{1}");
    let s = s.replace('&', "&#38;");
    let s = s.replace('|', "&#124;");
    let s = s.replace(';', "&#59;");
    let s = s.replace('\u{1}', "&#58;");

    // 9. Residual null bytes
    let s = s.replace('\0', "");

    // 10. Escape leftover markup so it is inert for display. Ampersands were
    //     already entity-encoded in stage 8.
    let s = s.replace('<', "&lt;").replace('>', "&gt;").replace('"', "&quot;");

    // 11. Trim
    s.trim().to_string()
}

/// Control characters (C0/C1 except space, tab, newline, carriage return)
/// and Unicode bidirectional-override characters.
fn is_forbidden_char(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => false,
        '\u{00}'..='\u{1f}' | '\u{7f}'..='\u{9f}' => true,
        '\u{202a}'..='\u{202e}' | '\u{2066}'..='\u{2069}' => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_block_removed() {
        let out = sanitize("<script>alert(1)</script>", 300);
        assert!(!out.contains("<script"));
        assert!(!out.contains("alert(1)"));
    }

    #[test]
    fn test_script_block_multiline() {
        let out = sanitize("before <ScRiPt>\nevil()\n</script > after", 300);
        assert!(!out.to_lowercase().contains("evil"));
        assert!(out.contains("before"));
        assert!(out.contains("after"));
    }

    #[test]
    fn test_angle_brackets_escaped() {
        let out = sanitize("1 < 2 and 3 > 2", 300);
        assert!(!out.contains('<'));
        assert!(!out.contains('>'));
        assert!(out.contains("&lt;"));
        assert!(out.contains("&gt;"));
    }

    #[test]
    fn test_dangerous_scheme_neutralized() {
        let out = sanitize("click javascript:alert(1) now", 300);
        assert!(out.contains("javascript&#58;"));
        assert!(!out.contains("javascript:"));

        let out = sanitize("DATA: here", 300);
        assert!(out.contains("data&#58;"));
    }

    #[test]
    fn test_harmless_colon_kept() {
        let out = sanitize("note: this is fine", 300);
        assert!(out.contains("note:"));
    }

    #[test]
    fn test_control_chars_stripped() {
        let out = sanitize("a\u{0}b\u{7}c\u{202e}d", 300);
        assert_eq!(out, "abcd");
    }

    #[test]
    fn test_whitespace_survives() {
        let out = sanitize("two\twords\nhere", 300);
        assert!(out.contains('\t'));
        assert!(out.contains('\n'));
    }

    #[test]
    fn test_sql_keywords_blanked() {
        let out = sanitize("UNION SELECT password", 300);
        assert!(!out.to_lowercase().contains("union"));
        assert!(!out.to_lowercase().contains("select"));
        assert!(out.contains("password"));
    }

    #[test]
    fn test_sql_comment_tokens() {
        let out = sanitize("x -- comment", 300);
        assert!(!out.contains("--"));

        let out = sanitize("stmt;", 300);
        assert!(!out.ends_with(';'));
    }

    #[test]
    fn test_shell_metas_encoded() {
        let out = sanitize("a|b", 300);
        assert!(out.contains("&#124;"));
        let out = sanitize("a & b", 300);
        assert!(out.contains("&#38;"));
    }

    #[test]
    fn test_event_handler_stripped() {
        let out = sanitize("img onerror=alert(1)", 300);
        assert!(!out.to_lowercase().contains("onerror="));
    }

    #[test]
    fn test_max_len_enforced() {
        let long: String = "x".repeat(500);
        let out = sanitize(&long, 300);
        assert_eq!(out.chars().count(), 300);
    }

    #[test]
    fn test_emoji_preserved() {
        let out = sanitize("nice day 🌞 right?", 300);
        assert!(out.contains('🌞'));
    }

    #[test]
    fn test_idempotent_on_clean_text() {
        for text in ["hello there, how are you?", "plain words only", "🌮 taco time!"] {
            let once = sanitize(text, 300);
            let twice = sanitize(&once, 300);
            assert_eq!(once, twice, "sanitize not idempotent on {text:?}");
        }
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(sanitize("", 300), "");
        assert_eq!(sanitize("   ", 300), "");
    }

    #[test]
    fn test_nfkc_collapses_width_variants() {
        // Fullwidth "ＡＢＣ" normalizes to ASCII "ABC"
        let out = sanitize("\u{ff21}\u{ff22}\u{ff23}", 300);
        assert_eq!(out, "ABC");
    }
}
