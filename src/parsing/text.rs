//! Text measurements shared by the parser and the aggregator.
//!
//! Two views of a message body exist:
//! - the *raw* body, which keeps everything the author typed (including
//!   zero-width joiners inside emoji sequences) and feeds all counts;
//! - the *normalized* body, which drops every control and format character,
//!   trims and lowercases, and is used only for placeholder matching.

use std::sync::OnceLock;

use regex::Regex;

fn invisible_re() -> &'static Regex {
    static INVISIBLE_RE: OnceLock<Regex> = OnceLock::new();
    INVISIBLE_RE.get_or_init(|| {
        // Bidi marks and embeddings, BOM, and control characters except tab
        Regex::new(
            r"[\x{200E}\x{200F}\x{061C}\x{202A}-\x{202E}\x{2066}-\x{2069}\x{FEFF}]|[\p{Cc}&&[^\t]]",
        )
        .expect("valid invisible character regex")
    })
}

fn leading_re() -> &'static Regex {
    static LEADING_RE: OnceLock<Regex> = OnceLock::new();
    LEADING_RE.get_or_init(|| Regex::new(r"^\p{Cf}+").expect("valid leading trim regex"))
}

fn format_chars_re() -> &'static Regex {
    static FORMAT_CHARS_RE: OnceLock<Regex> = OnceLock::new();
    FORMAT_CHARS_RE
        .get_or_init(|| Regex::new(r"[\p{Cc}\p{Cf}]").expect("valid format character regex"))
}

pub(crate) fn link_re() -> &'static Regex {
    static LINK_RE: OnceLock<Regex> = OnceLock::new();
    LINK_RE.get_or_init(|| Regex::new(r"https?://\S+").expect("valid link regex"))
}

fn emoji_re() -> &'static Regex {
    static EMOJI_RE: OnceLock<Regex> = OnceLock::new();
    EMOJI_RE.get_or_init(|| {
        Regex::new(concat!(
            // keycaps: 1️⃣ #️⃣
            r"[0-9#*]\x{FE0F}?\x{20E3}",
            // flags: pairs of regional indicators
            r"|[\x{1F1E6}-\x{1F1FF}]{2}",
            // pictographs with modifiers, tags and ZWJ chains
            r"|\p{Extended_Pictographic}[\x{FE0F}\p{Emoji_Modifier}\x{E0020}-\x{E007F}]*",
            r"(?:\x{200D}\p{Extended_Pictographic}[\x{FE0F}\p{Emoji_Modifier}\x{E0020}-\x{E007F}]*)*",
        ))
        .expect("valid emoji regex")
    })
}

/// Removes direction marks and control characters from a raw export line.
///
/// Marks are removed everywhere in the line; other invisible format
/// characters are trimmed from the start, so a header hidden behind a
/// left-to-right mark still starts with `[`. Whitespace is kept: an indented
/// line is never a header.
pub fn clean_line(line: &str) -> String {
    let stripped = invisible_re().replace_all(line, "");
    leading_re().replace(&stripped, "").into_owned()
}

/// Normalizes a body for placeholder comparison.
///
/// Drops all control and format characters, trims, lowercases.
pub fn normalize(body: &str) -> String {
    format_chars_re()
        .replace_all(body, "")
        .trim()
        .to_lowercase()
}

/// Number of whitespace-delimited tokens.
pub fn word_count(body: &str) -> usize {
    body.split_whitespace().count()
}

/// Number of characters once ASCII spaces are removed.
///
/// Punctuation, digits and emoji all count; only `' '` is excluded.
pub fn letter_count(body: &str) -> usize {
    body.chars().filter(|&c| c != ' ').count()
}

/// Number of non-overlapping `http://` / `https://` links.
pub fn link_count(body: &str) -> usize {
    link_re().find_iter(body).count()
}

/// Every emoji in `body`, in order, duplicates included.
///
/// Multi-codepoint sequences (skin tones, ZWJ families, flags, keycaps) are
/// returned as one glyph.
pub fn emojis(body: &str) -> Vec<String> {
    emoji_re()
        .find_iter(body)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Removes links from `body`.
pub fn strip_links(body: &str) -> std::borrow::Cow<'_, str> {
    link_re().replace_all(body, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_line_strips_leading_mark() {
        assert_eq!(
            clean_line("\u{200E}[01.02.2023, 10:00:00] Bob: \u{200E}image omitted"),
            "[01.02.2023, 10:00:00] Bob: image omitted"
        );
    }

    #[test]
    fn test_clean_line_strips_carriage_return() {
        assert_eq!(clean_line("hello\r"), "hello");
    }

    #[test]
    fn test_clean_line_keeps_leading_whitespace() {
        assert_eq!(clean_line("\u{200E}  [x]"), "  [x]");
        assert_eq!(clean_line("\tcode"), "\tcode");
    }

    #[test]
    fn test_clean_line_keeps_zwj() {
        let family = "👨\u{200D}👩\u{200D}👧";
        assert_eq!(clean_line(family), family);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("  \u{200E}Image Omitted\u{200B} "), "image omitted");
        assert_eq!(normalize("Çıkartma dahil edilmedi"), "çıkartma dahil edilmedi");
    }

    #[test]
    fn test_counts_reference_example() {
        assert_eq!(word_count("Hello world"), 2);
        assert_eq!(letter_count("Hello world"), 10);
        assert_eq!(letter_count("Hi, you!"), 7);
        assert_eq!(word_count("   "), 0);
        assert_eq!(letter_count(""), 0);
    }

    #[test]
    fn test_letter_count_keeps_tabs() {
        assert_eq!(letter_count("a\tb"), 3);
    }

    #[test]
    fn test_link_count() {
        assert_eq!(link_count("see https://a.io and http://b.io/x?y=1"), 2);
        assert_eq!(link_count("ftp://nope.io www.nope.io"), 0);
        assert_eq!(link_count("https://a.iohttps://b.io"), 1);
    }

    #[test]
    fn test_emojis_in_order_with_duplicates() {
        assert_eq!(emojis("hi 😀 there 😀🎉"), vec!["😀", "😀", "🎉"]);
        assert!(emojis("plain text 123 #tag").is_empty());
    }

    #[test]
    fn test_emoji_sequences() {
        assert_eq!(emojis("👍🏽"), vec!["👍🏽"]);
        assert_eq!(emojis("🇹🇷🇺🇸"), vec!["🇹🇷", "🇺🇸"]);
        assert_eq!(emojis("👨\u{200D}👩\u{200D}👧"), vec!["👨\u{200D}👩\u{200D}👧"]);
        assert_eq!(emojis("❤️"), vec!["❤️"]);
        assert_eq!(emojis("1️⃣"), vec!["1️⃣"]);
    }

    #[test]
    fn test_strip_links() {
        assert_eq!(strip_links("read https://x.io now"), "read  now");
    }
}
