//! Export locales.
//!
//! A chat client localizes three things in an export: the timestamp layout,
//! the placeholder phrases substituted for media and calls, and the marker
//! left behind by edited messages. [`Locale`] is the table that maps a locale
//! tag to all three, so the parser never hardcodes a language.
//!
//! Two locales are built in: [`Locale::English`] and [`Locale::Turkish`].
//! The parser tries configured locales in order (see
//! [`ParserConfig`](crate::config::ParserConfig)).

use serde::{Deserialize, Serialize};

use crate::parsing::media::{MediaKind, Placeholder};

/// A supported export locale.
///
/// # Example
///
/// ```rust
/// use chatstats::locale::Locale;
/// use std::str::FromStr;
///
/// let locale = Locale::from_str("tr").unwrap();
/// assert_eq!(locale, Locale::Turkish);
/// assert_eq!(locale.tag(), "tr");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English iOS exports: `image omitted`, `Missed voice call`
    #[serde(alias = "en")]
    English,

    /// Turkish exports: `görüntü dahil edilmedi`, `Cevapsız sesli arama.`
    #[serde(alias = "tr")]
    Turkish,
}

// Phrases are stored lowercased; they are compared against normalized bodies.
// English call events open the body ("Voice call. 4 min"), so their phrases
// are anchored at the start. Turkish call phrases keep the trailing period.
const ENGLISH_PLACEHOLDERS: &[Placeholder] = &[
    Placeholder::anywhere("sticker omitted", MediaKind::Sticker),
    Placeholder::anywhere("image omitted", MediaKind::Image),
    Placeholder::anywhere("video omitted", MediaKind::Video),
    Placeholder::anywhere("audio omitted", MediaKind::Audio),
    Placeholder::anywhere("document omitted", MediaKind::Document),
    Placeholder::anywhere("gif omitted", MediaKind::Gif),
    Placeholder::anywhere("contact card omitted", MediaKind::Contact),
    Placeholder::anywhere("location: https://maps.google.com", MediaKind::Location),
    Placeholder::start("voice call.", MediaKind::VoiceCall),
    Placeholder::start("video call.", MediaKind::VideoCall),
    Placeholder::start("missed voice call", MediaKind::VoiceCall),
    Placeholder::start("missed video call", MediaKind::VideoCall),
    Placeholder::start("missed voice call", MediaKind::MissedVoiceCall),
    Placeholder::start("missed video call", MediaKind::MissedVideoCall),
    Placeholder::start("voice call. no answer", MediaKind::MissedVoiceCall),
    Placeholder::start("video call. no answer", MediaKind::MissedVideoCall),
    Placeholder::start("voice call. answered on other device", MediaKind::AnsweredElsewhere),
    Placeholder::start("video call. answered on other device", MediaKind::AnsweredElsewhere),
    Placeholder::start("voice call. tap to call back", MediaKind::CallBack),
    Placeholder::start("video call. tap to call back", MediaKind::CallBack),
];

const TURKISH_PLACEHOLDERS: &[Placeholder] = &[
    Placeholder::anywhere("çıkartma dahil edilmedi", MediaKind::Sticker),
    Placeholder::anywhere("görüntü dahil edilmedi", MediaKind::Image),
    Placeholder::anywhere("video dahil edilmedi", MediaKind::Video),
    Placeholder::anywhere("ses dahil edilmedi", MediaKind::Audio),
    Placeholder::anywhere("belge dahil edilmedi", MediaKind::Document),
    Placeholder::anywhere("gif dahil edilmedi", MediaKind::Gif),
    Placeholder::anywhere("kişi kartı dahil edilmedi", MediaKind::Contact),
    Placeholder::anywhere("konum: https://maps.google.com", MediaKind::Location),
    Placeholder::anywhere("sesli arama.", MediaKind::VoiceCall),
    Placeholder::anywhere("görüntülü arama.", MediaKind::VideoCall),
    Placeholder::anywhere("cevapsız sesli arama.", MediaKind::MissedVoiceCall),
    Placeholder::anywhere("cevapsız görüntülü arama.", MediaKind::MissedVideoCall),
    Placeholder::anywhere("sesli arama. cevaplanmadı", MediaKind::MissedVoiceCall),
    Placeholder::anywhere("görüntülü arama. cevaplanmadı", MediaKind::MissedVideoCall),
    Placeholder::anywhere("sesli arama. başka bir cihazda cevaplandı", MediaKind::AnsweredElsewhere),
    Placeholder::anywhere("görüntülü arama. başka bir cihazda cevaplandı", MediaKind::AnsweredElsewhere),
    Placeholder::anywhere("sesli arama. geri aramak için dokunun", MediaKind::CallBack),
    Placeholder::anywhere("görüntülü arama. geri aramak için dokunun", MediaKind::CallBack),
];

impl Locale {
    /// Returns the short tag (`en`, `tr`).
    pub fn tag(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Turkish => "tr",
        }
    }

    /// Returns chrono formats for `"<date> <time>"` header timestamps.
    pub fn timestamp_formats(self) -> &'static [&'static str] {
        match self {
            // Both clients write day-first dates with a 24-hour clock
            Locale::English | Locale::Turkish => &["%d.%m.%Y %H:%M:%S"],
        }
    }

    /// Returns the lowercased placeholder phrases and their categories.
    pub fn placeholders(self) -> &'static [Placeholder] {
        match self {
            Locale::English => ENGLISH_PLACEHOLDERS,
            Locale::Turkish => TURKISH_PLACEHOLDERS,
        }
    }

    /// Returns the normalized "edited message" marker.
    pub fn edited_marker(self) -> &'static str {
        match self {
            Locale::English => "<this message was edited>",
            Locale::Turkish => "<bu mesaj düzenlendi>",
        }
    }

    /// Returns all built-in locales in default priority order.
    pub fn all() -> &'static [Locale] {
        &[Locale::English, Locale::Turkish]
    }

    /// Returns all accepted names including tags.
    pub fn all_names() -> &'static [&'static str] {
        &["english", "en", "turkish", "tr"]
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::English => write!(f, "English"),
            Locale::Turkish => write!(f, "Turkish"),
        }
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "english" | "en" => Ok(Locale::English),
            "turkish" | "tr" => Ok(Locale::Turkish),
            _ => Err(format!(
                "Unknown locale: '{}'. Expected one of: {}",
                s,
                Locale::all_names().join(", ")
            )),
        }
    }
}

/// Returns `true` if `normalized` is exactly one of the locales' edited markers.
pub fn is_edited_marker(normalized: &str, locales: &[Locale]) -> bool {
    locales
        .iter()
        .any(|locale| locale.edited_marker() == normalized)
}
