//! Media and call placeholder detection.
//!
//! WhatsApp replaces non-text content with a fixed phrase such as
//! `image omitted` or `görüntü dahil edilmedi`. Each phrase belongs to a
//! [`MediaKind`]; the phrase tables themselves live on [`Locale`].
//!
//! Matching runs on the *normalized* body (see
//! [`normalize`](super::text::normalize)). A [`Placeholder`] matches either
//! anywhere in the body or only at its start. Categories are not exclusive:
//! `cevapsız sesli arama.` counts both as a voice call and a missed voice call.

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Category of a media or call placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    Sticker,
    Image,
    Video,
    Audio,
    Document,
    Gif,
    Location,
    Contact,
    VoiceCall,
    VideoCall,
    MissedVoiceCall,
    MissedVideoCall,
    AnsweredElsewhere,
    CallBack,
}

impl MediaKind {
    /// Returns all kinds in report order.
    pub fn all() -> &'static [MediaKind] {
        &[
            MediaKind::Sticker,
            MediaKind::Image,
            MediaKind::Video,
            MediaKind::Audio,
            MediaKind::Document,
            MediaKind::Gif,
            MediaKind::Location,
            MediaKind::Contact,
            MediaKind::VoiceCall,
            MediaKind::VideoCall,
            MediaKind::MissedVoiceCall,
            MediaKind::MissedVideoCall,
            MediaKind::AnsweredElsewhere,
            MediaKind::CallBack,
        ]
    }

    /// Human-readable label used by the renderers.
    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Sticker => "Sticker",
            MediaKind::Image => "Image",
            MediaKind::Video => "Video",
            MediaKind::Audio => "Audio",
            MediaKind::Document => "Document",
            MediaKind::Gif => "GIF",
            MediaKind::Location => "Location",
            MediaKind::Contact => "Contact",
            MediaKind::VoiceCall => "Voice Call",
            MediaKind::VideoCall => "Video Call",
            MediaKind::MissedVoiceCall => "Missed Voice Call",
            MediaKind::MissedVideoCall => "Missed Video Call",
            MediaKind::AnsweredElsewhere => "Call (Other Device)",
            MediaKind::CallBack => "Call (Call Back)",
        }
    }

    /// Returns `true` for call events as opposed to attached content.
    pub fn is_call(self) -> bool {
        matches!(
            self,
            MediaKind::VoiceCall
                | MediaKind::VideoCall
                | MediaKind::MissedVoiceCall
                | MediaKind::MissedVideoCall
                | MediaKind::AnsweredElsewhere
                | MediaKind::CallBack
        )
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Where a placeholder phrase may occur in a normalized body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Anywhere,
    Start,
}

/// One placeholder phrase of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder {
    /// Lowercased phrase
    pub phrase: &'static str,
    pub kind: MediaKind,
    pub anchor: Anchor,
}

impl Placeholder {
    pub const fn anywhere(phrase: &'static str, kind: MediaKind) -> Self {
        Self {
            phrase,
            kind,
            anchor: Anchor::Anywhere,
        }
    }

    pub const fn start(phrase: &'static str, kind: MediaKind) -> Self {
        Self {
            phrase,
            kind,
            anchor: Anchor::Start,
        }
    }

    /// Returns `true` if the phrase occurs in `normalized` at an allowed position.
    pub fn matches(&self, normalized: &str) -> bool {
        match self.anchor {
            Anchor::Anywhere => normalized.contains(self.phrase),
            Anchor::Start => normalized.starts_with(self.phrase),
        }
    }
}

/// Returns every kind whose phrase occurs in `normalized`, in [`MediaKind::all`] order.
///
/// `normalized` must already be stripped of invisible characters and lowercased.
pub fn detect_media(normalized: &str, locales: &[Locale]) -> Vec<MediaKind> {
    let mut kinds: Vec<MediaKind> = locales
        .iter()
        .flat_map(|locale| locale.placeholders())
        .filter(|placeholder| placeholder.matches(normalized))
        .map(|placeholder| placeholder.kind)
        .collect();
    kinds.sort_unstable();
    kinds.dedup();
    kinds
}

/// Returns `true` if any placeholder phrase matches `normalized`.
pub fn is_media(normalized: &str, locales: &[Locale]) -> bool {
    locales
        .iter()
        .flat_map(|locale| locale.placeholders())
        .any(|placeholder| placeholder.matches(normalized))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOTH: &[Locale] = &[Locale::English, Locale::Turkish];

    #[test]
    fn test_detect_image_in_both_locales() {
        assert_eq!(detect_media("image omitted", BOTH), vec![MediaKind::Image]);
        assert_eq!(
            detect_media("görüntü dahil edilmedi", BOTH),
            vec![MediaKind::Image]
        );
    }

    #[test]
    fn test_missed_call_is_also_a_call() {
        let kinds = detect_media("cevapsız sesli arama.", BOTH);
        assert!(kinds.contains(&MediaKind::VoiceCall));
        assert!(kinds.contains(&MediaKind::MissedVoiceCall));

        let kinds = detect_media("missed video call", BOTH);
        assert!(kinds.contains(&MediaKind::VideoCall));
        assert!(kinds.contains(&MediaKind::MissedVideoCall));
    }

    #[test]
    fn test_location_link() {
        let kinds = detect_media("konum: https://maps.google.com/?q=41.0,29.0", BOTH);
        assert_eq!(kinds, vec![MediaKind::Location]);
    }

    #[test]
    fn test_plain_text_is_not_media() {
        assert!(!is_media("hello world", BOTH));
        assert!(detect_media("let's call later", BOTH).is_empty());
    }

    #[test]
    fn test_call_phrases_need_placeholder_shape() {
        assert!(!is_media("can we do a video call tonight?", BOTH));
        assert!(!is_media("akşam sesli arama yapalım mı", BOTH));
        assert!(!is_media("about that missed voice call", BOTH));
        assert_eq!(
            detect_media("voice call. 12 min", BOTH),
            vec![MediaKind::VoiceCall]
        );
    }

    #[test]
    fn test_anchor() {
        let start = Placeholder::start("video call.", MediaKind::VideoCall);
        assert!(start.matches("video call. no answer"));
        assert!(!start.matches("a video call. later"));

        let anywhere = Placeholder::anywhere("sesli arama.", MediaKind::VoiceCall);
        assert!(anywhere.matches("cevapsız sesli arama."));
        assert!(!anywhere.matches("sesli arama yapalım"));
    }

    #[test]
    fn test_locale_restriction() {
        assert!(is_media("sticker omitted", &[Locale::English]));
        assert!(!is_media("sticker omitted", &[Locale::Turkish]));
        assert!(!is_media("sticker omitted", &[]));
    }

    #[test]
    fn test_kind_labels() {
        assert_eq!(MediaKind::Gif.to_string(), "GIF");
        assert_eq!(MediaKind::all().len(), 14);
        assert!(MediaKind::CallBack.is_call());
        assert!(!MediaKind::Document.is_call());
    }
}
