//! Heuristic association between an email sender and a casino name.
//!
//! Inbound mail carries no reference to the casino it came from, so a sender
//! is matched against normalized casino names: exact equality on the display
//! name, the full address or the address' domain label, or substring
//! containment when both sides have at least [`MIN_PARTIAL_MATCH_LEN`]
//! characters.

use serde::{Deserialize, Serialize};
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

/// Shorter keys only match exactly, so tokens like "bet" or "win" do not
/// link unrelated casinos.
pub const MIN_PARTIAL_MATCH_LEN: usize = 4;

const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x1F000, 0x1FAFF),
    (0x2600, 0x27BF),
    (0x2B00, 0x2BFF),
    (0x2300, 0x23FF),
    (0xFE00, 0xFE0F),
    (0x200D, 0x200D),
    (0x20E3, 0x20E3),
    (0xE0020, 0xE007F),
];

fn is_emoji(c: char) -> bool {
    let code = c as u32;
    EMOJI_RANGES
        .iter()
        .any(|(start, end)| (*start..=*end).contains(&code))
}

/// Reduces a name or address to a bare lowercase alphanumeric key.
///
/// `"🎰 Lucky Casino!"` becomes `"luckycasino"` and `"Café Royal"` becomes
/// `"caferoyal"`: NFKD splits accented letters into base letter plus a
/// combining mark, and only letters and digits survive. Combining marks are
/// dropped even where Unicode counts them as alphabetic (U+0345, Indic vowel
/// signs).
pub fn normalize_name(value: &str) -> String {
    value
        .nfkd()
        .filter(|c| !is_emoji(*c))
        .filter(|c| c.is_alphanumeric() && !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
        .trim()
        .to_string()
}

/// Normalized label between `@` and the next `.` of an address.
pub fn extract_domain_name(address: &str) -> Option<String> {
    let (_, domain) = address.split_once('@')?;
    let (label, _) = domain.split_once('.')?;
    if label.is_empty() {
        return None;
    }

    Some(normalize_name(label))
}

/// Normalized matching key for a casino display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NameKey(String);

impl NameKey {
    pub fn new(display_name: &str) -> Self {
        Self(normalize_name(display_name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Raw sender fields of an ingested email.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sender<'a> {
    pub from_name: Option<&'a str>,
    pub from_email: Option<&'a str>,
}

/// Sender fields normalized once, so one email can be tested against many
/// casino keys cheaply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedSender {
    pub name: String,
    pub address: String,
    pub domain: String,
}

impl NormalizedSender {
    pub fn new(sender: Sender<'_>) -> Self {
        Self {
            name: sender.from_name.map(normalize_name).unwrap_or_default(),
            address: sender.from_email.map(normalize_name).unwrap_or_default(),
            domain: sender
                .from_email
                .and_then(extract_domain_name)
                .unwrap_or_default(),
        }
    }

    pub fn matches_exactly(&self, key: &str) -> bool {
        !key.is_empty() && (self.name == key || self.address == key || self.domain == key)
    }

    pub fn matches_partially(&self, key: &str) -> bool {
        !key.is_empty() && (contains_either(&self.name, key) || contains_either(&self.domain, key))
    }

    pub fn matches(&self, key: &NameKey) -> bool {
        self.matches_exactly(key.as_str()) || self.matches_partially(key.as_str())
    }
}

fn contains_either(a: &str, b: &str) -> bool {
    a.chars().count() >= MIN_PARTIAL_MATCH_LEN
        && b.chars().count() >= MIN_PARTIAL_MATCH_LEN
        && (a.contains(b) || b.contains(a))
}

/// Whether the sender plausibly belongs to the casino behind `casino_key`.
///
/// An empty key never matches.
pub fn email_matches_casino(sender: Sender<'_>, casino_key: &NameKey) -> bool {
    if casino_key.is_empty() {
        return false;
    }

    NormalizedSender::new(sender).matches(casino_key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_name(name: &str) -> Sender<'_> {
        Sender {
            from_name: Some(name),
            from_email: None,
        }
    }

    fn from_email(address: &str) -> Sender<'_> {
        Sender {
            from_name: None,
            from_email: Some(address),
        }
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("🎰 Lucky Casino!"), "luckycasino");
        assert_eq!(normalize_name("Café Royal"), "caferoyal");
        assert_eq!(normalize_name("  Spin-N-Win 777  "), "spinnwin777");
        assert_eq!(normalize_name("ＬＵＣＫＹ"), "lucky");
        assert_eq!(normalize_name("🎲🎰✨"), "");
    }

    #[test]
    fn test_normalize_name_drops_alphabetic_combining_marks() {
        // U+1FB3 decomposes to alpha + U+0345, which is Other_Alphabetic.
        assert_eq!(normalize_name("\u{1FB3}"), "\u{03B1}");
        assert_eq!(normalize_name("Casino \u{03B1}\u{0345}"), "casino\u{03B1}");
        // Devanagari KA followed by the vowel sign I (Mc).
        assert_eq!(normalize_name("\u{0915}\u{093F}"), "\u{0915}");
    }

    #[test]
    fn test_extract_domain_name() {
        assert_eq!(
            extract_domain_name("info@luckycasino.com").as_deref(),
            Some("luckycasino")
        );
        assert_eq!(
            extract_domain_name("news@Lucky-Casino.co.uk").as_deref(),
            Some("luckycasino")
        );
        assert_eq!(extract_domain_name("no-at-sign.com"), None);
        assert_eq!(extract_domain_name("user@localhost"), None);
        assert_eq!(extract_domain_name("user@.com"), None);
    }

    #[test]
    fn test_exact_name_match() {
        let key = NameKey::new("Lucky Casino");
        assert!(email_matches_casino(from_name("Lucky Casino"), &key));
        assert!(email_matches_casino(from_name("LUCKY casino 🎰"), &key));
    }

    #[test]
    fn test_domain_match() {
        let key = NameKey::new("Lucky Casino");
        assert!(email_matches_casino(from_email("promo@luckycasino.com"), &key));
        assert!(email_matches_casino(
            from_email("vip@luckycasinopartners.net"),
            &key
        ));
    }

    #[test]
    fn test_partial_name_match_in_both_directions() {
        let key = NameKey::new("Royal Spins");
        assert!(email_matches_casino(from_name("Royal Spins Team"), &key));

        let key = NameKey::new("Royal Spins Casino International");
        assert!(email_matches_casino(from_name("Royal Spins"), &key));
    }

    #[test]
    fn test_full_address_only_matches_exactly() {
        let key = NameKey::new("promo");
        assert!(!email_matches_casino(from_email("promo@luckycasino.com"), &key));

        let key = NameKey::new("promo@luckycasino.com");
        assert!(email_matches_casino(from_email("promo@luckycasino.com"), &key));
    }

    #[test]
    fn test_short_key_never_partially_matches() {
        let key = NameKey::new("Bet");
        assert!(!email_matches_casino(from_name("Betway Casino"), &key));
        assert!(!email_matches_casino(from_email("news@betway.com"), &key));
        assert!(email_matches_casino(from_name("BET"), &key));
    }

    #[test]
    fn test_short_sender_never_partially_matches() {
        let key = NameKey::new("Winward Casino");
        assert!(!email_matches_casino(from_name("Win"), &key));
    }

    #[test]
    fn test_empty_key_never_matches() {
        for name in ["", "   ", "🎰🎰", "!!!"] {
            let key = NameKey::new(name);
            assert!(key.is_empty());
            assert!(!email_matches_casino(from_name(""), &key));
            assert!(!email_matches_casino(
                Sender {
                    from_name: Some("Lucky Casino"),
                    from_email: Some("info@luckycasino.com"),
                },
                &key
            ));
        }
    }

    #[test]
    fn test_missing_sender_fields() {
        let key = NameKey::new("Lucky Casino");
        assert!(!email_matches_casino(Sender::default(), &key));
    }

    #[test]
    fn test_unrelated_sender() {
        let key = NameKey::new("Lucky Casino");
        assert!(!email_matches_casino(
            Sender {
                from_name: Some("Newsletter"),
                from_email: Some("hello@spinpalace.com"),
            },
            &key
        ));
    }
}
