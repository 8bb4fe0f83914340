//! Reliability badge text.

use ranktable_report::types::BadgeView;

use crate::validators::is_non_empty_string;

/// Badge code meaning "no badge"
pub const NO_BADGE: &str = "none";

const KNOWN_BADGES: [(&str, &str); 3] = [
    ("no-bonus", "Нет бонуса"),
    ("no-deposit", "Без депозита"),
    ("exclusive", "Эксклюзив"),
];

/// Badge for `code`, or `None` when the code is absent, blank or `none`.
pub fn reliability_badge(code: Option<&str>) -> Option<BadgeView> {
    let code = code.filter(|c| is_non_empty_string(Some(*c)) && *c != NO_BADGE)?;

    let text = KNOWN_BADGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, text)| (*text).to_owned())
        .unwrap_or_else(|| derive_badge_text(code));

    Some(BadgeView {
        code: code.to_owned(),
        text,
    })
}

/// `custom-offer` -> `Custom Offer`: dashes become spaces and each ASCII word
/// start is upper-cased.
pub fn derive_badge_text(code: &str) -> String {
    let mut text = String::with_capacity(code.len());
    let mut in_word = false;

    for c in code.chars() {
        let c = if c == '-' { ' ' } else { c };
        let is_word = c.is_ascii_alphanumeric() || c == '_';
        if is_word && !in_word {
            text.push(c.to_ascii_uppercase());
        } else {
            text.push(c);
        }
        in_word = is_word;
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(code: &str) -> Option<String> {
        reliability_badge(Some(code)).map(|b| b.text)
    }

    #[test]
    fn known_codes_use_fixed_text() {
        assert_eq!(text("no-deposit").as_deref(), Some("Без депозита"));
        assert_eq!(text("no-bonus").as_deref(), Some("Нет бонуса"));
        assert_eq!(text("exclusive").as_deref(), Some("Эксклюзив"));
    }

    #[test]
    fn unknown_codes_are_title_cased() {
        assert_eq!(text("custom-offer").as_deref(), Some("Custom Offer"));
        assert_eq!(text("vip").as_deref(), Some("Vip"));
        assert_eq!(text("fast_payout").as_deref(), Some("Fast_payout"));
    }

    #[test]
    fn absent_badges_render_nothing() {
        assert_eq!(reliability_badge(Some("none")), None);
        assert_eq!(reliability_badge(Some("")), None);
        assert_eq!(reliability_badge(Some("  ")), None);
        assert_eq!(reliability_badge(None), None);
    }

    #[test]
    fn badge_keeps_raw_code_for_styling() {
        let badge = reliability_badge(Some("custom-offer")).expect("badge");
        assert_eq!(badge.code, "custom-offer");
    }
}
