use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{ChainId, NormalizedTitle, ScreenType, Subtitle};

/// 【IMAX・字幕】 and similar bracketed segments in T-JOY titles
static BRACKET_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"【.*?】").expect("Invalid bracket segment regex"));

/// Screen-format fragments tested in order, first hit wins. "IMAX" sits
/// before "IMAXレーザー", so a laser listing matches plain IMAX; kept
/// that way for parity with the published feed.
const SCREEN_TYPE_RULES: &[(&str, ScreenType)] = &[
    ("4DX", ScreenType::FourDx),
    ("IMAX", ScreenType::Imax),
    ("IMAXレーザー", ScreenType::ImaxLaser),
    ("DOLBY", ScreenType::Dolby),
    ("BESTIA", ScreenType::Bestia),
];

fn extract_subtitle(title: &str) -> Subtitle {
    if title.contains("字幕") {
        Subtitle::Caption
    } else if title.contains("吹替") {
        Subtitle::Dub
    } else {
        Subtitle::Original
    }
}

fn extract_screen_type(title: &str) -> ScreenType {
    SCREEN_TYPE_RULES
        .iter()
        .find(|(fragment, _)| title.contains(fragment))
        .map(|(_, screen_type)| *screen_type)
        .unwrap_or(ScreenType::None)
}

/// Replace full-width parentheses with half-width ones.
fn halfwidth_parens(title: &str) -> String {
    title.replace('（', "(").replace('）', ")")
}

/// Split a raw listing title into the clean movie title and its embedded
/// subtitle/screen-format markers. Markers are extracted first from the
/// raw text, then the chain-specific cleanup runs; a cleanup that finds
/// nothing to remove is a no-op, so the whole thing is total and
/// idempotent on its own output.
pub fn normalize_title(raw_title: &str, chain: ChainId) -> NormalizedTitle {
    let subtitle = extract_subtitle(raw_title);
    let screen_type = extract_screen_type(raw_title);

    match chain {
        ChainId::Toho | ChainId::Movix | ChainId::Aeon | ChainId::Other => NormalizedTitle {
            title: halfwidth_parens(raw_title),
            subtitle,
            screen_type,
        },
        ChainId::Tjoy => {
            // e.g. 【IMAX・字幕】デーヴァラ(PG12)
            let truncated = raw_title
                .split("(PG")
                .next()
                .unwrap_or(raw_title)
                .trim();
            let title = BRACKET_SEGMENT.replace_all(truncated, "").trim().to_string();
            NormalizedTitle {
                title,
                subtitle,
                screen_type,
            }
        }
        ChainId::United => {
            let truncated = raw_title.split('（').next().unwrap_or(raw_title).trim();
            // The subtitle marker is read again from the truncated title
            // and that reading wins for this chain.
            let subtitle = extract_subtitle(truncated);
            let title = truncated
                .replace("IMAX", "")
                .replace("4DX2D", "")
                .replace("DOLBY", "")
                .trim()
                .to_string();
            NormalizedTitle {
                title,
                subtitle,
                screen_type,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn toho_converts_fullwidth_parens_and_extracts_caption() {
        let result = normalize_title("アベンジャーズ（字幕）", ChainId::Toho);
        assert_eq!(result.title, "アベンジャーズ(字幕)");
        assert_eq!(result.subtitle, Subtitle::Caption);
        assert_eq!(result.screen_type, ScreenType::None);
    }

    #[test]
    fn movix_aeon_other_share_the_paren_cleanup() {
        for chain in [ChainId::Movix, ChainId::Aeon, ChainId::Other] {
            let result = normalize_title("ラストマイル（吹替版）", chain);
            assert_eq!(result.title, "ラストマイル(吹替版)");
            assert_eq!(result.subtitle, Subtitle::Dub);
        }
    }

    #[test]
    fn tjoy_strips_rating_suffix_and_bracket_segment() {
        let result = normalize_title("デーヴァラ(PG12)【IMAX・字幕】", ChainId::Tjoy);
        assert_eq!(result.title, "デーヴァラ");
        assert_eq!(result.subtitle, Subtitle::Caption);
        assert_eq!(result.screen_type, ScreenType::Imax);
    }

    #[test]
    fn tjoy_strips_leading_bracket_segment() {
        let result = normalize_title("【4DX・吹替】マッドマックス(PG12)", ChainId::Tjoy);
        assert_eq!(result.title, "マッドマックス");
        assert_eq!(result.subtitle, Subtitle::Dub);
        assert_eq!(result.screen_type, ScreenType::FourDx);
    }

    #[test]
    fn united_truncates_and_removes_format_fragments() {
        let result = normalize_title("IMAXデューン 砂の惑星（字幕版）", ChainId::United);
        assert_eq!(result.title, "デューン 砂の惑星");
        // Marker sat inside the truncated part, so the second reading
        // comes up empty even though the raw title contained 字幕.
        assert_eq!(result.subtitle, Subtitle::Original);
        assert_eq!(result.screen_type, ScreenType::Imax);
    }

    #[test]
    fn united_keeps_subtitle_marker_that_survives_truncation() {
        let result = normalize_title("4DX2D 字幕 ゴジラ（吹替は別枠）", ChainId::United);
        assert_eq!(result.title, "字幕 ゴジラ");
        assert_eq!(result.subtitle, Subtitle::Caption);
        assert_eq!(result.screen_type, ScreenType::FourDx);
    }

    #[test]
    fn united_does_not_remove_bestia_fragment() {
        let result = normalize_title("BESTIAゴジラ", ChainId::United);
        assert_eq!(result.title, "BESTIAゴジラ");
        assert_eq!(result.screen_type, ScreenType::Bestia);
    }

    #[test]
    fn plain_title_gets_original_and_none_tags() {
        let result = normalize_title("となりのトトロ", ChainId::Toho);
        assert_eq!(result.title, "となりのトトロ");
        assert_eq!(result.subtitle, Subtitle::Original);
        assert_eq!(result.screen_type, ScreenType::None);
    }

    #[test]
    fn imax_matches_before_the_laser_variant() {
        let result = normalize_title("オッペンハイマー IMAXレーザー", ChainId::Toho);
        assert_eq!(result.screen_type, ScreenType::Imax);
    }

    #[test]
    fn normalize_title_is_idempotent_on_its_own_output() {
        for (raw, chain) in [
            ("デーヴァラ(PG12)【IMAX・字幕】", ChainId::Tjoy),
            ("アベンジャーズ（字幕）", ChainId::Toho),
            ("IMAXデューン 砂の惑星（字幕版）", ChainId::United),
        ] {
            let first = normalize_title(raw, chain);
            let second = normalize_title(&first.title, chain);
            assert_eq!(second.title, first.title);
        }
    }
}
