// 🔢 Quantity Engine - Extract and rewrite GB amounts embedded in free text
//
// Catalog strings mix prose with quantities ("23GB Hotspot", "5GB Plan
// (12 months)"). This module turns those mentions into typed values and
// rewrites them in place without disturbing the surrounding text.
//
// Matching is always on the FIRST <digits>GB occurrence in a string. The
// engine does not try to disambiguate multiple mentions in one field; that
// limitation is inherited from the data, not something to paper over here.

use serde::{Deserialize, Serialize};

// ============================================================================
// SENTINELS
// ============================================================================

// Los centinelas nunca llevan cantidad: son puntos fijos del motor.

/// True when the string is the "Unlimited" sentinel (trimmed, any case)
pub fn is_unlimited(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("unlimited")
}

/// True when the string is the "None" sentinel (trimmed, any case)
pub fn is_none_sentinel(text: &str) -> bool {
    text.trim().eq_ignore_ascii_case("none")
}

fn is_sentinel(text: &str) -> bool {
    is_unlimited(text) || is_none_sentinel(text)
}

// ============================================================================
// EXTRACTION
// ============================================================================

/// Which structured field a free-text quantity refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuantityKind {
    Data,
    Hotspot,
}

impl QuantityKind {
    /// Name of the structured field this kind mirrors
    pub fn field_name(&self) -> &str {
        match self {
            QuantityKind::Data => "data",
            QuantityKind::Hotspot => "hotspot",
        }
    }
}

/// Typed result of parsing one string field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    pub kind: QuantityKind,
    pub value: u32,
}

/// Byte span of the first `<digits>GB` occurrence.
///
/// All three offsets sit on ASCII bytes, so slicing with them is safe even
/// when the surrounding text is multi-byte UTF-8.
struct GbSpan {
    start: usize,      // first digit
    digits_end: usize, // one past the last digit
    suffix_end: usize, // one past the "GB" suffix
}

fn find_gb_span(text: &str) -> Option<GbSpan> {
    let bytes = text.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i].is_ascii_digit() {
            let start = i;
            let mut j = i;
            while j < bytes.len() && bytes[j].is_ascii_digit() {
                j += 1;
            }
            if j + 1 < bytes.len()
                && bytes[j].eq_ignore_ascii_case(&b'g')
                && bytes[j + 1].eq_ignore_ascii_case(&b'b')
            {
                return Some(GbSpan {
                    start,
                    digits_end: j,
                    suffix_end: j + 2,
                });
            }
            i = j; // skip the whole digit run before rescanning
        } else {
            i += 1;
        }
    }
    None
}

/// Extract the first GB quantity from a string.
///
/// Returns `None` for the sentinels "Unlimited" and "None", and for any
/// string without a `<digits>GB` occurrence. Absence of a match is normal,
/// never an error.
pub fn extract_quantity(text: &str) -> Option<u32> {
    if is_sentinel(text) {
        return None;
    }
    let span = find_gb_span(text)?;
    text[span.start..span.digits_end].parse::<u32>().ok()
}

/// Extract the first quantity along with its kind.
///
/// A mention is Hotspot-kind when the surrounding text says "hotspot"
/// anywhere (covers "mobile hotspot" too); otherwise it describes data.
pub fn classify(text: &str) -> Option<Extraction> {
    let value = extract_quantity(text)?;
    let kind = if mentions_hotspot(text) {
        QuantityKind::Hotspot
    } else {
        QuantityKind::Data
    };
    Some(Extraction { kind, value })
}

/// True when the text mentions a hotspot allowance ("hotspot", any case)
pub fn mentions_hotspot(text: &str) -> bool {
    text.to_ascii_lowercase().contains("hotspot")
}

/// True when the text mentions the high-speed data allowance
pub fn mentions_high_speed_data(text: &str) -> bool {
    text.to_ascii_lowercase().contains("high-speed data")
}

// ============================================================================
// REWRITE
// ============================================================================

/// Replace the first `<digits>GB` occurrence with `<new_value>GB`.
///
/// Everything around the span is preserved, including the case of the
/// literal "GB" suffix as found ("gb" stays "gb"). Strings without an
/// occurrence come back unchanged; callers check applicability first.
pub fn rewrite_quantity(text: &str, new_value: u32) -> String {
    match find_gb_span(text) {
        Some(span) => {
            let mut out = String::with_capacity(text.len() + 4);
            out.push_str(&text[..span.start]);
            out.push_str(&new_value.to_string());
            out.push_str(&text[span.digits_end..span.suffix_end]);
            out.push_str(&text[span.suffix_end..]);
            out
        }
        None => text.to_string(),
    }
}

/// Shift the embedded quantity by `delta` GB.
///
/// Sentinels and no-match strings are fixed points. A negative delta
/// saturates at 0GB instead of underflowing.
pub fn add_delta(text: &str, delta: i64) -> String {
    match extract_quantity(text) {
        Some(value) => {
            let shifted = (value as i64 + delta).clamp(0, u32::MAX as i64) as u32;
            rewrite_quantity(text, shifted)
        }
        None => text.to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_basic_quantities() {
        assert_eq!(extract_quantity("23GB Hotspot"), Some(23));
        assert_eq!(extract_quantity("5GB Plan (12 months)"), Some(5));
        assert_eq!(extract_quantity("100gb premium data"), Some(100));
        assert_eq!(extract_quantity("0GB trial"), Some(0));
    }

    #[test]
    fn test_extract_returns_none_without_a_match() {
        assert_eq!(extract_quantity("Nationwide 5G"), None);
        assert_eq!(extract_quantity("500MB bonus"), None);
        assert_eq!(extract_quantity("GB only, no digits"), None);
        assert_eq!(extract_quantity(""), None);
    }

    #[test]
    fn test_sentinels_extract_to_none() {
        assert_eq!(extract_quantity("Unlimited"), None);
        assert_eq!(extract_quantity("None"), None);
        assert_eq!(extract_quantity("  unlimited  "), None);
        assert_eq!(extract_quantity("NONE"), None);

        // Sentinel matching is full-string: prose containing the word
        // still gets scanned for a quantity.
        assert_eq!(extract_quantity("Unlimited talk + 5GB data"), Some(5));
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(extract_quantity("5GB data then 10GB hotspot"), Some(5));
        assert_eq!(
            rewrite_quantity("5GB data then 10GB hotspot", 25),
            "25GB data then 10GB hotspot"
        );
    }

    #[test]
    fn test_digit_run_not_followed_by_gb_is_skipped() {
        // "12" is not a quantity here; the scanner moves on to "3GB"
        assert_eq!(extract_quantity("12x speed with 3GB extra"), Some(3));
    }

    #[test]
    fn test_rewrite_preserves_surrounding_text_and_suffix_case() {
        assert_eq!(rewrite_quantity("23GB Hotspot", 43), "43GB Hotspot");
        assert_eq!(rewrite_quantity("5gb plan", 25), "25gb plan");
        assert_eq!(rewrite_quantity("5Gb plan", 25), "25Gb plan");
        assert_eq!(
            rewrite_quantity("Plan with 15GB high-speed data included", 35),
            "Plan with 35GB high-speed data included"
        );
    }

    #[test]
    fn test_rewrite_without_occurrence_is_identity() {
        assert_eq!(rewrite_quantity("Unlimited", 99), "Unlimited");
        assert_eq!(rewrite_quantity("no quantities here", 7), "no quantities here");
    }

    #[test]
    fn test_add_delta_shifts_and_saturates() {
        assert_eq!(add_delta("5GB", 20), "25GB");
        assert_eq!(add_delta("25GB hotspot included", -5), "20GB hotspot included");
        assert_eq!(add_delta("5GB", -10), "0GB"); // saturates, never negative
    }

    #[test]
    fn test_add_delta_sentinel_fixed_points() {
        assert_eq!(add_delta("Unlimited", 20), "Unlimited");
        assert_eq!(add_delta("None", 20), "None");
        assert_eq!(add_delta("Unlimited", -100), "Unlimited");
    }

    #[test]
    fn test_delta_round_trip() {
        let samples = ["5GB Plan (12 months)", "23GB Hotspot", "100gb data"];
        for s in samples {
            let before = extract_quantity(s).unwrap();
            let rewritten = rewrite_quantity(s, before + 20);
            assert_eq!(
                extract_quantity(&rewritten),
                Some(before + 20),
                "round trip failed for '{}'",
                s
            );
        }
    }

    #[test]
    fn test_classify_kinds() {
        assert_eq!(
            classify("23GB Hotspot"),
            Some(Extraction {
                kind: QuantityKind::Hotspot,
                value: 23
            })
        );
        assert_eq!(
            classify("15GB mobile hotspot"),
            Some(Extraction {
                kind: QuantityKind::Hotspot,
                value: 15
            })
        );
        assert_eq!(
            classify("50GB high-speed data"),
            Some(Extraction {
                kind: QuantityKind::Data,
                value: 50
            })
        );
        assert_eq!(
            classify("10GB Plan"),
            Some(Extraction {
                kind: QuantityKind::Data,
                value: 10
            })
        );
        assert_eq!(classify("Unlimited"), None);
    }

    #[test]
    fn test_mention_helpers() {
        assert!(mentions_hotspot("25GB Mobile HOTSPOT"));
        assert!(!mentions_hotspot("25GB high-speed data"));
        assert!(mentions_high_speed_data("25GB High-Speed Data"));
        assert!(!mentions_high_speed_data("hotspot only"));
    }

    #[test]
    fn test_absurd_digit_runs_do_not_panic() {
        // Larger than u32: treated as "no recognizable quantity"
        assert_eq!(extract_quantity("99999999999GB"), None);
        assert_eq!(add_delta("99999999999GB", 5), "99999999999GB");
    }

    #[test]
    fn test_multibyte_text_around_the_span() {
        assert_eq!(extract_quantity("más rápido: 5GB extra"), Some(5));
        assert_eq!(
            rewrite_quantity("más rápido: 5GB extra", 10),
            "más rápido: 10GB extra"
        );
    }
}
