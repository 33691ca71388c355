//! CFR part number extraction.

use regex::Regex;
use std::sync::LazyLock;

/// Title 40 (Protection of Environment) prefix that document CFR references
/// start with.
pub const CFR_PREFIX: &str = "40 CFR";

static DIGIT_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// Parse `"40 CFR 60, 61"` into `[60, 61]`.
///
/// The prefix is assumed, not validated: when the input does not start with
/// it, the same number of leading characters is skipped anyway, so
/// `"40 CFX 60"` still yields `[60]` and an input shorter than the prefix
/// yields nothing. Digit runs that do not fit a `u32` are dropped.
pub fn extract_cfr_parts(cfr_part: &str) -> Vec<u32> {
    let rest = cfr_part
        .strip_prefix(CFR_PREFIX)
        .unwrap_or_else(|| skip_chars(cfr_part, CFR_PREFIX.chars().count()));

    DIGIT_RUN
        .find_iter(rest)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

fn skip_chars(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map(|(i, _)| &s[i..]).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_parts_in_order() {
        assert_eq!(extract_cfr_parts("40 CFR 60, 61"), vec![60, 61]);
        assert_eq!(extract_cfr_parts("40 CFR 123, 456, 7"), vec![123, 456, 7]);
        assert_eq!(extract_cfr_parts("40 CFR 63"), vec![63]);
    }

    #[test]
    fn title_number_is_not_a_part() {
        assert_eq!(extract_cfr_parts("40 CFR Parts 52 and 81"), vec![52, 81]);
    }

    #[test]
    fn no_digits_is_empty() {
        assert!(extract_cfr_parts("40 CFR").is_empty());
        assert!(extract_cfr_parts("40 CFR Part").is_empty());
        assert!(extract_cfr_parts("").is_empty());
    }

    #[test]
    fn short_input_does_not_panic() {
        assert!(extract_cfr_parts("40").is_empty());
        assert!(extract_cfr_parts("40 CF").is_empty());
    }

    #[test]
    fn unexpected_prefix_is_skipped_blindly() {
        assert_eq!(extract_cfr_parts("40 CFX 60"), vec![60]);
        assert_eq!(extract_cfr_parts("21 CFR 11"), vec![11]);
        // Multi-byte characters are skipped by character, not byte.
        assert_eq!(extract_cfr_parts("§§ CFR 98"), vec![98]);
    }

    #[test]
    fn overflowing_run_is_dropped() {
        assert_eq!(extract_cfr_parts("40 CFR 99999999999, 60"), vec![60]);
    }
}
