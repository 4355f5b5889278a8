// SPDX-License-Identifier: MPL-2.0
//! Locale-aware formatting of result counts.

use num_format::{Locale, ToFormattedString};

use crate::lang::primary_subtag;

/// Formats a result count with the digit grouping of the environment's
/// reported locale (e.g. `1234567` → `"1,234,567"` under `en`).
///
/// The locale is taken from the operating system; when it cannot be
/// determined or is unknown to the grouping tables, `en` grouping is used.
pub fn format_result_count(count: u64) -> String {
    match sys_locale::get_locale() {
        Some(tag) => format_result_count_with(count, &tag),
        None => count.to_formatted_string(&Locale::en),
    }
}

/// Formats a result count using grouping rules for the given locale tag.
pub fn format_result_count_with(count: u64, tag: &str) -> String {
    count.to_formatted_string(&grouping_locale(tag))
}

/// Resolves a BCP-47-style tag to grouping rules, falling back from the
/// full tag to its primary subtag, then to `en`.
fn grouping_locale(tag: &str) -> Locale {
    Locale::from_name(tag)
        .or_else(|_| Locale::from_name(tag.replace('-', "_")))
        .or_else(|_| Locale::from_name(primary_subtag(tag)))
        .unwrap_or(Locale::en)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_grouping_uses_commas() {
        assert_eq!(format_result_count_with(1_234_567, "en"), "1,234,567");
    }

    #[test]
    fn small_counts_have_no_separator() {
        assert_eq!(format_result_count_with(0, "en"), "0");
        assert_eq!(format_result_count_with(999, "en"), "999");
    }

    #[test]
    fn digits_survive_grouping() {
        let formatted = format_result_count_with(9_876_543, "fr");
        let digits: String = formatted.chars().filter(char::is_ascii_digit).collect();
        assert_eq!(digits, "9876543");
    }

    #[test]
    fn unknown_tag_falls_back_to_english_grouping() {
        assert_eq!(format_result_count_with(1_000, "xx-YY"), "1,000");
    }

    #[test]
    fn region_tag_falls_back_to_primary_subtag() {
        // fr-XX is not a known locale name, fr is
        let regional = format_result_count_with(12_345, "fr-XX");
        let plain = format_result_count_with(12_345, "fr");
        assert_eq!(regional, plain);
    }

    #[test]
    fn deterministic_for_a_fixed_locale() {
        assert_eq!(
            format_result_count_with(42_000, "en"),
            format_result_count_with(42_000, "en")
        );
    }
}
