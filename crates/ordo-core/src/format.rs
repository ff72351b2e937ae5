//! Token-to-text formatting.
//!
//! All functions here are total: empty or unrecognised input degrades to a
//! defined value instead of an error.

use chrono::{DateTime, NaiveDate};

/// Placeholder produced for dates that do not parse.
pub const INVALID_DATE: &str = "Invalid Date";

/// Format an ISO date string as a long US-English date, e.g. "December 25, 2025".
///
/// A full RFC 3339 timestamp is accepted and its calendar date used.
pub fn format_date(value: &str) -> String {
    match parse_calendar_date(value) {
        Some(date) => long_date(date),
        None => INVALID_DATE.to_string(),
    }
}

/// Long form of an already parsed date.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// Turn an underscore-delimited token into a spaced phrase with every word
/// capitalised. Characters after the first of each word are left as they are.
pub fn humanize(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut at_word_start = true;

    for c in token.chars() {
        let c = if c == '_' { ' ' } else { c };
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            out.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            out.push(c);
        }
    }

    out
}

/// Humanize a cycle value, then normalise "Year X" and write weeks 1-4 as
/// Roman numerals ("WEEK_2" -> "Week II").
pub fn format_cycle_value(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let humanized = humanize(value);
    let mut words: Vec<String> = humanized.split(' ').map(str::to_owned).collect();

    // Letter form wins; the digit form is only tried when no letter follows.
    let year = find_pair(&words, "year", |c| c.is_ascii_uppercase())
        .or_else(|| find_pair(&words, "year", |c| c.is_ascii_digit()));
    if let Some(i) = year {
        words[i] = "Year".to_string();
    }

    if let Some(i) = find_pair(&words, "week", |c| c.is_ascii_digit()) {
        words[i] = "Week".to_string();
        let next = &words[i + 1];
        // The leading digit is ASCII, so byte 1 starts the trailing text.
        let rewritten = roman_numeral(&next[..1]).map(|roman| format!("{}{}", roman, &next[1..]));
        if let Some(word) = rewritten {
            words[i + 1] = word;
        }
    }

    words.join(" ")
}

/// Index of the first `keyword` (ASCII case-insensitive) whose next word
/// starts with a standalone character accepted by `follows`.
fn find_pair(words: &[String], keyword: &str, follows: impl Fn(char) -> bool) -> Option<usize> {
    words.windows(2).position(|pair| {
        pair[0].eq_ignore_ascii_case(keyword) && standalone_char(&pair[1]).is_some_and(&follows)
    })
}

/// First character of `word` when it ends there or is followed by
/// punctuation: "3" and "3." qualify, "12" and "3rd" do not.
fn standalone_char(word: &str) -> Option<char> {
    let mut chars = word.chars();
    let c = chars.next()?;
    match chars.next() {
        Some(next) if next.is_alphanumeric() || next == '_' => None,
        _ => Some(c),
    }
}

fn roman_numeral(digit: &str) -> Option<&'static str> {
    match digit {
        "1" => Some("I"),
        "2" => Some("II"),
        "3" => Some("III"),
        "4" => Some("IV"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_snake_case() {
        assert_eq!(humanize("easter_sunday"), "Easter Sunday");
        assert_eq!(humanize("ORDINARY_TIME"), "ORDINARY TIME");
    }

    #[test]
    fn test_humanize_empty() {
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_humanize_only_touches_word_starts() {
        assert_eq!(humanize("mcDonald_day"), "McDonald Day");
        assert_eq!(humanize("saint-peter"), "Saint-peter");
    }

    #[test]
    fn test_humanize_consecutive_separators() {
        assert_eq!(humanize("a__b"), "A  B");
        assert_eq!(humanize("_lead"), " Lead");
    }

    #[test]
    fn test_humanize_non_ascii() {
        assert_eq!(humanize("épiphanie_du_seigneur"), "Épiphanie Du Seigneur");
    }

    #[test]
    fn test_humanize_is_idempotent() {
        for token in ["easter_sunday", "YEAR_A", "mary__mother", "épiphanie"] {
            let once = humanize(token);
            assert_eq!(humanize(&once), once);
        }
    }

    #[test]
    fn test_cycle_year_letter() {
        assert_eq!(format_cycle_value("YEAR_A"), "Year A");
        assert_eq!(format_cycle_value("year_c"), "Year C");
    }

    #[test]
    fn test_cycle_year_digit() {
        assert_eq!(format_cycle_value("YEAR_1"), "Year 1");
    }

    #[test]
    fn test_cycle_week_roman() {
        assert_eq!(format_cycle_value("WEEK_1"), "Week I");
        assert_eq!(format_cycle_value("WEEK_2"), "Week II");
        assert_eq!(format_cycle_value("WEEK_3"), "Week III");
        assert_eq!(format_cycle_value("WEEK_4"), "Week IV");
    }

    #[test]
    fn test_cycle_week_out_of_range() {
        assert_eq!(format_cycle_value("WEEK_5"), "Week 5");
        assert_eq!(format_cycle_value("WEEK_0"), "Week 0");
    }

    #[test]
    fn test_cycle_week_multi_digit_untouched() {
        assert_eq!(format_cycle_value("WEEK_12"), "WEEK 12");
    }

    #[test]
    fn test_cycle_other_values() {
        assert_eq!(format_cycle_value("PROPER_OF_TIME"), "PROPER OF TIME");
        assert_eq!(format_cycle_value(""), "");
    }

    #[test]
    fn test_cycle_only_first_match_rewritten() {
        assert_eq!(format_cycle_value("WEEK_1_WEEK_2"), "Week I WEEK 2");
    }

    #[test]
    fn test_cycle_value_followed_by_punctuation() {
        assert_eq!(format_cycle_value("WEEK_3."), "Week III.");
        assert_eq!(format_cycle_value("WEEK_2,_EASTER"), "Week II, EASTER");
        assert_eq!(format_cycle_value("YEAR_B)"), "Year B)");
        assert_eq!(format_cycle_value("WEEK_3RD"), "WEEK 3RD");
    }

    #[test]
    fn test_cycle_double_space_untouched() {
        assert_eq!(format_cycle_value("YEAR  A"), "YEAR  A");
    }

    #[test]
    fn test_cycle_year_letter_form_wins() {
        assert_eq!(format_cycle_value("YEAR_A_YEAR_1"), "Year A YEAR 1");
        assert_eq!(format_cycle_value("YEAR_1_YEAR_A"), "YEAR 1 Year A");
    }

    #[test]
    fn test_cycle_value_is_idempotent() {
        for token in ["YEAR_A", "YEAR_2", "WEEK_3", "WEEK_3.", "WEEK_5", "PROPER_OF_TIME"] {
            let once = format_cycle_value(token);
            assert_eq!(format_cycle_value(&once), once);
        }
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2025-12-25"), "December 25, 2025");
        assert_eq!(format_date("2025-01-06"), "January 6, 2025");
    }

    #[test]
    fn test_format_date_timestamp() {
        assert_eq!(format_date("2025-04-20T00:00:00Z"), "April 20, 2025");
    }

    #[test]
    fn test_format_date_invalid() {
        assert_eq!(format_date(""), INVALID_DATE);
        assert_eq!(format_date("2025-02-30"), INVALID_DATE);
        assert_eq!(format_date("christmas"), INVALID_DATE);
    }
}
