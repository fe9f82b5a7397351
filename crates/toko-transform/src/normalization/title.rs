//! Publisher and grade extraction from legacy book titles.
//!
//! Titles encode metadata by convention, e.g.
//! `"Matematika Kelas VII (Erlangga)"`: the last parenthesized group names
//! the publisher and a Roman numeral (or `KELAS <n>`) names the grade.

use std::sync::LazyLock;

use regex::Regex;

/// Publisher used when a title carries no parenthesized group.
pub const DEFAULT_PUBLISHER: &str = "BSE";

static PAREN_GROUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]*)\)").expect("paren group pattern"));

static ROMAN_GRADE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(XII|XI|IX|X|VIII|VII|VI|IV|V|III|II|I)\b").expect("roman grade pattern")
});

static KELAS_GRADE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bKELAS\s+(\d{1,2})\b").expect("kelas grade pattern"));

/// Metadata parsed out of a book title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleInfo {
    pub publisher: String,
    /// 1-12, or 0 when the title names no grade.
    pub grade: u8,
}

/// Extracts publisher and grade from a book title.
///
/// The publisher is the content of the last parenthesized group, defaulting
/// to [`DEFAULT_PUBLISHER`]. The grade is the first Roman numeral token
/// (I-XII, word-bounded, case-insensitive); if none is present, the first
/// `KELAS <digits>` occurrence; otherwise 0.
pub fn parse_book_title(title: &str) -> TitleInfo {
    let publisher = PAREN_GROUP
        .captures_iter(title)
        .last()
        .map(|caps| caps[1].trim().to_string())
        .filter(|group| !group.is_empty())
        .unwrap_or_else(|| DEFAULT_PUBLISHER.to_string());

    let grade = ROMAN_GRADE
        .captures(title)
        .map(|caps| roman_to_grade(&caps[1]))
        .or_else(|| {
            KELAS_GRADE
                .captures(title)
                .and_then(|caps| caps[1].parse::<u8>().ok())
        })
        .unwrap_or(0);

    TitleInfo { publisher, grade }
}

fn roman_to_grade(token: &str) -> u8 {
    match token.to_ascii_uppercase().as_str() {
        "I" => 1,
        "II" => 2,
        "III" => 3,
        "IV" => 4,
        "V" => 5,
        "VI" => 6,
        "VII" => 7,
        "VIII" => 8,
        "IX" => 9,
        "X" => 10,
        "XI" => 11,
        "XII" => 12,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roman_numeral_and_publisher() {
        let info = parse_book_title("Matematika Kelas VII (Erlangga)");
        assert_eq!(info.publisher, "Erlangga");
        assert_eq!(info.grade, 7);
    }

    #[test]
    fn defaults_when_title_has_no_metadata() {
        let info = parse_book_title("Buku Tanpa Info");
        assert_eq!(info.publisher, "BSE");
        assert_eq!(info.grade, 0);
    }

    #[test]
    fn kelas_digits_fallback() {
        let info = parse_book_title("IPA Terpadu Kelas 8 (Yudhistira)");
        assert_eq!(info.grade, 8);
        assert_eq!(info.publisher, "Yudhistira");
    }

    #[test]
    fn last_parenthesized_group_wins() {
        let info = parse_book_title("Bahasa (Jilid 2) Kelas XII (Intan Pariwara)");
        assert_eq!(info.publisher, "Intan Pariwara");
        assert_eq!(info.grade, 12);
    }

    #[test]
    fn roman_token_requires_word_boundary() {
        // "Vol" must not read as grade V.
        let info = parse_book_title("Ensiklopedia Vol. Kedua");
        assert_eq!(info.grade, 0);
    }

    #[test]
    fn lowercase_roman_matches() {
        let info = parse_book_title("tematik kelas iv");
        assert_eq!(info.grade, 4);
    }

    #[test]
    fn empty_parens_fall_back_to_default() {
        let info = parse_book_title("Atlas Dunia ()");
        assert_eq!(info.publisher, "BSE");
    }
}
