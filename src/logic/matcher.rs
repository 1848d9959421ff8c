//! Name matching over the static record list.

use crate::state::Record;

/// What: Report whether a query has no searchable content.
///
/// Inputs:
/// - `query`: Raw user input
///
/// Output:
/// - `true` when the query is empty or whitespace only.
#[must_use]
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// What: Filter records whose name contains the query, ignoring case.
///
/// Inputs:
/// - `query`: Raw user input (untrimmed)
/// - `records`: Base list in caller-supplied order
///
/// Output:
/// - Matching records in their original relative order; every record when the
///   trimmed query is empty.
///
/// Details:
/// - Leading/trailing whitespace is trimmed; inner whitespace is kept.
/// - Plain substring test on lower-cased text, no ranking.
#[must_use]
pub fn match_records<'a>(query: &str, records: &'a [Record]) -> Vec<&'a Record> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return records.iter().collect();
    }
    let needle = trimmed.to_lowercase();
    records
        .iter()
        .filter(|r| r.name.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Sex;

    fn person(name: &str) -> Record {
        Record {
            slug: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            sex: Sex::Male,
            born: 1900,
            died: 1950,
            father_name: None,
            mother_name: None,
        }
    }

    fn names(found: &[&Record]) -> Vec<String> {
        found.iter().map(|r| r.name.clone()).collect()
    }

    #[test]
    /// What: Blank queries return the base list unchanged.
    ///
    /// Inputs:
    /// - `""`, `"   "` and `"\t\n"` against three records.
    ///
    /// Output:
    /// - Every record, in original order.
    fn blank_query_returns_everything_in_order() {
        let base = vec![person("Zed"), person("Anna"), person("Mia")];
        for q in ["", "   ", "\t\n"] {
            let found = match_records(q, &base);
            assert_eq!(names(&found), vec!["Zed", "Anna", "Mia"]);
        }
    }

    #[test]
    /// What: Matching is a case-insensitive substring test anywhere in the name.
    ///
    /// Inputs:
    /// - `"jo"` and `"xyz"` against `John`; `"HAVER"` against a surname.
    ///
    /// Output:
    /// - `jo` matches, `xyz` does not, upper-case needle matches mid-string.
    fn case_insensitive_substring() {
        let base = vec![person("John")];
        assert_eq!(names(&match_records("jo", &base)), vec!["John"]);
        assert!(match_records("xyz", &base).is_empty());

        let base = vec![person("Carolus Haverbeke")];
        assert_eq!(match_records("HAVER", &base).len(), 1);
        assert_eq!(match_records("us hav", &base).len(), 1);
    }

    #[test]
    /// What: Surrounding whitespace is trimmed but inner whitespace matters.
    ///
    /// Inputs:
    /// - `"  joh  "` and `"jo hn"` against `John`.
    ///
    /// Output:
    /// - Trimmed needle matches; a needle with an inner space does not.
    fn trims_outer_whitespace_only() {
        let base = vec![person("John")];
        assert_eq!(match_records("  joh  ", &base).len(), 1);
        assert!(match_records("jo hn", &base).is_empty());
    }

    #[test]
    /// What: Results are an order-preserving subsequence of the input.
    ///
    /// Inputs:
    /// - Four names where the 1st and 3rd contain `"an"`.
    ///
    /// Output:
    /// - Exactly those two, in input order.
    fn preserves_relative_order() {
        let base = vec![
            person("Joanna"),
            person("Pieter"),
            person("Jan"),
            person("Emile"),
        ];
        assert_eq!(names(&match_records("an", &base)), vec!["Joanna", "Jan"]);
    }

    #[test]
    /// What: Empty inputs are valid and simply produce empty output.
    fn empty_records_are_not_an_error() {
        assert!(match_records("", &[]).is_empty());
        assert!(match_records("jo", &[]).is_empty());
    }

    #[test]
    /// What: `is_blank` treats whitespace-only text as empty.
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("  \t"));
        assert!(!is_blank(" a "));
    }
}
