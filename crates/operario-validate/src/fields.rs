//! Required-field checks over string maps.
//!
//! Robot inputs often arrive as loosely-typed key/value payloads; these
//! helpers answer "is everything filled in?" before a workflow starts.

use std::collections::HashMap;

/// Whether every required field has a non-empty value.
///
/// When `required` is `None`, every field in the map must be non-empty.
/// A required field that is absent from the map counts as empty.
#[must_use]
pub fn validate_required(data: &HashMap<String, String>, required: Option<&[&str]>) -> bool {
    match required {
        None => data.values().all(|v| !v.trim().is_empty()),
        Some(fields) => fields
            .iter()
            .all(|f| data.get(*f).is_some_and(|v| !v.trim().is_empty())),
    }
}

/// Keys whose values are empty or whitespace, sorted for stable output.
#[must_use]
pub fn empty_fields(data: &HashMap<String, String>) -> Vec<String> {
    let mut empty: Vec<String> = data
        .iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k.clone())
        .collect();
    empty.sort();
    empty
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HashMap<String, String> {
        HashMap::from([
            ("nome".to_string(), "Joao".to_string()),
            ("idade".to_string(), "30".to_string()),
            ("email".to_string(), String::new()),
        ])
    }

    #[test]
    fn test_all_fields_checked_when_unspecified() {
        assert!(!validate_required(&sample(), None));

        let mut data = sample();
        data.insert("email".to_string(), "joao@example.com".to_string());
        assert!(validate_required(&data, None));
    }

    #[test]
    fn test_subset_of_required_fields() {
        assert!(validate_required(&sample(), Some(&["nome", "idade"])));
        assert!(!validate_required(&sample(), Some(&["nome", "email"])));
    }

    #[test]
    fn test_missing_required_field_counts_as_empty() {
        assert!(!validate_required(&sample(), Some(&["telefone"])));
    }

    #[test]
    fn test_empty_fields() {
        assert_eq!(empty_fields(&sample()), vec!["email".to_string()]);

        let mut data = sample();
        data.insert("obs".to_string(), "   ".to_string());
        assert_eq!(
            empty_fields(&data),
            vec!["email".to_string(), "obs".to_string()]
        );
    }
}
