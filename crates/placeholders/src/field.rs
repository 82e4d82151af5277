//! Placeholder markers: highlighting, discovery, and filling

use regex_lite::{Captures, Regex};
use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

/// Pattern for a placeholder marker. The identifier is word characters only.
pub const PLACEHOLDER_PATTERN: &str = r"\{\{(\w+)\}\}";

/// CSS class put on highlighted placeholder spans.
pub const PLACEHOLDER_CLASS: &str = "placeholder";

fn marker_regex() -> &'static Regex {
    static MARKER: OnceLock<Regex> = OnceLock::new();
    // The pattern is a compile-time constant covered by the tests below.
    MARKER.get_or_init(|| Regex::new(PLACEHOLDER_PATTERN).expect("placeholder pattern is valid"))
}

/// Replace every `{{identifier}}` marker with a highlighted inline span.
///
/// The span shows the identifier as its label and carries it again in a
/// `data-placeholder` attribute. Text that is not an exact marker (unbalanced
/// braces, spaces or punctuation inside) is left as it is. The output contains
/// no markers, so applying this twice is the same as applying it once.
pub fn highlight_placeholders(text: &str) -> String {
    marker_regex()
        .replace_all(text, |caps: &Captures<'_>| {
            let name = &caps[1];
            format!(
                r#"<span class="{}" data-placeholder="{}">{}</span>"#,
                PLACEHOLDER_CLASS, name, name
            )
        })
        .into_owned()
}

/// Distinct placeholder identifiers in the order they first appear.
pub fn placeholder_names(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    marker_regex()
        .captures_iter(text)
        .filter_map(|caps| {
            let name = caps[1].to_string();
            seen.insert(name.clone()).then_some(name)
        })
        .collect()
}

/// Substitute known placeholders with their values.
///
/// Markers without a value stay literal so the user can still see what is
/// left to fill in.
pub fn fill_placeholders(text: &str, values: &HashMap<String, String>) -> String {
    let mut missing = 0usize;
    let filled = marker_regex()
        .replace_all(text, |caps: &Captures<'_>| match values.get(&caps[1]) {
            Some(value) => value.clone(),
            None => {
                missing += 1;
                caps[0].to_string()
            }
        })
        .into_owned();

    if missing > 0 {
        tracing::debug!(missing, "placeholders left unfilled");
    }
    filled
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_highlight_single_marker() {
        let out = highlight_placeholders("Dear {{manager_name}},");
        assert_eq!(
            out,
            r#"Dear <span class="placeholder" data-placeholder="manager_name">manager_name</span>,"#
        );
    }

    #[test]
    fn test_highlight_leaves_malformed_markers() {
        let text = "{{ spaced }} {{dash-ed}} {single} {{open";
        assert_eq!(highlight_placeholders(text), text);
    }

    #[test]
    fn test_highlight_no_markers() {
        assert_eq!(highlight_placeholders("plain text"), "plain text");
        assert_eq!(highlight_placeholders(""), "");
    }

    #[test]
    fn test_highlight_adjacent_markers() {
        let out = highlight_placeholders("{{a}}{{b}}");
        assert_eq!(out.matches("data-placeholder").count(), 2);
        assert!(!out.contains("{{"));
    }

    #[test]
    fn test_placeholder_names_dedup_in_order() {
        let names = placeholder_names("{{b}} {{a}} {{b}} {{c}}");
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_fill_known_and_unknown() {
        let mut values = HashMap::new();
        values.insert("job_title".to_string(), "Engineer".to_string());
        let out = fill_placeholders("As {{job_title}} at {{company_name}}", &values);
        assert_eq!(out, "As Engineer at {{company_name}}");
    }

    #[test]
    fn test_pattern_compiles() {
        assert!(Regex::new(PLACEHOLDER_PATTERN).is_ok());
    }

    proptest! {
        #[test]
        fn prop_highlight_is_idempotent(text in "[a-z {}_]{0,60}") {
            let once = highlight_placeholders(&text);
            let twice = highlight_placeholders(&once);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn prop_highlight_removes_every_marker(names in proptest::collection::vec("[a-z_]{1,8}", 0..6)) {
            let text = names.iter().map(|n| format!("{{{{{}}}}}", n)).collect::<Vec<_>>().join(" ");
            let out = highlight_placeholders(&text);
            prop_assert!(placeholder_names(&out).is_empty());
            prop_assert_eq!(out.matches("data-placeholder").count(), names.len());
        }
    }
}
