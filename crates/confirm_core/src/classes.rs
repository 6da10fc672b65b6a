//! State class bookkeeping.
//!
//! A phase only ever removes what it added: the delta between the configured
//! classes and the classes the element already carried is recorded when the
//! phase starts and removed verbatim when it ends.

/// Split a space-separated class list into tokens, dropping empties.
pub fn parse_class_list(s: &str) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for token in s.split_ascii_whitespace() {
        if !out.iter().any(|t| t == token) {
            out.push(token.to_string());
        }
    }
    out
}

/// Configured classes not present in `current`, in configured order.
pub fn missing_classes(configured: &[String], current: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for class in configured {
        if current.contains(class) || out.contains(class) {
            continue;
        }
        out.push(class.clone());
    }
    out
}

/// Classes an element currently carries; a missing attribute is an empty set.
pub fn current_classes(class_attribute: Option<&str>) -> Vec<String> {
    class_attribute.map(parse_class_list).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(s: &str) -> Vec<String> {
        parse_class_list(s)
    }

    #[test]
    fn parse_drops_empty_and_duplicate_tokens() {
        assert_eq!(list("  a  b a\tc "), vec!["a", "b", "c"]);
        assert!(list("").is_empty());
    }

    #[test]
    fn missing_is_set_difference() {
        let configured = list("disabled busy");
        let current = list("btn disabled");
        assert_eq!(missing_classes(&configured, &current), vec!["busy"]);
    }

    #[test]
    fn already_present_class_is_not_recorded() {
        let configured = list("disabled");
        let current = list("disabled");
        assert!(missing_classes(&configured, &current).is_empty());
    }

    #[test]
    fn missing_attribute_is_empty_set() {
        assert!(current_classes(None).is_empty());
        let configured = list("disabled");
        assert_eq!(
            missing_classes(&configured, &current_classes(None)),
            vec!["disabled"]
        );
    }
}
