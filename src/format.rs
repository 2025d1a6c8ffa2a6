use std::sync::LazyLock;
use regex::Regex;

static LOWER_TO_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").unwrap());
static ACRONYM_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z0-9])").unwrap());

/// Converts a snake_case, camelCase or PascalCase identifier to kebab-case.
///
/// Underscores become hyphens, a hyphen is inserted at every case boundary
/// (including acronym boundaries, so `HTTPServer` becomes `http-server`),
/// and the result is lowercased. Total over any input; the empty string
/// maps to itself.
///
/// # Examples
///
/// ```
/// use postlink::format_name;
///
/// assert_eq!(format_name("myRepoName"), "my-repo-name");
/// assert_eq!(format_name("Another_Test_Example"), "another-test-example");
/// ```
pub fn format_name(identifier: &str) -> String {
    let name = identifier.replace('_', "-");
    let name = LOWER_TO_UPPER.replace_all(&name, "$1-$2");
    let name = ACRONYM_BOUNDARY.replace_all(&name, "$1-$2");
    name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(format_name("myRepoName"), "my-repo-name");
    }

    #[test]
    fn test_snake_case_with_capitals() {
        assert_eq!(format_name("Another_Test_Example"), "another-test-example");
    }

    #[test]
    fn test_acronym_boundary() {
        assert_eq!(format_name("HTTPServerExample"), "http-server-example");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(format_name(""), "");
    }

    #[test]
    fn test_digits_form_boundaries() {
        assert_eq!(format_name("v2Release"), "v2-release");
    }

    #[test]
    fn test_kebab_case_passes_through() {
        assert_eq!(format_name("already-kebab"), "already-kebab");
    }

    #[test]
    fn test_idempotent_on_own_output() {
        for input in ["myRepoName", "Another_Test_Example", "HTTPServerExample", ""] {
            let once = format_name(input);
            assert_eq!(format_name(&once), once);
        }
    }
}
