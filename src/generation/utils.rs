//! Identifier casing used when turning spec tokens into client names
//!
//! Spec tokens arrive as snake_case (`marketplace_listing`), kebab-case
//! (`check-runs`) or occasionally camelCase (`repoId`). Everything is first
//! broken into lowercase words and then reassembled in the target casing.

/// Splits an identifier into lowercase words.
///
/// Word boundaries are `_`, `-`, whitespace, `.` and a lowercase-to-uppercase
/// transition. Other punctuation is dropped.
///
/// # Examples
/// ```
/// use octogen::generation::utils::split_words;
///
/// assert_eq!(split_words("account_id"), vec!["account", "id"]);
/// assert_eq!(split_words("check-runs"), vec!["check", "runs"]);
/// assert_eq!(split_words("repoId"), vec!["repo", "id"]);
/// ```
pub fn split_words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_is_lowercase = false;

    for ch in s.chars() {
        if ch.is_alphanumeric() {
            if ch.is_uppercase() && prev_is_lowercase && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            current.extend(ch.to_lowercase());
            prev_is_lowercase = ch.is_lowercase() || ch.is_ascii_digit();
        } else {
            if (matches!(ch, '_' | '-' | '.') || ch.is_whitespace()) && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_is_lowercase = false;
        }
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

/// Converts a spec token to capitalized-word casing (PascalCase).
///
/// # Examples
/// ```
/// use octogen::generation::utils::to_proper_case;
///
/// assert_eq!(to_proper_case("marketplace_listing"), "MarketplaceListing");
/// assert_eq!(to_proper_case("accounts"), "Accounts");
/// ```
pub fn to_proper_case(s: &str) -> String {
    split_words(s).iter().map(|w| capitalize(w)).collect()
}

/// Converts a spec token to lower camel case.
///
/// # Examples
/// ```
/// use octogen::generation::utils::to_camel_case;
///
/// assert_eq!(to_camel_case("account_id"), "accountId");
/// assert_eq!(to_camel_case("username"), "username");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let words = split_words(s);
    let mut iter = words.iter();
    match iter.next() {
        None => String::new(),
        Some(first) => {
            let mut out = first.clone();
            out.extend(iter.map(|w| capitalize(w)));
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_words() {
        assert_eq!(split_words("marketplace_listing"), vec!["marketplace", "listing"]);
        assert_eq!(split_words("__leading__"), vec!["leading"]);
        assert_eq!(split_words("getHTTPResponse"), vec!["get", "httpresponse"]);
        assert_eq!(split_words("v3_api"), vec!["v3", "api"]);
        assert!(split_words("___").is_empty());
    }

    #[test]
    fn test_to_proper_case() {
        assert_eq!(to_proper_case("marketplace_listing"), "MarketplaceListing");
        assert_eq!(to_proper_case("check-runs"), "CheckRuns");
        assert_eq!(to_proper_case("ACCOUNTS"), "Accounts");
        assert_eq!(to_proper_case("repoId"), "RepoId");
        assert_eq!(to_proper_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("account_id"), "accountId");
        assert_eq!(to_camel_case("username"), "username");
        assert_eq!(to_camel_case("pull_number"), "pullNumber");
        assert_eq!(to_camel_case("Team-Slug"), "teamSlug");
        assert_eq!(to_camel_case(""), "");
    }
}
