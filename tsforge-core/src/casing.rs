//! Case transforms for component and type names.
//!
//! Names entered by users are free-form ("user profile", "UserProfile",
//! "user-profile") and every transform must accept any of them. The standard
//! families delegate to `heck`; the whitespace-driven families (dot, path,
//! sentence, title) and the plural/singular helpers are defined here because
//! they only split on whitespace, never on case boundaries.

use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

/// Convert a name to camelCase (e.g., "user profile" -> "userProfile")
pub fn to_camel_case(s: &str) -> String {
    s.to_lower_camel_case()
}

/// Convert a name to PascalCase (e.g., "user profile" -> "UserProfile")
pub fn to_pascal_case(s: &str) -> String {
    s.to_upper_camel_case()
}

/// Convert a name to kebab-case (e.g., "UserProfile" -> "user-profile")
pub fn to_kebab_case(s: &str) -> String {
    s.to_kebab_case()
}

/// Convert a name to snake_case (e.g., "UserProfile" -> "user_profile")
pub fn to_snake_case(s: &str) -> String {
    s.to_snake_case()
}

/// Convert a name to CONSTANT_CASE (e.g., "user profile" -> "USER_PROFILE")
pub fn to_constant_case(s: &str) -> String {
    s.to_shouty_snake_case()
}

/// Capitalize each whitespace-separated word (e.g., "user profile" -> "User Profile")
pub fn to_title_case(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalize the first word only, lowercasing the rest
/// (e.g., "User Profile" -> "User profile")
pub fn to_sentence_case(s: &str) -> String {
    capitalize(&s.to_lowercase())
}

/// Replace whitespace runs with dots, lowercased (e.g., "User Profile" -> "user.profile")
pub fn to_dot_case(s: &str) -> String {
    join_words(s, ".")
}

/// Replace whitespace runs with slashes, lowercased (e.g., "User Profile" -> "user/profile")
pub fn to_path_case(s: &str) -> String {
    join_words(s, "/")
}

fn join_words(s: &str, separator: &str) -> String {
    s.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(separator)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().chain(chars).collect(),
    }
}

/// Pluralize a noun using regular English suffix rules.
///
/// Irregular nouns ("person", "child", "mouse") are not supported and come
/// out with a plain "s" suffix.
pub fn pluralize(s: &str) -> String {
    if s.is_empty() {
        return String::new();
    }

    let lower = s.to_lowercase();
    if has_sibilant_ending(&lower) {
        return format!("{s}es");
    }
    if let Some(stem) = s.strip_suffix('y') {
        if ends_with_consonant(stem) {
            return format!("{stem}ies");
        }
    }
    if let Some(stem) = s.strip_suffix('Y') {
        if ends_with_consonant(stem) {
            return format!("{stem}IES");
        }
    }
    format!("{s}s")
}

/// Singularize a noun using regular English suffix rules.
///
/// The inverse of [`pluralize`] for regular nouns; irregular plurals are
/// returned unchanged.
pub fn singularize(s: &str) -> String {
    let lower = s.to_lowercase();

    if lower.ends_with("ies") && s.len() > 3 {
        let stem = &s[..s.len() - 3];
        if s.ends_with("IES") {
            return format!("{stem}Y");
        }
        return format!("{stem}y");
    }
    if let Some(stem) = lower.strip_suffix("es") {
        if has_sibilant_ending(stem) {
            return s[..s.len() - 2].to_string();
        }
    }
    if lower.ends_with('s') && !lower.ends_with("ss") && s.len() > 1 {
        return s[..s.len() - 1].to_string();
    }
    s.to_string()
}

fn has_sibilant_ending(lower: &str) -> bool {
    (lower.ends_with('s') && !lower.ends_with("ies"))
        || lower.ends_with('x')
        || lower.ends_with('z')
        || lower.ends_with("ch")
        || lower.ends_with("sh")
}

fn ends_with_consonant(stem: &str) -> bool {
    stem.chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_alphabetic() && !"aeiouAEIOU".contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case() {
        assert_eq!(to_camel_case("user profile"), "userProfile");
        assert_eq!(to_camel_case("UserProfile"), "userProfile");
        assert_eq!(to_camel_case("user-profile"), "userProfile");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_pascal_case() {
        assert_eq!(to_pascal_case("user profile"), "UserProfile");
        assert_eq!(to_pascal_case("user"), "User");
        assert_eq!(to_pascal_case("userProfile"), "UserProfile");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_kebab_case("UserProfile"), "user-profile");
        assert_eq!(to_kebab_case("user profile"), "user-profile");
    }

    #[test]
    fn test_snake_case() {
        assert_eq!(to_snake_case("UserProfile"), "user_profile");
        assert_eq!(to_snake_case("user profile"), "user_profile");
    }

    #[test]
    fn test_constant_case() {
        assert_eq!(to_constant_case("user profile"), "USER_PROFILE");
        assert_eq!(to_constant_case("userProfile"), "USER_PROFILE");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(to_title_case("user profile"), "User Profile");
        assert_eq!(to_title_case("controller"), "Controller");
        assert_eq!(to_title_case(""), "");
    }

    #[test]
    fn test_sentence_case() {
        assert_eq!(to_sentence_case("user Profile"), "User profile");
        assert_eq!(to_sentence_case("user"), "User");
    }

    #[test]
    fn test_dot_case() {
        assert_eq!(to_dot_case("User Profile"), "user.profile");
        assert_eq!(to_dot_case("user"), "user");
    }

    #[test]
    fn test_path_case() {
        assert_eq!(to_path_case("User Profile"), "user/profile");
    }

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("user"), "users");
        assert_eq!(pluralize("class"), "classes");
        assert_eq!(pluralize("box"), "boxes");
        assert_eq!(pluralize("branch"), "branches");
        assert_eq!(pluralize("dish"), "dishes");
        assert_eq!(pluralize("category"), "categories");
        assert_eq!(pluralize("day"), "days");
        assert_eq!(pluralize(""), "");
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("users"), "user");
        assert_eq!(singularize("classes"), "class");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("branches"), "branch");
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("class"), "class");
        assert_eq!(singularize(""), "");
    }

    #[test]
    fn test_plural_round_trip_preserves_case() {
        assert_eq!(pluralize("CATEGORY"), "CATEGORIES");
        assert_eq!(singularize("CATEGORIES"), "CATEGORY");
        assert_eq!(singularize(&pluralize("category")), "category");
    }

    #[test]
    fn test_pascal_camel_round_trip_first_letter_only() {
        for name in ["user", "user profile", "orderItem"] {
            let camel = to_camel_case(name);
            let pascal = to_pascal_case(&camel);
            assert_eq!(pascal, to_pascal_case(name));
            assert_eq!(camel[1..], pascal[1..]);
        }
    }
}
