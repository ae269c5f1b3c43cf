//! Naming conventions for sqlgen column and table names.
//!
//! This crate converts source-language identifiers into the forms used in
//! generated DDL. It has no dependencies and can be used by any other sqlgen
//! crate.

// ============================================================================
// Column Naming (for DDL rendering)
// ============================================================================

/// Convert a camelCase identifier to snake_case.
///
/// Every uppercase character is replaced by an underscore followed by its
/// lowercase form. Identifiers without uppercase characters are returned
/// unchanged. No special handling is applied to leading capitals or runs of
/// capitals, so `ID` becomes `_i_d`.
///
/// # Examples
/// ```
/// use sqlgen_naming::to_snake_case;
///
/// assert_eq!(to_snake_case("userName"), "user_name");
/// assert_eq!(to_snake_case("createdAtMillis"), "created_at_millis");
/// assert_eq!(to_snake_case("id"), "id");
/// assert_eq!(to_snake_case("Id"), "_id");
/// ```
pub fn to_snake_case(s: &str) -> String {
    let upper = s.chars().filter(|c| c.is_uppercase()).count();
    if upper == 0 {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len() + upper);
    for c in s.chars() {
        if c.is_uppercase() {
            result.push('_');
            // One char in, one char out, even where Unicode lowercasing expands.
            result.push(c.to_lowercase().next().unwrap_or(c));
        } else {
            result.push(c);
        }
    }
    result
}

/// Convert snake_case (or kebab-case) to PascalCase.
///
/// # Examples
/// ```
/// use sqlgen_naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("user_account"), "UserAccount");
/// assert_eq!(to_pascal_case("order-item"), "OrderItem");
/// assert_eq!(to_pascal_case("User"), "User");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize = true;
    for c in s.chars() {
        let is_separator = c == '_' || c == '-';
        if is_separator {
            capitalize = true;
            continue;
        }
        let ch = if capitalize {
            c.to_ascii_uppercase()
        } else {
            c
        };
        capitalize = false;
        result.push(ch);
    }
    result
}

/// Default table name for a class that does not name its table.
///
/// # Examples
/// ```
/// use sqlgen_naming::default_table_name;
///
/// assert_eq!(default_table_name("OrderItem"), "order_item");
/// assert_eq!(default_table_name("user"), "user");
/// ```
pub fn default_table_name(class_name: &str) -> String {
    to_snake_case(class_name).trim_start_matches('_').to_string()
}

// ============================================================================
// Package Naming (for entity model trees)
// ============================================================================

/// Join a package and a simple class name into a qualified name.
///
/// The root package is the empty string.
pub fn qualify(package: &str, name: &str) -> String {
    if package.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", package, name)
    }
}

/// Split a qualified name into `(package, simple_name)`.
///
/// # Examples
/// ```
/// use sqlgen_naming::split_qualified;
///
/// assert_eq!(split_qualified("com.acme.User"), ("com.acme", "User"));
/// assert_eq!(split_qualified("User"), ("", "User"));
/// ```
pub fn split_qualified(qualified: &str) -> (&str, &str) {
    match qualified.rfind('.') {
        Some(idx) => (&qualified[..idx], &qualified[idx + 1..]),
        None => ("", qualified),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // ========================================================================
    // Column Naming Tests
    // ========================================================================

    #[rstest]
    #[case("userName", "user_name")]
    #[case("user", "user")]
    #[case("createdAt", "created_at")]
    #[case("homePageURL", "home_page_u_r_l")]
    #[case("ID", "_i_d")]
    #[case("already_snake", "already_snake")]
    #[case("cityİd", "city_id")]
    #[case("", "")]
    fn test_to_snake_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_snake_case(input), expected);
    }

    #[test]
    fn test_to_snake_case_keeps_digits() {
        assert_eq!(to_snake_case("address2Line"), "address2_line");
    }

    #[test]
    fn test_to_snake_case_non_ascii_uppercase() {
        assert_eq!(to_snake_case("straßeÄnderung"), "straße_änderung");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("user"), "User");
        assert_eq!(to_pascal_case("hello-world"), "HelloWorld");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_default_table_name() {
        assert_eq!(default_table_name("User"), "user");
        assert_eq!(default_table_name("UserAccount"), "user_account");
        assert_eq!(default_table_name(&to_pascal_case("order_item")), "order_item");
    }

    // ========================================================================
    // Package Naming Tests
    // ========================================================================

    #[test]
    fn test_qualify() {
        assert_eq!(qualify("com.acme", "User"), "com.acme.User");
        assert_eq!(qualify("", "User"), "User");
    }

    #[test]
    fn test_split_qualified_roundtrip() {
        let (package, name) = split_qualified("com.acme.model.User");
        assert_eq!(package, "com.acme.model");
        assert_eq!(name, "User");
        assert_eq!(qualify(package, name), "com.acme.model.User");
    }
}
