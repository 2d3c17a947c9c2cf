//! Naming helpers for generated Scala code
//!
//! Case conversion goes through Inflector; everything else here concerns what
//! Scala accepts as an identifier.

use inflector::Inflector;
use std::path::PathBuf;

/// Reserved words of Scala 2 (and the `macro` soft keyword)
const SCALA_KEYWORDS: &[&str] = &[
    "abstract", "case", "catch", "class", "def", "do", "else", "extends", "false", "final",
    "finally", "for", "forSome", "if", "implicit", "import", "lazy", "macro", "match", "new",
    "null", "object", "override", "package", "private", "protected", "return", "sealed", "super",
    "this", "throw", "trait", "true", "try", "type", "val", "var", "while", "with", "yield", "_",
];

/// Naming helpers
pub struct NameHelpers;

impl NameHelpers {
    /// Convert a wire name to camelCase
    ///
    /// # Examples
    ///
    /// ```
    /// # use daogen::naming::NameHelpers;
    /// assert_eq!(NameHelpers::to_camel_case("created_at"), "createdAt");
    /// assert_eq!(NameHelpers::to_camel_case("USER_ID"), "userId");
    /// ```
    #[must_use]
    pub fn to_camel_case(input: &str) -> String {
        input.to_camel_case()
    }

    /// Convert a wire name to `PascalCase`
    ///
    /// # Examples
    ///
    /// ```
    /// # use daogen::naming::NameHelpers;
    /// assert_eq!(NameHelpers::to_pascal_case("member"), "Member");
    /// assert_eq!(NameHelpers::to_pascal_case("user_role"), "UserRole");
    /// ```
    #[must_use]
    pub fn to_pascal_case(input: &str) -> String {
        input.to_pascal_case()
    }

    /// Whether `word` is a Scala reserved word
    #[must_use]
    pub fn is_keyword(word: &str) -> bool {
        SCALA_KEYWORDS.contains(&word)
    }

    /// Whether `name` can be used as an identifier without backticks
    ///
    /// # Examples
    ///
    /// ```
    /// # use daogen::naming::NameHelpers;
    /// assert!(NameHelpers::is_plain_identifier("birthday"));
    /// assert!(!NameHelpers::is_plain_identifier("type"));
    /// assert!(!NameHelpers::is_plain_identifier("1st"));
    /// assert!(!NameHelpers::is_plain_identifier(""));
    /// ```
    #[must_use]
    pub fn is_plain_identifier(name: &str) -> bool {
        let mut chars = name.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        (first.is_alphabetic() || first == '_')
            && chars.all(|c| c.is_alphanumeric() || c == '_')
            && !Self::is_keyword(name)
    }

    /// Backtick-quote `name` unless it is a plain identifier
    ///
    /// # Examples
    ///
    /// ```
    /// # use daogen::naming::NameHelpers;
    /// assert_eq!(NameHelpers::quote_identifier("name"), "name");
    /// assert_eq!(NameHelpers::quote_identifier("type"), "`type`");
    /// ```
    #[must_use]
    pub fn quote_identifier(name: &str) -> String {
        if Self::is_plain_identifier(name) {
            name.to_string()
        } else {
            format!("`{}`", name.replace('`', ""))
        }
    }

    /// Identifier of a column in generated code
    ///
    /// Falls back to the quoted wire name when camel-casing leaves nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// # use daogen::naming::NameHelpers;
    /// assert_eq!(NameHelpers::column_identifier("birth_day"), "birthDay");
    /// assert_eq!(NameHelpers::column_identifier("type"), "`type`");
    /// ```
    #[must_use]
    pub fn column_identifier(wire_name: &str) -> String {
        let camel = Self::to_camel_case(wire_name);
        if camel.is_empty() {
            Self::quote_identifier(wire_name)
        } else {
            Self::quote_identifier(&camel)
        }
    }

    /// Class name of the entity generated for a table
    #[must_use]
    pub fn class_name(table_name: &str, target: Option<&str>) -> String {
        target.map_or_else(|| Self::to_pascal_case(table_name), str::to_string)
    }

    /// Short alias handed to `syntax(...)`
    ///
    /// The lower-cased capitals of the class name, or its lower-cased first
    /// character when it has none. An alias that lands on a keyword gets an `x`
    /// appended.
    ///
    /// # Examples
    ///
    /// ```
    /// # use daogen::naming::NameHelpers;
    /// assert_eq!(NameHelpers::syntax_alias("Member"), "m");
    /// assert_eq!(NameHelpers::syntax_alias("UserRole"), "ur");
    /// assert_eq!(NameHelpers::syntax_alias("DeliveryOrder"), "dox");
    /// ```
    #[must_use]
    pub fn syntax_alias(class_name: &str) -> String {
        let initials: String = class_name
            .chars()
            .filter(char::is_ascii_uppercase)
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let alias = if initials.is_empty() {
            class_name
                .chars()
                .find(|c| c.is_alphabetic())
                .map_or_else(|| "x".to_string(), |c| c.to_lowercase().collect())
        } else {
            initials
        };

        if Self::is_keyword(&alias) {
            format!("{alias}x")
        } else {
            alias
        }
    }

    /// Relative directory of a dotted package
    ///
    /// # Examples
    ///
    /// ```
    /// # use daogen::naming::NameHelpers;
    /// # use std::path::PathBuf;
    /// assert_eq!(NameHelpers::package_path("com.example.models"), PathBuf::from("com/example/models"));
    /// ```
    #[must_use]
    pub fn package_path(package_name: &str) -> PathBuf {
        package_name
            .split('.')
            .filter(|segment| !segment.is_empty())
            .collect()
    }
}
