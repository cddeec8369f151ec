//! SQL Identifier Sanitization Utilities
//!
//! Provides functions to quote identifiers and decide when quoting is required.

use std::sync::LazyLock;

use regex::Regex;

/// Reserved keywords that cannot be used as unquoted identifiers
pub const RESERVED_WORDS: &[&str] = &[
    "ALL",
    "ANALYSE",
    "ANALYZE",
    "AND",
    "ANY",
    "ARRAY",
    "AS",
    "ASC",
    "ASYMMETRIC",
    "BEGIN",
    "BLOCK",
    "BOTH",
    "CASCADE",
    "CASE",
    "CAST",
    "CHECK",
    "COLLATE",
    "COLUMN",
    "CONSTRAINT",
    "CREATE",
    "CURRENT_CATALOG",
    "CURRENT_DATE",
    "CURRENT_ROLE",
    "CURRENT_TIME",
    "CURRENT_TIMESTAMP",
    "CURRENT_USER",
    "DEFAULT",
    "DEFERRABLE",
    "DESC",
    "DISTINCT",
    "DO",
    "DOMAIN",
    "DROP",
    "ELSE",
    "END",
    "EXCEPT",
    "EXECUTE",
    "EXISTS",
    "FALSE",
    "FETCH",
    "FOR",
    "FOREIGN",
    "FROM",
    "GRANT",
    "GROUP",
    "HAVING",
    "IF",
    "IN",
    "INITIALLY",
    "INTERSECT",
    "INTO",
    "LATERAL",
    "LEADING",
    "LIMIT",
    "LOCALTIME",
    "LOCALTIMESTAMP",
    "NOT",
    "NULL",
    "OFFSET",
    "ON",
    "ONLY",
    "OR",
    "ORDER",
    "PLACING",
    "PRIMARY",
    "REFERENCES",
    "RESTRICT",
    "RETURNING",
    "SELECT",
    "SESSION_USER",
    "SOME",
    "SQLCODE",
    "SYMMETRIC",
    "TABLE",
    "THEN",
    "TO",
    "TRAILING",
    "TRUE",
    "UNION",
    "UNIQUE",
    "USER",
    "USING",
    "VARIADIC",
    "WHEN",
    "WHERE",
    "WINDOW",
    "WITH",
];

static PLAIN_IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z_][a-z0-9_]*$").expect("valid identifier pattern"));

/// Quote a SQL identifier to make it safe for use in statements
///
/// # Example
/// ```
/// use runtara_sql_dialect::sql::quote_identifier;
///
/// assert_eq!(quote_identifier("age_domain"), "\"age_domain\"");
/// assert_eq!(quote_identifier("odd\"name"), "\"odd\"\"name\"");
/// ```
pub fn quote_identifier(identifier: &str) -> String {
    // Escape any double quotes in the identifier by doubling them
    let escaped = identifier.replace('"', "\"\"");
    format!("\"{}\"", escaped)
}

/// Whether an identifier must be quoted to survive unchanged
///
/// Plain lowercase identifiers that are not reserved words can be emitted
/// bare. Anything else (mixed case, punctuation, leading digits, keywords)
/// would be case-folded or misparsed without quotes.
///
/// # Example
/// ```
/// use runtara_sql_dialect::sql::needs_quoting;
///
/// assert!(!needs_quoting("age_domain"));
/// assert!(needs_quoting("AgeDomain"));
/// assert!(needs_quoting("domain"));
/// ```
pub fn needs_quoting(identifier: &str) -> bool {
    !PLAIN_IDENTIFIER.is_match(identifier)
        || RESERVED_WORDS.contains(&identifier.to_uppercase().as_str())
}

/// Validate one part of an object name
///
/// Names are quoted on output, so any non-empty text is accepted except
/// embedded NUL characters, which no supported dialect can represent.
pub fn validate_name_part(part: &str) -> Result<(), String> {
    if part.is_empty() {
        return Err("Identifier cannot be empty".to_string());
    }

    if part.contains('\0') {
        return Err(format!(
            "Identifier '{}' contains a NUL character",
            part.replace('\0', "\\0")
        ));
    }

    Ok(())
}
