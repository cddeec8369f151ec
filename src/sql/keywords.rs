//! SQL keyword tokens

use crate::config::RenderKeywordCase;

/// A keyword token, rendered in the configured keyword case
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Drop,
    Domain,
    IfExists,
    Cascade,
    Restrict,
    // Error-suppression scaffolding
    ExecuteBlock,
    As,
    Begin,
    ExecuteStatement,
    When,
    Sqlcode,
    Do,
    End,
}

impl Keyword {
    /// Canonical upper-case spelling
    pub const fn as_str(self) -> &'static str {
        match self {
            Keyword::Drop => "DROP",
            Keyword::Domain => "DOMAIN",
            Keyword::IfExists => "IF EXISTS",
            Keyword::Cascade => "CASCADE",
            Keyword::Restrict => "RESTRICT",
            Keyword::ExecuteBlock => "EXECUTE BLOCK",
            Keyword::As => "AS",
            Keyword::Begin => "BEGIN",
            Keyword::ExecuteStatement => "EXECUTE STATEMENT",
            Keyword::When => "WHEN",
            Keyword::Sqlcode => "SQLCODE",
            Keyword::Do => "DO",
            Keyword::End => "END",
        }
    }

    /// Spelling of this keyword in the given case
    pub fn render(self, case: RenderKeywordCase) -> String {
        let keyword = self.as_str();
        match case {
            RenderKeywordCase::Upper => keyword.to_string(),
            RenderKeywordCase::Lower => keyword.to_lowercase(),
            RenderKeywordCase::Pascal => keyword
                .split(' ')
                .map(|word| {
                    let mut chars = word.chars();
                    match chars.next() {
                        Some(first) => {
                            first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect()
                        }
                        None => String::new(),
                    }
                })
                .collect::<Vec<String>>()
                .join(" "),
        }
    }
}
