//! Emulation of features a dialect lacks natively
//!
//! `IF EXISTS` is the only emulated clause so far. Where it is missing, the
//! statement runs inside a block that swallows the "object does not exist"
//! error raised for that statement type, and nothing else.

use std::fmt;

use crate::dialect::{Capability, SqlDialect};
use crate::error::Result;
use crate::sql::context::RenderContext;
use crate::sql::keywords::Keyword;

/// Kind of DDL statement wrapped by a try/catch block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DdlStatementType {
    DropDomain,
}

impl DdlStatementType {
    /// Firebird SQLCODE raised when the target object is missing
    fn firebird_sqlcode(self) -> &'static str {
        match self {
            // unsuccessful metadata update
            DdlStatementType::DropDomain => "-607",
        }
    }
}

/// How a requested `IF EXISTS` clause is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IfExistsStrategy {
    /// Emit the dialect's own `IF EXISTS` clause
    Native,
    /// Emit the unconditional statement inside an error-suppression block
    SuppressErrorWrap,
    /// `IF EXISTS` was not requested
    Omit,
}

impl IfExistsStrategy {
    pub fn resolve(requested: bool, dialect: SqlDialect, capability: Capability) -> Self {
        if !requested {
            IfExistsStrategy::Omit
        } else if dialect.supports(capability) {
            IfExistsStrategy::Native
        } else {
            IfExistsStrategy::SuppressErrorWrap
        }
    }

    pub fn is_native(self) -> bool {
        self == IfExistsStrategy::Native
    }

    pub fn wraps(self) -> bool {
        self == IfExistsStrategy::SuppressErrorWrap
    }
}

pub(crate) fn begin_try_catch<W: fmt::Write>(
    ctx: &mut RenderContext<'_, W>,
    _statement: DdlStatementType,
) -> Result<()> {
    match ctx.dialect() {
        SqlDialect::Firebird => {
            ctx.keyword(Keyword::ExecuteBlock)?
                .sql_char(' ')?
                .keyword(Keyword::As)?
                .format_separator()?
                .keyword(Keyword::Begin)?
                .format_indent_start()?
                .format_separator()?
                .keyword(Keyword::ExecuteStatement)?
                .sql(" '")?
                .string_literal(true)?;
        }
        SqlDialect::Default | SqlDialect::Postgres | SqlDialect::H2 | SqlDialect::Hsqldb => {}
    }

    Ok(())
}

pub(crate) fn end_try_catch<W: fmt::Write>(
    ctx: &mut RenderContext<'_, W>,
    statement: DdlStatementType,
) -> Result<()> {
    match ctx.dialect() {
        SqlDialect::Firebird => {
            ctx.string_literal(false)?
                .sql("';")?
                .format_separator()?
                .keyword(Keyword::When)?
                .sql_char(' ')?
                .keyword(Keyword::Sqlcode)?
                .sql_char(' ')?
                .sql(statement.firebird_sqlcode())?
                .sql_char(' ')?
                .keyword(Keyword::Do)?
                .sql_char(' ')?
                .keyword(Keyword::Begin)?
                .sql_char(' ')?
                .keyword(Keyword::End)?
                .format_indent_end()?
                .format_separator()?
                .keyword(Keyword::End)?;
        }
        SqlDialect::Default | SqlDialect::Postgres | SqlDialect::H2 | SqlDialect::Hsqldb => {}
    }

    Ok(())
}
