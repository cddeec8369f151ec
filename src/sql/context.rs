//! Per-statement rendering context
//!
//! A `RenderContext` owns the output sink for exactly one render. Every write
//! goes through it, so string-literal escaping and formatting are applied
//! uniformly no matter which query part emits the text.

use std::fmt;

use crate::config::RenderConfig;
use crate::dialect::SqlDialect;
use crate::error::Result;
use crate::sql::emulation::{self, DdlStatementType};
use crate::sql::keywords::Keyword;
use crate::sql::render::Render;

pub struct RenderContext<'a, W: fmt::Write> {
    sink: W,
    config: &'a RenderConfig,
    /// Nesting depth of string literals the output is currently inside
    string_literal: u32,
    indent: usize,
}

impl<'a, W: fmt::Write> RenderContext<'a, W> {
    pub fn new(sink: W, config: &'a RenderConfig) -> Self {
        Self {
            sink,
            config,
            string_literal: 0,
            indent: 0,
        }
    }

    pub fn dialect(&self) -> SqlDialect {
        self.config.dialect
    }

    pub fn config(&self) -> &RenderConfig {
        self.config
    }

    /// Consume the context and return the sink
    pub fn into_inner(self) -> W {
        self.sink
    }

    /// Append raw SQL text
    ///
    /// Inside a string literal, each single quote is doubled once per
    /// nesting level.
    pub fn sql(&mut self, text: &str) -> Result<&mut Self> {
        if self.string_literal == 0 || !text.contains('\'') {
            self.sink.write_str(text)?;
            return Ok(self);
        }

        let quotes = "'".repeat(1 << self.string_literal);
        self.sink.write_str(&text.replace('\'', &quotes))?;
        Ok(self)
    }

    pub fn sql_char(&mut self, c: char) -> Result<&mut Self> {
        let mut buf = [0u8; 4];
        self.sql(c.encode_utf8(&mut buf))
    }

    /// Append a keyword in the configured case
    pub fn keyword(&mut self, keyword: Keyword) -> Result<&mut Self> {
        let text = keyword.render(self.config.keyword_case);
        self.sql(&text)
    }

    /// Render a nested query part into this context
    pub fn visit<R: Render>(&mut self, part: &R) -> Result<&mut Self> {
        part.render(self)?;
        Ok(self)
    }

    /// Separator between clauses: a space, or a newline and indentation when formatting
    pub fn format_separator(&mut self) -> Result<&mut Self> {
        if self.config.formatted {
            let indentation = self.config.indentation.repeat(self.indent);
            self.sql_char('\n')?.sql(&indentation)
        } else {
            self.sql_char(' ')
        }
    }

    pub fn format_indent_start(&mut self) -> Result<&mut Self> {
        self.indent += 1;
        Ok(self)
    }

    pub fn format_indent_end(&mut self) -> Result<&mut Self> {
        self.indent = self.indent.saturating_sub(1);
        Ok(self)
    }

    /// Enter (`true`) or leave (`false`) a string literal
    pub fn string_literal(&mut self, enter: bool) -> Result<&mut Self> {
        if enter {
            self.string_literal += 1;
        } else {
            self.string_literal = self.string_literal.saturating_sub(1);
        }
        Ok(self)
    }

    /// Open the dialect's error-suppression block for a statement of the given type
    pub fn begin_try_catch(&mut self, statement: DdlStatementType) -> Result<&mut Self> {
        emulation::begin_try_catch(self, statement)?;
        Ok(self)
    }

    /// Close the block opened by [`begin_try_catch`](Self::begin_try_catch)
    pub fn end_try_catch(&mut self, statement: DdlStatementType) -> Result<&mut Self> {
        emulation::end_try_catch(self, statement)?;
        Ok(self)
    }
}
