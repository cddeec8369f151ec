//! Rendering of query parts into SQL text

use std::fmt;

use crate::config::RenderConfig;
use crate::error::Result;
use crate::sql::context::RenderContext;
use crate::sql::keywords::Keyword;

/// A piece of SQL that knows how to write itself into a [`RenderContext`]
///
/// Implementations only append to the context. Errors come from the sink and
/// are returned as-is.
pub trait Render {
    fn render<W: fmt::Write>(&self, ctx: &mut RenderContext<'_, W>) -> Result<()>;
}

impl Render for Keyword {
    fn render<W: fmt::Write>(&self, ctx: &mut RenderContext<'_, W>) -> Result<()> {
        ctx.keyword(*self)?;
        Ok(())
    }
}

/// Render a query part into a new string
pub fn render_to_string<R: Render>(part: &R, config: &RenderConfig) -> Result<String> {
    let mut ctx = RenderContext::new(String::new(), config);
    ctx.visit(part)?;
    let sql = ctx.into_inner();

    crate::trace_render!(config.dialect, &sql);

    Ok(sql)
}
