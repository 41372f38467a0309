//! Rewrite entry points: parse a snippet, run the printer, collect bindings.

use oxc_allocator::Allocator;
use oxc_ast::ast::{Program, Statement};
use oxc_parser::{ParseOptions, Parser};
use oxc_span::{GetSpan, SourceType};
use serde::Serialize;
use tracing::debug;

use crate::error::{Result, RewriteError};
use crate::options::RewriteOptions;
use crate::rewriter::{Bindings, SnippetPrinter, binding_names};

/// Rewritten code plus the names it registers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RewriteOutput {
    pub code: String,
    pub bindings: Bindings,
}

/// A configured rewriter. Cheap to clone and safe to share across threads;
/// every call owns its own arena and output buffer.
#[derive(Debug, Clone, Default)]
pub struct Rewriter {
    options: RewriteOptions,
}

impl Rewriter {
    pub fn new(options: RewriteOptions) -> Result<Self> {
        options.validate()?;
        Ok(Rewriter { options })
    }

    pub const fn options(&self) -> &RewriteOptions {
        &self.options
    }

    #[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
    pub fn rewrite(&self, source: &str) -> Result<RewriteOutput> {
        let allocator = Allocator::default();
        let program = parse(&allocator, source)?;

        let mut printer = SnippetPrinter::new(source, &self.options);
        printer.emit_program(&program)?;
        let (code, bindings) = printer.finish();

        debug!(
            output_len = code.len(),
            global = bindings.global.len(),
            scope = bindings.scope.len(),
            "rewrite finished"
        );
        Ok(RewriteOutput { code, bindings })
    }
}

/// Rewrite `source` with the default options.
pub fn rewrite(source: &str) -> Result<String> {
    Rewriter::default().rewrite(source).map(|output| output.code)
}

/// Names bound by the first declarator of a single variable declaration,
/// e.g. `let [a, {b: c}] = x` gives `a`, `c`.
pub fn flatten_pattern_names(declaration: &str) -> Result<Vec<String>> {
    let allocator = Allocator::default();
    let program = parse(&allocator, declaration)?;
    let declarator = first_declarator(&program)?;
    Ok(binding_names(&declarator.id))
}

/// The first declarator's pattern of a single variable declaration,
/// re-serialized as an assignment target.
pub fn rewrite_pattern_text(declaration: &str) -> Result<String> {
    let allocator = Allocator::default();
    let program = parse(&allocator, declaration)?;
    let declarator = first_declarator(&program)?;
    let options = RewriteOptions::default();
    let printer = SnippetPrinter::new(declaration, &options);
    printer.binding_pattern_text(&declarator.id)
}

fn parse<'a>(allocator: &'a Allocator, source: &'a str) -> Result<Program<'a>> {
    let ret = Parser::new(allocator, source, SourceType::mjs())
        .with_options(ParseOptions {
            allow_return_outside_function: true,
            ..ParseOptions::default()
        })
        .parse();

    if let Some(error) = ret.errors.first() {
        debug!(errors = ret.errors.len(), "parse failed");
        return Err(RewriteError::syntax(error, source));
    }
    Ok(ret.program)
}

fn first_declarator<'p, 'a>(
    program: &'p Program<'a>,
) -> Result<&'p oxc_ast::ast::VariableDeclarator<'a>> {
    match program.body.first() {
        Some(Statement::VariableDeclaration(decl)) => {
            decl.declarations.first().ok_or(RewriteError::unexpected(
                "empty declaration",
                "pattern input",
                decl.span.start,
            ))
        }
        Some(other) => Err(RewriteError::unexpected(
            "statement",
            "pattern input",
            other.span().start,
        )),
        None => Err(RewriteError::unexpected("empty input", "pattern input", 0)),
    }
}
