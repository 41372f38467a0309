//! Reads inputs, rewrites them in parallel and formats the results.

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

use replscope_common::Diagnostic;
use replscope_rewriter::{Bindings, RewriteError, RewriteOptions, RewriteOutput, Rewriter, harness};

use crate::args::CliArgs;
use crate::config::resolve_options;

/// Display name of `--eval` input.
pub const EVAL_NAME: &str = "<eval>";
/// Display name of standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// One snippet to rewrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetSource {
    pub name: String,
    pub text: String,
}

/// Everything a run produced, in input order.
#[derive(Debug)]
pub struct RunResult {
    /// Text for stdout.
    pub output: String,
    /// One diagnostic per input that failed.
    pub diagnostics: Vec<Diagnostic>,
    pub sources: Vec<SnippetSource>,
}

impl RunResult {
    pub fn success(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[derive(Serialize)]
struct JsonEntry<'a> {
    file: &'a str,
    code: &'a str,
    bindings: &'a Bindings,
}

pub fn run(args: &CliArgs, cwd: &Path) -> Result<RunResult> {
    let options = resolve_options(args, cwd)?;
    let sources = collect_sources(args, cwd)?;
    run_sources(args, options, sources)
}

/// Rewrite already-loaded sources.
pub fn run_sources(
    args: &CliArgs,
    options: RewriteOptions,
    sources: Vec<SnippetSource>,
) -> Result<RunResult> {
    let rewriter = Rewriter::new(options).context("invalid rewrite options")?;
    info!(inputs = sources.len(), "rewriting");

    let results = rewrite_all(&rewriter, &sources);

    let mut output = String::new();
    let mut diagnostics = Vec::new();
    let show_names = sources.len() > 1;
    for (source, result) in sources.iter().zip(&results) {
        match result {
            Ok(rewritten) => {
                let code = if args.wrap {
                    harness::wrap(&rewritten.code, rewriter.options())
                } else {
                    rewritten.code.clone()
                };
                if args.json {
                    push_json(&mut output, &source.name, &code, &rewritten.bindings, args.pretty)?;
                } else {
                    push_text(&mut output, &source.name, &code, show_names);
                }
            }
            Err(err) => {
                debug!(file = %source.name, error = %err, "rewrite failed");
                diagnostics.push(err.to_diagnostic(&source.name));
            }
        }
    }

    Ok(RunResult {
        output,
        diagnostics,
        sources,
    })
}

/// Rewrite every source in parallel; results keep input order.
pub fn rewrite_all(
    rewriter: &Rewriter,
    sources: &[SnippetSource],
) -> Vec<Result<RewriteOutput, RewriteError>> {
    sources
        .par_iter()
        .map(|source| rewriter.rewrite(&source.text))
        .collect()
}

/// `--eval` code, else the named files, else stdin.
pub fn collect_sources(args: &CliArgs, cwd: &Path) -> Result<Vec<SnippetSource>> {
    if let Some(code) = &args.eval {
        return Ok(vec![SnippetSource {
            name: EVAL_NAME.to_string(),
            text: code.clone(),
        }]);
    }

    if args.files.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(vec![SnippetSource {
            name: STDIN_NAME.to_string(),
            text,
        }]);
    }

    args.files
        .iter()
        .map(|file| {
            let path = cwd.join(file);
            let text = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read input: {}", path.display()))?;
            Ok(SnippetSource {
                name: file.display().to_string(),
                text,
            })
        })
        .collect()
}

fn push_text(output: &mut String, name: &str, code: &str, show_name: bool) {
    if show_name {
        output.push_str("// ");
        output.push_str(name);
        output.push('\n');
    }
    output.push_str(code);
    if !code.ends_with('\n') {
        output.push('\n');
    }
}

fn push_json(
    output: &mut String,
    name: &str,
    code: &str,
    bindings: &Bindings,
    pretty: bool,
) -> Result<()> {
    let entry = JsonEntry {
        file: name,
        code,
        bindings,
    };
    let json = if pretty {
        serde_json::to_string_pretty(&entry)
    } else {
        serde_json::to_string(&entry)
    }
    .context("failed to serialize output")?;
    output.push_str(&json);
    output.push('\n');
    Ok(())
}
