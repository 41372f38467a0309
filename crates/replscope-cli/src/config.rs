//! Options file loading and command-line overrides.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

use replscope_rewriter::RewriteOptions;

use crate::args::CliArgs;

/// Options file picked up from the working directory when `--config` is absent.
pub const CONFIG_FILE_NAME: &str = "replscope.json";

pub fn parse_options(source: &str) -> Result<RewriteOptions> {
    let options = serde_json::from_str(source).context("failed to parse options JSON")?;
    Ok(options)
}

pub fn load_options(path: &Path) -> Result<RewriteOptions> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read options: {}", path.display()))?;
    parse_options(&source).with_context(|| format!("failed to parse options: {}", path.display()))
}

/// The options file to use: `--config`, else `replscope.json` in `cwd` if present.
pub fn find_config(args: &CliArgs, cwd: &Path) -> Option<PathBuf> {
    if let Some(path) = &args.config {
        return Some(cwd.join(path));
    }
    let candidate = cwd.join(CONFIG_FILE_NAME);
    candidate.is_file().then_some(candidate)
}

/// Load the options file (if any), apply command-line overrides and validate.
pub fn resolve_options(args: &CliArgs, cwd: &Path) -> Result<RewriteOptions> {
    let mut options = match find_config(args, cwd) {
        Some(path) => {
            debug!(path = %path.display(), "loading options file");
            load_options(&path)?
        }
        None => RewriteOptions::default(),
    };
    apply_cli_overrides(&mut options, args);
    options.validate().context("invalid rewrite options")?;
    Ok(options)
}

pub fn apply_cli_overrides(options: &mut RewriteOptions, args: &CliArgs) {
    if let Some(name) = &args.global {
        options.global_binding.clone_from(name);
    }
    if let Some(name) = &args.scope {
        options.scope_binding.clone_from(name);
    }
    if let Some(name) = &args.module {
        options.module_binding.clone_from(name);
    }
    if args.no_hoist_functions {
        options.hoist_functions = false;
    }
}
