use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the replscope binary.
#[derive(Parser, Debug)]
#[command(
    name = "replscope",
    version,
    about = "Rewrite JavaScript snippets so their top-level bindings persist across REPL evaluations"
)]
pub struct CliArgs {
    // ==================== Input ====================
    /// Rewrite this code instead of reading files.
    #[arg(short = 'e', long = "eval", value_name = "CODE", conflicts_with = "files")]
    pub eval: Option<String>,

    /// Path to a replscope.json options file.
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    // ==================== Binding Names ====================
    /// Name of the global sink for `var` and function declarations.
    #[arg(long, value_name = "NAME")]
    pub global: Option<String>,

    /// Name of the scope object for top-level `let`, `const` and classes.
    #[arg(long, value_name = "NAME")]
    pub scope: Option<String>,

    /// Name of the module capability (`meta`, `import`, `global`, `scope`).
    #[arg(long, value_name = "NAME")]
    pub module: Option<String>,

    // ==================== Output ====================
    /// Keep top-level function declarations in source order.
    #[arg(long = "no-hoist-functions")]
    pub no_hoist_functions: bool,

    /// Print the function body the host compiles, not just the rewritten code.
    #[arg(long)]
    pub wrap: bool,

    /// Print one JSON object per input with the code and registered bindings.
    #[arg(long)]
    pub json: bool,

    /// Pretty-print JSON output.
    #[arg(long, requires = "json")]
    pub pretty: bool,

    /// Input files (stdin when empty and no --eval).
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,
}
