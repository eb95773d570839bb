//! phpdocgen — report, check, and generate PHPDoc blocks for PHP functions.
//!
//! - `phpdocgen list src/` — every function with its documentation status
//! - `phpdocgen check src/*.php` — fail when a doc block's @param tags drifted
//! - `phpdocgen generate src/Foo.php` — ask the completion service for missing blocks

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use phpdocgen::generate::{DocGenerator, GeneratorConfig, DEFAULT_MODEL};
use phpdocgen::model::DocStatus;
use phpdocgen::render::{self, FileReport};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "phpdocgen",
    about = "Find PHP functions missing PHPDoc blocks and generate them"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Debug logging on stderr (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// List every function and whether it is documented
    List(ReportArgs),
    /// Report doc blocks whose @param tags don't match the signature; exits 1 if any
    Check(ReportArgs),
    /// Generate doc blocks for undocumented functions
    Generate(GenerateArgs),
}

#[derive(Args)]
struct InputArgs {
    /// Input files, directories, or glob patterns. If omitted, reads from stdin.
    files: Vec<String>,
}

#[derive(Args)]
struct ReportArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output format: text (default), json
    #[arg(short = 'f', long, default_value = "text")]
    format: String,
}

#[derive(Args)]
struct GenerateArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Also regenerate doc blocks whose @param tags are stale
    #[arg(long)]
    stale: bool,

    /// API key for the completion service
    #[arg(long, env = "OPENAI_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Base URI of an OpenAI-compatible API
    #[arg(long, env = "BASE_URI")]
    base_uri: Option<String>,

    /// Completion model name
    #[arg(long, env = "MODEL", default_value = DEFAULT_MODEL)]
    model: String,
}

impl GenerateArgs {
    fn config(&self) -> GeneratorConfig {
        GeneratorConfig {
            api_key: self.api_key.clone(),
            base_uri: self.base_uri.clone(),
            model: self.model.clone(),
            ..Default::default()
        }
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::List(args) => list(args),
        Command::Check(args) => check(args),
        Command::Generate(args) => generate(args),
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("phpdocgen=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

fn list(args: &ReportArgs) -> Result<ExitCode> {
    let renderer = render::create_renderer(&args.format)?;
    let reports = load_reports(&args.input)?;
    print!("{}", renderer.render(&reports));
    Ok(ExitCode::SUCCESS)
}

fn check(args: &ReportArgs) -> Result<ExitCode> {
    let renderer = render::create_renderer(&args.format)?;
    let mut reports = load_reports(&args.input)?;
    for report in &mut reports {
        report.functions.retain(|f| f.is_stale());
    }
    reports.retain(|r| !r.functions.is_empty());

    print!("{}", renderer.render(&reports));
    if reports.is_empty() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn generate(args: &GenerateArgs) -> Result<ExitCode> {
    let reports = load_reports(&args.input)?;
    let generator = DocGenerator::from_config(&args.config());
    let mut failed = 0usize;

    for report in &reports {
        for func in &report.functions {
            let wanted = match func.status() {
                DocStatus::Missing => true,
                DocStatus::Stale => args.stale,
                DocStatus::Documented => false,
            };
            if !wanted {
                continue;
            }

            info!(function = %func.name, path = %report.path, "generating doc block");
            match generator.create_doc_block(&func.body) {
                Ok(block) => {
                    println!("// {}:{} {}", report.path, func.line, func.name);
                    println!("{}\n", block.trim());
                }
                Err(e) => {
                    warn!("{}:{} {}: {}", report.path, func.line, func.name, e);
                    failed += 1;
                }
            }
        }
    }

    if failed > 0 {
        eprintln!("error: {} doc block(s) could not be generated", failed);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

/// Read stdin or every input path and extract functions from each.
fn load_reports(input: &InputArgs) -> Result<Vec<FileReport>> {
    if input.files.is_empty() {
        let mut code = String::new();
        io::stdin()
            .read_to_string(&mut code)
            .context("failed to read stdin")?;
        return Ok(vec![FileReport {
            path: "<stdin>".to_string(),
            functions: phpdocgen::get_functions_from_string(&code),
        }]);
    }

    expand_globs(&input.files)?
        .into_iter()
        .map(|path| -> Result<FileReport> {
            let functions = phpdocgen::get_functions_from_file(&path)?;
            Ok(FileReport {
                path: path.to_string_lossy().to_string(),
                functions,
            })
        })
        .collect()
}

/// File extensions recognized as PHP sources when scanning directories.
const SUPPORTED_EXTENSIONS: &[&str] = &["php", "phtml", "inc"];

/// Expand glob patterns into a list of real file paths.
/// Also handles bare directory paths by scanning for supported file types.
/// A plain path that doesn't exist is passed through so reading it reports
/// the missing file.
fn expand_globs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        // If it's a directory, scan for supported extensions (non-recursive)
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries.flatten() {
                let p = entry.path();
                if p.is_file() && has_supported_extension(&p) {
                    files.push(p);
                }
            }
            continue;
        }
        if !is_glob(pattern) {
            files.push(path.to_path_buf());
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}
