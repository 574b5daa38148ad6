use anyhow::{Context, Result};
use clap::Parser;
use commit_tidy_config::Config;
use commit_tidy_engine::{Edit, FoldRegion, Formatter, Rope, folding_ranges, outline, subject_range};
use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

/// Tidy a git commit message: collapse the subject, rewrap body paragraphs,
/// squeeze blank runs, and leave comments, trailers and diffs alone.
#[derive(Debug, Parser)]
#[command(name = "commit-tidy", version, about)]
struct Args {
    /// Message file (e.g. .git/COMMIT_EDITMSG). Reads stdin when absent or `-`.
    file: Option<PathBuf>,

    /// Rewrite FILE instead of printing the result.
    #[arg(short, long, requires = "file")]
    in_place: bool,

    /// Print nothing; exit with status 1 if the message would change.
    #[arg(long, conflicts_with_all = ["in_place", "edits"])]
    check: bool,

    /// Print the per-chunk edit list instead of the formatted text.
    #[arg(long, conflicts_with = "in_place")]
    edits: bool,

    /// Print the outline (one line per non-blank chunk).
    #[arg(long, conflicts_with_all = ["in_place", "check", "edits"])]
    outline: bool,

    /// Print folding ranges.
    #[arg(long, conflicts_with_all = ["in_place", "check", "edits", "outline"])]
    folds: bool,

    /// Print the subject's line range.
    #[arg(long, conflicts_with_all = ["in_place", "check", "edits", "outline", "folds"])]
    subject: bool,

    /// Wrap column for body paragraphs (overrides the config file).
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    width: Option<u16>,

    /// Config file to use instead of ~/.config/commit-tidy/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log debug output to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("commit-tidy: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(args: &Args) -> Result<ExitCode> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(width) = args.width {
        config.wrap_width = usize::from(width);
    }
    log::debug!("using {config:?}");

    let formatter = Formatter::new(config.format_options());
    let input = read_input(args.file.as_deref())?;
    let rope = Rope::from(input.as_str());

    let mut stdout = io::stdout().lock();

    if args.outline || args.folds || args.subject {
        let parsed = formatter.parse(&rope);
        if args.outline {
            for entry in outline(&parsed.chunks) {
                writeln!(
                    stdout,
                    "{}:{}\t{}",
                    entry.lines.start + 1,
                    entry.lines.end + 1,
                    entry.label
                )?;
            }
        } else if args.folds {
            for fold in folding_ranges(&parsed.chunks) {
                let region = match fold.region {
                    FoldRegion::Plain => "region",
                    FoldRegion::Comment => "comment",
                };
                writeln!(
                    stdout,
                    "{}:{}\t{region}",
                    fold.lines.start + 1,
                    fold.lines.end + 1
                )?;
            }
        } else if !parsed.lines.is_empty() {
            let range = subject_range(&parsed.chunks);
            writeln!(stdout, "{}:{}", range.start + 1, range.end + 1)?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    let edits = formatter.edits(&rope);
    log::info!("{} chunk edits", edits.len());

    if args.check {
        return Ok(if edits.is_empty() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    if args.edits {
        for edit in &edits {
            write_edit(&mut stdout, edit)?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    let formatted = commit_tidy_engine::format::apply_edits(&rope, &edits).to_string();

    match (&args.file, args.in_place) {
        (Some(path), true) => {
            if edits.is_empty() {
                log::info!("{} already tidy", path.display());
            } else {
                std::fs::write(path, formatted)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
            }
        }
        _ => stdout.write_all(formatted.as_bytes())?,
    }

    Ok(ExitCode::SUCCESS)
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let loaded = match explicit {
        Some(path) => {
            let path = Config::expand_path(path).unwrap_or_else(|| path.to_path_buf());
            let config = Config::load_from_path(&path)?;
            if config.is_none() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            config
        }
        None => Config::load()?,
    };
    Ok(loaded.unwrap_or_default())
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn write_edit(out: &mut impl Write, edit: &Edit) -> io::Result<()> {
    writeln!(
        out,
        "{}:{}\t{}\t{:?}",
        edit.lines.start + 1,
        edit.lines.end + 1,
        edit.kind.label(),
        edit.replacement
    )
}
