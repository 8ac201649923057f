use anyhow::{Context, Result};
use benchplot::{
    chart,
    cli::Cli,
    config::BenchmarkConfig,
    model::BenchmarkSet,
    presets,
    style::CategoryStyle,
    summary::{self, RenderMode},
};
use clap::Parser;
use std::fs;
use std::io::{self, Write};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn print_presets() {
    for preset in presets::PRESETS {
        println!("{:<20} {}", preset.name, preset.description);
    }
}

/// Load the benchmark set and palette from a file or a preset
fn load_input(args: &Cli) -> Result<(BenchmarkSet, CategoryStyle)> {
    match (&args.input, &args.preset) {
        (Some(path), None) => {
            let config = BenchmarkConfig::from_file(path)?;
            let set = config
                .to_set()
                .with_context(|| format!("Invalid benchmark set in {}", path.display()))?;
            Ok((set, config.category_style()?))
        }
        (None, Some(name)) => Ok((presets::find(name)?.to_set()?, CategoryStyle::default())),
        (Some(_), Some(_)) => {
            anyhow::bail!("Cannot specify both --input and --preset. Choose one.");
        }
        (None, None) => {
            anyhow::bail!("Must specify either --input FILE or --preset NAME. Usage: benchplot -i results.toml or benchplot -p scatter-256 (see --list-presets)");
        }
    }
}

fn main() -> Result<()> {
    let args = Cli::parse();

    init_tracing(args.debug);

    if args.list_presets {
        print_presets();
        return Ok(());
    }

    let (mut set, style) = load_input(&args)?;
    if let Some(baseline) = &args.baseline {
        set = set.with_baseline(baseline)?;
    }
    if let Some(title) = &args.title {
        set = set.with_title(title.clone());
    }

    let mode = RenderMode::from(args.mode);
    let summary = summary::summarize(&set, mode, &style)?;

    // Render fully before touching the destination so errors leave no partial output
    let sink = chart::sink_for(args.format, args.width);
    let rendered = chart::render_to_string(sink.as_ref(), &summary)?;

    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), format = ?args.format, "chart written");
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(rendered.as_bytes())?;
            lock.flush()?;
        }
    }

    Ok(())
}
