use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sxbp::prelude::*;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "sxbp")]
#[command(about = "Generate and render self-avoiding figures from byte strings")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Read input bytes, refine a figure, and write its binary dump (and optionally a render).
    Generate {
        /// Path to read input bytes from; `-` or omitted reads stdin.
        #[arg(long)]
        input: Option<PathBuf>,
        /// Path to write the binary dump to.
        #[arg(long)]
        out: PathBuf,
        /// Perfection threshold `T` (spec.md §4.F); 0 disables the aggressive heuristic.
        #[arg(long, default_value_t = 1)]
        threshold: u32,
        /// Upper bound on segments to finalise.
        #[arg(long)]
        max_segments: Option<usize>,
        /// Also render the refined figure to this PBM path.
        #[arg(long)]
        pbm: Option<PathBuf>,
        /// Also render the refined figure to this SVG path.
        #[arg(long)]
        svg: Option<PathBuf>,
        /// Print a textual progress bar during refinement.
        #[arg(long)]
        progress: bool,
    },
    /// Load a binary dump and re-render it without refining.
    Render {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        pbm: Option<PathBuf>,
        #[arg(long)]
        svg: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate { input, out, threshold, max_segments, pbm, svg, progress } => {
            generate(input, out, threshold, max_segments, pbm, svg, progress)
        }
        Action::Render { input, pbm, svg } => render(input, pbm, svg),
    }
}

fn read_input(path: Option<PathBuf>) -> Result<Vec<u8>> {
    match path {
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
        Some(p) if p == Path::new("-") => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
        Some(p) => fs::read(&p).with_context(|| format!("reading {}", p.display())),
    }
}

fn generate(
    input: Option<PathBuf>,
    out: PathBuf,
    threshold: u32,
    max_segments: Option<usize>,
    pbm: Option<PathBuf>,
    svg: Option<PathBuf>,
    progress: bool,
) -> Result<()> {
    let bytes = read_input(input)?;
    tracing::info!(bytes = bytes.len(), threshold, "begin_figure");
    let mut figure = begin_figure(&bytes)?;

    let options = RefineOptions {
        threshold,
        max_segments: max_segments.unwrap_or(usize::MAX),
        method: RefineMethod::ShrinkFromEnd,
    };

    let mut reporter = TextProgress { enabled: progress };
    refine(&mut figure, options, &mut reporter)?;
    tracing::info!(solved = figure.solved_count(), "refine_complete");

    fs::write(&out, dump(&figure)).with_context(|| format!("writing {}", out.display()))?;
    if let Some(pbm_path) = pbm {
        fs::write(&pbm_path, render_to_pbm(&mut figure))
            .with_context(|| format!("writing {}", pbm_path.display()))?;
    }
    if let Some(svg_path) = svg {
        fs::write(&svg_path, render_to_svg(&mut figure))
            .with_context(|| format!("writing {}", svg_path.display()))?;
    }
    Ok(())
}

fn render(input: PathBuf, pbm: Option<PathBuf>, svg: Option<PathBuf>) -> Result<()> {
    let bytes = fs::read(&input).with_context(|| format!("reading {}", input.display()))?;
    let mut figure = load(&bytes)?;
    tracing::info!(segments = figure.len(), "loaded_figure");
    if let Some(pbm_path) = pbm {
        fs::write(&pbm_path, render_to_pbm(&mut figure))
            .with_context(|| format!("writing {}", pbm_path.display()))?;
    }
    if let Some(svg_path) = svg {
        fs::write(&svg_path, render_to_svg(&mut figure))
            .with_context(|| format!("writing {}", svg_path.display()))?;
    }
    Ok(())
}

/// Prints `segments_completed/segments_target` to stderr when `--progress`
/// is set (spec.md §5's progress callback never runs from inside the
/// backtracker, so this only ticks once per finalised segment).
struct TextProgress {
    enabled: bool,
}

impl ProgressObserver for TextProgress {
    fn on_progress(&mut self, _figure: &Figure, segments_completed: usize, segments_target: usize) -> ProgressSignal {
        if self.enabled {
            eprint!("\rrefining {segments_completed}/{segments_target}");
        }
        ProgressSignal::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn generate_then_render_round_trips_through_files() {
        let dir = tempdir().unwrap();
        let input_path = dir.path().join("in.bin");
        let mut f = fs::File::create(&input_path).unwrap();
        f.write_all(b"SXBP").unwrap();
        drop(f);

        let dump_path = dir.path().join("out.sxbp");
        generate(Some(input_path), dump_path.clone(), 1, None, None, None, false).unwrap();

        let bytes = fs::read(&dump_path).unwrap();
        let figure = load(&bytes).unwrap();
        assert_eq!(figure.solved_count(), figure.len());
    }
}
