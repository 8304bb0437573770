//! Command-line driver: loads a scene document, runs the analysis and prints
//! the junction table and the final bodies.
//!
//! ```text
//! polyscene cube.json
//! polyscene one.json --flip --detect-background
//! RUST_LOG=polyscene=debug polyscene cube.json --json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use polyscene::{
    load_scene, AnalysisConfig, DetectBackground, FaceId, LinkCounting, SceneAnalysis,
};

#[derive(Parser, Debug)]
#[command(name = "polyscene")]
#[command(about = "Label line-drawing junctions and group faces into bodies")]
struct Cli {
    /// Scene document (JSON).
    scene: PathBuf,
    /// Negate the y axis before measuring angles (image coordinates).
    #[arg(long)]
    flip: bool,
    /// Background face, overriding the document.
    #[arg(long, conflicts_with = "detect_background")]
    background: Option<u64>,
    /// Pick the most frequently touched face as background when the document
    /// names none.
    #[arg(long)]
    detect_background: bool,
    /// Half-width in degrees of the T-junction window around 180°.
    #[arg(long)]
    t_tolerance: Option<f64>,
    /// Count every emission of a link when deciding global merges.
    #[arg(long)]
    count_multiplicity: bool,
    /// Print the report as JSON instead of a table.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for polyscene.
    // Override with RUST_LOG env var (e.g. RUST_LOG=polyscene=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("polyscene=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut scene = load_scene(&cli.scene)
        .with_context(|| format!("loading scene {}", cli.scene.display()))?;
    if let Some(bg) = cli.background {
        scene.set_background(Some(FaceId(bg)));
    } else if cli.detect_background && scene.background().is_none() {
        let bg = DetectBackground::new()
            .execute(&scene)
            .context("detecting background")?;
        scene.set_background(Some(bg));
    }

    let mut config = AnalysisConfig::new().with_flip(cli.flip);
    if let Some(tol) = cli.t_tolerance {
        config = config.with_t_tolerance(tol);
    }
    if cli.count_multiplicity {
        config = config.with_link_counting(LinkCounting::Multiplicity);
    }

    let report = SceneAnalysis::new(config)
        .execute(&scene)
        .context("analyzing scene")?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&report).context("serializing report")?
        );
    } else {
        print!("{report}");
    }
    Ok(())
}
