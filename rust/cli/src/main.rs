// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! roofkit - build roofs from footprint job files
//!
//! Usage:
//!   roofkit build house.json --roof-type gabled --pitch 35 -o house.obj
//!   roofkit info house.json

mod output;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use output::Format;
use roofkit_geometry::{PolygonAnalysis, RoofJob, RoofType};
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "roofkit")]
#[command(about = "Roof geometry synthesis for building footprints", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a roof mesh from a job file
    Build {
        /// Job file: {"footprint": [[x, y], ...], "roof_type": "...", "params": {...}}
        job: PathBuf,
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format (default: from output extension, else obj)
        #[arg(short, long, value_enum)]
        format: Option<Format>,
        #[command(flatten)]
        overrides: Overrides,
    },
    /// Print the footprint analysis for a job file
    Info {
        job: PathBuf,
        #[command(flatten)]
        overrides: Overrides,
    },
}

/// Command-line values that take precedence over the job file
#[derive(clap::Args, Debug, Default)]
struct Overrides {
    /// Roof type tag (flat, pitched, tented, hipped, gabled, half-hip, mansard)
    #[arg(long)]
    roof_type: Option<String>,
    /// Wall height in model units
    #[arg(long)]
    wall_height: Option<f64>,
    /// Roof pitch in degrees
    #[arg(long)]
    pitch: Option<f64>,
    /// Ridge rotation in degrees
    #[arg(long)]
    rotation: Option<f64>,
}

impl Overrides {
    fn apply(&self, job: &mut RoofJob) {
        if let Some(tag) = &self.roof_type {
            job.roof_type = RoofType::from_tag(tag);
        }
        if let Some(h) = self.wall_height {
            job.params.wall_height = h;
        }
        if let Some(p) = self.pitch {
            job.params.roof_pitch = p;
        }
        if let Some(r) = self.rotation {
            job.params.roof_rotation = r;
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,roofkit_geometry=info".into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            job,
            output,
            format,
            overrides,
        } => build(&job, output.as_deref(), format, &overrides),
        Commands::Info { job, overrides } => info(&job, &overrides),
    }
}

fn load_job(path: &Path, overrides: &Overrides) -> Result<RoofJob> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read job file '{}'", path.display()))?;
    let mut job: RoofJob = serde_json::from_str(&text)
        .with_context(|| format!("invalid job file '{}'", path.display()))?;
    overrides.apply(&mut job);
    Ok(job)
}

fn build(
    job_path: &Path,
    output: Option<&Path>,
    format: Option<Format>,
    overrides: &Overrides,
) -> Result<()> {
    let job = load_job(job_path, overrides)?;
    let format = format
        .or_else(|| output.and_then(Format::from_path))
        .unwrap_or(Format::Obj);

    tracing::info!(
        job = %job_path.display(),
        roof_type = %job.roof_type,
        vertices = job.footprint.len(),
        wall_height = job.params.wall_height,
        pitch = job.params.roof_pitch,
        rotation = job.params.roof_rotation,
        "Building roof"
    );

    let start = Instant::now();
    let roof = job.run().context("roof generation failed")?;

    tracing::info!(
        triangles = roof.triangle_count(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Roof built"
    );

    match output {
        Some(path) => {
            let file = fs::File::create(path)
                .with_context(|| format!("cannot create output file '{}'", path.display()))?;
            let mut out = BufWriter::new(file);
            output::write_roof(&mut out, &roof, job.roof_type, format)?;
            out.flush()?;
            tracing::info!(output = %path.display(), ?format, "Wrote roof");
        }
        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            output::write_roof(&mut out, &roof, job.roof_type, format)?;
            out.flush()?;
        }
    }

    Ok(())
}

fn info(job_path: &Path, overrides: &Overrides) -> Result<()> {
    let job = load_job(job_path, overrides)?;
    let footprint = &job.footprint;
    let analysis = PolygonAnalysis::analyze(footprint, job.params.roof_rotation);

    println!("Job:          {}", job_path.display());
    println!("Roof type:    {}", job.roof_type);
    println!(
        "Params:       wall {:.3}, pitch {:.1} deg, rotation {:.1} deg",
        job.params.wall_height, job.params.roof_pitch, job.params.roof_rotation
    );
    println!(
        "Footprint:    {} vertices, area {:.3}, {:?}",
        footprint.len(),
        footprint.area(),
        footprint.orientation()
    );
    println!(
        "Bounds:       ({:.3}, {:.3}) - ({:.3}, {:.3})",
        analysis.bounds.min.x, analysis.bounds.min.y, analysis.bounds.max.x, analysis.bounds.max.y
    );
    println!(
        "Centroid:     ({:.3}, {:.3})",
        analysis.centroid.x, analysis.centroid.y
    );
    println!(
        "Ridge:        {:?} axis, {:.2} deg",
        analysis.ridge_axis,
        analysis.ridge_angle.to_degrees()
    );
    println!(
        "Extents:      width {:.3}, length {:.3}, aspect {:.3}",
        analysis.width,
        analysis.length,
        analysis.aspect_ratio()
    );

    Ok(())
}
