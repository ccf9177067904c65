//! Command-line harness: read pitch events from CSV, simulate, write
//! trajectory samples (and optionally transformed stadium geometry) back
//! out as CSV for a plotting consumer.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use polars::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pitchsim::constants::DEFAULT_PITCH_LIMIT;
use pitchsim::{
    simulate, stadium, PitchEvent, Trajectory, TransformConfig, Vec3, DEFAULT_TIME_STEP,
    PITCH_OFFSET,
};

/// Pitch trajectory simulator.
#[derive(Parser)]
#[command(name = "pitchsim")]
#[command(about = "Simulate recorded pitch trajectories into a shared stadium frame")]
#[command(version)]
struct Cli {
    /// Pitch event CSV with columns
    /// `x0,y0,z0,vx0,vy0,vz0,ax,ay,az,plate_time,pitch_type,is_strike`
    #[arg(short, long)]
    pitches: PathBuf,

    /// Output CSV for trajectory samples
    #[arg(short, long, default_value = "trajectories.csv")]
    out: PathBuf,

    /// Integration step size in seconds
    #[arg(long, default_value_t = DEFAULT_TIME_STEP)]
    dt: f64,

    /// Maximum number of pitch events to read
    #[arg(long, default_value_t = DEFAULT_PITCH_LIMIT)]
    limit: usize,

    /// Stadium geometry CSV (`team,segment,x,y`)
    #[arg(long)]
    stadiums: Option<PathBuf>,

    /// Team whose park to keep from the stadium file
    #[arg(long, default_value = "generic")]
    team: String,

    /// Output CSV for transformed stadium geometry
    #[arg(long, default_value = "stadium_frame.csv")]
    stadium_out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let events = read_pitch_events(&cli.pitches, cli.limit)
        .with_context(|| format!("reading pitch events from {}", cli.pitches.display()))?;
    info!(count = events.len(), dt = cli.dt, "simulating pitches");

    let trajectories = simulate(&events, cli.dt)?;
    write_trajectories(&cli.out, &events, &trajectories)
        .with_context(|| format!("writing trajectories to {}", cli.out.display()))?;
    info!(
        samples = trajectories.iter().map(Trajectory::len).sum::<usize>(),
        out = %cli.out.display(),
        "wrote trajectory samples"
    );

    if let Some(stadium_path) = &cli.stadiums {
        let segments = stadium::load_segments(stadium_path)?;
        let config = TransformConfig::default();
        let park: Vec<_> = stadium::for_team(&segments, &cli.team)
            .into_iter()
            .map(|s| s.transformed(&config))
            .collect::<pitchsim::Result<_>>()?;
        write_segments(&cli.stadium_out, &park)
            .with_context(|| format!("writing stadium frame to {}", cli.stadium_out.display()))?;
        info!(
            team = %cli.team,
            segments = park.len(),
            out = %cli.stadium_out.display(),
            "wrote transformed stadium geometry"
        );
    }

    Ok(())
}

/// Reads up to `limit` pitch events, shifting release coordinates by the
/// feed offset the way ingest always has.
fn read_pitch_events(path: &Path, limit: usize) -> Result<Vec<PitchEvent>> {
    let file = File::open(path)?;
    let df = CsvReader::new(file).has_header(true).finish()?;

    let x0 = f64_column(&df, "x0")?;
    let y0 = f64_column(&df, "y0")?;
    let z0 = f64_column(&df, "z0")?;
    let vx0 = f64_column(&df, "vx0")?;
    let vy0 = f64_column(&df, "vy0")?;
    let vz0 = f64_column(&df, "vz0")?;
    let ax = f64_column(&df, "ax")?;
    let ay = f64_column(&df, "ay")?;
    let az = f64_column(&df, "az")?;
    let plate_time = f64_column(&df, "plate_time")?;
    let pitch_type = df.column("pitch_type")?.utf8()?.clone();
    let is_strike = df.column("is_strike")?.bool()?.clone();

    let mut events = Vec::new();
    for row in 0..df.height() {
        if events.len() >= limit {
            break;
        }
        let event = PitchEvent::new(
            Vec3::new(x0[row], y0[row], z0[row]),
            Vec3::new(vx0[row], vy0[row], vz0[row]),
            Vec3::new(ax[row], ay[row], az[row]),
            plate_time[row],
            pitch_type.get(row).unwrap_or_default(),
            is_strike.get(row).unwrap_or_default(),
        )
        .with_release_offset(&PITCH_OFFSET);
        events.push(event);
    }

    Ok(events)
}

/// Extracts a CSV column as f64, casting integer columns as needed.
fn f64_column(df: &DataFrame, name: &str) -> Result<Vec<f64>> {
    let series = df.column(name)?.cast(&DataType::Float64)?;
    let values = series
        .f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| v.with_context(|| format!("null in column {name}, row {row}")))
        .collect::<Result<Vec<f64>>>()?;
    Ok(values)
}

/// Flattens trajectories into one long-format sample table.
fn write_trajectories(
    path: &Path,
    events: &[PitchEvent],
    trajectories: &[Trajectory],
) -> Result<()> {
    let total: usize = trajectories.iter().map(Trajectory::len).sum();
    let mut pitch = Vec::with_capacity(total);
    let mut pitch_type = Vec::with_capacity(total);
    let mut is_strike = Vec::with_capacity(total);
    let mut t = Vec::with_capacity(total);
    let mut x = Vec::with_capacity(total);
    let mut y = Vec::with_capacity(total);
    let mut z = Vec::with_capacity(total);
    let mut vx = Vec::with_capacity(total);
    let mut vy = Vec::with_capacity(total);
    let mut vz = Vec::with_capacity(total);

    for (index, (event, trajectory)) in events.iter().zip(trajectories).enumerate() {
        for sample in &trajectory.samples {
            pitch.push(index as u32);
            pitch_type.push(event.pitch_type.clone());
            is_strike.push(event.is_strike);
            t.push(sample.elapsed_time);
            x.push(sample.position.x);
            y.push(sample.position.y);
            z.push(sample.position.z);
            vx.push(sample.velocity.x);
            vy.push(sample.velocity.y);
            vz.push(sample.velocity.z);
        }
    }

    let mut df = DataFrame::new(vec![
        Series::new("pitch", pitch),
        Series::new("pitch_type", pitch_type),
        Series::new("is_strike", is_strike),
        Series::new("t", t),
        Series::new("x", x),
        Series::new("y", y),
        Series::new("z", z),
        Series::new("vx", vx),
        Series::new("vy", vy),
        Series::new("vz", vz),
    ])?;

    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).has_header(true).finish(&mut df)?;
    Ok(())
}

/// Writes transformed segments back in the flat `team,segment,x,y` layout.
fn write_segments(path: &Path, segments: &[stadium::StadiumSegment]) -> Result<()> {
    let total: usize = segments.iter().map(|s| s.points.len()).sum();
    let mut team = Vec::with_capacity(total);
    let mut segment = Vec::with_capacity(total);
    let mut x = Vec::with_capacity(total);
    let mut y = Vec::with_capacity(total);

    for s in segments {
        for point in &s.points {
            team.push(s.team.clone());
            segment.push(s.name.clone());
            x.push(point[0]);
            y.push(point[1]);
        }
    }

    let mut df = DataFrame::new(vec![
        Series::new("team", team),
        Series::new("segment", segment),
        Series::new("x", x),
        Series::new("y", y),
    ])?;

    let mut file = File::create(path)?;
    CsvWriter::new(&mut file).has_header(true).finish(&mut df)?;
    Ok(())
}
