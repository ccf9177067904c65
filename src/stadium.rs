//! Stadium reference geometry.
//!
//! Stadium outlines ship as a flat CSV with one row per vertex, columns
//! `team, segment, x, y`; row order defines each polyline. The loader
//! groups rows into [`StadiumSegment`]s and the segments pass through
//! the same [`transform`](crate::transform) as the trajectories before
//! rendering. The geometry is read-only reference data; nothing here
//! mutates it.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::transform::{transform_points, TransformConfig};

/// One named polyline of stadium geometry (a wall, a foul line, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StadiumSegment {
    /// Team whose park this segment belongs to.
    pub team: String,
    /// Segment name, e.g. "outfield_outer".
    pub name: String,
    /// Vertices in drawing order.
    pub points: Vec<[f64; 2]>,
}

impl StadiumSegment {
    /// Returns a copy with every vertex mapped into the shared frame.
    pub fn transformed(&self, config: &TransformConfig) -> Result<Self> {
        Ok(Self {
            team: self.team.clone(),
            name: self.name.clone(),
            points: transform_points(&self.points, config)?,
        })
    }
}

/// Loads stadium segments from a CSV file.
pub fn load_segments(path: &Path) -> Result<Vec<StadiumSegment>> {
    let file = File::open(path)
        .map_err(|e| Error::StadiumData(format!("{}: {e}", path.display())))?;
    let df = CsvReader::new(file).has_header(true).finish()?;
    segments_from_frame(&df)
}

/// Groups a `team, segment, x, y` data frame into segments.
///
/// Rows join the segment with the same `(team, segment)` key; segments
/// appear in order of first appearance and keep row order within.
pub fn segments_from_frame(df: &DataFrame) -> Result<Vec<StadiumSegment>> {
    let teams = df.column("team")?.utf8()?.clone();
    let names = df.column("segment")?.utf8()?.clone();
    let xs = df.column("x")?.cast(&DataType::Float64)?;
    let ys = df.column("y")?.cast(&DataType::Float64)?;
    let xs = xs.f64()?;
    let ys = ys.f64()?;

    let mut segments: Vec<StadiumSegment> = Vec::new();
    for row in 0..df.height() {
        let (team, name, x, y) = match (
            teams.get(row),
            names.get(row),
            xs.get(row),
            ys.get(row),
        ) {
            (Some(team), Some(name), Some(x), Some(y)) => (team, name, x, y),
            _ => {
                return Err(Error::StadiumData(format!(
                    "null value in stadium row {row}"
                )))
            }
        };

        match segments
            .iter_mut()
            .find(|s| s.team == team && s.name == name)
        {
            Some(segment) => segment.points.push([x, y]),
            None => segments.push(StadiumSegment {
                team: team.to_string(),
                name: name.to_string(),
                points: vec![[x, y]],
            }),
        }
    }

    Ok(segments)
}

/// Segments belonging to one team's park.
pub fn for_team<'a>(segments: &'a [StadiumSegment], team: &str) -> Vec<&'a StadiumSegment> {
    segments.iter().filter(|s| s.team == team).collect()
}
