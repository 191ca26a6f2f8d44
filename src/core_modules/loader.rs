// THEORY:
// The `loader` reads a recorded trajectory from its plain-text table. Each row is
// `x y mode`, separated by any whitespace. Blank lines and `#` comments are
// ignored, matching the usual conventions of numeric text tables. Anything else
// that does not fit the three-column shape is a hard error carrying the line
// number, because a silently skipped row would shift every later segment.

use crate::core_modules::point::point::{Trajectory, TrajectoryPoint};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

const COLUMNS: usize = 3;
const COMMENT_MARKER: char = '#';

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot open trajectory file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error("malformed row at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Opens and parses the trajectory table at `path`.
pub fn load_trajectory(path: impl AsRef<Path>) -> Result<Trajectory, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let trajectory = parse_trajectory(BufReader::new(file))?;
    log::debug!("loaded {} samples from {}", trajectory.len(), path.display());
    Ok(trajectory)
}

/// Parses a whitespace-delimited `x y mode` table from any buffered reader.
pub fn parse_trajectory<R: BufRead>(reader: R) -> Result<Trajectory, LoadError> {
    let mut points = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let line = line.map_err(|source| LoadError::Read {
            line: line_number,
            source,
        })?;
        if let Some(point) = parse_row(&line, line_number)? {
            points.push(point);
        }
    }

    Ok(Trajectory::new(points))
}

/// Returns `None` for rows that carry no data (blank or comment-only).
fn parse_row(line: &str, line_number: usize) -> Result<Option<TrajectoryPoint>, LoadError> {
    let data = match line.find(COMMENT_MARKER) {
        Some(position) => &line[..position],
        None => line,
    };
    let fields: Vec<&str> = data.split_whitespace().collect();
    if fields.is_empty() {
        return Ok(None);
    }
    if fields.len() != COLUMNS {
        return Err(LoadError::Malformed {
            line: line_number,
            reason: format!("expected {COLUMNS} columns, found {}", fields.len()),
        });
    }

    let x = parse_coordinate(fields[0], "x", line_number)?;
    let y = parse_coordinate(fields[1], "y", line_number)?;
    Ok(Some(TrajectoryPoint::new(x, y, fields[2])))
}

fn parse_coordinate(token: &str, column: &str, line_number: usize) -> Result<f64, LoadError> {
    token.parse::<f64>().map_err(|err| LoadError::Malformed {
        line: line_number,
        reason: format!("column `{column}` value `{token}` is not a number ({err})"),
    })
}
