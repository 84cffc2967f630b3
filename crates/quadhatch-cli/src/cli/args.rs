//! Command line parsing.
//!
//! Flags are walked by hand, one `match` arm per flag, so every failure
//! gets its own message instead of a generic "bad arguments".

use std::path::PathBuf;

use thiserror::Error;

use quadhatch::{Point, Rectangle};

use super::job::{HatchJob, JobError};

pub const POINTS_FLAG: &str = "--points";
pub const ANGLE_FLAG: &str = "--angle";
pub const STEP_FLAG: &str = "--step";
pub const SVG_FLAG: &str = "--svg";
pub const PNG_FLAG: &str = "--png";
pub const JSON_FLAG: &str = "--json";
pub const CROSS_FLAG: &str = "--cross";
pub const JOB_FLAG: &str = "--job";

pub const USAGE: &str = "\
Usage: quadhatch --points x1 y1 x2 y2 x3 y3 x4 y4 --angle <degrees> --step <distance> [options]

Generates parallel hatch lines clipped to a convex quadrilateral.
Corners must be listed in order (clockwise or counter-clockwise).

Required:
  --points x1 y1 .. x4 y4   Quadrilateral corners (8 numbers)
  --angle <degrees>         Hatch angle
  --step <distance>         Distance between hatch lines (> 0)

Options:
  --svg <path>              Write contour and hatch as SVG (400x400)
  --png <path>              Write a PNG preview of the same drawing
  --json                    Print segments as JSON instead of text lines
  --cross                   Add a second hatch family at angle + 90
  --job <file.yaml>         Read points/angle/step/svg from a YAML job file
  -h, --help                Show this help

Logging goes to stderr; set RUST_LOG=debug for details.";

/// Everything a run needs, fully validated.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub rect: Rectangle,
    pub angle: f64,
    pub step: f64,
    pub svg: Option<PathBuf>,
    pub png: Option<PathBuf>,
    pub json: bool,
    pub cross: bool,
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Config),
    Help,
}

/// Argument errors, each with its own user-facing message.
#[derive(Debug, Error)]
pub enum ArgsError {
    #[error("{0} argument given more than once")]
    Duplicate(&'static str),
    #[error("Expected {expected} after {flag}")]
    MissingValue {
        flag: &'static str,
        expected: &'static str,
    },
    #[error("Invalid number '{value}' for {flag}")]
    InvalidNumber { flag: &'static str, value: String },
    #[error("--step must be greater than zero, got {0}")]
    NonPositiveStep(f64),
    #[error("Unexpected argument: {0}")]
    Unexpected(String),
    #[error("Required argument missing: {0}")]
    Missing(&'static str),
    #[error(transparent)]
    Job(#[from] JobError),
}

/// Raw values as they come off the command line, before merging and checks.
#[derive(Debug, Default)]
struct Flags {
    points: Option<[Point; 4]>,
    angle: Option<f64>,
    step: Option<f64>,
    svg: Option<PathBuf>,
    png: Option<PathBuf>,
    job: Option<PathBuf>,
    json: bool,
    cross: bool,
}

/// Parse arguments (without the program name).
pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Command, ArgsError> {
    let mut flags = Flags::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_ref() {
            "-h" | "--help" => return Ok(Command::Help),
            POINTS_FLAG => {
                ensure_unset(&flags.points, POINTS_FLAG)?;
                let values = values_after(args, i, 8, POINTS_FLAG, "<number> x 8")?;
                let mut points = [Point::new(0.0, 0.0); 4];
                for (corner, pair) in points.iter_mut().zip(values.chunks(2)) {
                    *corner = Point::new(
                        parse_number(POINTS_FLAG, pair[0].as_ref())?,
                        parse_number(POINTS_FLAG, pair[1].as_ref())?,
                    );
                }
                flags.points = Some(points);
                i += 8;
            }
            ANGLE_FLAG => {
                ensure_unset(&flags.angle, ANGLE_FLAG)?;
                let value = values_after(args, i, 1, ANGLE_FLAG, "<degrees>")?;
                flags.angle = Some(parse_number(ANGLE_FLAG, value[0].as_ref())?);
                i += 1;
            }
            STEP_FLAG => {
                ensure_unset(&flags.step, STEP_FLAG)?;
                let value = values_after(args, i, 1, STEP_FLAG, "<distance>")?;
                flags.step = Some(parse_number(STEP_FLAG, value[0].as_ref())?);
                i += 1;
            }
            SVG_FLAG => {
                ensure_unset(&flags.svg, SVG_FLAG)?;
                let value = values_after(args, i, 1, SVG_FLAG, "<path>")?;
                flags.svg = Some(PathBuf::from(value[0].as_ref()));
                i += 1;
            }
            PNG_FLAG => {
                ensure_unset(&flags.png, PNG_FLAG)?;
                let value = values_after(args, i, 1, PNG_FLAG, "<path>")?;
                flags.png = Some(PathBuf::from(value[0].as_ref()));
                i += 1;
            }
            JOB_FLAG => {
                ensure_unset(&flags.job, JOB_FLAG)?;
                let value = values_after(args, i, 1, JOB_FLAG, "<file.yaml>")?;
                flags.job = Some(PathBuf::from(value[0].as_ref()));
                i += 1;
            }
            JSON_FLAG => {
                if flags.json {
                    return Err(ArgsError::Duplicate(JSON_FLAG));
                }
                flags.json = true;
            }
            CROSS_FLAG => {
                if flags.cross {
                    return Err(ArgsError::Duplicate(CROSS_FLAG));
                }
                flags.cross = true;
            }
            unknown => return Err(ArgsError::Unexpected(unknown.to_string())),
        }
        i += 1;
    }

    if let Some(path) = flags.job.take() {
        let job = HatchJob::load(&path)?;
        merge_job(&mut flags, job)?;
    }

    into_config(flags).map(Command::Run)
}

/// Fill unset flags from a job file. A value set in both places is a duplicate.
fn merge_job(flags: &mut Flags, job: HatchJob) -> Result<(), ArgsError> {
    if let Some(points) = job.points {
        ensure_unset(&flags.points, POINTS_FLAG)?;
        for value in points.iter().flatten() {
            check_finite(POINTS_FLAG, *value)?;
        }
        flags.points = Some(points.map(|[x, y]| Point::new(x, y)));
    }
    if let Some(angle) = job.angle {
        ensure_unset(&flags.angle, ANGLE_FLAG)?;
        flags.angle = Some(check_finite(ANGLE_FLAG, angle)?);
    }
    if let Some(step) = job.step {
        ensure_unset(&flags.step, STEP_FLAG)?;
        flags.step = Some(check_finite(STEP_FLAG, step)?);
    }
    if let Some(svg) = job.svg {
        ensure_unset(&flags.svg, SVG_FLAG)?;
        flags.svg = Some(svg);
    }
    Ok(())
}

fn into_config(flags: Flags) -> Result<Config, ArgsError> {
    let points = flags.points.ok_or(ArgsError::Missing(POINTS_FLAG))?;
    let angle = flags.angle.ok_or(ArgsError::Missing(ANGLE_FLAG))?;
    let step = flags.step.ok_or(ArgsError::Missing(STEP_FLAG))?;

    // A non-positive step would sweep forever.
    if step <= 0.0 {
        return Err(ArgsError::NonPositiveStep(step));
    }

    Ok(Config {
        rect: Rectangle::new(points),
        angle,
        step,
        svg: flags.svg,
        png: flags.png,
        json: flags.json,
        cross: flags.cross,
    })
}

fn ensure_unset<T>(slot: &Option<T>, flag: &'static str) -> Result<(), ArgsError> {
    match slot {
        Some(_) => Err(ArgsError::Duplicate(flag)),
        None => Ok(()),
    }
}

/// The `count` values following the flag at `index`.
fn values_after<'a, S: AsRef<str>>(
    args: &'a [S],
    index: usize,
    count: usize,
    flag: &'static str,
    expected: &'static str,
) -> Result<&'a [S], ArgsError> {
    args.get(index + 1..index + 1 + count)
        .ok_or(ArgsError::MissingValue { flag, expected })
}

fn parse_number(flag: &'static str, value: &str) -> Result<f64, ArgsError> {
    let invalid = || ArgsError::InvalidNumber { flag, value: value.to_string() };
    let number: f64 = value.parse().map_err(|_| invalid())?;
    if number.is_finite() { Ok(number) } else { Err(invalid()) }
}

fn check_finite(flag: &'static str, value: f64) -> Result<f64, ArgsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ArgsError::InvalidNumber { flag, value: value.to_string() })
    }
}

// ============================================================================
// TESTS
// ============================================================================
