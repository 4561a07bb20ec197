use std::{io, path::PathBuf};

/// Errors raised while opening a dataset.
///
/// These are fatal: no [`Grib2Dataset`](crate::Grib2Dataset) handle exists
/// when one is returned.
#[derive(Debug, thiserror::Error)]
pub enum OpenError {
    #[error("cannot open {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{0}")]
    Decode(#[from] grib::GribError),
    #[error("empty GRIB2 data")]
    Empty,
}

/// Errors raised while reading one value out of a field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReadError {
    #[error("index (t={t}, z={z}, y={y}, x={x}) is out of range for shape {shape:?}")]
    IndexOutOfRange {
        t: usize,
        z: usize,
        y: usize,
        x: usize,
        shape: [usize; 4],
    },
    #[error("no data at time index {t} and level index {z}")]
    NoSuchSlice { t: usize, z: usize },
    #[error("grid cell (y={y}, x={x}) holds a missing value")]
    Missing { y: usize, x: usize },
    #[error("{0}")]
    Decode(String),
}

/// Errors raised while building the coordinate system of a field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    #[error("expected {expected} grid points, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },
    #[error("grid point (i={i}, j={j}) is outside the grid shape ({nx}, {ny})")]
    IndexOutOfRange {
        i: usize,
        j: usize,
        nx: usize,
        ny: usize,
    },
    #[error("{0}")]
    Decode(String),
}

/// Errors raised by a point lookup.
///
/// These are recoverable: the caller treats the value as absent and moves on
/// to the next variable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LookupError {
    #[error("no such variable: {0}")]
    NoSuchVariable(String),
    #[error("coordinate system unavailable: {0}")]
    CoordinateSystem(#[from] GridError),
    #[error("point ({lat}, {lon}) is outside the grid coverage")]
    OutsideCoverage { lat: f64, lon: f64 },
    #[error("grid index (x={x}, y={y}) is outside the grid shape ({nx}, {ny})")]
    OutOfBounds {
        x: usize,
        y: usize,
        nx: usize,
        ny: usize,
    },
    #[error(transparent)]
    Read(#[from] ReadError),
}

impl From<grib::GribError> for ReadError {
    fn from(e: grib::GribError) -> Self {
        Self::Decode(e.to_string())
    }
}

impl From<grib::GribError> for GridError {
    fn from(e: grib::GribError) -> Self {
        Self::Decode(e.to_string())
    }
}
