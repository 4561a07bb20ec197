#![allow(dead_code)]

use std::io::{self, Write};

use tempfile::NamedTempFile;


use grib2::{Grid, LambertGrid, LatLonGrid, Product, RefTime};

pub(crate) const REF_TIME: RefTime = (2020, 1, 10, 0);

/// 4 by 4 points from 43N to 40N and from 80W (280E) to 77W (283E), scanned
/// west to east and north to south.
pub(crate) const GRID: LatLonGrid = LatLonGrid {
    ni: 4,
    nj: 4,
    first: (43_000_000, 280_000_000),
    last: (40_000_000, 283_000_000),
    scanning_mode: 0b0000_0000,
};

/// Same points as [`GRID`], scanned south to north.
pub(crate) const GRID_SOUTH_UP: LatLonGrid = LatLonGrid {
    ni: 4,
    nj: 4,
    first: (40_000_000, 280_000_000),
    last: (43_000_000, 283_000_000),
    scanning_mode: 0b0100_0000,
};

/// 4 by 4 points 30 km apart on a Lambert conformal projection shaped like
/// the HRRR one, starting from 40.5N 78.5W (281.5E) at the south-west
/// corner.
pub(crate) const LAMBERT_GRID: LambertGrid = LambertGrid {
    nx: 4,
    ny: 4,
    first: (40_500_000, 281_500_000),
    lad: 38_500_000,
    lov: 262_500_000,
    d: 30_000_000,
    latin: (38_500_000, 38_500_000),
    scanning_mode: 0b0100_0000,
};

pub(crate) const TMP: (u8, u8, u8) = (0, 0, 0);
pub(crate) const DPT: (u8, u8, u8) = (0, 0, 6);
pub(crate) const TCDC: (u8, u8, u8) = (0, 6, 1);
pub(crate) const VIS: (u8, u8, u8) = (0, 19, 0);
pub(crate) const MSLMA: (u8, u8, u8) = (0, 3, 198);

pub(crate) const SURFACE: (u8, i32) = (1, 0);
pub(crate) const ENTIRE_ATMOSPHERE: (u8, i32) = (10, 0);
pub(crate) const MSL: (u8, i32) = (101, 0);
pub(crate) const TWO_METERS: (u8, i32) = (103, 2);

/// A product whose value at scan position `n` is `base + n`.
pub(crate) fn product(
    (discipline, category, number): (u8, u8, u8),
    surface: (u8, i32),
    forecast_hours: u32,
    base: u16,
) -> Product {
    let values = (0..GRID.num_points() as u16)
        .map(|n| Some(base + n))
        .collect();
    Product {
        discipline,
        category,
        number,
        surface,
        forecast: (1, forecast_hours),
        values,
    }
}

pub(crate) fn grib2_file<'a, G, I>(messages: I) -> Result<NamedTempFile, io::Error>
where
    G: Grid + 'a,
    I: IntoIterator<Item = (&'a G, Product)>,
{
    let mut out = NamedTempFile::new()?;
    for (grid, product) in messages {
        out.write_all(&grib2::message(REF_TIME, grid, &product))?;
    }
    out.flush()?;

    Ok(out)
}

/// The five variables of a surface weather report, valid at the reference
/// time.
pub(crate) fn surface_report_file() -> Result<NamedTempFile, io::Error> {
    grib2_file([
        (&GRID, product(TMP, TWO_METERS, 0, 250)),
        (&GRID, product(DPT, TWO_METERS, 0, 240)),
        (&GRID, product(VIS, SURFACE, 0, 20000)),
        (&GRID, product(TCDC, ENTIRE_ATMOSPHERE, 0, 50)),
        (&GRID, product(MSLMA, MSL, 0, 60000)),
    ])
}

/// Temperature at 2 m for forecast hours 0 through 2.
pub(crate) fn forecast_file() -> Result<NamedTempFile, io::Error> {
    grib2_file([
        (&GRID, product(TMP, TWO_METERS, 2, 270)),
        (&GRID, product(TMP, TWO_METERS, 0, 250)),
        (&GRID, product(TMP, TWO_METERS, 1, 260)),
    ])
}

/// Temperature at 2 m on [`LAMBERT_GRID`].
pub(crate) fn lambert_file() -> Result<NamedTempFile, io::Error> {
    grib2_file([(&LAMBERT_GRID, product(TMP, TWO_METERS, 0, 250))])
}

#[inline]
pub(crate) fn empty_file() -> Result<NamedTempFile, io::Error> {
    NamedTempFile::new()
}

pub(crate) fn too_small_file() -> Result<NamedTempFile, io::Error> {
    let mut out = NamedTempFile::new()?;
    out.write_all(b"foo")?;

    Ok(out)
}

pub(crate) fn non_grib_file() -> Result<NamedTempFile, io::Error> {
    let mut out = NamedTempFile::new()?;
    out.write_all(b"foo foo foo foo foo foo foo foo ")?;

    Ok(out)
}

pub(crate) fn bare_magic_file() -> Result<NamedTempFile, io::Error> {
    let mut out = NamedTempFile::new()?;
    out.write_all(b"GRIB")?;

    Ok(out)
}
