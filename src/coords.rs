use crate::error::GridError;

const EARTH_RADIUS_M: f64 = 6_371_229.0;
const AXIS_TOLERANCE_DEG: f64 = 1e-3;

/// Mapping between geographic coordinates and integer grid indices of one
/// field.
///
/// Grid indices are `(x, y)` where `x` is the column (the `i` direction of
/// GRIB2, usually west to east) and `y` is the row (`j`).
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateSystem {
    nx: usize,
    ny: usize,
    kind: Kind,
}

#[derive(Debug, Clone, PartialEq)]
enum Kind {
    /// Latitudes depend only on `y` and longitudes only on `x`.
    Regular { lats: Vec<f64>, lons: Vec<f64> },
    /// Two-dimensional coordinates stored row-major (`y * nx + x`).
    Curvilinear { lats: Vec<f64>, lons: Vec<f64> },
}

impl CoordinateSystem {
    /// Creates a coordinate system from 1-D latitude (per row) and longitude
    /// (per column) axes.
    pub fn regular(lats: Vec<f64>, lons: Vec<f64>) -> Self {
        Self {
            nx: lons.len(),
            ny: lats.len(),
            kind: Kind::Regular { lats, lons },
        }
    }

    /// Creates a coordinate system from 2-D coordinates stored row-major.
    pub fn curvilinear(
        nx: usize,
        ny: usize,
        lats: Vec<f64>,
        lons: Vec<f64>,
    ) -> Result<Self, GridError> {
        let expected = nx * ny;
        for actual in [lats.len(), lons.len()] {
            if actual != expected {
                return Err(GridError::ShapeMismatch { expected, actual });
            }
        }
        Ok(Self {
            nx,
            ny,
            kind: Kind::Curvilinear { lats, lons },
        })
    }

    /// Creates a coordinate system from grid points given as `((i, j), (lat,
    /// lon))` in any order, choosing the regular form when the coordinates
    /// allow it.
    pub fn from_grid_points<I>(nx: usize, ny: usize, points: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = ((usize, usize), (f32, f32))>,
    {
        let expected = nx * ny;
        let mut lats = vec![f64::NAN; expected];
        let mut lons = vec![f64::NAN; expected];
        let mut count = 0;
        for ((i, j), (lat, lon)) in points {
            if i >= nx || j >= ny {
                return Err(GridError::IndexOutOfRange { i, j, nx, ny });
            }
            lats[j * nx + i] = f64::from(lat);
            lons[j * nx + i] = f64::from(lon);
            count += 1;
        }
        if count != expected {
            return Err(GridError::ShapeMismatch {
                expected,
                actual: count,
            });
        }

        if is_regular(nx, ny, &lats, &lons) {
            tracing::debug!(nx, ny, "using regular lat/lon axes");
            let lat_axis = (0..ny).map(|y| lats[y * nx]).collect();
            let lon_axis = lons[..nx].to_vec();
            Ok(Self::regular(lat_axis, lon_axis))
        } else {
            tracing::debug!(nx, ny, "using curvilinear coordinates");
            Self::curvilinear(nx, ny, lats, lons)
        }
    }

    /// Returns `(nx, ny)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.nx, self.ny)
    }

    pub fn is_regular(&self) -> bool {
        matches!(self.kind, Kind::Regular { .. })
    }

    /// Returns the latitude and longitude of grid point `(x, y)`.
    pub fn lat_lon(&self, x: usize, y: usize) -> Option<(f64, f64)> {
        if x >= self.nx || y >= self.ny {
            return None;
        }
        match &self.kind {
            Kind::Regular { lats, lons } => Some((lats[y], lons[x])),
            Kind::Curvilinear { lats, lons } => {
                let k = y * self.nx + x;
                Some((lats[k], lons[k]))
            }
        }
    }

    /// Finds the grid point `(x, y)` nearest to the given location.
    ///
    /// Returns `None` when the location lies outside the area covered by the
    /// grid.
    pub fn lat_lon_to_xy(&self, lat: f64, lon: f64) -> Option<(usize, usize)> {
        if !lat.is_finite() || !lon.is_finite() {
            return None;
        }
        match &self.kind {
            Kind::Regular { lats, lons } => {
                let y = lat_index(lats, lat)?;
                let x = lon_index(lons, lon)?;
                Some((x, y))
            }
            Kind::Curvilinear { lats, lons } => self.nearest(lats, lons, lat, lon),
        }
    }

    fn nearest(&self, lats: &[f64], lons: &[f64], lat: f64, lon: f64) -> Option<(usize, usize)> {
        let (k, distance) = lats
            .iter()
            .zip(lons)
            .map(|(&p_lat, &p_lon)| great_circle_distance(lat, lon, p_lat, p_lon))
            .enumerate()
            .filter(|(_, d)| !d.is_nan())
            .min_by(|(_, a), (_, b)| a.total_cmp(b))?;
        let (x, y) = (k % self.nx, k / self.nx);

        let reach = self
            .neighbours(x, y)
            .map(|n| great_circle_distance(lats[k], lons[k], lats[n], lons[n]))
            .filter(|d| !d.is_nan())
            .fold(0_f64, f64::max);
        if distance <= reach || distance < 1e-6 {
            Some((x, y))
        } else {
            None
        }
    }

    fn neighbours(&self, x: usize, y: usize) -> impl Iterator<Item = usize> + '_ {
        let candidates = [
            (x.checked_sub(1), Some(y)),
            (Some(x + 1), Some(y)),
            (Some(x), y.checked_sub(1)),
            (Some(x), Some(y + 1)),
        ];
        candidates.into_iter().filter_map(move |c| match c {
            (Some(x), Some(y)) if x < self.nx && y < self.ny => Some(y * self.nx + x),
            _ => None,
        })
    }
}

fn is_regular(nx: usize, ny: usize, lats: &[f64], lons: &[f64]) -> bool {
    let rows_share_lat = (0..ny).all(|y| {
        let first = lats[y * nx];
        lats[y * nx..(y + 1) * nx]
            .iter()
            .all(|lat| (lat - first).abs() < AXIS_TOLERANCE_DEG)
    });
    let columns_share_lon = (0..nx).all(|x| {
        let first = lons[x];
        (0..ny).all(|y| lon_difference(lons[y * nx + x], first).abs() < AXIS_TOLERANCE_DEG)
    });
    rows_share_lat && columns_share_lon
}

fn lat_index(axis: &[f64], lat: f64) -> Option<usize> {
    let n = axis.len();
    match n {
        0 => None,
        1 => ((axis[0] - lat).abs() < AXIS_TOLERANCE_DEG).then_some(0),
        _ => {
            let step = (axis[n - 1] - axis[0]) / (n - 1) as f64;
            let index = ((lat - axis[0]) / step).round();
            (index >= 0.0 && index <= (n - 1) as f64).then_some(index as usize)
        }
    }
}

fn lon_index(axis: &[f64], lon: f64) -> Option<usize> {
    let n = axis.len();
    match n {
        0 => None,
        1 => (lon_difference(lon, axis[0]).abs() < AXIS_TOLERANCE_DEG).then_some(0),
        _ => {
            let span: f64 = axis.windows(2).map(|w| lon_difference(w[1], w[0])).sum();
            let step = span / (n - 1) as f64;
            if step == 0.0 {
                return None;
            }
            // offset from the first column in the scanning direction, in [0, 360)
            let offset = (lon - axis[0]) * step.signum();
            let offset = offset.rem_euclid(360.0);
            let columns = offset / step.abs();
            let index = columns.round();
            let wraps = (step.abs() * n as f64 - 360.0).abs() < step.abs() / 2.0;
            if wraps {
                return Some(index as usize % n);
            }
            if index <= (n - 1) as f64 {
                return Some(index as usize);
            }
            // slightly before the first column
            let before = (offset - 360.0) / step.abs();
            (before.round() >= 0.0).then_some(0)
        }
    }
}

/// Returns `a - b` in degrees, normalized into `[-180, 180)`.
fn lon_difference(a: f64, b: f64) -> f64 {
    (a - b + 180.0).rem_euclid(360.0) - 180.0
}

fn great_circle_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let d_phi = phi2 - phi1;
    let d_lambda = lon_difference(lon2, lon1).to_radians();
    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * a.sqrt().min(1.0).asin()
}
