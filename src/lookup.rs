//! Point lookups on gridded datasets.
//!
//! A lookup turns a latitude/longitude into grid indices with the field's
//! [`CoordinateSystem`] and reads the value at the first time and the first
//! level:
//!
//! ```no_run
//! use grib_point::{Grib2Dataset, grid_value};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Grib2Dataset::open("hrrr.t00z.wrfsfcf00.grib2")?;
//!     let temperature = grid_value(&dataset, 40.85, -77.85, "Temperature_height_above_ground");
//!     match temperature {
//!         Some(value) => println!("{value:5.2}"),
//!         None => println!("not available"),
//!     }
//!     dataset.close();
//!     Ok(())
//! }
//! ```

use crate::{
    coords::CoordinateSystem,
    error::{GridError, LookupError, ReadError},
};

/// A field addressable by `(time, level, y, x)`.
pub trait GriddedField {
    /// Returns the lengths of the time, level, y and x axes, in this order.
    fn shape(&self) -> [usize; 4];

    fn coordinate_system(&self) -> Result<CoordinateSystem, GridError>;

    /// Reads the value at time index `t`, level index `z`, row `y` and
    /// column `x`.
    fn read_slice(&self, t: usize, z: usize, y: usize, x: usize) -> Result<f64, ReadError>;
}

/// A collection of named fields.
pub trait GriddedDataset {
    type Field<'a>: GriddedField
    where
        Self: 'a;

    fn find_field(&self, name: &str) -> Option<Self::Field<'_>>;
}

/// Returns the value of variable `name` at the grid point nearest to
/// (`lat`, `lon`), at the first time and the first level.
pub fn try_grid_value<D>(dataset: &D, lat: f64, lon: f64, name: &str) -> Result<f64, LookupError>
where
    D: GriddedDataset + ?Sized,
{
    let field = dataset
        .find_field(name)
        .ok_or_else(|| LookupError::NoSuchVariable(name.to_owned()))?;
    let coords = field.coordinate_system()?;
    let (x, y) = coords
        .lat_lon_to_xy(lat, lon)
        .ok_or(LookupError::OutsideCoverage { lat, lon })?;

    let [_, _, ny, nx] = field.shape();
    if x >= nx || y >= ny {
        return Err(LookupError::OutOfBounds { x, y, nx, ny });
    }

    // the conversion yields (x, y) while reads take (t, z, y, x)
    let value = field.read_slice(0, 0, y, x)?;
    Ok(value)
}

/// Same as [`try_grid_value`], reporting failures as a warning and returning
/// `None` in their place.
pub fn grid_value<D>(dataset: &D, lat: f64, lon: f64, name: &str) -> Option<f64>
where
    D: GriddedDataset + ?Sized,
{
    match try_grid_value(dataset, lat, lon, name) {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::warn!(variable = name, lat, lon, "lookup failed: {e}");
            None
        }
    }
}
