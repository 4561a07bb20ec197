use chrono::{DateTime, Utc};
use grib::Grib2SubmessageDecoder;

use crate::{
    catalog::VariableEntry,
    coords::CoordinateSystem,
    dataset::Grib2Dataset,
    error::{GridError, ReadError},
    lookup::GriddedField,
    variable::VariableDescriptor,
};

/// A variable of a [`Grib2Dataset`] addressable by `(time, level, y, x)`.
#[derive(Clone, Copy)]
pub struct Field<'d> {
    dataset: &'d Grib2Dataset,
    entry: &'d VariableEntry,
    grid_shape: (usize, usize),
}

impl<'d> Field<'d> {
    pub(crate) fn new(dataset: &'d Grib2Dataset, entry: &'d VariableEntry) -> Self {
        let grid_shape = dataset
            .with_submessage(entry.first, |submessage| submessage.grid_shape())
            .and_then(|shape| match shape {
                Ok(shape) => Some(shape),
                Err(e) => {
                    tracing::debug!(variable = %entry.descriptor.name, "grid shape unavailable: {e}");
                    None
                }
            })
            .unwrap_or((0, 0));
        Self {
            dataset,
            entry,
            grid_shape,
        }
    }

    pub fn name(&self) -> &'d str {
        &self.entry.descriptor.name
    }

    pub fn descriptor(&self) -> &'d VariableDescriptor {
        &self.entry.descriptor
    }

    /// Valid times along the time axis. `None` stands for a submessage whose
    /// time could not be determined.
    pub fn times(&self) -> &'d [Option<DateTime<Utc>>] {
        &self.entry.times
    }

    /// Values of the first fixed surface along the level axis.
    pub fn levels(&self) -> &'d [f64] {
        &self.entry.levels
    }

    /// Returns the lengths of the time, level, y and x axes.
    ///
    /// The y and x lengths are zero when the grid of the variable cannot be
    /// decoded.
    pub fn shape(&self) -> [usize; 4] {
        let (nx, ny) = self.grid_shape;
        [self.entry.times.len(), self.entry.levels.len(), ny, nx]
    }

    /// Builds the coordinate system from the grid of the first submessage of
    /// the variable.
    pub fn coordinate_system(&self) -> Result<CoordinateSystem, GridError> {
        self.dataset
            .with_submessage(self.entry.first, |submessage| -> Result<_, GridError> {
                let (nx, ny) = submessage.grid_shape()?;
                let points = submessage.ij()?.zip(submessage.latlons()?);
                CoordinateSystem::from_grid_points(nx, ny, points)
            })
            .unwrap_or_else(|| {
                Err(GridError::Decode(format!(
                    "submessage {}.{} not found",
                    self.entry.first.0, self.entry.first.1
                )))
            })
    }

    /// Reads the value at time index `t`, level index `z`, row `y` and column
    /// `x`.
    ///
    /// The whole submessage holding the slice is decoded on every call.
    pub fn read_slice(&self, t: usize, z: usize, y: usize, x: usize) -> Result<f64, ReadError> {
        let shape = self.shape();
        let [nt, nz, ny, nx] = shape;
        if t >= nt || z >= nz || y >= ny || x >= nx {
            return Err(ReadError::IndexOutOfRange { t, z, y, x, shape });
        }
        let index = self
            .entry
            .slice(t, z)
            .ok_or(ReadError::NoSuchSlice { t, z })?;

        let value = self
            .dataset
            .with_submessage(index, |submessage| -> Result<Option<f32>, ReadError> {
                let ij = submessage.ij()?;
                let decoder = Grib2SubmessageDecoder::from(submessage)?;
                let value = ij
                    .zip(decoder.dispatch()?)
                    .find_map(|((i, j), value)| (i == x && j == y).then_some(value));
                Ok(value)
            })
            .ok_or(ReadError::NoSuchSlice { t, z })??;

        match value {
            Some(value) if !value.is_nan() => Ok(f64::from(value)),
            _ => Err(ReadError::Missing { y, x }),
        }
    }
}

impl GriddedField for Field<'_> {
    fn shape(&self) -> [usize; 4] {
        Field::shape(self)
    }

    fn coordinate_system(&self) -> Result<CoordinateSystem, GridError> {
        Field::coordinate_system(self)
    }

    fn read_slice(&self, t: usize, z: usize, y: usize, x: usize) -> Result<f64, ReadError> {
        Field::read_slice(self, t, z, y, x)
    }
}
