use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use grib::{Grib2, GribError, MessageIndex, SeekableGrib2Reader, SubMessage};

use crate::{
    catalog::{Catalog, Product},
    error::OpenError,
    field::Field,
    lookup::GriddedDataset,
    time::TimeRange,
    variable::VariableDescriptor,
};

pub(crate) type FileReader = SeekableGrib2Reader<BufReader<File>>;

/// An opened GRIB2 file viewed as a set of named variables.
///
/// The file stays open until the dataset is closed with [`close`] or dropped.
///
/// [`close`]: Grib2Dataset::close
pub struct Grib2Dataset {
    path: PathBuf,
    grib2: Grib2<FileReader>,
    catalog: Catalog,
    variables: Vec<VariableDescriptor>,
    time_range: Option<TimeRange>,
}

impl Grib2Dataset {
    /// Opens a GRIB2 file and catalogs the variables inside.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let dataset = grib_point::Grib2Dataset::open("hrrr.t00z.wrfsfcf00.grib2")?;
    ///     for var in dataset.variables() {
    ///         println!("{var}");
    ///     }
    ///     dataset.close();
    ///     Ok(())
    /// }
    /// ```
    pub fn open<P>(path: P) -> Result<Self, OpenError>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref().to_path_buf();
        let io_error = |source| OpenError::Io {
            path: path.clone(),
            source,
        };
        let f = File::open(&path).map_err(io_error)?;
        let file_len = f.metadata().map_err(io_error)?.len();
        let f = BufReader::new(f);
        let grib2 = grib::from_reader(f)?;
        // The reader skips bytes preceding a GRIB header, so data that is not
        // GRIB at all shows up as an empty set of submessages.
        if grib2.is_empty() {
            return Err(if file_len == 0 {
                OpenError::Empty
            } else {
                OpenError::Decode(GribError::ParseError(grib::ParseError::NotGRIB))
            });
        }

        let products = grib2
            .iter()
            .filter_map(|(index, submessage)| product(index, &submessage))
            .collect::<Vec<_>>();
        let time_range = TimeRange::spanning(products.iter().filter_map(|p| p.valid_time));
        let catalog = Catalog::build(products);
        let variables = catalog
            .entries()
            .iter()
            .map(|entry| entry.descriptor.clone())
            .collect();
        tracing::debug!(
            path = %path.display(),
            submessages = grib2.len(),
            variables = catalog.entries().len(),
            "opened dataset"
        );

        Ok(Self {
            path,
            grib2,
            catalog,
            variables,
            time_range,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the number of submessages in the file.
    pub fn len(&self) -> usize {
        self.grib2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grib2.is_empty()
    }

    /// Returns the variables in the order they first appear in the file.
    pub fn variables(&self) -> &[VariableDescriptor] {
        &self.variables
    }

    /// Returns the earliest and latest valid times, or `None` if no
    /// submessage carries a usable time.
    pub fn time_range(&self) -> Option<TimeRange> {
        self.time_range
    }

    pub fn find_field(&self, name: &str) -> Option<Field<'_>> {
        let pos = self.catalog.position(name)?;
        Some(Field::new(self, &self.catalog.entries()[pos]))
    }

    /// Runs `f` on the submessage at `index`, or returns `None` if there is
    /// no such submessage.
    pub(crate) fn with_submessage<F, T>(&self, index: MessageIndex, f: F) -> Option<T>
    where
        F: FnOnce(SubMessage<'_, FileReader>) -> T,
    {
        let (_, submessage) = self.grib2.iter().find(|(i, _)| *i == index)?;
        Some(f(submessage))
    }

    /// Closes the underlying file.
    pub fn close(self) {
        tracing::debug!(path = %self.path.display(), "closing dataset");
    }
}

impl GriddedDataset for Grib2Dataset {
    type Field<'a>
        = Field<'a>
    where
        Self: 'a;

    fn find_field(&self, name: &str) -> Option<Self::Field<'_>> {
        Grib2Dataset::find_field(self, name)
    }
}

fn product<R>(index: MessageIndex, submessage: &SubMessage<'_, R>) -> Option<Product> {
    let discipline = submessage.indicator().discipline;
    let prod_def = submessage.prod_def();
    let (Some(category), Some(number)) =
        (prod_def.parameter_category(), prod_def.parameter_number())
    else {
        tracing::debug!(
            index = ?index,
            template = prod_def.prod_tmpl_num(),
            "skipping submessage with unsupported product definition"
        );
        return None;
    };
    let (surface_type, level) = prod_def
        .fixed_surfaces()
        .map(|(first, _)| (first.surface_type, first.value()))
        .unwrap_or((255, 0.0));
    let valid_time = submessage.temporal_info().forecast_time_target;
    if valid_time.is_none() {
        tracing::debug!(index = ?index, "valid time unavailable");
    }

    Some(Product {
        index,
        discipline,
        category,
        number,
        surface_type,
        level,
        valid_time,
    })
}
