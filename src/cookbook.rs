//! A cookbook of examples for point extraction from GRIB2 data.
//!
//! # Table of contents
//!
//! 1. [Comparison of point extraction operations][cmp]
//!     * [Listing variables inside][cmp-listing]
//!     * [Finding the span of valid times][cmp-time]
//!     * [Extracting the value nearest to a location][cmp-point]
//!
//! [cmp]: #comparison-of-point-extraction-operations
//! [cmp-listing]: #listing-variables-inside
//! [cmp-time]: #finding-the-span-of-valid-times
//! [cmp-point]: #extracting-the-value-nearest-to-a-location
//!
//! # Comparison of point extraction operations
//!
//! This section provides example code of the same operations using some GRIB
//! processing tools and this crate.
//!
//! ## Listing variables inside
//!
//! wgrib2 (one line per submessage rather than per variable):
//!
//! ```shell
//! $ wgrib2 -s datafile.grib2
//! ```
//!
//! grib-point:
//!
//! ```rust,no_run
//! use grib_point::Grib2Dataset;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Grib2Dataset::open("datafile.grib2")?;
//!     for var in dataset.variables() {
//!         println!("{} {} [{}]", var.name, var.description, var.units);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! gribpoint:
//!
//! ```shell
//! $ gribpoint list datafile.grib2
//! ```
//!
//! ## Finding the span of valid times
//!
//! GRIB tools from ecCodes:
//!
//! ```shell
//! $ grib_ls -p validityDate,validityTime datafile.grib2
//! ```
//!
//! grib-point:
//!
//! ```rust,no_run
//! use grib_point::{Grib2Dataset, format_time};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Grib2Dataset::open("datafile.grib2")?;
//!     if let Some(range) = dataset.time_range() {
//!         println!("from {}", format_time(&range.start));
//!         println!("to   {}", format_time(&range.end));
//!     }
//!     Ok(())
//! }
//! ```
//!
//! gribpoint:
//!
//! ```shell
//! $ gribpoint info datafile.grib2
//! ```
//!
//! ## Extracting the value nearest to a location
//!
//! GRIB tools from ecCodes:
//!
//! ```shell
//! $ grib_ls -l 40.85,-77.85,1 -p shortName,level datafile.grib2
//! ```
//!
//! wgrib2:
//!
//! ```shell
//! $ wgrib2 datafile.grib2 -match ':TMP:2 m above ground:' -lon 282.15 40.85
//! ```
//!
//! grib-point:
//!
//! ```rust,no_run
//! use grib_point::{Grib2Dataset, LookupError, try_grid_value};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Grib2Dataset::open("datafile.grib2")?;
//!     match try_grid_value(&dataset, 40.85, -77.85, "Temperature_height_above_ground") {
//!         Ok(value) => println!("{value}"),
//!         Err(LookupError::OutsideCoverage { .. }) => println!("not covered"),
//!         Err(e) => return Err(e.into()),
//!     }
//!     dataset.close();
//!     Ok(())
//! }
//! ```
//!
//! Fields can also be read directly by `(time, level, y, x)` indices:
//!
//! ```rust,no_run
//! use grib_point::Grib2Dataset;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Grib2Dataset::open("datafile.grib2")?;
//!     let field = dataset
//!         .find_field("Temperature_height_above_ground")
//!         .ok_or("no such variable")?;
//!     let coords = field.coordinate_system()?;
//!     let (x, y) = coords.lat_lon_to_xy(40.85, -77.85).ok_or("outside")?;
//!     for t in 0..field.shape()[0] {
//!         println!("{:?} {}", field.times()[t], field.read_slice(t, 0, y, x)?);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! gribpoint:
//!
//! ```shell
//! $ gribpoint point --lat 40.85 --lon -77.85 -v Temperature_height_above_ground datafile.grib2
//! ```
