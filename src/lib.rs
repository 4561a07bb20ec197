mod catalog;
pub mod cookbook;
mod coords;
mod dataset;
mod error;
mod field;
mod lookup;
pub mod params;
mod time;
mod variable;

pub use crate::{coords::*, dataset::*, error::*, field::*, lookup::*, time::*, variable::*};
