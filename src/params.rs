//! Parameter and level tables used to name variables.
//!
//! GRIB2 identifies a product by numbers only: the parameter by
//! `(discipline, category, number)` from Code Table 4.2, and the level by the
//! type of the first fixed surface from Code Table 4.5. Readers built on the
//! NetCDF data model turn those into variable names such as
//! `Temperature_height_above_ground`, and the tables here reproduce that
//! naming for the parameters found in common NCEP products.

use grib::codetables::{CodeTable4_2, CodeTable4_5, Lookup};

/// A product parameter with its human-readable attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterInfo {
    pub name: String,
    pub description: String,
    pub units: String,
}

struct KnownParameter {
    id: (u8, u8, u8),
    name: &'static str,
    description: &'static str,
    units: &'static str,
}

macro_rules! known_parameters {
    ($(($d:expr, $c:expr, $n:expr, $name:expr, $desc:expr, $units:expr),)*) => {
        const KNOWN_PARAMETERS: &[KnownParameter] = &[$(
            KnownParameter {
                id: ($d, $c, $n),
                name: $name,
                description: $desc,
                units: $units,
            },
        )*];
    };
}

known_parameters! {
    // Meteorological products, temperature
    (0, 0, 0, "Temperature", "Temperature", "K"),
    (0, 0, 2, "Potential_temperature", "Potential temperature", "K"),
    (0, 0, 4, "Maximum_temperature", "Maximum temperature", "K"),
    (0, 0, 5, "Minimum_temperature", "Minimum temperature", "K"),
    (0, 0, 6, "Dewpoint_temperature", "Dewpoint temperature", "K"),
    // moisture
    (0, 1, 0, "Specific_humidity", "Specific humidity", "kg/kg"),
    (0, 1, 1, "Relative_humidity", "Relative humidity", "%"),
    (0, 1, 3, "Precipitable_water", "Precipitable water", "kg.m-2"),
    (0, 1, 8, "Total_precipitation", "Total precipitation", "kg.m-2"),
    (0, 1, 13, "Water_equivalent_of_accumulated_snow_depth", "Water equivalent of accumulated snow depth", "kg.m-2"),
    (0, 1, 192, "Categorical_Rain", "Categorical Rain", "code"),
    (0, 1, 193, "Categorical_Freezing_Rain", "Categorical Freezing Rain", "code"),
    (0, 1, 194, "Categorical_Ice_Pellets", "Categorical Ice Pellets", "code"),
    (0, 1, 195, "Categorical_Snow", "Categorical Snow", "code"),
    // momentum
    (0, 2, 0, "Wind_direction_from_which_blowing", "Wind direction (from which blowing)", "degree true"),
    (0, 2, 1, "Wind_speed", "Wind speed", "m/s"),
    (0, 2, 2, "u-component_of_wind", "u-component of wind", "m/s"),
    (0, 2, 3, "v-component_of_wind", "v-component of wind", "m/s"),
    (0, 2, 22, "Wind_speed_gust", "Wind speed (gust)", "m/s"),
    // mass
    (0, 3, 0, "Pressure", "Pressure", "Pa"),
    (0, 3, 1, "Pressure_reduced_to_MSL", "Pressure reduced to MSL", "Pa"),
    (0, 3, 5, "Geopotential_height", "Geopotential height", "gpm"),
    (0, 3, 198, "MSLP_MAPS_System_Reduction", "MSLP (MAPS System Reduction)", "Pa"),
    // cloud
    (0, 6, 1, "Total_cloud_cover", "Total cloud cover", "%"),
    (0, 6, 3, "Low_cloud_cover", "Low cloud cover", "%"),
    (0, 6, 4, "Medium_cloud_cover", "Medium cloud cover", "%"),
    (0, 6, 5, "High_cloud_cover", "High cloud cover", "%"),
    // thermodynamic stability
    (0, 7, 6, "Convective_available_potential_energy", "Convective available potential energy", "J/kg"),
    (0, 7, 7, "Convective_inhibition", "Convective inhibition", "J/kg"),
    // forecast radar imagery
    (0, 16, 195, "Reflectivity", "Reflectivity", "dB"),
    (0, 16, 196, "Composite_reflectivity", "Composite reflectivity", "dB"),
    // physical atmospheric properties
    (0, 19, 0, "Visibility", "Visibility", "m"),
    // land surface products
    (2, 0, 0, "Land_cover_1land_0sea", "Land cover (1=land, 0=sea)", "Proportion"),
    (2, 0, 1, "Surface_roughness", "Surface roughness", "m"),
}

/// Returns the attributes of the parameter identified by `(discipline,
/// category, number)`.
///
/// Parameters outside the built-in table are named `VAR<d>-<c>-<n>` and
/// described with the text of Code Table 4.2.
pub fn parameter_info(discipline: u8, category: u8, number: u8) -> ParameterInfo {
    let known = KNOWN_PARAMETERS
        .iter()
        .find(|param| param.id == (discipline, category, number));
    match known {
        Some(param) => ParameterInfo {
            name: param.name.to_owned(),
            description: param.description.to_owned(),
            units: param.units.to_owned(),
        },
        None => ParameterInfo {
            name: format!("VAR{discipline}-{category}-{number}"),
            description: CodeTable4_2::new(discipline, category)
                .lookup(usize::from(number))
                .to_string(),
            units: String::new(),
        },
    }
}

/// Returns the short name and description of a fixed surface type
/// (Code Table 4.5).
pub fn level_info(surface_type: u8) -> (String, String) {
    let known = match surface_type {
        1 => Some(("surface", "Ground or water surface")),
        2 => Some(("cloud_base", "Cloud base level")),
        3 => Some(("cloud_tops", "Level of cloud tops")),
        4 => Some(("zeroDegC_isotherm", "Level of 0 degC isotherm")),
        7 => Some(("tropopause", "Tropopause")),
        8 => Some(("atmosphere_top", "Nominal top of the atmosphere")),
        10 => Some(("entire_atmosphere", "Entire atmosphere")),
        100 => Some(("isobaric", "Isobaric surface")),
        101 => Some(("msl", "Mean sea level")),
        102 => Some(("altitude_above_msl", "Specific altitude above mean sea level")),
        103 => Some(("height_above_ground", "Specified height level above ground")),
        104 => Some(("sigma", "Sigma level")),
        105 => Some(("hybrid", "Hybrid level")),
        106 => Some(("depth_below_surface", "Depth below land surface")),
        108 => Some(("pressure_difference_layer", "Level at specified pressure difference from ground to level")),
        200 => Some(("entire_atmosphere_single_layer", "Entire atmosphere (considered as a single layer)")),
        215 => Some(("cloud_ceiling", "Cloud ceiling")),
        220 => Some(("planetary_boundary", "Planetary boundary layer")),
        _ => None,
    };
    match known {
        Some((name, description)) => (name.to_owned(), description.to_owned()),
        None => (
            format!("level{surface_type}"),
            CodeTable4_5.lookup(usize::from(surface_type)).to_string(),
        ),
    }
}

/// Builds a variable name from a parameter name and a level name, collapsing
/// every run of characters other than ASCII alphanumerics, `-` and `_` into a
/// single `_`.
pub fn variable_name(parameter: &str, level: &str) -> String {
    let mut name = String::with_capacity(parameter.len() + level.len() + 1);
    let mut pending_separator = false;
    for c in parameter.chars().chain(std::iter::once(' ')).chain(level.chars()) {
        if c.is_ascii_alphanumeric() || c == '-' {
            if pending_separator && !name.is_empty() {
                name.push('_');
            }
            pending_separator = false;
            name.push(c);
        } else {
            pending_separator = true;
        }
    }
    name
}
