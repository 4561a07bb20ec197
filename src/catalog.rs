use std::collections::HashMap;

use chrono::{DateTime, Utc};
use grib::MessageIndex;

use crate::{
    params::{level_info, parameter_info, variable_name},
    variable::VariableDescriptor,
};

/// What the catalog needs to know about one submessage.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Product {
    pub(crate) index: MessageIndex,
    pub(crate) discipline: u8,
    pub(crate) category: u8,
    pub(crate) number: u8,
    pub(crate) surface_type: u8,
    pub(crate) level: f64,
    pub(crate) valid_time: Option<DateTime<Utc>>,
}

/// One variable: the submessages sharing a name, arranged on time and level
/// axes.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct VariableEntry {
    pub(crate) descriptor: VariableDescriptor,
    pub(crate) times: Vec<Option<DateTime<Utc>>>,
    pub(crate) levels: Vec<f64>,
    pub(crate) first: MessageIndex,
    slices: Vec<Option<MessageIndex>>,
}

impl VariableEntry {
    /// Returns the submessage at time index `t` and level index `z`.
    pub(crate) fn slice(&self, t: usize, z: usize) -> Option<MessageIndex> {
        if t >= self.times.len() || z >= self.levels.len() {
            return None;
        }
        self.slices[t * self.levels.len() + z]
    }
}

#[derive(Debug)]
pub(crate) struct Catalog {
    entries: Vec<VariableEntry>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    pub(crate) fn build<I>(products: I) -> Self
    where
        I: IntoIterator<Item = Product>,
    {
        let mut groups: Vec<(VariableDescriptor, Vec<Product>)> = Vec::new();
        let mut by_name = HashMap::new();

        for product in products {
            let descriptor = describe(&product);
            let pos = *by_name.entry(descriptor.name.clone()).or_insert_with(|| {
                groups.push((descriptor, Vec::new()));
                groups.len() - 1
            });
            groups[pos].1.push(product);
        }

        let entries = groups
            .into_iter()
            .map(|(descriptor, products)| arrange(descriptor, products))
            .collect();
        Self { entries, by_name }
    }

    pub(crate) fn entries(&self) -> &[VariableEntry] {
        &self.entries
    }

    pub(crate) fn position(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }
}

fn describe(product: &Product) -> VariableDescriptor {
    let param = parameter_info(product.discipline, product.category, product.number);
    let (level_name, level_description) = level_info(product.surface_type);
    VariableDescriptor {
        name: variable_name(&param.name, &level_name),
        description: format!("{} @ {}", param.description, level_description),
        units: param.units,
    }
}

fn arrange(descriptor: VariableDescriptor, products: Vec<Product>) -> VariableEntry {
    let mut times = products.iter().map(|p| p.valid_time).collect::<Vec<_>>();
    times.sort_unstable();
    times.dedup();
    let mut levels = products.iter().map(|p| p.level).collect::<Vec<_>>();
    levels.sort_unstable_by(f64::total_cmp);
    levels.dedup_by(|a, b| a.total_cmp(b).is_eq());

    let mut slices = vec![None; times.len() * levels.len()];
    for product in &products {
        let t = times.iter().position(|time| *time == product.valid_time);
        let z = levels
            .iter()
            .position(|level| level.total_cmp(&product.level).is_eq());
        if let (Some(t), Some(z)) = (t, z) {
            let slot = &mut slices[t * levels.len() + z];
            if slot.is_none() {
                *slot = Some(product.index);
            } else {
                tracing::debug!(
                    variable = %descriptor.name,
                    index = ?product.index,
                    "ignoring submessage duplicating an earlier time and level"
                );
            }
        }
    }

    // groups are created with their first product
    let first = products.first().map(|p| p.index).unwrap_or_default();
    VariableEntry {
        descriptor,
        times,
        levels,
        first,
        slices,
    }
}
