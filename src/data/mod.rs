//! Fight table and weight-class lookup loading.

mod error;
mod loader;
mod lookup;
mod record;

pub use error::{DataError, RowError};
pub use loader::{Dataset, parse_fights};
pub use lookup::WeightClassLookup;
pub use record::{Corner, FightRecord, Physique};

#[cfg(test)]
pub(crate) use record::tests::bout;
