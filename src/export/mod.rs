//! Output serialization for survey records.

mod csv;

pub use csv::write_csv;
