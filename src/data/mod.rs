pub mod csv_source;
pub mod number;
pub mod point;
pub mod store;

pub use csv_source::{load_series, parse_reader, rows_to_series, ParsedCsv, RawCsvRow};
pub use point::{Point, Series, Value};
pub use store::DataStore;
