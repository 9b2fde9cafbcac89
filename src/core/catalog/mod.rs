//! Course catalog input

pub mod csv_parser;

pub use csv_parser::{parse_catalog_csv, parse_catalog_str, Catalog, CatalogRow};
