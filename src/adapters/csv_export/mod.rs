//! Tabular sink (CSV)

pub mod exporter;

pub use exporter::CsvExporter;
