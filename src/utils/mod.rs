// Utils module - ingestion, normalization and reporting glue

pub mod chart;
pub mod loader;
pub mod prepare;
pub mod report;
