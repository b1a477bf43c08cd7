/// Browser-side module that now processes the CSVs directly.
pub const REPLACEMENT_MODULE: &str = "src/services/csvProcessor.js";

/// Document describing the move away from pre-generated JSON.
pub const MIGRATION_DOC: &str = "MIGRATION.md";
