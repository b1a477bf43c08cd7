use crate::domain::constants::{MIGRATION_DOC, REPLACEMENT_MODULE};

/// Number of lines in a rendered notice.
pub const NOTICE_LINE_COUNT: usize = 4;

/// Retirement notice for the old CSV-to-JSON generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeprecationNotice {
    /// Module that replaced this script.
    pub replacement: &'static str,
    pub migration_doc: &'static str,
}

impl DeprecationNotice {
    /// The notice this binary prints.
    pub fn current() -> Self {
        Self {
            replacement: REPLACEMENT_MODULE,
            migration_doc: MIGRATION_DOC,
        }
    }

    /// Rendered lines, in print order, without trailing newlines.
    pub fn lines(&self) -> [String; NOTICE_LINE_COUNT] {
        [
            "⚠️  ADVERTENCIA: Este script está DEPRECADO".to_string(),
            format!("📝 Usa {} en su lugar", self.replacement),
            format!("📖 Ver {} para más información", self.migration_doc),
            "❌ Este archivo puede ser eliminado de forma segura".to_string(),
        ]
    }
}
