use crate::domain::models::DeprecationNotice;
use anyhow::Context;
use std::io::Write;

/// Writes every notice line followed by `\n`, then flushes.
///
/// I/O failures are returned as-is with context; there is no retry.
pub fn write_notice<W: Write>(out: &mut W, notice: &DeprecationNotice) -> anyhow::Result<()> {
    for line in notice.lines() {
        writeln!(out, "{line}").context("write deprecation notice")?;
    }
    out.flush().context("flush deprecation notice")?;
    tracing::debug!(replacement = notice.replacement, "deprecation notice emitted");
    Ok(())
}
