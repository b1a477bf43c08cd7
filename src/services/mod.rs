//! Service layer containing side-effect helpers.
//!
//! ## Service map
//! - `output.rs` — writes a rendered notice to a byte sink.
//! - `logging.rs` — stderr tracing subscriber setup.
//!
//! ## Conventions
//! - Side effects should be explicit and localized.
//! - Take the sink as a parameter; only `main` touches the real stdout.

pub mod logging;
pub mod output;
