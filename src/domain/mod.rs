//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — the deprecation notice and its rendered lines.
//! - `constants.rs` — stable literals the notice points at.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no stdout/filesystem side effects.
//!
//! ## Compatibility note
//! The rendered lines are the program's entire output contract.
//! Changing a literal here changes what every caller sees.

pub mod constants;
pub mod models;
