//! Library crate root re-exporting the checklist, checks, and CLI modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod checklist;
pub mod checks;
pub mod cli;
