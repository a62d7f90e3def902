//! Library crate root for the Odoo development launcher.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod branches;
pub mod cli;
pub mod config;
pub mod inspect;
pub mod launch;
pub mod runtime;
