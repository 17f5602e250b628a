//! frametune - gaming performance tuning with a full undo trail.
//!
//! A catalog of OS tweaks (config values, power schemes, GPU bindings,
//! service start policies) plus the machinery to apply them, verify them,
//! and restore the exact pre-apply state.

pub mod backup;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod detect;
pub mod engine;
pub mod error;
pub mod gamepath;
pub mod output;
pub mod power;
pub mod profile;
pub mod recommend;
pub mod startup;
pub mod store;
pub mod sysroot;

pub use error::{Error, Result};
