//! The automorphism search layer.
//!
//! [`driver`] owns a run end to end; [`engine`] defines the contract a
//! search backend implements; [`exhaustive`] is the in-crate reference
//! backend.

pub mod driver;
pub mod engine;
pub mod exhaustive;

pub use driver::{run_search, run_search_with_callback, SearchReport, SearchStats};
pub use engine::{EngineStats, GeneratorHook, SearchEngine, SearchFlow};
pub use exhaustive::ExhaustiveEngine;
