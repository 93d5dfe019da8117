//! Course advising planner.
//!
//! Loads course records (number, title, prerequisites) from a comma-delimited
//! file into an in-memory [`Catalog`] and answers two queries: list every
//! course in course-number order, and show one course with its
//! prerequisites.
//!
//! Loading is two-pass so a prerequisite may be declared before or after the
//! course that needs it; see [`loader`]. The interactive menu around the
//! catalog lives in [`Planner`], whose options are pluggable through the
//! traits in [`command`].

mod builtin;
pub mod catalog;
pub mod command;
pub mod config;
pub mod course;
pub mod error;
pub mod io_adapters;
pub mod loader;
pub mod logging;
mod planner;
pub mod session;

pub use builtin::load_catalog;
pub use catalog::{Catalog, CourseDetails, LoadReport};
pub use config::Config;
pub use course::{Course, CourseId};
pub use error::{LoadError, LoadWarning, QueryError};

/// Just a convenient re-export of the interactive planner.
///
/// See [`Planner`] for the high-level API and examples.
pub use planner::Planner;
