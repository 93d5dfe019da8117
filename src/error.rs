//! Error and warning types produced by the catalog.
//!
//! Only [`LoadError`] fails a load as a whole. [`LoadWarning`]s are collected
//! while parsing and reported alongside the result; the offending line or
//! prerequisite is dropped and parsing continues.

use crate::course::CourseId;
use std::path::PathBuf;
use thiserror::Error;

/// A load that could not produce a catalog.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The source file could not be opened or read. The catalog is untouched.
    #[error("Could not open file {}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Every line was blank or rejected. The catalog has been cleared.
    #[error("No valid courses were loaded from the file.")]
    NoValidCourses {
        path: PathBuf,
        warnings: Vec<LoadWarning>,
    },
}

impl LoadError {
    /// Warnings collected before the load failed, if parsing got that far.
    pub fn warnings(&self) -> &[LoadWarning] {
        match self {
            LoadError::Unreadable { .. } => &[],
            LoadError::NoValidCourses { warnings, .. } => warnings,
        }
    }
}

/// A recoverable problem found while parsing a catalog source.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadWarning {
    #[error("Line {line} has insufficient data, skipping.")]
    InsufficientData { line: usize },

    #[error("Line {line} has empty course number or title, skipping.")]
    EmptyField { line: usize },

    #[error("Prerequisite {prerequisite} for course {course} not found in course list.")]
    UnresolvedPrerequisite {
        line: usize,
        course: CourseId,
        prerequisite: CourseId,
    },
}

/// Soft failures of the read-only catalog queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("No courses loaded. Please load data first using option 1.")]
    EmptyCatalog,

    #[error("Course {0} not found.")]
    NotFound(String),
}

pub type LoadResult<T> = std::result::Result<T, LoadError>;
