//! Two-pass parser for the comma-delimited course source.
//!
//! Line format: `ID, Title[, Prereq]*`. A prerequisite may name a course that
//! is declared further down the file, so the source is scanned twice:
//!
//! 1. [`harvest_identifiers`] collects the first field of every non-blank line.
//! 2. [`build_courses`] constructs records and keeps only prerequisites found
//!    by the first pass.
//!
//! Problems on a single line never abort parsing; they become
//! [`LoadWarning`]s and the line or field is dropped.

use crate::course::{Course, CourseId};
use crate::error::LoadWarning;
use std::collections::{BTreeMap, HashMap, HashSet};

pub const DELIMITER: char = ',';

/// Result of parsing a whole source.
#[derive(Debug, Default)]
pub struct Parsed {
    pub courses: BTreeMap<CourseId, Course>,
    pub warnings: Vec<LoadWarning>,
    /// Line each stored record was last declared on.
    declared_on: HashMap<CourseId, usize>,
}

/// Parse a full catalog source.
pub fn parse(source: &str) -> Parsed {
    let known = harvest_identifiers(source);
    let mut parsed = build_courses(source, &known);
    prune_unstored_prerequisites(&mut parsed);
    parsed
}

/// Non-blank lines with their 1-based line numbers.
fn data_lines(source: &str) -> impl Iterator<Item = (usize, &str)> {
    source
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

/// First pass: every identifier declared anywhere in the source.
///
/// Titles and prerequisite fields are not validated here.
pub fn harvest_identifiers(source: &str) -> HashSet<CourseId> {
    data_lines(source)
        .filter_map(|(_, line)| line.split(DELIMITER).next())
        .filter_map(CourseId::parse)
        .collect()
}

/// Second pass: build records, resolving prerequisites against `known`.
///
/// A later line with the same identifier replaces the earlier record.
pub fn build_courses(source: &str, known: &HashSet<CourseId>) -> Parsed {
    let mut parsed = Parsed::default();

    for (line_no, line) in data_lines(source) {
        let fields: Vec<&str> = line.split(DELIMITER).map(str::trim).collect();

        if fields.len() < 2 {
            tracing::warn!(line = line_no, "skipping line with insufficient data");
            parsed
                .warnings
                .push(LoadWarning::InsufficientData { line: line_no });
            continue;
        }

        let title = fields[1];
        let id = match CourseId::parse(fields[0]) {
            Some(id) if !title.is_empty() => id,
            _ => {
                tracing::warn!(line = line_no, "skipping line with empty course number or title");
                parsed.warnings.push(LoadWarning::EmptyField { line: line_no });
                continue;
            }
        };

        let mut course = Course::new(id, title);
        for raw in &fields[2..] {
            let Some(prerequisite) = CourseId::parse(raw) else {
                continue;
            };
            if known.contains(&prerequisite) {
                course.prerequisites.push(prerequisite);
            } else {
                tracing::warn!(
                    line = line_no,
                    course = %course.id,
                    prerequisite = %prerequisite,
                    "dropping unresolved prerequisite"
                );
                parsed.warnings.push(LoadWarning::UnresolvedPrerequisite {
                    line: line_no,
                    course: course.id.clone(),
                    prerequisite,
                });
            }
        }

        parsed.declared_on.insert(course.id.clone(), line_no);
        if let Some(previous) = parsed.courses.insert(course.id.clone(), course) {
            tracing::debug!(course = %previous.id, line = line_no, "duplicate course number, replacing earlier record");
        }
    }

    parsed
}

/// Drop prerequisites whose target was declared but never stored.
///
/// The first pass also harvests identifiers from lines that the second pass
/// rejects, so a prerequisite can pass the first check and still dangle.
fn prune_unstored_prerequisites(parsed: &mut Parsed) {
    let stored: HashSet<CourseId> = parsed.courses.keys().cloned().collect();
    let mut dangling = Vec::new();

    for course in parsed.courses.values_mut() {
        let id = &course.id;
        course.prerequisites.retain(|prerequisite| {
            let keep = stored.contains(prerequisite);
            if !keep {
                dangling.push((id.clone(), prerequisite.clone()));
            }
            keep
        });
    }

    for (course, prerequisite) in dangling {
        let line = parsed.declared_on.get(&course).copied().unwrap_or_default();
        tracing::warn!(%course, %prerequisite, "dropping prerequisite whose course was rejected");
        parsed.warnings.push(LoadWarning::UnresolvedPrerequisite {
            line,
            course,
            prerequisite,
        });
    }
}
