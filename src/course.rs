use std::fmt;

/// Normalized course number, the natural key of the catalog.
///
/// Course numbers are compared case-insensitively by storing them trimmed and
/// upper-cased. Ordering is plain byte order of that normalized string, so
/// `CSCI100 < CSCI101 < MATH201`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CourseId(String);

impl CourseId {
    /// Normalize a raw course number.
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_uppercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single course record as stored in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    /// Prerequisite course numbers in file order.
    pub prerequisites: Vec<CourseId>,
}

impl Course {
    pub fn new(id: CourseId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            prerequisites: Vec::new(),
        }
    }
}

impl fmt::Display for Course {
    /// Renders the listing form, `CSCI100, Introduction to Computer Science`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.id, self.title)
    }
}
