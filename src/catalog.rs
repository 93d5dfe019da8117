use crate::course::{Course, CourseId};
use crate::error::{LoadError, LoadResult, LoadWarning, QueryError};
use crate::loader;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// In-memory course catalog keyed by normalized course number.
///
/// The catalog is only ever written by [`Catalog::load`], which replaces the
/// whole content. Every prerequisite of a stored course is itself stored.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    courses: BTreeMap<CourseId, Course>,
}

/// Summary of a successful load.
#[derive(Debug)]
pub struct LoadReport {
    pub path: PathBuf,
    pub courses: usize,
    pub warnings: Vec<LoadWarning>,
}

/// A course together with the display form of each prerequisite.
#[derive(Debug, PartialEq, Eq)]
pub struct CourseDetails<'a> {
    pub course: &'a Course,
    pub prerequisites: Vec<String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a catalog source from `path`, replacing the current content.
    ///
    /// If the file cannot be read the catalog is left as it was. Otherwise the
    /// old content is discarded even when no valid course is found, in which
    /// case [`LoadError::NoValidCourses`] is returned and the catalog is empty.
    pub fn load(&mut self, path: impl AsRef<Path>) -> LoadResult<LoadReport> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "loading course catalog");

        let bytes = fs::read(path).map_err(|source| {
            tracing::error!(path = %path.display(), error = %source, "can't read course file");
            LoadError::Unreadable {
                path: path.to_path_buf(),
                source,
            }
        })?;

        // Titles are free text; a stray Latin-1 byte must not reject the file.
        let parsed = loader::parse(&String::from_utf8_lossy(&bytes));
        self.courses = parsed.courses;

        if self.courses.is_empty() {
            tracing::error!(path = %path.display(), "no valid courses in file");
            return Err(LoadError::NoValidCourses {
                path: path.to_path_buf(),
                warnings: parsed.warnings,
            });
        }

        tracing::info!(
            courses = self.courses.len(),
            warnings = parsed.warnings.len(),
            "course catalog loaded"
        );
        Ok(LoadReport {
            path: path.to_path_buf(),
            courses: self.courses.len(),
            warnings: parsed.warnings,
        })
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// All courses ordered by course number.
    pub fn list(&self) -> Result<Vec<&Course>, QueryError> {
        if self.is_empty() {
            return Err(QueryError::EmptyCatalog);
        }
        Ok(self.courses.values().collect())
    }

    /// Look up a course by a raw, user-typed course number.
    ///
    /// Prerequisites are reported by the stored course's canonical number,
    /// falling back to the stored prerequisite string if it does not resolve.
    pub fn lookup(&self, raw: &str) -> Result<CourseDetails<'_>, QueryError> {
        if self.is_empty() {
            return Err(QueryError::EmptyCatalog);
        }

        let course = CourseId::parse(raw)
            .and_then(|id| self.courses.get(&id))
            .ok_or_else(|| QueryError::NotFound(raw.trim().to_uppercase()))?;

        let prerequisites = course
            .prerequisites
            .iter()
            .map(|prerequisite| match self.courses.get(prerequisite) {
                Some(found) => found.id.to_string(),
                None => prerequisite.to_string(),
            })
            .collect();

        Ok(CourseDetails {
            course,
            prerequisites,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = "\
CSCI300,Introduction to Algorithms,CSCI200,MATH201
CSCI200,Data Structures,CSCI101
CSCI101,Introduction to Programming in C,CSCI100
MATH201,Discrete Mathematics
CSCI100,Introduction to Computer Science
";

    fn write_source(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file
    }

    fn loaded(content: &str) -> Catalog {
        let file = write_source(content);
        let mut catalog = Catalog::new();
        catalog.load(file.path()).expect("load sample");
        catalog
    }

    fn ids(catalog: &Catalog) -> Vec<String> {
        catalog
            .list()
            .unwrap()
            .iter()
            .map(|c| c.id.to_string())
            .collect()
    }

    #[test]
    fn test_load_reports_count_and_warnings() {
        let file = write_source("CS101,Intro,CS999\nCS102,Next,CS101\n");
        let mut catalog = Catalog::new();
        let report = catalog.load(file.path()).unwrap();

        assert_eq!(report.courses, 2);
        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.path, file.path());
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_list_is_sorted() {
        let catalog = loaded(SAMPLE);
        let listed = ids(&catalog);

        assert_eq!(
            listed,
            vec!["CSCI100", "CSCI101", "CSCI200", "CSCI300", "MATH201"]
        );
        assert!(listed.windows(2).all(|pair| pair[0] <= pair[1]));
    }

    #[test]
    fn test_reload_is_idempotent() {
        let file = write_source(SAMPLE);
        let mut catalog = Catalog::new();

        catalog.load(file.path()).unwrap();
        let first = ids(&catalog);
        catalog.load(file.path()).unwrap();

        assert_eq!(ids(&catalog), first);
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_reload_replaces_previous_content() {
        let mut catalog = loaded(SAMPLE);
        let other = write_source("BIO100,Biology\n");

        catalog.load(other.path()).unwrap();

        assert_eq!(ids(&catalog), vec!["BIO100"]);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = loaded(SAMPLE);

        for raw in ["csci200", "CSCI200", " Csci200 "] {
            let details = catalog.lookup(raw).unwrap();
            assert_eq!(details.course.title, "Data Structures");
            assert_eq!(details.prerequisites, vec!["CSCI101".to_string()]);
        }
    }

    #[test]
    fn test_lookup_prerequisites_in_file_order() {
        let catalog = loaded(SAMPLE);
        let details = catalog.lookup("csci300").unwrap();

        assert_eq!(details.prerequisites, vec!["CSCI200", "MATH201"]);
    }

    #[test]
    fn test_lookup_falls_back_to_stored_prerequisite() {
        let mut course = Course::new(CourseId::parse("CS200").unwrap(), "Orphan");
        course.prerequisites.push(CourseId::parse("cs001").unwrap());
        let catalog = Catalog {
            courses: BTreeMap::from([(course.id.clone(), course)]),
        };

        let details = catalog.lookup("cs200").unwrap();
        assert_eq!(details.prerequisites, vec!["CS001"]);
    }

    #[test]
    fn test_empty_and_not_found_are_distinct() {
        let empty = Catalog::new();
        assert_eq!(empty.lookup("CSCI100"), Err(QueryError::EmptyCatalog));
        assert_eq!(empty.list().unwrap_err(), QueryError::EmptyCatalog);

        let catalog = loaded(SAMPLE);
        assert_eq!(
            catalog.lookup("csci999"),
            Err(QueryError::NotFound("CSCI999".to_string()))
        );
        assert!(matches!(catalog.lookup("   "), Err(QueryError::NotFound(_))));
    }

    #[test]
    fn test_unreadable_file_keeps_catalog() {
        let mut catalog = loaded(SAMPLE);
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.csv");

        let err = catalog.load(&missing).unwrap_err();

        assert!(matches!(err, LoadError::Unreadable { .. }));
        assert_eq!(catalog.len(), 5);
    }

    #[test]
    fn test_all_invalid_lines_fail_and_clear() {
        let mut catalog = loaded(SAMPLE);
        let bad = write_source("CS999\n\n,Untitled\n");

        let err = catalog.load(bad.path()).unwrap_err();

        match err {
            LoadError::NoValidCourses { warnings, .. } => assert_eq!(warnings.len(), 2),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(catalog.is_empty());
        assert_eq!(catalog.list().unwrap_err(), QueryError::EmptyCatalog);
    }

    #[test]
    fn test_non_utf8_title_still_loads() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"CS101,Intro\nFR101,Fran\xE7ais,CS101\n").unwrap();
        let mut catalog = Catalog::new();

        let report = catalog.load(file.path()).unwrap();

        assert_eq!(report.courses, 2);
        assert!(report.warnings.is_empty());
        let details = catalog.lookup("fr101").unwrap();
        assert!(details.course.title.starts_with("Fran"));
        assert_eq!(details.prerequisites, vec!["CS101"]);
    }

    #[test]
    fn test_blank_file_fails() {
        let mut catalog = Catalog::new();
        let blank = write_source("\n\n   \n");

        let err = catalog.load(blank.path()).unwrap_err();

        assert!(matches!(err, LoadError::NoValidCourses { .. }));
        assert!(err.warnings().is_empty());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_stored_prerequisites_exist() {
        let catalog = loaded("A1,One,B2,ZZ9\nB2,Two,C3\nC3\nD4,Four,a1,b2\n");

        for course in catalog.list().unwrap() {
            for prerequisite in &course.prerequisites {
                assert!(catalog.lookup(prerequisite.as_str()).is_ok());
            }
        }
    }
}
