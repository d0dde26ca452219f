//! File-based catalog and inventory loader.
//!
//! Reads course and token records from a single data file or from every data
//! file under a directory, and converts them into validated domain values.
//!
//! # Directory layout expected
//!
//! ```text
//! data/
//! ├── catalog.toml        ← any mix of [[courses]] and [[tokens]]
//! ├── users/
//! │   ├── 1.toml
//! │   └── 2.json
//! └── notes.md            ← ignored (not .toml / .json)
//! ```
//!
//! Files are read in path order, so the grant order of a user's tokens is
//! stable across runs.
//!
//! # Record format
//!
//! ```toml
//! [[courses]]
//! id       = 1
//! category = "programming"
//! cost     = 75
//! title    = "Intro to Rust"      # optional
//!
//! [[tokens]]
//! id       = 1
//! user     = 1
//! value    = 100
//! category = "PREMIUM"            # optional tier label
//! # exactly one of:
//! courses    = [1, 2, 3]
//! # categories = ["programming", "design"]
//! # universal  = true
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};
use walkdir::WalkDir;

use redeem_core::{
    application::ApplicationError,
    domain::{Amount, Category, Course, CourseId, DomainError, ScopePolicy, Token, TokenId, UserId},
    error::{RedeemError, RedeemResult},
};

use crate::{InMemoryCatalog, InMemoryInventory};

// ── Record types ──────────────────────────────────────────────────────────────

/// Deserialised contents of one data file.
#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct DataFile {
    #[serde(default)]
    pub courses: Vec<CourseRecord>,
    #[serde(default)]
    pub tokens: Vec<TokenRecord>,
}

/// One `[[courses]]` entry.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct CourseRecord {
    pub id: u64,
    pub category: String,
    /// Signed so a negative cost is reported as such instead of a parse error.
    pub cost: i64,
    pub title: Option<String>,
}

/// One `[[tokens]]` entry.
///
/// Scope is given the way inventory records carry it: a `universal` flag and
/// two optional lists. Exactly one must be set.
#[derive(Debug, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
pub struct TokenRecord {
    pub id: u64,
    pub user: u64,
    pub value: i64,
    pub category: Option<String>,
    #[serde(default)]
    pub universal: bool,
    pub courses: Option<Vec<u64>>,
    pub categories: Option<Vec<String>>,
}

impl CourseRecord {
    fn into_course(self) -> Result<Course, DomainError> {
        let course = Course::try_from_raw(self.id, &self.category, self.cost)?;
        Ok(match self.title {
            Some(title) => course.with_title(title),
            None => course,
        })
    }
}

impl TokenRecord {
    fn into_holding(self) -> Result<(UserId, Token), DomainError> {
        let id = TokenId::new(self.id);

        let value = Amount::try_from_signed(self.value)
            .map_err(|e| DomainError::InvalidToken(format!("token {id}: {e}")))?;

        let course_ids = self
            .courses
            .map(|ids| ids.into_iter().map(CourseId::new).collect());
        let categories = self
            .categories
            .map(|names| {
                names
                    .into_iter()
                    .map(Category::try_new)
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()
            .map_err(|e| DomainError::InvalidPolicy {
                token: id.to_string(),
                reason: e.to_string(),
            })?;

        let scope = ScopePolicy::from_parts(id, self.universal, course_ids, categories)?;
        let token = Token::new(id, value, self.category.unwrap_or_default(), scope);

        Ok((UserId::new(self.user), token))
    }
}

// ── Dataset ───────────────────────────────────────────────────────────────────

/// Validated courses and token holdings, ready to seed providers.
#[derive(Debug, Default, Clone)]
pub struct Dataset {
    pub courses: Vec<Course>,
    pub holdings: Vec<(UserId, Token)>,
}

impl Dataset {
    /// Parse a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, DataFormatError> {
        let file: DataFile = toml::from_str(raw)?;
        Ok(Self::from_file(file)?)
    }

    /// Parse a JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self, DataFormatError> {
        let file: DataFile = serde_json::from_str(raw)?;
        Ok(Self::from_file(file)?)
    }

    /// Convert raw records into domain values.
    pub fn from_file(file: DataFile) -> Result<Self, DomainError> {
        let courses = file
            .courses
            .into_iter()
            .map(CourseRecord::into_course)
            .collect::<Result<Vec<_>, _>>()?;
        let holdings = file
            .tokens
            .into_iter()
            .map(TokenRecord::into_holding)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { courses, holdings })
    }

    /// Append another dataset after this one.
    pub fn merge(&mut self, other: Dataset) {
        self.courses.extend(other.courses);
        self.holdings.extend(other.holdings);
    }

    /// Build both providers. Duplicate course or token ids fail here.
    pub fn into_providers(self) -> RedeemResult<(InMemoryCatalog, InMemoryInventory)> {
        let catalog = InMemoryCatalog::from_courses(self.courses)?;
        let inventory = InMemoryInventory::from_holdings(self.holdings)?;
        Ok((catalog, inventory))
    }
}

/// A data document that could not be parsed or converted.
#[derive(Debug, Error)]
pub enum DataFormatError {
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Well-formed, but a record breaks a domain rule.
    #[error(transparent)]
    Record(#[from] DomainError),
}

// ── Loader ────────────────────────────────────────────────────────────────────

/// Loads a [`Dataset`] from a data file or a directory of data files.
///
/// # Example
///
/// ```no_run
/// use redeem_adapters::DataLoader;
///
/// let (catalog, inventory) = DataLoader::new("./data").load()?.into_providers()?;
/// # Ok::<(), redeem_core::error::RedeemError>(())
/// ```
pub struct DataLoader {
    path: PathBuf,
}

impl DataLoader {
    /// Create a loader pointed at a file or directory.
    ///
    /// The path does not need to exist yet; [`DataLoader::load`] reports it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every record reachable from the configured path.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::DataSource`] if the path is missing, a file
    /// cannot be read, has an unsupported extension (single-file mode), or
    /// fails to parse or convert. Any bad file fails the whole load.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> RedeemResult<Dataset> {
        if !self.path.exists() {
            return Err(source_error(&self.path, "path does not exist"));
        }

        let dataset = if self.path.is_dir() {
            self.load_dir(&self.path)?
        } else {
            self.load_file(&self.path)?
        };

        debug!(
            courses = dataset.courses.len(),
            tokens = dataset.holdings.len(),
            "finished loading data"
        );
        Ok(dataset)
    }

    fn load_dir(&self, dir: &Path) -> RedeemResult<Dataset> {
        let mut dataset = Dataset::default();

        for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
            let entry =
                entry.map_err(|e| source_error(dir, format!("directory walk error: {e}")))?;

            if !entry.file_type().is_file() || DataFormat::of(entry.path()).is_none() {
                continue;
            }

            dataset.merge(self.load_file(entry.path())?);
        }

        Ok(dataset)
    }

    fn load_file(&self, path: &Path) -> RedeemResult<Dataset> {
        let format = DataFormat::of(path).ok_or_else(|| {
            source_error(path, "unsupported file type (expected .toml or .json)")
        })?;

        let raw = fs::read_to_string(path)
            .map_err(|e| source_error(path, format!("failed to read: {e}")))?;

        let dataset = match format {
            DataFormat::Toml => Dataset::from_toml_str(&raw),
            DataFormat::Json => Dataset::from_json_str(&raw),
        }
        .map_err(|e| source_error(path, e.to_string()))?;

        debug!(
            file = %path.display(),
            courses = dataset.courses.len(),
            tokens = dataset.holdings.len(),
            "loaded data file"
        );
        Ok(dataset)
    }

}

fn source_error(path: &Path, reason: impl Into<String>) -> RedeemError {
    ApplicationError::DataSource {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
    .into()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DataFormat {
    Toml,
    Json,
}

impl DataFormat {
    fn of(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redeem_core::application::ports::{CourseCatalog, TokenInventory};
    use std::{fs::File, io::Write};
    use tempfile::TempDir;

    // ── helpers ───────────────────────────────────────────────────────────

    fn write(dir: &Path, rel_path: &str, content: &str) -> PathBuf {
        let full = dir.join(rel_path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        File::create(&full)
            .unwrap()
            .write_all(content.as_bytes())
            .unwrap();
        full
    }

    const CATALOG: &str = r#"
[[courses]]
id = 1
category = "programming"
cost = 75
title = "Intro"

[[courses]]
id = 3
category = "design"
cost = 150
"#;

    const TOKENS: &str = r#"
[[tokens]]
id = 1
user = 1
value = 100
category = "PREMIUM"
courses = [1, 2, 3]

[[tokens]]
id = 2
user = 1
value = 50
categories = ["programming", "design"]

[[tokens]]
id = 3
user = 2
value = 200
universal = true
"#;

    // ── parsing ───────────────────────────────────────────────────────────

    #[test]
    fn parses_courses_and_tokens() {
        let mut dataset = Dataset::from_toml_str(CATALOG).unwrap();
        dataset.merge(Dataset::from_toml_str(TOKENS).unwrap());

        assert_eq!(dataset.courses.len(), 2);
        assert_eq!(dataset.courses[0].title(), Some("Intro"));
        assert_eq!(dataset.holdings.len(), 3);

        let (user, token) = &dataset.holdings[1];
        assert_eq!(*user, UserId::new(1));
        assert_eq!(token.category(), "");
        assert_eq!(
            token.scope(),
            &ScopePolicy::categories([Category::new("programming"), Category::new("design")])
        );
        assert_eq!(dataset.holdings[2].1.scope(), &ScopePolicy::Universal);
    }

    #[test]
    fn json_is_accepted() {
        let raw = r#"{"tokens":[{"id":7,"user":4,"value":10,"courses":[]}]}"#;
        let dataset = Dataset::from_json_str(raw).unwrap();
        assert!(dataset.courses.is_empty());
        assert!(dataset.holdings[0].1.scope().is_empty());
    }

    #[test]
    fn token_without_scope_is_invalid_policy() {
        let file: DataFile = toml::from_str("[[tokens]]\nid = 1\nuser = 1\nvalue = 5\n").unwrap();
        assert!(matches!(
            Dataset::from_file(file),
            Err(DomainError::InvalidPolicy { .. })
        ));
    }

    #[test]
    fn token_with_two_scopes_is_invalid_policy() {
        let raw = "[[tokens]]\nid = 1\nuser = 1\nvalue = 5\nuniversal = true\ncourses = [1]\n";
        let file: DataFile = toml::from_str(raw).unwrap();
        assert!(matches!(
            Dataset::from_file(file),
            Err(DomainError::InvalidPolicy { .. })
        ));
    }

    #[test]
    fn blank_scope_category_is_invalid_policy() {
        let raw = "[[tokens]]\nid = 1\nuser = 1\nvalue = 5\ncategories = [\"\"]\n";
        let file: DataFile = toml::from_str(raw).unwrap();
        assert!(matches!(
            Dataset::from_file(file),
            Err(DomainError::InvalidPolicy { .. })
        ));
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let course = "[[courses]]\nid = 1\ncategory = \"x\"\ncost = -1\n";
        assert!(Dataset::from_toml_str(course).is_err());

        let token = "[[tokens]]\nid = 1\nuser = 1\nvalue = -5\nuniversal = true\n";
        let file: DataFile = toml::from_str(token).unwrap();
        assert!(matches!(Dataset::from_file(file), Err(DomainError::InvalidToken(_))));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let raw = "[[courses]]\nid = 1\ncategory = \"x\"\ncost = 1\nprice = 2\n";
        assert!(matches!(
            Dataset::from_toml_str(raw),
            Err(DataFormatError::Toml(_))
        ));
    }

    #[test]
    fn format_errors_keep_their_kind() {
        let err = Dataset::from_json_str("{\"courses\": [").unwrap_err();
        assert!(matches!(err, DataFormatError::Json(_)));
        assert!(err.to_string().starts_with("invalid JSON"));

        let raw = "[[tokens]]\nid = 4\nuser = 1\nvalue = 5\n";
        let err = Dataset::from_toml_str(raw).unwrap_err();
        assert!(matches!(
            err,
            DataFormatError::Record(DomainError::InvalidPolicy { .. })
        ));
        assert!(err.to_string().contains("no scope given"));
    }

    // ── loader ────────────────────────────────────────────────────────────

    #[test]
    fn loads_single_file() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "all.toml", &format!("{CATALOG}\n{TOKENS}"));

        let (catalog, inventory) = DataLoader::new(path).load().unwrap().into_providers().unwrap();

        assert_eq!(catalog.list().unwrap().len(), 2);
        assert_eq!(inventory.find_for_user(UserId::new(1)).unwrap().len(), 2);
    }

    #[test]
    fn loads_directory_in_path_order() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a_catalog.toml", CATALOG);
        write(temp.path(), "b_tokens.toml", TOKENS);
        write(
            temp.path(),
            "users/c.json",
            r#"{"tokens":[{"id":9,"user":1,"value":1,"universal":true}]}"#,
        );
        write(temp.path(), "README.md", "not data");

        let dataset = DataLoader::new(temp.path()).load().unwrap();

        let ids: Vec<u64> = dataset.holdings.iter().map(|(_, t)| t.id().get()).collect();
        assert_eq!(ids, [1, 2, 3, 9]);
        assert_eq!(dataset.courses.len(), 2);
    }

    #[test]
    fn missing_path_is_data_source_error() {
        let err = DataLoader::new("/definitely/not/here.toml").load().unwrap_err();
        assert!(matches!(
            err,
            RedeemError::Application(ApplicationError::DataSource { .. })
        ));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = write(temp.path(), "data.yaml", "courses: []");
        assert!(DataLoader::new(path).load().is_err());
    }

    #[test]
    fn bad_file_fails_whole_directory() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.toml", CATALOG);
        write(temp.path(), "b.toml", "[[courses]]\nid = \"one\"\n");

        let err = DataLoader::new(temp.path()).load().unwrap_err();
        assert!(err.to_string().contains("b.toml"));
    }

    #[test]
    fn duplicate_ids_fail_when_building_providers() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "a.toml", CATALOG);
        write(temp.path(), "b.toml", CATALOG);

        let dataset = DataLoader::new(temp.path()).load().unwrap();
        assert!(matches!(
            dataset.into_providers(),
            Err(RedeemError::Domain(DomainError::DuplicateCourse { id: 1 }))
        ));
    }
}
