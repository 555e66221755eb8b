//! File system repository

use crate::domain::{duplicate_names, Course, SaveOutcome};
use crate::error::{GradeTrackError, Result};
use crate::infrastructure::config::STATE_DIR;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const COURSES_FILE: &str = "courses.json";

/// Abstract store for study goals and course records
pub trait StudyRepository {
    /// Check if the state directory exists
    fn is_initialized(&self) -> bool;

    /// Create the state directory
    fn initialize(&self) -> Result<()>;

    fn load_config(&self) -> Result<Config>;

    fn save_config(&self, config: &Config) -> Result<()>;

    /// Load all stored courses in stored order; no store yet means no courses
    fn load_courses(&self) -> Result<Vec<Course>>;

    /// Persist `courses`, unless a name occurs twice. A rejected save writes
    /// nothing.
    fn save_courses(&self, courses: &[Course]) -> Result<SaveOutcome>;
}

/// File system implementation of StudyRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover workspace root by walking up from current directory
    /// First checks GRADETRACK_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("GRADETRACK_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_state_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(GradeTrackError::Config(format!(
                    "GRADETRACK_ROOT is set to '{}' but no .gradetrack directory found. \
                    Run 'gradetrack init' in that directory or unset GRADETRACK_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_state_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(GradeTrackError::NotGradeTrackDirectory(start.to_path_buf()));
                }
            }
        }
    }

    fn has_state_dir(path: &Path) -> bool {
        path.join(STATE_DIR).is_dir()
    }

    fn courses_path(&self) -> PathBuf {
        self.root.join(STATE_DIR).join(COURSES_FILE)
    }

    /// Write to a temp file in the same directory, then rename into place.
    ///
    /// On Windows, `rename` does not overwrite existing files, so the destination is removed first.
    fn write_atomic(path: &Path, content: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.gradetrack-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or(COURSES_FILE),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, content)?;

        if cfg!(windows) && path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)?;
        Ok(())
    }
}

/// Parse the contents of a course store.
///
/// Blank files and a bare empty JSON string (`""`) are treated as an empty
/// store.
pub fn parse_course_store(contents: &str) -> Result<Vec<Course>> {
    if contents.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: serde_json::Value = serde_json::from_str(contents)
        .map_err(|e| GradeTrackError::CorruptCourseStore(e.to_string()))?;

    match value {
        serde_json::Value::String(s) if s.is_empty() => Ok(Vec::new()),
        other => serde_json::from_value(other)
            .map_err(|e| GradeTrackError::CorruptCourseStore(e.to_string())),
    }
}

impl StudyRepository for FileSystemRepository {
    fn is_initialized(&self) -> bool {
        Self::has_state_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let state_dir = self.root.join(STATE_DIR);

        if state_dir.exists() {
            return Err(GradeTrackError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&state_dir)?;
        Ok(())
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)?;
        info!(
            target_time = config.target_time,
            target_grade = config.target_grade,
            "configuration saved"
        );
        Ok(())
    }

    fn load_courses(&self) -> Result<Vec<Course>> {
        let path = self.courses_path();

        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!(path = %path.display(), "no course store yet");
                return Ok(Vec::new());
            }
            Err(e) => return Err(GradeTrackError::Io(e)),
        };

        let courses = parse_course_store(&contents)?;
        info!(count = courses.len(), "courses loaded");
        Ok(courses)
    }

    fn save_courses(&self, courses: &[Course]) -> Result<SaveOutcome> {
        let names = duplicate_names(courses);
        if !names.is_empty() {
            warn!(duplicates = ?names, "duplicate courses rejected, nothing written");
            return Ok(SaveOutcome::DuplicatesRejected { names });
        }

        let json = serde_json::to_string_pretty(courses)?;
        Self::write_atomic(&self.courses_path(), &json)?;
        info!(count = courses.len(), "courses saved");
        Ok(SaveOutcome::Saved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{StudyConfig, PENDING_GRADE};
    use std::ffi::OsString;
    use std::sync::{Mutex, OnceLock};
    use tempfile::TempDir;

    fn env_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    struct EnvVarRestore {
        key: &'static str,
        previous: Option<OsString>,
    }

    impl EnvVarRestore {
        fn capture(key: &'static str) -> Self {
            Self {
                key,
                previous: std::env::var_os(key),
            }
        }
    }

    impl Drop for EnvVarRestore {
        fn drop(&mut self) {
            if let Some(value) = &self.previous {
                std::env::set_var(self.key, value);
            } else {
                std::env::remove_var(self.key);
            }
        }
    }

    fn initialized_repo() -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        (temp, repo)
    }

    fn course(name: &str, semester: u32) -> Course {
        Course::new(name, 5, Some(PENDING_GRADE), 2.0, semester).unwrap()
    }

    #[test]
    fn test_is_initialized() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        assert!(!repo.is_initialized());
        repo.initialize().unwrap();
        assert!(repo.is_initialized());
        assert!(temp.path().join(".gradetrack").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let (_temp, repo) = initialized_repo();
        assert!(repo.initialize().is_err());
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".gradetrack")).unwrap();

        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let repo = FileSystemRepository::discover_from(&subdir).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_fails_without_state_dir() {
        let temp = TempDir::new().unwrap();

        match FileSystemRepository::discover_from(temp.path()).unwrap_err() {
            GradeTrackError::NotGradeTrackDirectory(_) => {}
            other => panic!("Expected NotGradeTrackDirectory error, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_with_env_root() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("GRADETRACK_ROOT");

        let (temp, _repo) = initialized_repo();
        std::env::set_var("GRADETRACK_ROOT", temp.path());

        let repo = FileSystemRepository::discover().unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_env_root_not_initialized() {
        let _env_lock = env_test_lock().lock().unwrap();
        let _restore = EnvVarRestore::capture("GRADETRACK_ROOT");

        let temp = TempDir::new().unwrap();
        std::env::set_var("GRADETRACK_ROOT", temp.path());

        match FileSystemRepository::discover().unwrap_err() {
            GradeTrackError::Config(msg) => assert!(msg.contains("no .gradetrack directory")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let (_temp, repo) = initialized_repo();
        repo.save_config(&Config::new(StudyConfig::new(4, 2.3)))
            .unwrap();

        let loaded = repo.load_config().unwrap();
        assert_eq!(loaded.target_time, 4);
    }

    #[test]
    fn test_load_courses_without_store() {
        let (_temp, repo) = initialized_repo();
        assert!(repo.load_courses().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load_courses_preserves_order() {
        let (_temp, repo) = initialized_repo();
        let courses = vec![course("Thesis", 6), course("Logic", 1)];

        assert_eq!(repo.save_courses(&courses).unwrap(), SaveOutcome::Saved);

        let loaded = repo.load_courses().unwrap();
        assert_eq!(loaded, courses);
    }

    #[test]
    fn test_duplicate_save_leaves_store_untouched() {
        let (temp, repo) = initialized_repo();
        let original = vec![course("Logic", 1)];
        repo.save_courses(&original).unwrap();
        let before = fs::read_to_string(temp.path().join(".gradetrack/courses.json")).unwrap();

        let outcome = repo
            .save_courses(&[course("Logic", 1), course("Algebra", 2), course("Logic", 3)])
            .unwrap();

        assert_eq!(
            outcome,
            SaveOutcome::DuplicatesRejected {
                names: vec!["Logic".to_string()]
            }
        );
        let after = fs::read_to_string(temp.path().join(".gradetrack/courses.json")).unwrap();
        assert_eq!(before, after);
        assert_eq!(repo.load_courses().unwrap(), original);
    }

    #[test]
    fn test_duplicate_save_without_store_writes_nothing() {
        let (temp, repo) = initialized_repo();
        let outcome = repo
            .save_courses(&[course("Logic", 1), course("Logic", 2)])
            .unwrap();

        assert!(!outcome.is_saved());
        assert!(!temp.path().join(".gradetrack/courses.json").exists());
    }

    #[test]
    fn test_save_leaves_no_temp_files() {
        let (temp, repo) = initialized_repo();
        repo.save_courses(&[course("Logic", 1)]).unwrap();
        repo.save_courses(&[course("Logic", 2)]).unwrap();

        let entries: Vec<String> = fs::read_dir(temp.path().join(".gradetrack"))
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, vec!["courses.json".to_string()]);
    }

    #[test]
    fn test_corrupt_store_is_reported() {
        let (temp, repo) = initialized_repo();
        fs::write(temp.path().join(".gradetrack/courses.json"), "[{\"name\":").unwrap();

        match repo.load_courses().unwrap_err() {
            GradeTrackError::CorruptCourseStore(_) => {}
            other => panic!("Expected CorruptCourseStore error, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_empty_store_variants() {
        assert!(parse_course_store("").unwrap().is_empty());
        assert!(parse_course_store("  \n").unwrap().is_empty());
        assert!(parse_course_store("\"\"").unwrap().is_empty());
        assert!(parse_course_store("[]").unwrap().is_empty());
        assert!(parse_course_store("\"junk\"").is_err());
    }

    #[test]
    fn test_parse_legacy_records() {
        let json = r#"[{"name": "Logic", "ects": 5, "grade": 1.7, "target_grade": 2.0, "semester": 1}]"#;
        let courses = parse_course_store(json).unwrap();
        assert_eq!(courses.len(), 1);
        assert!(courses[0].is_completed());
    }
}
