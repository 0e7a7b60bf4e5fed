//! Env file reading via `dotenvy`.
//!
//! Invariants:
//! - The process environment is never modified; values are collected into a map.
//! - Any dotenvy failure (missing file, I/O, malformed line) is returned untouched.
//! - A key repeated within the file keeps its last value.

use std::path::Path;

use crate::schema::EnvMap;

/// Read every `KEY=VALUE` pair from the file at `path`.
pub fn read_env_file(path: &Path) -> Result<EnvMap, dotenvy::Error> {
    let mut values = EnvMap::new();
    for item in dotenvy::from_path_iter(path)? {
        let (key, value) = item?;
        values.insert(key, value);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_reads_pairs_comments_and_quotes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(
            &path,
            "# postgres\nPG_HOST=localhost\n\nPG_PORT=\"6000\"\nexport MAIL_FROM='ops@example.com'\n",
        )
        .unwrap();

        let values = read_env_file(&path).unwrap();

        assert_eq!(values.len(), 3);
        assert_eq!(values["PG_HOST"], "localhost");
        assert_eq!(values["PG_PORT"], "6000");
        assert_eq!(values["MAIL_FROM"], "ops@example.com");
    }

    #[test]
    fn test_last_duplicate_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "PG_HOST=first\nPG_HOST=second\n").unwrap();

        assert_eq!(read_env_file(&path).unwrap()["PG_HOST"], "second");
    }

    #[test]
    fn test_missing_file_is_io_not_found() {
        let dir = TempDir::new().unwrap();
        let err = read_env_file(&dir.path().join("absent.env")).unwrap_err();
        assert!(
            matches!(&err, dotenvy::Error::Io(io) if io.kind() == std::io::ErrorKind::NotFound),
            "expected NotFound, got {:?}",
            err
        );
    }

    #[test]
    fn test_malformed_line_is_line_parse() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "INVALID_LINE_WITHOUT_EQUALS").unwrap();

        assert!(matches!(
            read_env_file(&path),
            Err(dotenvy::Error::LineParse(..))
        ));
    }

    #[test]
    fn test_reading_does_not_touch_process_env() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");
        fs::write(&path, "_TYPED_ENV_DOTENV_ONLY=1\n").unwrap();

        read_env_file(&path).unwrap();

        assert!(std::env::var("_TYPED_ENV_DOTENV_ONLY").is_err());
    }
}
