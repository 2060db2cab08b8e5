use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use apex_core::Locale;

pub const DEFAULT_DB_URL: &str = "sqlite://apexmind.sqlite3";
pub const MEMORY_DB_URL: &str = "sqlite::memory:";

/// Launch settings after flags, `APEX_*` variables and defaults are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub db_url: String,
    pub locale: Locale,
}

impl AppConfig {
    /// `db` and `locale` arrive already merged with their environment
    /// fallbacks; anything still missing takes the default.
    ///
    /// # Errors
    ///
    /// Returns an error if `db` is blank.
    pub fn resolve(db: Option<String>, locale: Option<Locale>) -> anyhow::Result<Self> {
        let db_url = match db {
            Some(raw) if raw.trim().is_empty() => bail!("--db must not be empty"),
            Some(raw) => normalize_sqlite_url(&raw),
            None => normalize_sqlite_url(DEFAULT_DB_URL),
        };
        Ok(Self {
            db_url,
            locale: locale.unwrap_or_default(),
        })
    }

    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.db_url == MEMORY_DB_URL
    }
}

/// Turn a bare path or relative `sqlite:` URL into an absolute `sqlite://` URL.
#[must_use]
pub fn normalize_sqlite_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == MEMORY_DB_URL {
        return trimmed.to_owned();
    }

    let path_str = trimmed
        .strip_prefix("sqlite://")
        .or_else(|| trimmed.strip_prefix("sqlite:"))
        .unwrap_or(trimmed);
    let (path_str, query) = match path_str.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (path_str, None),
    };

    let path = Path::new(path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(path)
    };

    match query {
        Some(query) => format!("sqlite://{}?{query}", absolute.display()),
        None => format!("sqlite://{}", absolute.display()),
    }
}

/// Create the database file and its parent directory if they are missing.
///
/// # Errors
///
/// Returns an error if the URL has no file path or the file cannot be created.
pub fn prepare_sqlite_file(db_url: &str) -> anyhow::Result<()> {
    if db_url == MEMORY_DB_URL {
        return Ok(());
    }

    let Some(path) = db_url.strip_prefix("sqlite://") else {
        bail!("invalid database url: {db_url}");
    };
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        bail!("invalid database url: {db_url}");
    }

    let path = Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)
            .with_context(|| format!("creating {}", path.display()))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_url_passes_through() {
        assert_eq!(normalize_sqlite_url("sqlite::memory:"), MEMORY_DB_URL);
        let config = AppConfig::resolve(Some("sqlite::memory:".into()), None).unwrap();
        assert!(config.is_in_memory());
        assert_eq!(config.locale, Locale::English);
    }

    #[test]
    fn relative_paths_become_absolute() {
        let url = normalize_sqlite_url("data/apex.sqlite3");
        let path = url.strip_prefix("sqlite://").unwrap();
        assert!(Path::new(path).is_absolute(), "{url}");
        assert!(url.ends_with("data/apex.sqlite3"), "{url}");
    }

    #[test]
    fn absolute_urls_keep_their_query() {
        assert_eq!(
            normalize_sqlite_url("sqlite:///tmp/apex.sqlite3?mode=rwc"),
            "sqlite:///tmp/apex.sqlite3?mode=rwc"
        );
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = AppConfig::resolve(None, None).unwrap();
        assert!(config.db_url.ends_with("apexmind.sqlite3"));
        assert_eq!(config.locale, Locale::English);
    }

    #[test]
    fn explicit_locale_wins() {
        let config = AppConfig::resolve(None, Some(Locale::Punjabi)).unwrap();
        assert_eq!(config.locale, Locale::Punjabi);
    }

    #[test]
    fn blank_db_is_rejected() {
        assert!(AppConfig::resolve(Some("  ".into()), None).is_err());
    }

    #[test]
    fn prepare_creates_missing_parents() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("nested/apex.sqlite3");
        let url = format!("sqlite://{}", file.display());
        prepare_sqlite_file(&url).unwrap();
        assert!(file.exists());
    }
}
