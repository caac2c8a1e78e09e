use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing_appender::rolling;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Where and how the desktop shell writes its log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Directory under the user's home
    pub dir_name: &'static str,
    /// Base name of the daily rolling file
    pub file_name: &'static str,
    /// Rotated files kept on disk, newest first
    pub retention: usize,
    /// Added on top of `RUST_LOG`
    pub directives: &'static [&'static str],
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir_name: ".purchasync",
            file_name: "purchasync.log",
            retention: 14, // roughly two weeks of daily logs
            directives: &["purchasync=debug", "purchasync_lib=debug"],
        }
    }
}

impl LogConfig {
    /// `~/<dir_name>`, or `None` when there is no home directory.
    pub fn log_dir(&self) -> Option<PathBuf> {
        dirs_next::home_dir().map(|home| home.join(self.dir_name))
    }
}

/// Setup file-based logging to ~/.purchasync/purchasync.log
///
/// # Errors
/// Returns an error if the log directory cannot be created or logging fails to initialize.
pub fn setup_logging() -> Result<(), Box<dyn std::error::Error>> {
    setup_logging_with(&LogConfig::default())
}

/// # Errors
/// Same as [`setup_logging`].
pub fn setup_logging_with(config: &LogConfig) -> Result<(), Box<dyn std::error::Error>> {
    let log_dir = config.log_dir().ok_or("Cannot find home directory")?;

    fs::create_dir_all(&log_dir)?;

    // Runs before tracing is up, so failures go to stderr
    let removed = prune_rotated_logs(&log_dir, config.file_name, config.retention);

    let file_appender = rolling::daily(&log_dir, config.file_name);

    let mut filter = EnvFilter::from_default_env();
    for directive in config.directives {
        filter = filter.add_directive(directive.parse()?);
    }

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(file_appender))
        .with(filter)
        .try_init()?;

    tracing::info!(
        "Logging initialized to {:?}/{} (daily rotation, {} old files pruned)",
        log_dir,
        config.file_name,
        removed
    );

    Ok(())
}

/// Delete all but the `keep` newest files whose name contains `file_name`.
/// Returns how many files were removed.
pub fn prune_rotated_logs(log_dir: &Path, file_name: &str, keep: usize) -> usize {
    let Ok(entries) = fs::read_dir(log_dir) else {
        eprintln!("log retention: failed to read log dir {log_dir:?}");
        return 0;
    };

    let mut logs: Vec<(PathBuf, Option<SystemTime>)> = entries
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_ok_and(|ft| ft.is_file()))
        .filter(|entry| entry.file_name().to_string_lossy().contains(file_name))
        .map(|entry| {
            let modified = entry.metadata().ok().and_then(|m| m.modified().ok());
            (entry.path(), modified)
        })
        .collect();

    // Newest first; same-second files fall back to the dated suffix
    logs.sort_by(|a, b| {
        let by_time = match (a.1, b.1) {
            (Some(a_time), Some(b_time)) => b_time.cmp(&a_time),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_time.then_with(|| b.0.cmp(&a.0))
    });

    let mut removed = 0;
    for (path, _) in logs.into_iter().skip(keep) {
        match fs::remove_file(&path) {
            Ok(()) => removed += 1,
            Err(err) => eprintln!("log retention: failed to remove {path:?}: {err:?}"),
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"log line\n").unwrap();
    }

    fn names(dir: &Path) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_default_config() {
        let config = LogConfig::default();
        assert_eq!(config.dir_name, ".purchasync");
        assert_eq!(config.file_name, "purchasync.log");
        assert_eq!(config.retention, 14);
        assert!(config
            .directives
            .iter()
            .all(|d| d.parse::<tracing_subscriber::filter::Directive>().is_ok()));
    }

    #[test]
    fn test_prune_keeps_newest() {
        let dir = tempfile::tempdir().unwrap();
        for day in 1..=5 {
            touch(dir.path(), &format!("purchasync.log.2024-01-0{day}"));
        }

        let removed = prune_rotated_logs(dir.path(), "purchasync.log", 2);

        assert_eq!(removed, 3);
        assert_eq!(
            names(dir.path()),
            vec!["purchasync.log.2024-01-04", "purchasync.log.2024-01-05"]
        );
    }

    #[test]
    fn test_prune_ignores_other_files() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "purchasync.log.2024-01-01");
        touch(dir.path(), "notes.txt");
        fs::create_dir(dir.path().join("purchasync.log.d")).unwrap();

        let removed = prune_rotated_logs(dir.path(), "purchasync.log", 0);

        assert_eq!(removed, 1);
        assert_eq!(names(dir.path()), vec!["notes.txt", "purchasync.log.d"]);
    }

    #[test]
    fn test_prune_under_retention_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "purchasync.log.2024-01-01");

        assert_eq!(prune_rotated_logs(dir.path(), "purchasync.log", 14), 0);
        assert_eq!(names(dir.path()).len(), 1);
    }

    #[test]
    fn test_prune_missing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone");
        assert_eq!(prune_rotated_logs(&missing, "purchasync.log", 1), 0);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn test_prune_never_exceeds_retention(files in 0usize..30, keep in 0usize..20) {
            let dir = tempfile::tempdir().unwrap();
            for i in 0..files {
                fs::write(dir.path().join(format!("purchasync.log.{i:03}")), b"x").unwrap();
            }

            let removed = prune_rotated_logs(dir.path(), "purchasync.log", keep);
            let left = fs::read_dir(dir.path()).unwrap().count();

            prop_assert_eq!(removed, files.saturating_sub(keep));
            prop_assert_eq!(left, files.min(keep));
        }
    }
}
