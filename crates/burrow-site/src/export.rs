//! Static export: write the pre-rendered page into the output directory

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;
use crate::error::{Result, SiteError};
use crate::render::render_document;

/// File name of the exported page
pub const INDEX_FILE: &str = "index.html";

/// Render the page and write it to `config.out_dir`, resolved against the
/// process working directory.
///
/// # Errors
///
/// Returns error on invalid settings or any filesystem failure.
pub fn export_site(config: &SiteConfig, year: i32) -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(|e| SiteError::io("resolve", ".", e))?;
    export_site_in(config, year, &cwd)
}

/// Render the page and write it to `config.out_dir`, resolving a relative
/// path against `cwd`.
///
/// Existing contents of the directory are removed first when
/// `empty_out_dir` is set; the directory itself is kept. An output directory
/// that is `cwd` or one of its ancestors is refused before anything is
/// removed.
///
/// # Errors
///
/// Returns error on invalid settings or any filesystem failure.
pub fn export_site_in(config: &SiteConfig, year: i32, cwd: &Path) -> Result<PathBuf> {
    config.validate_in(cwd)?;
    let out_dir = cwd.join(&config.out_dir);

    if config.empty_out_dir && out_dir.is_dir() {
        let removed = empty_dir(&out_dir)?;
        tracing::debug!(dir = %out_dir.display(), removed, "emptied output directory");
    }
    fs::create_dir_all(&out_dir).map_err(|e| SiteError::io("create", &out_dir, e))?;

    let html = render_document(config, year);
    let index = out_dir.join(INDEX_FILE);
    fs::write(&index, &html).map_err(|e| SiteError::io("write", &index, e))?;

    tracing::info!(
        path = %index.display(),
        bytes = html.len(),
        base_url = %config.base_url,
        "exported site"
    );
    Ok(index)
}

fn empty_dir(dir: &Path) -> Result<usize> {
    let entries = fs::read_dir(dir).map_err(|e| SiteError::io("read", dir, e))?;
    let mut removed = 0;
    for entry in entries {
        let path = entry.map_err(|e| SiteError::io("read", dir, e))?.path();
        if path.is_dir() {
            fs::remove_dir_all(&path).map_err(|e| SiteError::io("remove", &path, e))?;
        } else {
            fs::remove_file(&path).map_err(|e| SiteError::io("remove", &path, e))?;
        }
        removed += 1;
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_for(dir: &Path) -> SiteConfig {
        SiteConfig {
            out_dir: dir.to_path_buf(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_export_writes_index() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        let out = temp.path().join("docs");

        let index = export_site(&config_for(&out), 2025)?;

        assert_eq!(index, out.join(INDEX_FILE));
        let html = fs::read_to_string(&index)?;
        assert!(html.contains("<title>Bit Burrow Co</title>"));
        assert!(html.contains("© 2025 Bit Burrow Co. All rights reserved."));
        Ok(())
    }

    #[test]
    fn test_export_empties_stale_output() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        let out = temp.path().to_path_buf();
        fs::write(out.join("stale.js"), "old")?;
        fs::create_dir(out.join("assets"))?;
        fs::write(out.join("assets").join("old.css"), "old")?;

        export_site(&config_for(&out), 2025)?;

        assert!(!out.join("stale.js").exists());
        assert!(!out.join("assets").exists());
        assert!(out.join(INDEX_FILE).is_file());
        Ok(())
    }

    #[test]
    fn test_export_can_keep_existing_files() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        let out = temp.path().to_path_buf();
        fs::write(out.join("tailwind.css"), "body{}")?;

        let config = SiteConfig {
            empty_out_dir: false,
            ..config_for(&out)
        };
        export_site(&config, 2025)?;

        assert_eq!(fs::read_to_string(out.join("tailwind.css"))?, "body{}");
        Ok(())
    }

    #[test]
    fn test_export_rejects_invalid_base_url_before_writing()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        let out = temp.path().join("docs");
        let config = SiteConfig {
            base_url: "site".to_string(),
            ..config_for(&out)
        };

        let result = export_site(&config, 2025);

        assert!(matches!(result, Err(SiteError::InvalidBaseUrl(_))));
        assert!(!out.exists());
        Ok(())
    }

    #[test]
    fn test_export_refuses_working_directory_and_parents()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;
        let project = temp.path().join("project");
        fs::create_dir_all(project.join("src"))?;
        fs::write(project.join("Cargo.toml"), "[package]")?;
        fs::write(project.join("src").join("lib.rs"), "")?;

        for dir in [PathBuf::from("."), PathBuf::from(".."), temp.path().to_path_buf()] {
            let result = export_site_in(&config_for(&dir), 2025, &project);
            assert!(
                matches!(result, Err(SiteError::InvalidOutDir(_))),
                "{}",
                dir.display()
            );
        }

        assert!(project.join("Cargo.toml").is_file());
        assert!(project.join("src").join("lib.rs").is_file());
        Ok(())
    }

    #[test]
    fn test_export_resolves_relative_out_dir_against_cwd()
    -> std::result::Result<(), Box<dyn std::error::Error>> {
        let temp = tempfile::tempdir()?;

        let index = export_site_in(&config_for(Path::new("docs")), 2025, temp.path())?;

        assert_eq!(index, temp.path().join("docs").join(INDEX_FILE));
        assert!(index.is_file());
        Ok(())
    }
}
