use std::path::{Path, PathBuf};
use anyhow::{Context, Result};
use directories::UserDirs;
use crate::manifest::{Manifest, Repository};
use crate::report;

/// A project directory containing a `package.json`.
///
/// Exposes the manifest rewrites and the binary linking performed by the
/// post-install hook. Each operation is an independent read-modify-write
/// of the manifest file; nothing is cached between calls.
pub struct Project {
    dir: PathBuf,
}

impl Project {
    pub fn new<P: AsRef<Path>>(dir: P) -> Project {
        Project {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Derives the bare repository name from the project's git remote.
    /// `None` if it cannot be determined; see [`crate::repo::repo_name`].
    pub fn repo_name(&self) -> Option<String> {
        crate::repo::repo_name(&self.dir)
    }

    /// Sets the manifest's `repository` field to a git remote at `url`,
    /// replacing any existing repository metadata.
    ///
    /// # Errors
    /// Returns an error if the manifest can't be read or written.
    pub fn set_repo(&self, url: &str) -> Result<()> {
        let mut manifest = Manifest::load(&self.dir)?;
        manifest.repository = Some(Repository {
            kind: "git".to_string(),
            url: url.to_string(),
        });
        manifest.save(&self.dir)?;
        report::ok(&format!(
            "Successfully updated repo url {} in package.json",
            report::accent(url)
        ));
        Ok(())
    }

    /// Sets the manifest's `name` field, leaving all other fields unchanged.
    ///
    /// # Errors
    /// Returns an error if the manifest can't be read or written.
    pub fn set_name(&self, name: &str) -> Result<()> {
        let mut manifest = Manifest::load(&self.dir)?;
        manifest.name = name.to_string();
        manifest.save(&self.dir)?;
        report::ok(&format!(
            "Successfully updated name {} in package.json",
            report::accent(name)
        ));
        Ok(())
    }

    /// Links the first executable declared in the manifest's `bin` map into
    /// the user's global `~/bin` directory, replacing any existing link.
    ///
    /// Without a `bin` entry this is an informational no-op.
    ///
    /// # Errors
    /// Returns an error if the manifest can't be read, the home directory
    /// can't be determined, or the link can't be created.
    pub fn link_bin(&self) -> Result<()> {
        let user_dirs = UserDirs::new().context("Could not determine home directory")?;
        let bin_dir = user_dirs.home_dir().join("bin");
        self.link_bin_into(&bin_dir)
    }

    fn link_bin_into(&self, bin_dir: &Path) -> Result<()> {
        let manifest = Manifest::load(&self.dir)?;
        let Some((name, rel_path)) = manifest.first_bin() else {
            report::info("No bin property found in package.json");
            return Ok(());
        };
        let source = self.dir.join(rel_path);
        let target = bin_dir.join(name);
        force_symlink(&source, &target)?;
        report::ok(&format!(
            "Symlink created for {} at {}",
            report::accent(source.display()),
            report::accent(target.display())
        ));
        Ok(())
    }
}

/// Creates a symbolic link at `target` pointing to `source`, replacing any
/// existing link (`ln -sf` semantics). The source is not required to exist.
#[cfg(unix)]
fn force_symlink(source: &Path, target: &Path) -> Result<()> {
    use std::os::unix::fs::symlink;
    if target.symlink_metadata().is_ok() {
        std::fs::remove_file(target)
            .with_context(|| format!("Could not replace existing link {}", target.display()))?;
    }
    symlink(source, target)
        .with_context(|| format!("Could not create symlink {}", target.display()))?;
    Ok(())
}

#[cfg(not(unix))]
fn force_symlink(_source: &Path, _target: &Path) -> Result<()> {
    anyhow::bail!("creating symlinks requires a Unix platform")
}
