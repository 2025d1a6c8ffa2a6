use std::path::Path;
use tempfile::TempDir;
use postlink::*;

const PACKAGE_JSON: &str = r#"{
  "name": "bunts",
  "version": "1.0.0",
  "description": "fixture project",
  "bin": {
    "bunts": "./bin/bunts.js"
  }
}"#;

fn setup_project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join("package.json"), PACKAGE_JSON).unwrap();
    temp_dir
}

fn init_git_remote(dir: &Path, url: &str) {
    let init = std::process::Command::new("git")
        .arg("-C")
        .arg(dir)
        .arg("init")
        .output()
        .unwrap();
    assert!(init.status.success());
    let remote = std::process::Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(["remote", "add", "origin", url])
        .output()
        .unwrap();
    assert!(remote.status.success());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup() {
        let dir = setup_project();
        let manifest = Manifest::load(dir.path()).unwrap();
        assert_eq!(manifest.name, "bunts");
        assert_eq!(manifest.first_bin(), Some(("bunts", "./bin/bunts.js")));
    }

    #[test]
    fn test_set_repo_writes_git_repository() {
        let dir = setup_project();
        let project = Project::new(dir.path());
        project
            .set_repo("git@github.com:user/repoName.git")
            .unwrap();

        let manifest = Manifest::load(dir.path()).unwrap();
        let repository = manifest.repository.unwrap();
        assert_eq!(repository.kind, "git");
        assert_eq!(repository.url, "git@github.com:user/repoName.git");
    }

    #[test]
    fn test_set_name_updates_only_the_name() {
        let dir = setup_project();
        let project = Project::new(dir.path());
        project.set_name("new-repo-name").unwrap();

        let manifest = Manifest::load(dir.path()).unwrap();
        assert_eq!(manifest.name, "new-repo-name");
        assert_eq!(manifest.extra["version"], serde_json::json!("1.0.0"));
        assert_eq!(manifest.first_bin(), Some(("bunts", "./bin/bunts.js")));
    }

    #[test]
    fn test_repo_name_from_configured_remote() {
        let dir = setup_project();
        init_git_remote(dir.path(), "git@github.com:org/bunts.git");

        assert_eq!(repo_name(dir.path()), Some("bunts".to_string()));
    }

    #[test]
    fn test_repo_name_without_remote() {
        let dir = setup_project();
        let init = std::process::Command::new("git")
            .arg("-C")
            .arg(dir.path())
            .arg("init")
            .output()
            .unwrap();
        assert!(init.status.success());

        assert_eq!(repo_name(dir.path()), None);
    }

    #[test]
    fn test_formatted_remote_name_round_trip() {
        let dir = setup_project();
        init_git_remote(dir.path(), "git@github.com:org/MyRepoName.git");

        let name = repo_name(dir.path()).unwrap();
        assert_eq!(name, "MyRepoName");
        assert_eq!(format_name(&name), "my-repo-name");
    }
}
