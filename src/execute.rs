use anyhow::Result;
use postlink::format::format_name;
use postlink::project::Project;
use crate::cli::CLI;

pub fn execute(_cli: CLI) -> Result<()> {
    let project_dir = std::env::current_dir()?;
    let project = Project::new(&project_dir);

    // Without a resolvable remote the manifest is left as it is.
    if let Some(repo_name) = project.repo_name() {
        // The remote host and transport are fixed: GitHub over SSH.
        let repo_url = format!("git@github.com:{repo_name}.git");
        let package_name = format_name(&repo_name);
        project.set_repo(&repo_url)?;
        project.set_name(&package_name)?;
    }

    project.link_bin()
}
