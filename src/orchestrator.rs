//! Bump workflow orchestration.
//!
//! Sequences the run: manifest load, bump-loop guard, classification,
//! version computation, manifest writes on the detached head and on the
//! live branch, and remote synchronization. All "nothing to do" paths are
//! successful skips, never errors.

use crate::classifier::{self, Classification};
use crate::config::Config;
use crate::error::Result;
use crate::git::VersionControl;
use crate::guard;
use crate::manifest::Manifest;
use crate::ui;
use crate::version::{self, BumpClass};

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The run ended early with nothing to do
    Skipped(String),
    /// A new version was written and synchronized
    Bumped { tag: String },
}

impl RunOutcome {
    fn skipped(message: &str) -> Self {
        RunOutcome::Skipped(message.to_string())
    }

    /// The success line for this outcome
    pub fn message(&self) -> &str {
        match self {
            RunOutcome::Skipped(message) => message,
            RunOutcome::Bumped { .. } => "Version bumped!",
        }
    }
}

/// Run the bump workflow.
///
/// The commit batch comes from the triggering event; all other inputs come
/// from the configuration. Version-control commands run strictly one after
/// another through the given runner.
pub fn run(config: &Config, messages: &[String], git: &impl VersionControl) -> Result<RunOutcome> {
    let mut manifest = Manifest::load(config.manifest_path())?;

    if guard::already_bumped(
        messages,
        &config.commit_message,
        &config.tag_prefix,
        &config.bump_policy,
    )? {
        return Ok(RunOutcome::skipped(
            "No action necessary because we found a previous bump!",
        ));
    }

    let classification = classifier::classify(
        messages,
        &config.wording,
        config.default_class.as_deref(),
        config.preid.as_deref(),
    );

    let class = match classification {
        Classification::None => {
            return Ok(RunOutcome::skipped("No version keywords found, skipping bump."));
        }
        Classification::Unsupported(value) => {
            ui::display_status(&format!("bump class '{}' is not supported", value));
            return Ok(RunOutcome::skipped(
                "only patch, minor, major supported so far, skipping bump",
            ));
        }
        Classification::Class(BumpClass::Prerelease, _) => {
            return Ok(RunOutcome::skipped(
                "only patch, minor, major supported so far, skipping bump",
            ));
        }
        Classification::Class(class, _) => class,
    };

    if !config.push {
        return Ok(RunOutcome::skipped(
            "User requested to skip pushing the new tag and manifest. Finished.",
        ));
    }

    git.run(&["config", "user.name", &config.git_user])?;
    git.run(&["config", "user.email", &config.git_email])?;
    git.run(&["config", "pull.rebase", "false"])?;

    let branch = config.resolve_target_branch()?;
    ui::display_status(&format!("target branch: {}", branch));

    // First pass on the detached head the checkout left us on
    let current = manifest.version();
    ui::display_status(&format!("current: '{}' / bump: {}", current, class));
    let next = version::next_version(&current, &class)?;
    manifest.set_version(&next.to_string());
    manifest.save()?;

    let new_tag = format!("{}{}", config.tag_prefix, next);
    if !config.skip_commit {
        git.run(&["commit", "-a", "-m", &config.render_commit_message(&new_tag)])?;
    }

    // Second pass on the live branch. The bump is recomputed from the same
    // current version and class, so both passes write the same version.
    if config.is_pull_request() {
        git.run(&["fetch"])?;
    }
    git.run(&["checkout", &branch])?;

    let next = version::next_version(&current, &class)?;
    manifest.set_version(&next.to_string());
    manifest.save()?;

    let new_tag = format!("{}{}", config.tag_prefix, next);
    println!("::set-output name=newTag::{}", new_tag);

    if !config.skip_commit {
        // The branch checkout may already carry the bump depending on how the
        // workflow checked out the repository; a failure here is tolerated
        if let Err(e) = git.run(&["commit", "-a", "-m", &config.render_commit_message(&new_tag)]) {
            ui::display_warning(&format!("commit on '{}' failed: {}", branch, e));
        }
    }

    let remote = config.remote_url()?;
    if !config.skip_tag {
        ui::display_status("pull + tag");
        git.run(&["pull", &remote, "--allow-unrelated-histories"])?;
        git.run(&["tag", &new_tag])?;
        if !config.skip_push {
            ui::display_status("push");
            git.run(&["push", &remote, "-f", "--follow-tags"])?;
            git.run(&["push", &remote, "-f", "--tags"])?;
        }
    } else if !config.skip_push {
        ui::display_status("pull + push");
        git.run(&["pull", &remote, "--allow-unrelated-histories"])?;
        git.run(&["push", &remote])?;
    }

    Ok(RunOutcome::Bumped { tag: new_tag })
}
