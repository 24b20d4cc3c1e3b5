use anyhow::Result;
use clap::Parser;

use bump_action::config::Config;
use bump_action::git::GitCli;
use bump_action::{event, orchestrator, ui};

#[derive(clap::Parser)]
#[command(
    name = "bump-action",
    about = "Bump the manifest version from commit messages and sync it back"
)]
struct Args {
    #[arg(short, long, help = "Override the workspace directory")]
    workspace: Option<String>,

    #[arg(short, long, help = "Override the event payload path")]
    event: Option<String>,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("bump-action {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            ui::display_fatal(&e.to_string());
            std::process::exit(1);
        }
    };
    if let Some(workspace) = args.workspace {
        config.workspace = workspace.into();
    }
    if let Some(event_path) = args.event {
        config.event_path = Some(event_path.into());
    }

    let messages = match event::commit_messages(config.event_path.as_deref()) {
        Ok(messages) => messages,
        Err(e) => {
            ui::display_fatal(&e.to_string());
            std::process::exit(1);
        }
    };
    ui::display_commit_batch(&messages);

    let git = GitCli::new(config.workspace.clone());
    match orchestrator::run(&config, &messages, &git) {
        Ok(outcome) => {
            ui::display_success(outcome.message());
            Ok(())
        }
        Err(e) => {
            ui::display_fatal(&e.to_string());
            ui::display_fatal("Failed to bump version");
            std::process::exit(1);
        }
    }
}
