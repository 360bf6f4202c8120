//! Reminder watcher command.
//!
//! Default mode spawns a detached background process; `--foreground` runs
//! the polling loop in the current terminal, `--stop` terminates a running
//! watcher.

use crate::libs::daemon;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Stop the running watcher
    #[arg(short, long)]
    stop: bool,
    /// Run in the foreground instead of spawning a daemon
    #[arg(short, long)]
    foreground: bool,
}

pub async fn cmd(args: WatchArgs) -> Result<()> {
    if args.stop {
        return daemon::stop();
    }
    if args.foreground {
        return daemon::run_with_signal_handling().await;
    }
    daemon::spawn()
}
