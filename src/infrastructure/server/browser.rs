//! Platform browser opener

use std::io;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;

/// Command that opens `url` in the default browser on this platform
fn opener(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(url);
        cmd
    } else if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        // The empty argument is the window title `start` expects first
        cmd.args(["/C", "start", "", url]);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(url);
        cmd
    }
}

/// Spawn the platform opener; a detached thread reaps it once it exits
pub fn open_browser(url: &str) -> io::Result<()> {
    let child = opener(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    reap(child);
    Ok(())
}

fn reap(mut child: Child) -> thread::JoinHandle<io::Result<ExitStatus>> {
    thread::spawn(move || child.wait())
}
