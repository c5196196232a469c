use crate::error::{Error, Result};
use crate::menu::resolve::ResolvedCommand;
use std::process::{Command, Stdio};

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Starts the command and lets it run on its own. Only the start is checked;
/// the exit is collected on a background thread so finished children do not
/// linger as zombies.
pub fn spawn_detached(command: &ResolvedCommand) -> Result<u32> {
    let mut process = Command::new(&command.program);
    process
        .args(&command.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    if let Some(dir) = &command.dir {
        process.current_dir(dir);
    }

    #[cfg(windows)]
    {
        use std::os::windows::process::CommandExt;
        process.creation_flags(CREATE_NO_WINDOW);
    }

    let mut child = process.spawn().map_err(|source| Error::CommandStart {
        command: command.display(),
        source,
    })?;

    let pid = child.id();
    std::thread::spawn(move || {
        if let Err(e) = child.wait() {
            log::debug!("Could not reap process {}: {}", pid, e);
        }
    });

    Ok(pid)
}
