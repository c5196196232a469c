use crate::config::{AliasTable, WorkingDirMode};
use crate::paths;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCommand {
    pub program: String,
    pub args: Vec<String>,
    /// `None` inherits the tray's working directory.
    pub dir: Option<PathBuf>,
}

impl ResolvedCommand {
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }

    pub fn display(&self) -> String {
        self.argv().join(" ")
    }
}

/// Expands a node's `cmd` through the alias table. Returns `None` when there
/// is nothing to run.
pub fn resolve(cmd: &[String], aliases: &AliasTable, mode: WorkingDirMode) -> Option<ResolvedCommand> {
    let (head, rest) = cmd.split_first()?;

    let (argv, dir): (Vec<&String>, Option<PathBuf>) = match aliases.get(head) {
        Some(alias) => {
            let dir = match mode {
                WorkingDirMode::Alias if !alias.dir.is_empty() => Some(paths::expand_home(Path::new(&alias.dir))),
                _ => None,
            };
            (alias.cmd.iter().chain(rest).collect(), dir)
        }
        None => (cmd.iter().collect(), None),
    };

    let (program, args) = argv.split_first()?;
    Some(ResolvedCommand {
        program: (*program).clone(),
        args: args.iter().map(|a| (*a).clone()).collect(),
        dir,
    })
}
