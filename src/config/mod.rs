mod format;

pub use format::Format;

use crate::error::{Error, Result};
use crate::paths;
use serde::de::{self, DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// A named base command that menu nodes can reference by putting the alias
/// name first in their `cmd`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandAlias {
    #[serde(default)]
    pub dir: String,
    #[serde(default)]
    pub cmd: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub cmd: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<MenuNode>,
}

impl MenuNode {
    pub fn is_submenu(&self) -> bool {
        !self.items.is_empty()
    }
}

pub type AliasTable = BTreeMap<String, CommandAlias>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuDocument {
    #[serde(default, deserialize_with = "unique_aliases")]
    pub cmds: AliasTable,
    #[serde(default)]
    pub menu: Vec<MenuNode>,
}

/// Reads the `cmds` mapping, rejecting a name that appears twice. The map
/// deserializers of the supported formats would otherwise keep the last one.
fn unique_aliases<'de, D>(deserializer: D) -> std::result::Result<AliasTable, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueAliases;

    impl<'de> Visitor<'de> for UniqueAliases {
        type Value = AliasTable;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("a map of command aliases")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> std::result::Result<AliasTable, A::Error> {
            let mut aliases = AliasTable::new();
            while let Some((name, alias)) = map.next_entry::<String, CommandAlias>()? {
                match aliases.entry(name) {
                    Entry::Occupied(entry) => {
                        return Err(de::Error::custom(format!("duplicate alias `{}`", entry.key())));
                    }
                    Entry::Vacant(entry) => {
                        entry.insert(alias);
                    }
                }
            }
            Ok(aliases)
        }
    }

    deserializer.deserialize_map(UniqueAliases)
}

/// Whether an alias's `dir` becomes the working directory of the commands
/// that go through it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkingDirMode {
    #[default]
    Alias,
    Inherit,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu_file: Option<PathBuf>,
    #[serde(default)]
    pub working_dir: WorkingDirMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tray_icon: Option<PathBuf>,
    #[serde(flatten)]
    pub document: MenuDocument,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        read_structured(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let save_error = |reason: String| Error::ConfigSave { path: path.to_path_buf(), reason };

        let content = Format::from_path(path).render(self).map_err(save_error)?;
        ensure_parent_dir(path).map_err(|e| save_error(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| save_error(e.to_string()))?;
        Ok(())
    }

    /// Loads the config, writing an empty one first when the file does not exist.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Err(e) if e.is_missing_config() => {
                log::info!("No config at {}, writing default", path.display());
                let config = Self::default();
                config.save(path)?;
                Ok(config)
            }
            other => other,
        }
    }

    /// Replaces the inline document with the contents of `menu_file`, if set.
    /// Relative paths are taken from `base_dir`.
    pub fn resolve_menu_file(mut self, base_dir: &Path) -> Result<Self> {
        let Some(menu_file) = &self.menu_file else {
            return Ok(self);
        };

        let path = paths::resolve(base_dir, menu_file);
        if !self.document.cmds.is_empty() || !self.document.menu.is_empty() {
            log::warn!("Inline menu ignored, using {}", path.display());
        }

        self.document = read_structured(&path)?;
        log::info!("Loaded menu from {}", path.display());
        Ok(self)
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.document.cmds
    }

    pub fn menu(&self) -> &[MenuNode] {
        &self.document.menu
    }
}

fn read_structured<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(Error::ConfigMissing(path.to_path_buf()));
        }
        Err(e) => {
            return Err(Error::ConfigLoad { path: path.to_path_buf(), reason: e.to_string() });
        }
    };

    Format::from_path(path)
        .parse(&content)
        .map_err(|reason| Error::ConfigLoad { path: path.to_path_buf(), reason })
}

fn ensure_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}
