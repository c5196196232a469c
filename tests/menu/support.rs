use shelltray::config::{CommandAlias, Config, MenuDocument, MenuNode};
use shelltray::desktop::Desktop;
use shelltray::error::{Error, Result};
use shelltray::menu::builder::MenuContext;
use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;

#[derive(Default)]
pub struct FakeDesktop {
    pub enabled: Cell<bool>,
    pub fail_changes: bool,
    pub alerts: RefCell<Vec<(String, String)>>,
}

impl FakeDesktop {
    pub fn failing() -> Self {
        Self { fail_changes: true, ..Default::default() }
    }

    pub fn alert_titles(&self) -> Vec<String> {
        self.alerts.borrow().iter().map(|(title, _)| title.clone()).collect()
    }

    fn change(&self, operation: &'static str, enabled: bool) -> Result<()> {
        if self.fail_changes {
            return Err(Error::Registry { operation, reason: "access denied".into() });
        }
        self.enabled.set(enabled);
        Ok(())
    }
}

impl Desktop for FakeDesktop {
    fn is_autostart_enabled(&self) -> bool {
        self.enabled.get()
    }

    fn enable_autostart(&self) -> Result<()> {
        self.change("enable", true)
    }

    fn disable_autostart(&self) -> Result<()> {
        self.change("disable", false)
    }

    fn show_alert(&self, title: &str, message: &str) {
        self.alerts.borrow_mut().push((title.to_string(), message.to_string()));
    }
}

pub fn leaf(name: &str, cmd: &[&str]) -> MenuNode {
    MenuNode {
        name: name.to_string(),
        cmd: cmd.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    }
}

pub fn submenu(name: &str, items: Vec<MenuNode>) -> MenuNode {
    MenuNode { name: name.to_string(), items, ..Default::default() }
}

pub fn config(aliases: &[(&str, &[&str])], menu: Vec<MenuNode>) -> Config {
    Config {
        document: MenuDocument {
            cmds: aliases
                .iter()
                .map(|(name, cmd)| {
                    let alias = CommandAlias { dir: String::new(), cmd: cmd.iter().map(|s| s.to_string()).collect() };
                    (name.to_string(), alias)
                })
                .collect(),
            menu,
        },
        ..Default::default()
    }
}

pub fn context(config: Config, desktop: &Rc<FakeDesktop>) -> MenuContext {
    MenuContext {
        config: Rc::new(config),
        desktop: desktop.clone(),
        asset_dir: PathBuf::from("."),
        restart: None,
    }
}
