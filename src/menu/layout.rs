use crate::config::MenuNode;

pub const NODE_ID_PREFIX: &str = "node::";

/// A configured menu node with its tray id assigned. Ids encode the node's
/// position in the tree, so they stay stable for a given file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEntry {
    Submenu {
        id: String,
        label: String,
        children: Vec<MenuEntry>,
    },
    Action {
        id: String,
        label: String,
        icon: Option<String>,
        command: Vec<String>,
    },
}

impl MenuEntry {
    pub fn id(&self) -> &str {
        match self {
            MenuEntry::Submenu { id, .. } | MenuEntry::Action { id, .. } => id,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            MenuEntry::Submenu { label, .. } | MenuEntry::Action { label, .. } => label,
        }
    }
}

pub fn layout(nodes: &[MenuNode]) -> Vec<MenuEntry> {
    layout_level(nodes, NODE_ID_PREFIX)
}

fn layout_level(nodes: &[MenuNode], prefix: &str) -> Vec<MenuEntry> {
    nodes
        .iter()
        .enumerate()
        .map(|(idx, node)| {
            let id = format!("{}{}", prefix, idx);
            if node.is_submenu() {
                let children = layout_level(&node.items, &format!("{}/", id));
                MenuEntry::Submenu { id, label: node.name.clone(), children }
            } else {
                MenuEntry::Action {
                    id,
                    label: node.name.clone(),
                    icon: node.icon.clone(),
                    command: node.cmd.clone(),
                }
            }
        })
        .collect()
}

/// Visits every action entry depth-first, in declaration order.
pub fn actions(entries: &[MenuEntry]) -> Vec<&MenuEntry> {
    let mut out = Vec::new();
    collect_actions(entries, &mut out);
    out
}

fn collect_actions<'a>(entries: &'a [MenuEntry], out: &mut Vec<&'a MenuEntry>) {
    for entry in entries {
        match entry {
            MenuEntry::Submenu { children, .. } => collect_actions(children, out),
            MenuEntry::Action { .. } => out.push(entry),
        }
    }
}
