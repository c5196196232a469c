use crate::support::{leaf, submenu};
use shelltray::config::MenuNode;
use shelltray::menu::layout::{actions, layout, MenuEntry};

fn labels(entries: &[MenuEntry]) -> Vec<&str> {
    entries.iter().map(MenuEntry::label).collect()
}

#[test]
fn submenu_with_single_leaf() {
    // Arrange
    let nodes = vec![submenu("A", vec![leaf("B", &["x"])])];

    // Act
    let entries = layout(&nodes);

    // Assert
    assert_eq!(entries.len(), 1);
    match &entries[0] {
        MenuEntry::Submenu { label, children, .. } => {
            assert_eq!(label, "A");
            assert_eq!(children.len(), 1);
            match &children[0] {
                MenuEntry::Action { label, command, .. } => {
                    assert_eq!(label, "B");
                    assert_eq!(command, &vec!["x".to_string()]);
                }
                other => panic!("expected leaf, got {:?}", other),
            }
        }
        other => panic!("expected submenu, got {:?}", other),
    }
}

#[test]
fn declaration_order_is_preserved_at_every_depth() {
    // Arrange
    let nodes = vec![
        leaf("zeta", &["z"]),
        submenu(
            "alpha",
            vec![
                leaf("m", &["m"]),
                submenu("deep", vec![leaf("3", &[]), leaf("1", &[]), leaf("2", &[])]),
                leaf("b", &["b"]),
            ],
        ),
        leaf("middle", &["mid"]),
    ];

    // Act
    let entries = layout(&nodes);

    // Assert
    assert_eq!(labels(&entries), ["zeta", "alpha", "middle"]);
    let MenuEntry::Submenu { children, .. } = &entries[1] else { panic!("alpha should be a submenu") };
    assert_eq!(labels(children), ["m", "deep", "b"]);
    let MenuEntry::Submenu { children: deep, .. } = &children[1] else { panic!("deep should be a submenu") };
    assert_eq!(labels(deep), ["3", "1", "2"]);
}

#[test]
fn ids_encode_tree_position() {
    let nodes = vec![
        leaf("first", &["a"]),
        submenu("group", vec![leaf("inner", &["b"]), submenu("more", vec![leaf("leaf", &["c"])])]),
    ];

    let entries = layout(&nodes);

    let ids: Vec<&str> = actions(&entries).into_iter().map(MenuEntry::id).collect();
    assert_eq!(ids, ["node::0", "node::1/0", "node::1/1/0"]);
    assert_eq!(entries[1].id(), "node::1");
}

#[test]
fn children_take_precedence_over_command() {
    // Arrange
    let mut parent = submenu("parent", vec![leaf("child", &["child.exe"])]);
    parent.cmd = vec!["parent.exe".to_string()];

    // Act
    let entries = layout(&[parent]);

    // Assert
    assert!(matches!(entries[0], MenuEntry::Submenu { .. }));
    let commands: Vec<&Vec<String>> = actions(&entries)
        .into_iter()
        .filter_map(|e| match e {
            MenuEntry::Action { command, .. } => Some(command),
            _ => None,
        })
        .collect();
    assert_eq!(commands, [&vec!["child.exe".to_string()]]);
}

#[test]
fn empty_leaf_is_kept_as_inert_action() {
    let nodes = vec![MenuNode { name: "Label only".into(), ..Default::default() }];

    let entries = layout(&nodes);

    assert_eq!(
        entries,
        [MenuEntry::Action { id: "node::0".into(), label: "Label only".into(), icon: None, command: vec![] }]
    );
}

#[test]
fn leaf_icons_are_carried_through() {
    let mut node = leaf("App", &["app"]);
    node.icon = Some("icons/app.png".into());

    let entries = layout(&[node]);

    assert!(matches!(&entries[0], MenuEntry::Action { icon: Some(icon), .. } if icon == "icons/app.png"));
}

#[test]
fn empty_menu_has_no_entries() {
    assert!(layout(&[]).is_empty());
}

#[test]
fn deep_trees_are_walked_fully() {
    // Arrange
    let mut node = leaf("bottom", &["bottom.sh"]);
    for depth in 0..50 {
        node = submenu(&format!("level {}", depth), vec![node]);
    }

    // Act
    let entries = layout(&[node]);

    // Assert
    let leaves = actions(&entries);
    assert_eq!(leaves.len(), 1);
    assert_eq!(leaves[0].label(), "bottom");
    assert_eq!(leaves[0].id().matches('/').count(), 50);
}
