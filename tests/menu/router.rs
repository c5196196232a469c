use shelltray::menu::router::{EventRouter, Flow};
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn router_dispatches_only_exact_ids() {
    // Arrange
    let calls = Rc::new(RefCell::new(Vec::new()));
    let mut router = EventRouter::new();
    for id in ["node::1", "node::1/0"] {
        let calls = calls.clone();
        router.register(id, Box::new(move |event_id| {
            calls.borrow_mut().push(event_id.to_string());
            Ok(Flow::Continue)
        }));
    }

    // Act
    for event_id in ["node::1/0", "node::1", "node::", "node::1/", "node::10"] {
        router.route(event_id).unwrap();
    }

    // Assert
    assert_eq!(*calls.borrow(), ["node::1/0", "node::1"]);
}

#[test]
fn router_returns_quit_handler_result() {
    // Arrange
    let mut router = EventRouter::new();
    router.register("quit", Box::new(|_| Ok(Flow::Quit)));

    // Act
    let result = router.route("quit").unwrap();

    // Assert
    assert_eq!(result, Flow::Quit);
}

#[test]
fn router_returns_continue_for_unmatched_events() {
    // Arrange
    let mut router = EventRouter::new();
    router.register("quit", Box::new(|_| Ok(Flow::Quit)));

    // Act
    let result = router.route("unknown").unwrap();

    // Assert
    assert_eq!(result, Flow::Continue);
}

#[test]
fn router_passes_event_id_to_handler() {
    // Arrange
    let received_id = Rc::new(RefCell::new(String::new()));
    let received_id_clone = received_id.clone();
    let mut router = EventRouter::new();
    router.register("node::test_action", Box::new(move |event_id| {
        *received_id_clone.borrow_mut() = event_id.to_string();
        Ok(Flow::Continue)
    }));

    // Act
    let _ = router.route("node::test_action");

    // Assert
    assert_eq!(*received_id.borrow(), "node::test_action");
}

#[test]
fn later_registration_replaces_earlier_one() {
    // Arrange
    let first_called = Rc::new(RefCell::new(false));
    let second_called = Rc::new(RefCell::new(false));
    let first_clone = first_called.clone();
    let second_clone = second_called.clone();
    let mut router = EventRouter::new();
    router.register("node::0", Box::new(move |_| {
        *first_clone.borrow_mut() = true;
        Ok(Flow::Continue)
    }));
    router.register("node::0", Box::new(move |_| {
        *second_clone.borrow_mut() = true;
        Ok(Flow::Continue)
    }));

    // Act
    let _ = router.route("node::0");

    // Assert
    assert!(!*first_called.borrow());
    assert!(*second_called.borrow());
    assert_eq!(router.len(), 1);
}

#[test]
fn handler_errors_are_returned_to_caller() {
    let mut router = EventRouter::new();
    router.register("broken", Box::new(|_| Err(anyhow::anyhow!("handler failed"))));

    let result = router.route("broken");

    assert_eq!(result.unwrap_err().to_string(), "handler failed");
}

#[test]
fn empty_router_ignores_everything() {
    let router = EventRouter::new();

    assert!(router.is_empty());
    assert!(!router.contains("__quit__"));
    assert_eq!(router.route("__quit__").unwrap(), Flow::Continue);
}
