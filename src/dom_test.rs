use super::*;

fn page() -> MemoryDom {
    let mut dom = MemoryDom::new();
    dom.insert("box", ElementState::new().with_class("card").with_text("hello"));
    dom.insert("answer", ElementState::new().with_display("none"));
    dom
}

#[test]
fn contains_reports_known_ids_only() {
    let dom = page();
    assert!(dom.contains("box"));
    assert!(!dom.contains("missing"));
}

#[test]
fn set_class_adds_and_removes() {
    let mut dom = page();
    dom.set_class("box", "expanded", true).expect("add");
    assert!(dom.has_class("box", "expanded").expect("read"));
    assert!(dom.has_class("box", "card").expect("read"));

    dom.set_class("box", "expanded", false).expect("remove");
    assert!(!dom.has_class("box", "expanded").expect("read"));
    assert!(dom.has_class("box", "card").expect("read"));
}

#[test]
fn set_class_rejects_invalid_tokens() {
    let mut dom = page();
    assert!(matches!(dom.set_class("box", "", true), Err(ToggleError::Host(_))));
    assert!(matches!(dom.set_class("box", "two words", true), Err(ToggleError::Host(_))));
    assert_eq!(dom.element("box").map(|e| e.classes.len()), Some(1));
}

#[test]
fn text_and_display_round_trip_through_accessors() {
    let mut dom = page();
    dom.set_text("box", "bye").expect("text");
    dom.set_display("answer", "block").expect("display");
    assert_eq!(dom.element("box").map(|e| e.text.as_str()), Some("bye"));
    assert_eq!(dom.display("answer").expect("display"), "block");
}

#[test]
fn unset_display_reads_empty() {
    let dom = page();
    assert_eq!(dom.display("box").expect("display"), "");
}

#[test]
fn every_accessor_reports_missing_element() {
    let mut dom = page();
    assert!(matches!(dom.has_class("nope", "x"), Err(ToggleError::ElementNotFound { id }) if id == "nope"));
    assert!(matches!(dom.set_class("nope", "x", true), Err(ToggleError::ElementNotFound { .. })));
    assert!(matches!(dom.set_text("nope", "x"), Err(ToggleError::ElementNotFound { .. })));
    assert!(matches!(dom.display("nope"), Err(ToggleError::ElementNotFound { .. })));
    assert!(matches!(dom.set_display("nope", "x"), Err(ToggleError::ElementNotFound { .. })));
}

#[test]
fn remove_drops_element() {
    let mut dom = page();
    let removed = dom.remove("answer").expect("present");
    assert_eq!(removed.display, "none");
    assert!(!dom.contains("answer"));
}
