use paneldom::element::{Content, Element};
use paneldom::event::{Key, Modifiers, MouseButton};
use paneldom::hit::{find, hit_clickable, path_to};
use paneldom::types::{Direction, Display, Size};

// =============================================================================
// Element Builder Tests
// =============================================================================

#[test]
fn test_default_ids_are_unique() {
    let a = Element::box_();
    let b = Element::box_();
    assert_ne!(a.id, b.id);
}

#[test]
fn test_constructors_set_direction() {
    assert_eq!(Element::row().direction, Direction::Row);
    assert_eq!(Element::col().direction, Direction::Column);
}

#[test]
fn test_text_content() {
    let el = Element::text("hello");
    assert!(matches!(el.content, Content::Text(ref t) if t == "hello"));
}

#[test]
fn test_builder_chain() {
    let el = Element::box_()
        .id("panel")
        .width(Size::Fill)
        .height(Size::Fixed(3))
        .padding(1)
        .display(Display::None)
        .clickable(true)
        .focusable(true)
        .disabled(true);

    assert_eq!(el.id, "panel");
    assert_eq!(el.width, Size::Fill);
    assert_eq!(el.height, Size::Fixed(3));
    assert_eq!(el.padding, 1);
    assert_eq!(el.display, Display::None);
    assert!(el.clickable);
    assert!(el.focusable);
    assert!(el.disabled);
}

#[test]
fn test_data_attributes() {
    let el = Element::box_()
        .data("role", "button")
        .data("class", "header");
    assert_eq!(el.get_data("role").map(String::as_str), Some("button"));
    assert_eq!(el.get_data("class").map(String::as_str), Some("header"));
    assert_eq!(el.get_data("missing"), None);
}

#[test]
fn test_child_accumulates() {
    let el = Element::col()
        .child(Element::text("a"))
        .child(Element::text("b"));
    let Content::Children(children) = &el.content else {
        panic!("expected children");
    };
    assert_eq!(children.len(), 2);
}

// =============================================================================
// Tree Walking Tests
// =============================================================================

fn sample_tree() -> Element {
    Element::col().id("root").child(
        Element::row()
            .id("header")
            .clickable(true)
            .child(Element::text("▶").id("icon").clickable(true))
            .child(Element::text("Title").id("title")),
    )
}

#[test]
fn test_find_nested() {
    let tree = sample_tree();
    assert!(find(&tree, "icon").is_some());
    assert!(find(&tree, "root").is_some());
    assert!(find(&tree, "nope").is_none());
}

#[test]
fn test_path_is_target_first() {
    let tree = sample_tree();
    let path = path_to(&tree, "icon").unwrap();
    let ids: Vec<&str> = path.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["icon", "header", "root"]);
}

#[test]
fn test_path_missing_target() {
    let tree = sample_tree();
    assert!(path_to(&tree, "nope").is_none());
}

#[test]
fn test_hit_clickable_finds_deepest() {
    let tree = sample_tree();
    // The title itself is not clickable; the hit resolves to the header.
    assert_eq!(hit_clickable(&tree, "title").map(|e| e.id.as_str()), Some("header"));
    assert_eq!(hit_clickable(&tree, "icon").map(|e| e.id.as_str()), Some("icon"));
}

#[test]
fn test_hit_clickable_skips_hidden() {
    let tree = Element::col().id("root").clickable(true).child(
        Element::box_()
            .id("hidden")
            .clickable(true)
            .display(Display::None)
            .child(Element::text("x").id("leaf")),
    );
    assert_eq!(
        hit_clickable(&tree, "leaf").map(|e| e.id.as_str()),
        Some("root")
    );
}

// =============================================================================
// Event Conversion Tests
// =============================================================================

#[test]
fn test_key_conversion() {
    use crossterm::event::KeyCode;
    assert_eq!(Key::from(KeyCode::Enter), Key::Enter);
    assert_eq!(Key::from(KeyCode::Char('x')), Key::Char('x'));
    assert_eq!(Key::from(KeyCode::F(5)), Key::F(5));
}

#[test]
fn test_modifier_conversion() {
    use crossterm::event::KeyModifiers;
    let mods = Modifiers::from(KeyModifiers::CONTROL | KeyModifiers::SHIFT);
    assert!(mods.ctrl);
    assert!(mods.shift);
    assert!(!mods.alt);
    assert!(!mods.none());
    assert!(Modifiers::from(KeyModifiers::NONE).none());
}

#[test]
fn test_mouse_button_conversion() {
    use crossterm::event::MouseButton as CtBtn;
    assert_eq!(MouseButton::from(CtBtn::Left), MouseButton::Left);
    assert_eq!(MouseButton::from(CtBtn::Middle), MouseButton::Middle);
}
