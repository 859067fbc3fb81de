use super::*;

// --- Button ---

#[test]
fn button_variants_distinct() {
    assert_eq!(Button::Primary, Button::Primary);
    assert_ne!(Button::Primary, Button::Middle);
    assert_ne!(Button::Primary, Button::Secondary);
}

// --- WheelDelta ---

#[test]
fn wheel_delta_is_plain_data() {
    let w = WheelDelta { dx: 1.5, dy: -3.0 };
    let copy = w;
    assert_eq!(copy.dx, 1.5);
    assert_eq!(copy.dy, -3.0);
}

// --- InputState ---

#[test]
fn default_state_is_idle() {
    assert_eq!(InputState::default(), InputState::Idle);
}

#[test]
fn dragging_carries_the_grab_anchor() {
    let state = InputState::Dragging { grab: Point::new(12.0, 34.0) };
    let InputState::Dragging { grab } = state else {
        panic!("expected dragging state");
    };
    assert_eq!(grab, Point::new(12.0, 34.0));
}

#[test]
fn states_compare_by_content() {
    let a = InputState::Dragging { grab: Point::new(1.0, 2.0) };
    let b = InputState::Dragging { grab: Point::new(1.0, 2.0) };
    let c = InputState::Dragging { grab: Point::new(9.0, 9.0) };
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, InputState::Idle);
}
