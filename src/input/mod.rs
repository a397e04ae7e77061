use macroquad::input::{KeyCode, MouseButton, is_key_pressed, is_mouse_button_pressed, mouse_position};

/// Input translated out of macroquad so entities can react without a window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Left click at a pixel offset within the window
    Click { x: f32, y: f32 },
    /// Drop a glider with its top-left corner under the cursor
    Stamp { x: f32, y: f32 },
    TogglePause,
    /// Advance exactly one generation
    Step,
    Clear,
    Randomize,
    Quit,
}

/// Key bindings, checked in order every frame
const KEY_BINDINGS: [(KeyCode, InputEvent); 5] = [
    (KeyCode::Space, InputEvent::TogglePause),
    (KeyCode::N, InputEvent::Step),
    (KeyCode::C, InputEvent::Clear),
    (KeyCode::R, InputEvent::Randomize),
    (KeyCode::Escape, InputEvent::Quit),
];

/// Collect this frame's input events
pub fn poll_events() -> Vec<InputEvent> {
    let (x, y) = mouse_position();

    let mut events: Vec<InputEvent> = KEY_BINDINGS
        .iter()
        .filter(|(key, _)| is_key_pressed(*key))
        .map(|(_, event)| *event)
        .collect();

    if is_mouse_button_pressed(MouseButton::Left) {
        events.push(InputEvent::Click { x, y });
    }
    if is_key_pressed(KeyCode::G) {
        events.push(InputEvent::Stamp { x, y });
    }

    events
}
