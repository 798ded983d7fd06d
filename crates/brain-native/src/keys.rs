use winit::keyboard::{Key, NamedKey};

/// Translate a winit logical key to the DOM `KeyboardEvent.key` string the
/// session understands.
pub fn dom_key(key: &Key) -> Option<&str> {
    match key {
        Key::Named(NamedKey::ArrowUp) => Some("ArrowUp"),
        Key::Named(NamedKey::ArrowDown) => Some("ArrowDown"),
        Key::Named(NamedKey::ArrowLeft) => Some("ArrowLeft"),
        Key::Named(NamedKey::ArrowRight) => Some("ArrowRight"),
        Key::Named(NamedKey::Shift) => Some("Shift"),
        Key::Character(s) => Some(s.as_str()),
        _ => None,
    }
}
