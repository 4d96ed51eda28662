use simple_crossing::{Direction, Input};
use winit::event::VirtualKeyCode;

/// Every key the game reacts to, in polling order.
pub(crate) const GAME_KEYS: [VirtualKeyCode; 5] = [
    VirtualKeyCode::Left,
    VirtualKeyCode::Up,
    VirtualKeyCode::Right,
    VirtualKeyCode::Down,
    VirtualKeyCode::Space,
];

/// Translate a key code into a game input. Other keys are ignored.
pub(crate) fn map_key(key: VirtualKeyCode) -> Option<Input> {
    match key {
        VirtualKeyCode::Left => Some(Input::Move(Direction::Left)),
        VirtualKeyCode::Up => Some(Input::Move(Direction::Up)),
        VirtualKeyCode::Right => Some(Input::Move(Direction::Right)),
        VirtualKeyCode::Down => Some(Input::Move(Direction::Down)),
        VirtualKeyCode::Space => Some(Input::Confirm),
        _ => None,
    }
}
