//! Input handling: platform-agnostic event types, key actions, and the
//! processor that converts raw window events into engine commands.

mod event;
mod keyboard;
mod processor;

pub use event::{InputEvent, PointerButton};
pub use keyboard::KeyAction;
pub use processor::InputProcessor;
