use bevy::prelude::*;

// Everything the game loop reacts to, in the order it happened this frame.
// Window, mouse and keyboard input is translated into these once per frame,
// the spawn timer adds its own ticks.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum GameInput {
    Quit,
    PointerMoved(Vec2), // screen coordinates
    PointerDown,
    KeyDown,
    SpawnTick,
}
