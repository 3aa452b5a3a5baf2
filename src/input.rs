//! Input handling for the display.
//!
//! Raw window events are reduced to the few actions the display cares
//! about: the pointer moving over the canvas, and a request to quit.
//! Pointer coordinates are physical pixels relative to the canvas, the same
//! units the layout uses.

use glam::Vec2;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Something the display should react to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputAction {
    /// Pointer moved to this canvas position.
    PointerMoved(Vec2),
    /// Pointer left the canvas.
    PointerLeft,
    /// User asked to close the window.
    Exit,
}

/// Pointer state tracking.
#[derive(Debug, Default)]
pub struct Input {
    pointer: Option<Vec2>,
    moves: u64,
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last known pointer position, or `None` if it is outside the canvas.
    pub fn pointer(&self) -> Option<Vec2> {
        self.pointer
    }

    /// Number of pointer moves seen so far.
    pub fn pointer_moves(&self) -> u64 {
        self.moves
    }

    /// Process a winit window event.
    pub(crate) fn handle_event(&mut self, event: &WindowEvent) -> Option<InputAction> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                Some(self.pointer_moved(Vec2::new(position.x as f32, position.y as f32)))
            }

            WindowEvent::CursorLeft { .. } => {
                self.pointer = None;
                Some(InputAction::PointerLeft)
            }

            WindowEvent::KeyboardInput { event, .. } => {
                let escape = event.physical_key == PhysicalKey::Code(KeyCode::Escape);
                (escape && event.state == ElementState::Pressed).then_some(InputAction::Exit)
            }

            _ => None,
        }
    }

    fn pointer_moved(&mut self, position: Vec2) -> InputAction {
        self.pointer = Some(position);
        self.moves += 1;
        InputAction::PointerMoved(position)
    }
}
