//! State structs for the UI layer, split by concern: general feedback state
//! and per-form input state.

pub mod forms;
pub mod ui_state;

pub use forms::*;
pub use ui_state::UiState;
