//! Summarization form feature module.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Owned view-state
//! - `intent.rs` - User/system actions
//! - `reducer.rs` - State transitions
//! - `view.rs` - Pure state → output mapping
//! - `panel.rs` - Terminal rendering
//! - `controller.rs` - Event handlers tying the above together

mod controller;
mod intent;
mod panel;
mod reducer;
mod state;
mod validation;
mod view;

pub use controller::FormController;
pub use intent::FormIntent;
pub use panel::render_form;
pub use reducer::FormReducer;
pub use state::{FormState, FormStatus, FAILED_MESSAGE, SUBMIT_BUSY_LABEL, SUBMIT_LABEL};
pub use validation::{
    build_request, parse_length, validate_text, ValidationError, DEFAULT_LENGTH, MAX_CHARS,
};
pub use view::{render_counter, render_output, CharCounter, OutputView, LOADING_MESSAGE};
