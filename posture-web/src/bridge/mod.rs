//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod landmarks;
mod report;
mod session;

pub use landmarks::normalize_landmarks;

pub use report::FrameReport;

pub use session::{
    configure,
    current_config,
    set_sensitivity,
    get_sensitivity,
    start_session,
    stop_session,
    is_tracking,
    evaluate_frame,
    evaluate_once,
};
