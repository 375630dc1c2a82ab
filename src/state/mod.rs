//! Application state module

mod forms;
mod ui_area;

pub use forms::*;
pub use ui_area::*;
