//! CLI command handlers. Each command is in its own file.

mod add;
mod clear;
mod copy;
mod list;
mod remove;

pub use add::run_add;
pub use clear::run_clear;
pub use copy::run_copy;
pub use list::run_list;
pub use remove::{position_to_index, run_remove};
