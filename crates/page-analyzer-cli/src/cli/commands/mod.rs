//! CLI command handlers, one per file.

mod add;
mod completions;
mod list;
mod show;

pub use add::run_add;
pub use completions::{run_completions, run_man};
pub use list::run_list;
pub use show::run_show;
