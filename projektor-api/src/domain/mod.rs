mod manager;
mod new_project;
mod project;

pub use manager::*;
pub use new_project::*;
pub use project::*;
