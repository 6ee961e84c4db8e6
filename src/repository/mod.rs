mod history;
mod store;

pub use history::*;
pub use store::*;
