mod evaluation;
mod policy;

pub use evaluation::*;
pub use policy::*;
