mod modules;
mod symbols;

pub use modules::*;
pub use symbols::*;
