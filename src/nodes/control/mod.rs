mod selector;
pub use selector::*;
mod sequence;
pub use sequence::*;
