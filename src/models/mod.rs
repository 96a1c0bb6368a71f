pub mod generation;
pub mod openai;

pub use generation::*;
pub use openai::*;
