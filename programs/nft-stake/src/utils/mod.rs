pub mod clock;
pub use clock::*;

pub mod token;
pub use token::*;
