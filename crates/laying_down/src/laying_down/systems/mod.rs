//! LayingDown systems.

pub mod guard;
pub mod speed;
pub mod toggle;


pub use guard::*;
pub use speed::*;
pub use toggle::*;
