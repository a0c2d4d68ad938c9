pub mod catalog;

pub use auth::*;
pub use key_sequence::*;
pub use navigation::*;
pub use storage::*;
pub use token::{Clock, SystemClock, TokenStatus};

mod auth;
mod key_sequence;
mod navigation;
mod storage;
pub mod token;
