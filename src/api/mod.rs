pub use public::*;
pub use secure::*;
pub use transport::*;
pub use upload::*;

mod public;
mod secure;
mod transport;
mod upload;
