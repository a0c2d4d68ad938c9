pub use gallery::*;
pub use id::*;
pub use journey::*;
pub use language::*;
pub use media::*;
pub use message::*;
pub use speech::*;
pub use wire::today;

mod gallery;
mod id;
mod journey;
mod language;
mod media;
mod message;
mod speech;
mod wire;
