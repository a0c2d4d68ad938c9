pub use content::*;
pub use fields::{FieldKind, FieldSpec};
pub use gallery::{Direction, REORDER_ENDPOINT};
pub use resource::*;
pub use resources::*;

mod content;
pub mod fields;
pub mod gallery;
mod resource;
mod resources;
