//! Reusable UI pieces shared by the public site and the admin panel.

mod alert;
mod button;
mod field;
mod footer;
mod header;
mod input;

pub use alert::{Alert, AlertVariant, ErrorAlert, NoticeBanner};
pub use button::{Button, ButtonVariant};
pub use field::FieldInput;
pub use footer::Footer;
pub use header::Header;
pub use input::{PasswordInput, TextArea, TextInput};
