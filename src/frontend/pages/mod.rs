//! Page components routed from the app root.

mod dashboard;
mod gallery;
mod home;
mod login;
pub(crate) mod manager;
mod messages;
mod not_found;
mod protected;

pub use dashboard::{DashboardHome, DashboardLayout};
pub use gallery::GalleryPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use manager::{JourneyPage, PressReleasePage, SpeechesPage};
pub use messages::MessagesPage;
pub use not_found::NotFound;
pub use protected::ProtectedRoute;
