//! Path layout of the site and the guard in front of the admin screens.

pub mod guard;

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/admin/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Query parameter that carries the originally requested location to the
/// login page.
pub const RETURN_PARAM: &str = "from";

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ManagerRoute {
    Journey,
    Speeches,
    PressRelease,
    Gallery,
    Messages,
}

impl ManagerRoute {
    pub const ALL: [ManagerRoute; 5] = [
        Self::Journey,
        Self::Speeches,
        Self::PressRelease,
        Self::Gallery,
        Self::Messages,
    ];

    pub fn segment(&self) -> &'static str {
        match self {
            Self::Journey => "journey",
            Self::Speeches => "speeches",
            Self::PressRelease => "press-release",
            Self::Gallery => "gallery",
            Self::Messages => "messages",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Journey => "Life Journey",
            Self::Speeches => "Speeches",
            Self::PressRelease => "Press Release",
            Self::Gallery => "Gallery",
            Self::Messages => "Messages",
        }
    }

    pub fn path(&self) -> String {
        format!("{}/{}", DASHBOARD_PATH, self.segment())
    }
}
