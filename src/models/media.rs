use serde::{Deserialize, Serialize};

use super::wire::{lenient_string, today};
use super::{Bilingual, ItemId, Language, deserialize_optional_id};

/// Press releases, interviews and press photos share one collection and are
/// told apart by `type`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaKind {
    PressRelease,
    Interview,
    Photo,
}

impl MediaKind {
    pub const ALL: [MediaKind; 3] = [Self::PressRelease, Self::Interview, Self::Photo];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PressRelease => "press_release",
            Self::Interview => "interview",
            Self::Photo => "photo",
        }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match self {
            Self::PressRelease => lang.pick("Press Releases", "प्रेस विज्ञप्ति"),
            Self::Interview => lang.pick("Interviews", "साक्षात्कार"),
            Self::Photo => lang.pick("Photos", "तस्वीरें"),
        }
    }
}

impl Default for MediaKind {
    fn default() -> Self {
        Self::PressRelease
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq<&str> for MediaKind {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl std::str::FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "press_release" => Ok(Self::PressRelease),
            "interview" => Ok(Self::Interview),
            "photo" => Ok(Self::Photo),
            _ => Err(format!("invalid media type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MediaItem {
    #[serde(
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<ItemId>,
    #[serde(rename = "type")]
    pub kind: MediaKind,
    #[serde(deserialize_with = "lenient_string")]
    pub title_en: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title_hi: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description_en: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description_hi: String,
    #[serde(deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(deserialize_with = "lenient_string")]
    pub image_url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub video_url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub thumbnail: String,
}

impl Default for MediaItem {
    fn default() -> Self {
        Self {
            id: None,
            kind: MediaKind::default(),
            title_en: String::new(),
            title_hi: String::new(),
            description_en: String::new(),
            description_hi: String::new(),
            date: today(),
            image_url: String::new(),
            video_url: String::new(),
            thumbnail: String::new(),
        }
    }
}

impl MediaItem {
    /// Checks the media reference each kind needs before it can be saved.
    pub fn validate(&self) -> Result<(), String> {
        match self.kind {
            MediaKind::Interview if self.video_url.trim().is_empty() => {
                Err("An interview needs a video URL.".to_string())
            }
            MediaKind::Photo if self.image_url.trim().is_empty() => {
                Err("A photo needs an image URL.".to_string())
            }
            _ => Ok(()),
        }
    }

    /// Image to show in listings: the thumbnail, else the main image.
    pub fn preview_url(&self) -> Option<&str> {
        [self.thumbnail.as_str(), self.image_url.as_str()]
            .into_iter()
            .find(|u| !u.trim().is_empty())
    }
}

impl Bilingual for MediaItem {
    fn title_in(&self, lang: Language) -> &str {
        lang.pick(&self.title_en, &self.title_hi)
    }

    fn description_in(&self, lang: Language) -> &str {
        lang.pick(&self.description_en, &self.description_hi)
    }

    fn category(&self) -> &str {
        self.kind.as_str()
    }
}
