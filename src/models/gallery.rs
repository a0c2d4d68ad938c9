use serde::{Deserialize, Serialize};

use super::wire::{lenient_i64, lenient_optional_string, lenient_string, today};
use super::{Bilingual, ItemId, Language, deserialize_optional_id, or_fallback};

pub const GALLERY_CATEGORIES: [&str; 9] = [
    "official",
    "events",
    "public",
    "media",
    "infrastructure",
    "education",
    "speeches",
    "interviews",
    "documentaries",
];

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryKind {
    Photo,
    Video,
}

impl GalleryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Video => "video",
        }
    }

    pub fn tab_label(&self, lang: Language) -> &'static str {
        match self {
            Self::Photo => lang.pick("Photos", "तस्वीरें"),
            Self::Video => lang.pick("Highlights", "मुख्य आकर्षण"),
        }
    }
}

impl Default for GalleryKind {
    fn default() -> Self {
        Self::Photo
    }
}

impl std::fmt::Display for GalleryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for GalleryKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "photo" => Ok(Self::Photo),
            "video" => Ok(Self::Video),
            _ => Err(format!("invalid gallery type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "GalleryRecord", rename_all = "camelCase")]
pub struct GalleryItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<ItemId>,
    #[serde(rename = "type")]
    pub kind: GalleryKind,
    pub title_en: String,
    pub title_hi: String,
    pub description_en: String,
    pub description_hi: String,
    pub category: String,
    pub date: String,
    pub url: String,
    pub thumbnail: String,
    pub duration: String,
    pub sort_order: i64,
}

/// A gallery item as the server sends it. Fields it leaves out take the
/// defaults of the item's own kind.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct GalleryRecord {
    #[serde(default, deserialize_with = "deserialize_optional_id")]
    id: Option<ItemId>,
    #[serde(default, rename = "type")]
    kind: GalleryKind,
    #[serde(default, deserialize_with = "lenient_string")]
    title_en: String,
    #[serde(default, deserialize_with = "lenient_string")]
    title_hi: String,
    #[serde(default, deserialize_with = "lenient_string")]
    description_en: String,
    #[serde(default, deserialize_with = "lenient_string")]
    description_hi: String,
    #[serde(default, deserialize_with = "lenient_string")]
    category: String,
    #[serde(default = "today", deserialize_with = "lenient_string")]
    date: String,
    #[serde(default, deserialize_with = "lenient_string")]
    url: String,
    #[serde(default, deserialize_with = "lenient_string")]
    thumbnail: String,
    #[serde(default, deserialize_with = "lenient_optional_string")]
    duration: Option<String>,
    #[serde(default, deserialize_with = "lenient_i64")]
    sort_order: i64,
}

impl From<GalleryRecord> for GalleryItem {
    fn from(record: GalleryRecord) -> Self {
        let template = GalleryItem::empty(record.kind);
        Self {
            id: record.id,
            kind: record.kind,
            title_en: record.title_en,
            title_hi: record.title_hi,
            description_en: record.description_en,
            description_hi: record.description_hi,
            category: record.category,
            date: record.date,
            url: record.url,
            thumbnail: record.thumbnail,
            duration: record.duration.unwrap_or(template.duration),
            sort_order: record.sort_order,
        }
    }
}

impl Default for GalleryItem {
    fn default() -> Self {
        Self::empty(GalleryKind::Photo)
    }
}

impl GalleryItem {
    /// Blank item of the given kind; videos start with a zero duration.
    pub fn empty(kind: GalleryKind) -> Self {
        Self {
            id: None,
            kind,
            title_en: String::new(),
            title_hi: String::new(),
            description_en: String::new(),
            description_hi: String::new(),
            category: String::new(),
            date: today(),
            url: String::new(),
            thumbnail: String::new(),
            duration: match kind {
                GalleryKind::Video => "00:00".to_string(),
                GalleryKind::Photo => String::new(),
            },
            sort_order: 0,
        }
    }

    pub fn preview_url(&self) -> Option<&str> {
        [self.thumbnail.as_str(), self.url.as_str()]
            .into_iter()
            .find(|u| !u.trim().is_empty())
    }
}

impl Bilingual for GalleryItem {
    fn title_in(&self, lang: Language) -> &str {
        match lang {
            Language::En => or_fallback(&self.title_en, &self.title_hi),
            Language::Hi => or_fallback(&self.title_hi, &self.title_en),
        }
    }

    fn description_in(&self, lang: Language) -> &str {
        lang.pick(&self.description_en, &self.description_hi)
    }

    fn category(&self) -> &str {
        &self.category
    }
}
