use crate::api::AssetKind;
use crate::manager::{Capabilities, FieldKind, FieldSpec, Resource, gallery};
use crate::models::{
    ContactMessage, GALLERY_CATEGORIES, GalleryItem, GalleryKind, ItemId, JourneyEvent,
    MediaItem, Speech,
};
use crate::services::catalog;

const MEDIA_KINDS: &[&str] = &["press_release", "interview", "photo"];

// "all" is a filter, never a stored category.
const SPEECH_CATEGORIES: &[&str] = &[
    "security",
    "defense",
    "economy",
    "education",
    "development",
    "infrastructure",
    "agriculture",
    "technology",
    "healthcare",
    "environment",
    "foreign",
    "employment",
    "other",
];

pub struct JourneyResource;

impl Resource for JourneyResource {
    type Item = JourneyEvent;

    const PATH: &'static str = "/api/journey-events";
    const TITLE: &'static str = "Journey";
    const SINGULAR: &'static str = "Journey event";

    fn empty() -> JourneyEvent {
        JourneyEvent::default()
    }

    fn id(item: &JourneyEvent) -> Option<&ItemId> {
        item.id.as_ref()
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("year", "Year", FieldKind::Text),
            FieldSpec::new("titleEn", "Title (English)", FieldKind::Text),
            FieldSpec::new("titleHi", "Title (Hindi)", FieldKind::Text),
            FieldSpec::new("descriptionEn", "Description (English)", FieldKind::TextArea),
            FieldSpec::new("descriptionHi", "Description (Hindi)", FieldKind::TextArea),
            FieldSpec::new("category", "Category", FieldKind::Text),
            FieldSpec::new("image", "Image", FieldKind::Asset(AssetKind::Image)),
        ];
        FIELDS
    }

    fn columns() -> &'static [&'static str] {
        &["year", "titleEn", "titleHi"]
    }

    fn arrange(items: &mut Vec<JourneyEvent>) {
        catalog::sort_by_id(items, |e| e.id.as_ref());
    }
}

pub struct SpeechResource;

impl Resource for SpeechResource {
    type Item = Speech;

    const PATH: &'static str = "/api/speeches";
    const TITLE: &'static str = "Speeches";
    const SINGULAR: &'static str = "Speech";

    fn empty() -> Speech {
        Speech::default()
    }

    fn id(item: &Speech) -> Option<&ItemId> {
        item.id.as_ref()
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("titleEn", "Title (English)", FieldKind::Text),
            FieldSpec::new("titleHi", "Title (Hindi)", FieldKind::Text),
            FieldSpec::new("date", "Date", FieldKind::Date),
            FieldSpec::new("locationEn", "Location (English)", FieldKind::Text),
            FieldSpec::new("locationHi", "Location (Hindi)", FieldKind::Text),
            FieldSpec::new("category", "Category", FieldKind::Select(SPEECH_CATEGORIES)),
            FieldSpec::new("descriptionEn", "Description (English)", FieldKind::TextArea),
            FieldSpec::new("descriptionHi", "Description (Hindi)", FieldKind::TextArea),
            FieldSpec::new("thumbnail", "Thumbnail", FieldKind::Asset(AssetKind::Image)),
            FieldSpec::new("videoUrl", "Video", FieldKind::Asset(AssetKind::Video)),
            FieldSpec::new("duration", "Duration", FieldKind::Text),
        ];
        FIELDS
    }

    fn columns() -> &'static [&'static str] {
        &["titleEn", "date", "category"]
    }

    fn validate(draft: &Speech) -> Result<(), String> {
        if draft.category.trim().is_empty() {
            return Err("Please select a category.".to_string());
        }
        Ok(())
    }

    fn arrange(items: &mut Vec<Speech>) {
        catalog::sort_by_id(items, |s| s.id.as_ref());
    }
}

/// Press releases, interviews and press photos.
pub struct PressResource;

impl Resource for PressResource {
    type Item = MediaItem;

    const PATH: &'static str = "/api/media";
    const TITLE: &'static str = "Press Release";
    const SINGULAR: &'static str = "Media item";

    fn empty() -> MediaItem {
        MediaItem::default()
    }

    fn id(item: &MediaItem) -> Option<&ItemId> {
        item.id.as_ref()
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("type", "Type", FieldKind::Select(MEDIA_KINDS)),
            FieldSpec::new("titleEn", "Title (English)", FieldKind::Text),
            FieldSpec::new("titleHi", "Title (Hindi)", FieldKind::Text),
            FieldSpec::new("descriptionEn", "Description (English)", FieldKind::TextArea),
            FieldSpec::new("descriptionHi", "Description (Hindi)", FieldKind::TextArea),
            FieldSpec::new("date", "Date", FieldKind::Date),
            FieldSpec::new("imageUrl", "Image", FieldKind::Asset(AssetKind::Image)),
            FieldSpec::new("videoUrl", "Video", FieldKind::Asset(AssetKind::Video)),
            FieldSpec::new("thumbnail", "Thumbnail", FieldKind::Asset(AssetKind::Image)),
        ];
        FIELDS
    }

    fn columns() -> &'static [&'static str] {
        &["type", "titleEn", "date"]
    }

    fn validate(draft: &MediaItem) -> Result<(), String> {
        draft.validate()
    }
}

pub struct GalleryResource;

impl Resource for GalleryResource {
    type Item = GalleryItem;

    const PATH: &'static str = "/api/gallery";
    const TITLE: &'static str = "Gallery";
    const SINGULAR: &'static str = "Gallery item";

    fn empty() -> GalleryItem {
        GalleryItem::default()
    }

    fn template_for(item: &GalleryItem) -> GalleryItem {
        GalleryItem::empty(item.kind)
    }

    fn id(item: &GalleryItem) -> Option<&ItemId> {
        item.id.as_ref()
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("titleEn", "Title (English)", FieldKind::Text),
            FieldSpec::new("titleHi", "Title (Hindi)", FieldKind::Text),
            FieldSpec::new("descriptionEn", "Description (English)", FieldKind::TextArea),
            FieldSpec::new("descriptionHi", "Description (Hindi)", FieldKind::TextArea),
            FieldSpec::new("category", "Category", FieldKind::Select(&GALLERY_CATEGORIES)),
            FieldSpec::new("date", "Date", FieldKind::Date),
            FieldSpec::new("url", "Media", FieldKind::Asset(AssetKind::Image)),
            FieldSpec::new("thumbnail", "Thumbnail", FieldKind::Asset(AssetKind::Image)),
            FieldSpec::new("duration", "Duration", FieldKind::Text),
        ];
        FIELDS
    }

    fn columns() -> &'static [&'static str] {
        &["titleEn", "category", "sortOrder"]
    }

    fn arrange(items: &mut Vec<GalleryItem>) {
        items.sort_by_key(|item| item.sort_order);
    }

    fn prepare_create(existing: &[GalleryItem], mut draft: GalleryItem) -> GalleryItem {
        draft.sort_order = gallery::next_sort_order(existing, draft.kind);
        draft
    }

    fn asset_kind(draft: &GalleryItem, field: &FieldSpec) -> Option<AssetKind> {
        match (field.name, draft.kind) {
            ("url", GalleryKind::Video) => Some(AssetKind::Video),
            _ => match field.kind {
                FieldKind::Asset(kind) => Some(kind),
                _ => None,
            },
        }
    }
}

/// Contact-form submissions. The admin reads and deletes them only.
pub struct MessageResource;

impl Resource for MessageResource {
    type Item = ContactMessage;

    const PATH: &'static str = "/api/messages";
    const TITLE: &'static str = "Messages";
    const SINGULAR: &'static str = "Message";
    const CAPABILITIES: Capabilities = Capabilities::READ_DELETE;
    const DELETE_PROMPT: &'static str = "Delete this message?";

    fn empty() -> ContactMessage {
        ContactMessage::default()
    }

    fn id(item: &ContactMessage) -> Option<&ItemId> {
        item.id.as_ref()
    }

    fn fields() -> &'static [FieldSpec] {
        const FIELDS: &[FieldSpec] = &[
            FieldSpec::new("name", "Name", FieldKind::ReadOnly),
            FieldSpec::new("email", "Email", FieldKind::ReadOnly),
            FieldSpec::new("message", "Message", FieldKind::ReadOnly),
            FieldSpec::new("createdAt", "Received", FieldKind::ReadOnly),
        ];
        FIELDS
    }

    fn columns() -> &'static [&'static str] {
        &["name", "email", "createdAt"]
    }
}
