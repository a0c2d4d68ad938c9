//! Language-aware filtering and ordering for the public pages.

use crate::models::{
    Bilingual, GalleryItem, GalleryKind, ItemId, Language, MediaItem, MediaKind,
};

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"all"` (or a blank id) selects everything.
    pub fn from_id(id: &str) -> Self {
        let id = id.trim();
        if id.is_empty() || id.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(id.to_lowercase())
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Only(id) => id,
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(id) => category.trim().eq_ignore_ascii_case(id),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CatalogQuery {
    pub language: Language,
    pub category: CategoryFilter,
    pub search: String,
}

impl CatalogQuery {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = CategoryFilter::from_id(category);
        self
    }

    pub fn with_search(mut self, search: &str) -> Self {
        self.search = search.to_string();
        self
    }
}

pub fn matches<T: Bilingual>(item: &T, query: &CatalogQuery) -> bool {
    if !query.category.matches(item.category()) {
        return false;
    }

    let needle = query.search.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }

    let lang = query.language;
    std::iter::once(item.title_in(lang))
        .chain(std::iter::once(item.description_in(lang)))
        .chain(item.extra_text_in(lang))
        .any(|text| text.to_lowercase().contains(&needle))
}

pub fn filter_items<'a, T: Bilingual>(items: &'a [T], query: &CatalogQuery) -> Vec<&'a T> {
    items.iter().filter(|item| matches(*item, query)).collect()
}

/// Oldest first. Items without an id sort to the front.
pub fn sort_by_id<T, F>(items: &mut [T], id: F)
where
    F: Fn(&T) -> Option<&ItemId>,
{
    items.sort_by(|a, b| id(a).cmp(&id(b)));
}

pub fn media_of_kind(items: &[MediaItem], kind: MediaKind) -> Vec<&MediaItem> {
    items.iter().filter(|item| item.kind == kind).collect()
}

/// Items of one gallery kind in display order.
pub fn gallery_of_kind(items: &[GalleryItem], kind: GalleryKind) -> Vec<&GalleryItem> {
    let mut selected: Vec<&GalleryItem> = items.iter().filter(|item| item.kind == kind).collect();
    selected.sort_by_key(|item| item.sort_order);
    selected
}

/// Distinct non-empty categories, in first-seen order.
pub fn distinct_categories<T: Bilingual>(items: &[T]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        let category = item.category().trim().to_lowercase();
        if !category.is_empty() && !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}

const SPEECH_CATEGORIES: [(&str, &str, &str); 14] = [
    ("all", "All", "सभी"),
    ("security", "Security", "सुरक्षा"),
    ("defense", "Defense", "रक्षा"),
    ("economy", "Economy", "अर्थव्यवस्था"),
    ("education", "Education", "शिक्षा"),
    ("development", "Development", "विकास"),
    ("infrastructure", "Infrastructure", "अवसंरचना"),
    ("agriculture", "Agriculture", "कृषि"),
    ("technology", "Technology", "प्रौद्योगिकी"),
    ("healthcare", "Healthcare", "स्वास्थ्य सेवा"),
    ("environment", "Environment", "पर्यावरण"),
    ("foreign", "Foreign Policy", "विदेश नीति"),
    ("employment", "Employment", "रोजगार"),
    ("other", "Other", "अन्य"),
];

const GALLERY_CATEGORY_LABELS: [(&str, &str, &str); 10] = [
    ("all", "All", "सभी"),
    ("official", "Official", "सरकारी"),
    ("events", "Events", "कार्यक्रम"),
    ("public", "Public", "जनता"),
    ("media", "Press Release", "प्रेस विज्ञप्ति"),
    ("infrastructure", "Infrastructure", "बुनियादी ढांचा"),
    ("education", "Education", "शिक्षा"),
    ("speeches", "Speeches", "भाषण"),
    ("interviews", "Interviews", "इंटरव्यू"),
    ("documentaries", "Documentaries", "डॉक्यूमेंट्री"),
];

fn label_from(table: &[(&str, &str, &str)], id: &str, lang: Language) -> String {
    table
        .iter()
        .find(|(key, _, _)| key.eq_ignore_ascii_case(id))
        .map(|(_, en, hi)| lang.pick(en, hi).to_string())
        .unwrap_or_else(|| id.to_string())
}

/// Speech category ids, `"all"` first.
pub fn speech_category_ids() -> impl Iterator<Item = &'static str> {
    SPEECH_CATEGORIES.iter().map(|(id, _, _)| *id)
}

pub fn speech_category_label(id: &str, lang: Language) -> String {
    label_from(&SPEECH_CATEGORIES, id, lang)
}

pub fn gallery_category_label(id: &str, lang: Language) -> String {
    label_from(&GALLERY_CATEGORY_LABELS, id, lang)
}
