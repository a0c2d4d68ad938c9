use serde::{Deserialize, Serialize};

use super::wire::lenient_string;
use super::{Bilingual, ItemId, Language, deserialize_optional_id};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Speech {
    #[serde(
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<ItemId>,
    #[serde(deserialize_with = "lenient_string")]
    pub title_en: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title_hi: String,
    #[serde(deserialize_with = "lenient_string")]
    pub date: String,
    #[serde(deserialize_with = "lenient_string")]
    pub location_en: String,
    #[serde(deserialize_with = "lenient_string")]
    pub location_hi: String,
    #[serde(deserialize_with = "lenient_string")]
    pub category: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description_en: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description_hi: String,
    #[serde(deserialize_with = "lenient_string")]
    pub thumbnail: String,
    #[serde(deserialize_with = "lenient_string")]
    pub video_url: String,
    #[serde(deserialize_with = "lenient_string")]
    pub duration: String,
}

impl Speech {
    pub fn location_in(&self, lang: Language) -> &str {
        lang.pick(&self.location_en, &self.location_hi)
    }

    pub fn has_video(&self) -> bool {
        !self.video_url.trim().is_empty()
    }
}

impl Bilingual for Speech {
    fn title_in(&self, lang: Language) -> &str {
        lang.pick(&self.title_en, &self.title_hi)
    }

    fn description_in(&self, lang: Language) -> &str {
        lang.pick(&self.description_en, &self.description_hi)
    }

    fn extra_text_in(&self, lang: Language) -> Vec<&str> {
        vec![self.location_in(lang)]
    }

    fn category(&self) -> &str {
        if self.category.trim().is_empty() {
            "general"
        } else {
            &self.category
        }
    }
}
