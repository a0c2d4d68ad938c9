use serde::{Deserialize, Serialize};

use super::wire::lenient_string;
use super::{Bilingual, ItemId, Language, deserialize_optional_id};

/// One entry on the life-journey timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct JourneyEvent {
    #[serde(
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<ItemId>,
    #[serde(deserialize_with = "lenient_string")]
    pub year: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title_en: String,
    #[serde(deserialize_with = "lenient_string")]
    pub title_hi: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description_en: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description_hi: String,
    #[serde(deserialize_with = "lenient_string")]
    pub image: String,
    #[serde(deserialize_with = "lenient_string")]
    pub category: String,
}

impl Bilingual for JourneyEvent {
    fn title_in(&self, lang: Language) -> &str {
        lang.pick(&self.title_en, &self.title_hi)
    }

    fn description_in(&self, lang: Language) -> &str {
        lang.pick(&self.description_en, &self.description_hi)
    }

    fn extra_text_in(&self, _lang: Language) -> Vec<&str> {
        vec![self.year.as_str()]
    }

    fn category(&self) -> &str {
        &self.category
    }
}
