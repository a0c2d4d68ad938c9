use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::api::{ApiRequest, HttpTransport, Method, RequestBody};
use crate::common::ApiError;
use crate::config::{AppConfig, join_url};
use crate::models::{ContactMessage, GalleryItem, ItemId, JourneyEvent, MediaItem, MediaKind, Speech};
use crate::types::ContactSubmission;

pub const MESSAGES: &str = "/api/messages";
pub const SPEECHES: &str = "/api/speeches";
pub const GALLERY: &str = "/api/gallery";
pub const MEDIA: &str = "/api/media";
pub const JOURNEY_EVENTS: &str = "/api/journey-events";

/// Read-only client for the public site, plus the contact form.
#[derive(Clone)]
pub struct PublicApi {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
}

impl PublicApi {
    pub fn new(config: &AppConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            transport,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let response = self
            .transport
            .send(ApiRequest {
                method: Method::Get,
                url: join_url(&self.base_url, endpoint),
                headers: Vec::new(),
                body: RequestBody::Empty,
            })
            .await?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status,
                endpoint: endpoint.to_string(),
            });
        }

        response.json()
    }

    // ---- Messages ----

    pub async fn submit_contact_message(
        &self,
        submission: &ContactSubmission,
    ) -> Result<ContactMessage, ApiError> {
        let response = self
            .transport
            .send(ApiRequest {
                method: Method::Post,
                url: join_url(&self.base_url, MESSAGES),
                headers: vec![("Content-Type".into(), "application/json".into())],
                body: RequestBody::Json(serde_json::to_string(submission)?),
            })
            .await?;

        if !response.ok() {
            return Err(ApiError::Status {
                status: response.status,
                endpoint: MESSAGES.to_string(),
            });
        }

        response.json()
    }

    // ---- Speeches ----

    pub async fn speeches(&self) -> Result<Vec<Speech>, ApiError> {
        self.get_json(SPEECHES).await
    }

    pub async fn speeches_by_category(&self, category: &str) -> Result<Vec<Speech>, ApiError> {
        self.get_json(&format!("{}/category/{}", SPEECHES, encode(category)))
            .await
    }

    pub async fn search_speeches(&self, query: &str) -> Result<Vec<Speech>, ApiError> {
        self.get_json(&format!("{}/search?q={}", SPEECHES, encode(query)))
            .await
    }

    pub async fn speech(&self, id: &ItemId) -> Result<Speech, ApiError> {
        self.get_json(&format!("{}/{}", SPEECHES, id)).await
    }

    pub async fn speech_categories(&self) -> Result<Vec<String>, ApiError> {
        self.get_json(&format!("{}/categories", SPEECHES)).await
    }

    // ---- Gallery ----

    pub async fn gallery(&self) -> Result<Vec<GalleryItem>, ApiError> {
        self.get_json(GALLERY).await
    }

    pub async fn gallery_by_category(&self, category: &str) -> Result<Vec<GalleryItem>, ApiError> {
        self.get_json(&format!("{}/category/{}", GALLERY, encode(category)))
            .await
    }

    pub async fn featured_gallery(&self) -> Result<Vec<GalleryItem>, ApiError> {
        self.get_json(&format!("{}/featured", GALLERY)).await
    }

    pub async fn search_gallery(&self, query: &str) -> Result<Vec<GalleryItem>, ApiError> {
        self.get_json(&format!("{}/search?q={}", GALLERY, encode(query)))
            .await
    }

    pub async fn gallery_item(&self, id: &ItemId) -> Result<GalleryItem, ApiError> {
        self.get_json(&format!("{}/{}", GALLERY, id)).await
    }

    pub async fn gallery_categories(&self) -> Result<Vec<String>, ApiError> {
        self.get_json(&format!("{}/categories", GALLERY)).await
    }

    // ---- Media ----

    pub async fn media(&self) -> Result<Vec<MediaItem>, ApiError> {
        self.get_json(MEDIA).await
    }

    pub async fn media_by_type(&self, kind: MediaKind) -> Result<Vec<MediaItem>, ApiError> {
        self.get_json(&format!("{}/type/{}", MEDIA, kind.as_str()))
            .await
    }

    pub async fn media_by_category(&self, category: &str) -> Result<Vec<MediaItem>, ApiError> {
        self.get_json(&format!("{}/category/{}", MEDIA, encode(category)))
            .await
    }

    pub async fn featured_media(&self) -> Result<Vec<MediaItem>, ApiError> {
        self.get_json(&format!("{}/featured", MEDIA)).await
    }

    pub async fn media_with_video(&self) -> Result<Vec<MediaItem>, ApiError> {
        self.get_json(&format!("{}/video", MEDIA)).await
    }

    pub async fn media_with_audio(&self) -> Result<Vec<MediaItem>, ApiError> {
        self.get_json(&format!("{}/audio", MEDIA)).await
    }

    pub async fn search_media(&self, query: &str) -> Result<Vec<MediaItem>, ApiError> {
        self.get_json(&format!("{}/search?q={}", MEDIA, encode(query)))
            .await
    }

    pub async fn media_item(&self, id: &ItemId) -> Result<MediaItem, ApiError> {
        self.get_json(&format!("{}/{}", MEDIA, id)).await
    }

    pub async fn media_types(&self) -> Result<Vec<String>, ApiError> {
        self.get_json(&format!("{}/types", MEDIA)).await
    }

    pub async fn media_categories(&self) -> Result<Vec<String>, ApiError> {
        self.get_json(&format!("{}/categories", MEDIA)).await
    }

    // ---- Journey ----

    pub async fn journey_events(&self) -> Result<Vec<JourneyEvent>, ApiError> {
        self.get_json(JOURNEY_EVENTS).await
    }

    pub async fn journey_events_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<JourneyEvent>, ApiError> {
        self.get_json(&format!("{}/category/{}", JOURNEY_EVENTS, encode(category)))
            .await
    }

    pub async fn milestone_events(&self) -> Result<Vec<JourneyEvent>, ApiError> {
        self.get_json(&format!("{}/milestones", JOURNEY_EVENTS))
            .await
    }

    pub async fn journey_events_by_year(&self, year: i32) -> Result<Vec<JourneyEvent>, ApiError> {
        self.get_json(&format!("{}/year/{}", JOURNEY_EVENTS, year))
            .await
    }

    pub async fn journey_events_by_year_range(
        &self,
        start_year: i32,
        end_year: i32,
    ) -> Result<Vec<JourneyEvent>, ApiError> {
        self.get_json(&format!(
            "{}/year-range?startYear={}&endYear={}",
            JOURNEY_EVENTS, start_year, end_year
        ))
        .await
    }

    pub async fn search_journey_events(&self, query: &str) -> Result<Vec<JourneyEvent>, ApiError> {
        self.get_json(&format!("{}/search?q={}", JOURNEY_EVENTS, encode(query)))
            .await
    }

    pub async fn journey_event(&self, id: &ItemId) -> Result<JourneyEvent, ApiError> {
        self.get_json(&format!("{}/{}", JOURNEY_EVENTS, id)).await
    }

    pub async fn journey_categories(&self) -> Result<Vec<String>, ApiError> {
        self.get_json(&format!("{}/categories", JOURNEY_EVENTS))
            .await
    }

    pub async fn journey_years(&self) -> Result<Vec<i32>, ApiError> {
        self.get_json(&format!("{}/years", JOURNEY_EVENTS)).await
    }
}

fn encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}
