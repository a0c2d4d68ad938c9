#![allow(dead_code)]

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Duration, TimeZone, Utc};
use serde_json::{Value, json};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use profile_site::api::*;
use profile_site::common::ApiError;
use profile_site::config::AppConfig;
use profile_site::services::*;

pub const API_BASE: &str = "http://api.test";
pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASSWORD: &str = "correct-horse";

const COLLECTIONS: [&str; 5] = [
    "/api/journey-events",
    "/api/speeches",
    "/api/media",
    "/api/gallery",
    "/api/messages",
];

pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 10, 12, 0, 0).unwrap()
}

pub fn test_config() -> AppConfig {
    AppConfig {
        api_base_url: API_BASE.to_string(),
        ..AppConfig::default()
    }
}

fn jwt(claims: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{}.{}.signature", header, payload)
}

pub fn jwt_expiring_at(at: DateTime<Utc>) -> String {
    jwt(&json!({ "sub": ADMIN_USER, "exp": at.timestamp() }))
}

pub fn valid_token() -> String {
    jwt_expiring_at(fixed_now() + Duration::hours(1))
}

pub fn expired_token() -> String {
    jwt_expiring_at(fixed_now() - Duration::minutes(5))
}

pub fn token_without_expiry() -> String {
    jwt(&json!({ "sub": ADMIN_USER }))
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visits: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.visits.lock().unwrap().push(path.to_string());
    }
}

pub fn json_response(status: u16, value: &Value) -> ApiResponse {
    ApiResponse::new(status, serde_json::to_vec(value).unwrap())
}

struct FakeState {
    collections: HashMap<&'static str, Vec<Value>>,
    next_id: i64,
    issued_token: String,
    revoked: bool,
    requests: Vec<ApiRequest>,
    scripted: VecDeque<(Method, String, Result<ApiResponse, ApiError>)>,
}

/// A miniature Content API: stores collections in memory, hands out ids and
/// enforces the bearer token on writes. Individual calls can be scripted to
/// return a fixed response or fail at the transport.
pub struct FakeContentApi {
    state: Mutex<FakeState>,
}

impl FakeContentApi {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(FakeState {
                collections: COLLECTIONS.iter().map(|c| (*c, Vec::new())).collect(),
                next_id: 100,
                issued_token: valid_token(),
                revoked: false,
                requests: Vec::new(),
                scripted: VecDeque::new(),
            }),
        })
    }

    pub fn seed(&self, collection: &'static str, items: Vec<Value>) {
        self.state
            .lock()
            .unwrap()
            .collections
            .insert(collection, items);
    }

    pub fn collection(&self, collection: &str) -> Vec<Value> {
        self.state
            .lock()
            .unwrap()
            .collections
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn issue_token(&self, token: &str) {
        self.state.lock().unwrap().issued_token = token.to_string();
    }

    pub fn revoke_tokens(&self) {
        self.state.lock().unwrap().revoked = true;
    }

    pub fn script(&self, method: Method, path: &str, response: ApiResponse) {
        self.state
            .lock()
            .unwrap()
            .scripted
            .push_back((method, path.to_string(), Ok(response)));
    }

    pub fn fail_transport(&self, method: Method, path: &str) {
        self.state.lock().unwrap().scripted.push_back((
            method,
            path.to_string(),
            Err(ApiError::Transport("connection refused".into())),
        ));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn requests_to(&self, method: Method, path: &str) -> Vec<ApiRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && path_of(&r.url) == path)
            .collect()
    }

    pub fn transport(self: &Arc<Self>) -> Arc<dyn HttpTransport> {
        self.clone()
    }

    fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let mut state = self.state.lock().unwrap();

        if request.url.starts_with(MEDIA_HOST) {
            return upload_response(request);
        }

        let path = path_of(&request.url);
        let bearer = format!("Bearer {}", state.issued_token);
        let authorized = !state.revoked && request.header("Authorization") == Some(bearer.as_str());

        match (request.method, path.as_str()) {
            (Method::Post, "/api/admin/auth/login") => {
                let body = request.json_body().unwrap_or_default();
                if body["username"] == ADMIN_USER && body["password"] == ADMIN_PASSWORD {
                    json_response(200, &json!({ "token": state.issued_token, "username": ADMIN_USER }))
                } else {
                    json_response(401, &json!({ "message": "Invalid credentials" }))
                }
            }
            (Method::Get, "/api/admin/auth/validate") if authorized => {
                json_response(200, &json!({ "username": ADMIN_USER }))
            }
            (Method::Get, "/api/admin/auth/validate") => json_response(401, &json!({})),
            (Method::Post, "/api/admin/auth/logout") => json_response(200, &json!({})),
            (Method::Post, "/api/gallery/reorder") if authorized => {
                let entries = request.json_body().unwrap_or_default();
                let gallery = state.collections.entry("/api/gallery").or_default();
                for entry in entries.as_array().cloned().unwrap_or_default() {
                    if let Some(item) = gallery.iter_mut().find(|i| i["id"] == entry["id"]) {
                        item["sortOrder"] = entry["sortOrder"].clone();
                    }
                }
                json_response(200, &json!({ "success": true }))
            }
            (_, path) => {
                let Some((collection, id)) = split_collection(path) else {
                    return json_response(404, &json!({ "message": "Not found" }));
                };
                let public_write = request.method == Method::Post && collection == "/api/messages";
                if request.method != Method::Get && !authorized && !public_write {
                    return json_response(401, &json!({ "message": "Unauthorized" }));
                }

                let next_id = state.next_id;
                let items = state.collections.entry(collection).or_default();
                let position = id.and_then(|id| items.iter().position(|i| id_of(i) == id));

                match (request.method, id, position) {
                    (Method::Get, None, _) => json_response(200, &Value::Array(items.clone())),
                    (Method::Get, Some(_), Some(p)) => json_response(200, &items[p]),
                    (Method::Post, None, _) => {
                        let mut item = request.json_body().unwrap_or_else(|| json!({}));
                        item["id"] = json!(next_id);
                        if collection == "/api/messages" {
                            item["createdAt"] = json!(fixed_now().to_rfc3339());
                        }
                        items.push(item.clone());
                        state.next_id += 1;
                        json_response(201, &item)
                    }
                    (Method::Put, Some(_), Some(p)) => {
                        let mut item = request.json_body().unwrap_or_else(|| json!({}));
                        item["id"] = items[p]["id"].clone();
                        items[p] = item.clone();
                        json_response(200, &item)
                    }
                    (Method::Delete, Some(_), Some(p)) => {
                        items.remove(p);
                        json_response(200, &json!({ "success": true }))
                    }
                    _ => json_response(404, &json!({ "message": "Not found" })),
                }
            }
        }
    }
}

#[async_trait]
impl HttpTransport for FakeContentApi {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let scripted = {
            let mut state = self.state.lock().unwrap();
            state.requests.push(request.clone());
            let path = path_of(&request.url);
            let found = state
                .scripted
                .iter()
                .position(|(m, p, _)| *m == request.method && *p == path);
            found.and_then(|i| state.scripted.remove(i))
        };

        match scripted {
            Some((_, _, outcome)) => outcome,
            None => Ok(self.handle(&request)),
        }
    }
}

/// Path part of a request URL, without the base or the query string.
pub fn path_of(url: &str) -> String {
    let path = url.strip_prefix(API_BASE).unwrap_or(url);
    path.split('?').next().unwrap_or_default().to_string()
}

fn split_collection(path: &str) -> Option<(&'static str, Option<&str>)> {
    COLLECTIONS.iter().find_map(|c| {
        if path == *c {
            Some((*c, None))
        } else {
            path.strip_prefix(c)
                .and_then(|rest| rest.strip_prefix('/'))
                .filter(|id| !id.is_empty() && !id.contains('/'))
                .map(|id| (*c, Some(id)))
        }
    })
}

fn id_of(item: &Value) -> String {
    match &item["id"] {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn upload_response(request: &ApiRequest) -> ApiResponse {
    let RequestBody::Multipart(fields) = &request.body else {
        return json_response(400, &json!({ "error": { "message": "Expected a form" } }));
    };

    let has_preset = fields.iter().any(|f| f.name == "upload_preset");
    let filename = fields.iter().find_map(|f| match &f.value {
        FormValue::File { filename, .. } if f.name == "file" => Some(filename.clone()),
        _ => None,
    });

    match (has_preset, filename) {
        (true, Some(name)) => json_response(
            200,
            &json!({ "secure_url": format!("https://res.cloudinary.com/demo/{}", name) }),
        ),
        _ => json_response(400, &json!({ "error": { "message": "Upload preset must be specified" } })),
    }
}

/// Wiring shared by most tests: one fake server, one token store, one
/// navigator.
pub struct Harness {
    pub server: Arc<FakeContentApi>,
    pub tokens: Arc<MemoryTokenStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub config: AppConfig,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            server: FakeContentApi::new(),
            tokens: Arc::new(MemoryTokenStore::new()),
            navigator: Arc::new(RecordingNavigator::default()),
            config: test_config(),
        }
    }

    /// Harness whose token store already holds the server's current token.
    pub fn signed_in() -> Self {
        let harness = Self::new();
        harness.tokens.set(&valid_token());
        harness
    }

    pub fn secure(&self) -> SecureApi {
        SecureApi::new(
            &self.config,
            self.server.transport(),
            self.tokens.clone(),
            self.navigator.clone(),
        )
    }

    pub fn public(&self) -> PublicApi {
        PublicApi::new(&self.config, self.server.transport())
    }

    pub fn uploader(&self) -> MediaUploader {
        MediaUploader::new(&self.config, self.server.transport())
    }

    pub fn session_at(&self, now: DateTime<Utc>) -> AuthSession {
        AuthSession::new(
            &self.config,
            self.server.transport(),
            self.tokens.clone(),
            Arc::new(FixedClock(now)),
        )
    }

    pub fn session(&self) -> AuthSession {
        self.session_at(fixed_now())
    }
}

pub fn seed_journey() -> Vec<Value> {
    vec![
        json!({ "id": 3, "year": "2014", "titleEn": "Elected to Parliament", "titleHi": "संसद के लिए निर्वाचित", "descriptionEn": "First term.", "descriptionHi": "पहला कार्यकाल।", "image": "", "category": "politics" }),
        json!({ "id": 1, "year": "1990", "titleEn": "Early years", "titleHi": "प्रारंभिक वर्ष", "descriptionEn": "Grew up in a village.", "descriptionHi": "गाँव में पले-बढ़े।", "image": "", "category": "personal" }),
        json!({ "id": 2, "year": "2005", "titleEn": "Joined public service", "titleHi": "जनसेवा में प्रवेश", "descriptionEn": "Began grassroots work.", "descriptionHi": "ज़मीनी काम शुरू किया।", "image": "", "category": "politics" }),
    ]
}

pub fn seed_speeches() -> Vec<Value> {
    vec![
        json!({ "id": 2, "titleEn": "Budget for farmers", "titleHi": "किसानों के लिए बजट", "date": "2025-02-01", "locationEn": "New Delhi", "locationHi": "नई दिल्ली", "category": "agriculture", "descriptionEn": "On crop insurance.", "descriptionHi": "फसल बीमा पर।", "thumbnail": "", "videoUrl": "https://video.example/2", "duration": "12:30" }),
        json!({ "id": 1, "titleEn": "Border security", "titleHi": "सीमा सुरक्षा", "date": "2024-08-15", "locationEn": "Jammu", "locationHi": "जम्मू", "category": "security", "descriptionEn": "Address to the troops.", "descriptionHi": "सैनिकों को संबोधन।", "thumbnail": "", "videoUrl": "", "duration": "" }),
    ]
}

pub fn seed_media() -> Vec<Value> {
    vec![
        json!({ "id": 1, "type": "press_release", "titleEn": "New hospital opened", "titleHi": "नया अस्पताल खुला", "date": "2025-01-05" }),
        json!({ "id": 2, "type": "interview", "titleEn": "Morning show", "titleHi": "सुबह का कार्यक्रम", "date": "2025-01-07", "videoUrl": "https://video.example/i" }),
        json!({ "id": 3, "type": "photo", "titleEn": "Rally", "titleHi": "रैली", "date": "2025-01-09", "imageUrl": "https://img.example/rally.jpg" }),
    ]
}

pub fn seed_gallery() -> Vec<Value> {
    vec![
        json!({ "id": 1, "type": "photo", "titleEn": "A", "category": "events", "url": "https://img.example/a.jpg", "sortOrder": 1 }),
        json!({ "id": 2, "type": "photo", "titleEn": "B", "category": "official", "url": "https://img.example/b.jpg", "sortOrder": 2 }),
        json!({ "id": 3, "type": "photo", "titleEn": "C", "category": "events", "url": "https://img.example/c.jpg", "sortOrder": 3 }),
        json!({ "id": 4, "type": "video", "titleEn": "V1", "category": "speeches", "url": "https://video.example/v1", "duration": "03:10", "sortOrder": 1 }),
        json!({ "id": 5, "type": "video", "titleEn": "V2", "category": "interviews", "url": "https://video.example/v2", "duration": "08:00", "sortOrder": 2 }),
    ]
}

pub fn seed_messages() -> Vec<Value> {
    vec![
        json!({ "id": 1, "name": "Asha", "email": "asha@example.org", "message": "Road repair needed", "createdAt": "2026-01-08T09:00:00Z" }),
        json!({ "id": 2, "name": "Ravi", "email": "ravi@example.org", "message": "Thank you", "createdAt": "2026-01-09T10:00:00Z" }),
    ]
}
