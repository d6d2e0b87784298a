//! Adoption API client
//!
//! [`PetApi`] is the sole API boundary: form controllers, the listing view
//! and the CLI depend on the trait, never on the concrete HTTP client, so
//! tests swap in doubles without a server. [`PawsClient`] is the reqwest
//! implementation against the configured base URL.
//!
//! One request, one resolution. There is no retry, backoff or request
//! de-duplication here; a call either returns the decoded payload or one
//! [`ApiError`].

use async_trait::async_trait;
use reqwest::multipart;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::session::SessionStore;
use paws_types::{
    AuthResponse, HealthStatus, LoginRequest, NewPet, Pet, PetFilter, PetPage, SignupRequest, User,
};

// ============================================================================
// IMAGE UPLOAD
// ============================================================================

/// Image content types the backend will store.
pub const ALLOWED_IMAGE_TYPES: [&str; 4] =
    ["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Upload ceiling in bytes (10MB).
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

/// Raw photo bytes for [`PetApi::create_pet`]. Travels as the `image`
/// multipart part alongside the listing fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

// ============================================================================
// API BOUNDARY
// ============================================================================

#[async_trait]
pub trait PetApi: Send + Sync {
    // ── Auth ───────────────────────────────────────────────────

    /// Sign in. On success the session is persisted before this returns.
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse>;

    /// Register an account. Same persistence contract as [`PetApi::login`].
    async fn signup(&self, req: SignupRequest) -> Result<AuthResponse>;

    /// Best-effort server notification. The local session is cleared
    /// whether or not the server call succeeds.
    async fn logout(&self) -> Result<()>;

    /// Profile of the bearer token's owner.
    async fn me(&self) -> Result<User>;

    // ── Listings ───────────────────────────────────────────────

    /// One page of pets, narrowed server-side by the filter's species and
    /// location. The age bucket never reaches the server.
    async fn list_pets(&self, filter: &PetFilter) -> Result<PetPage>;

    async fn get_pet(&self, id: &str) -> Result<Pet>;

    // ── NGO operations ─────────────────────────────────────────

    /// Publish a listing. NGO role required; the server is the authority
    /// and answers 403 for anyone else.
    async fn create_pet(&self, fields: NewPet, image: ImageUpload) -> Result<Pet>;

    /// Listing statistics for the signed-in NGO. The shape is owned by the
    /// server and rendered as-is, so it stays untyped here.
    async fn ngo_dashboard(&self) -> Result<serde_json::Value>;

    // ── Misc ───────────────────────────────────────────────────

    /// Liveness probe at the API root.
    async fn health(&self) -> Result<HealthStatus>;
}

// ============================================================================
// HTTP IMPLEMENTATION
// ============================================================================

pub struct PawsClient {
    http: Client,
    base_url: String,
    store: SessionStore,
}

impl PawsClient {
    /// Build a client over an explicit configuration and session store.
    pub fn new(config: &ClientConfig, store: SessionStore) -> anyhow::Result<Self> {
        use anyhow::Context;
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            store,
        })
    }

    /// Build a client entirely from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let config = ClientConfig::from_env()?;
        let store = SessionStore::new(config.session_path.clone());
        Self::new(&config, store)
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token when a session exists, like a browser
    /// attaching its stored auth header; anonymous otherwise.
    fn with_bearer(&self, req: RequestBuilder) -> RequestBuilder {
        match self.store.load() {
            Some(session) => req.bearer_auth(session.token),
            None => req,
        }
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response> {
        req.send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }

    /// Decode a 2xx payload, or turn a non-2xx response into the
    /// [`ApiError`] for its status with the server's message.
    async fn decode<T: DeserializeOwned>(&self, resp: Response, fallback: &str) -> Result<T> {
        if !resp.status().is_success() {
            return Err(reject(resp, fallback).await);
        }
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Map a non-2xx response onto the error taxonomy, pulling the message out
/// of the conventional `{"detail": ...}` body.
async fn reject(resp: Response, fallback: &str) -> ApiError {
    let status = resp.status().as_u16();
    let bytes = resp.bytes().await.unwrap_or_default();
    let message = error_message_from_body(&bytes, fallback);
    debug!(status, message = %message, "request rejected");
    ApiError::from_status(status, message)
}

/// The server reports failures as `{"detail": <message>}`. A string detail
/// is surfaced verbatim; a structured detail (validation errors arrive as
/// arrays) is compacted to JSON; anything undecodable falls back to the
/// operation's generic message.
fn error_message_from_body(bytes: &[u8], fallback: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        detail: Option<serde_json::Value>,
    }

    let detail = serde_json::from_slice::<ErrorBody>(bytes)
        .ok()
        .and_then(|body| body.detail);
    match detail {
        Some(serde_json::Value::String(s)) if !s.is_empty() => s,
        Some(serde_json::Value::Null) | None => fallback.to_string(),
        Some(serde_json::Value::String(_)) => fallback.to_string(),
        Some(other) => other.to_string(),
    }
}

#[async_trait]
impl PetApi for PawsClient {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let resp = self.send(self.http.post(self.url("/api/login")).json(&body)).await?;
        let auth: AuthResponse = self.decode(resp, "Login failed").await?;

        // Persist before returning so the caller never observes a signed-in
        // response with a signed-out store.
        self.store.save(&auth.token, &auth.user);
        Ok(auth)
    }

    async fn signup(&self, req: SignupRequest) -> Result<AuthResponse> {
        let resp = self.send(self.http.post(self.url("/api/signup")).json(&req)).await?;
        let auth: AuthResponse = self.decode(resp, "Signup failed").await?;

        self.store.save(&auth.token, &auth.user);
        Ok(auth)
    }

    async fn logout(&self) -> Result<()> {
        let req = self.with_bearer(self.http.post(self.url("/api/logout")));
        let result = match self.send(req).await {
            // The server's answer is advisory; a rejected logout still
            // signs this client out.
            Ok(resp) => {
                if !resp.status().is_success() {
                    warn!(status = resp.status().as_u16(), "server rejected logout");
                }
                Ok(())
            }
            Err(e) => Err(e),
        };

        self.store.clear();
        result
    }

    async fn me(&self) -> Result<User> {
        let req = self.with_bearer(self.http.get(self.url("/api/me")));
        let resp = self.send(req).await?;
        self.decode(resp, "Failed to get user info").await
    }

    async fn list_pets(&self, filter: &PetFilter) -> Result<PetPage> {
        let req = self
            .http
            .get(self.url("/api/pets"))
            .query(&filter.server_query());
        let resp = self.send(req).await?;
        self.decode(resp, "Failed to fetch pets").await
    }

    async fn get_pet(&self, id: &str) -> Result<Pet> {
        let resp = self
            .send(self.http.get(self.url(&format!("/api/pets/{id}"))))
            .await?;
        self.decode(resp, "Failed to fetch pet details").await
    }

    async fn create_pet(&self, fields: NewPet, image: ImageUpload) -> Result<Pet> {
        let part = multipart::Part::bytes(image.bytes)
            .file_name(image.file_name)
            .mime_str(&image.content_type)
            .map_err(|e| {
                ApiError::InvalidInput(format!(
                    "unusable image content type '{}': {e}",
                    image.content_type
                ))
            })?;

        let mut form = multipart::Form::new()
            .text("name", fields.name)
            .text("type", fields.species.as_str())
            .text("age", fields.age.to_string())
            .text("location", fields.location)
            .text("vaccinated", fields.vaccinated.to_string())
            .text("neutered", fields.neutered.to_string());
        if let Some(notes) = fields.medical_notes {
            form = form.text("medical_notes", notes);
        }
        form = form.part("image", part);

        let req = self.with_bearer(self.http.post(self.url("/api/pets")).multipart(form));
        let resp = self.send(req).await?;
        self.decode(resp, "Failed to create pet").await
    }

    async fn ngo_dashboard(&self) -> Result<serde_json::Value> {
        let req = self.with_bearer(self.http.get(self.url("/api/ngo/dashboard")));
        let resp = self.send(req).await?;
        self.decode(resp, "Failed to fetch dashboard").await
    }

    async fn health(&self) -> Result<HealthStatus> {
        let resp = self.send(self.http.get(self.url("/"))).await?;
        self.decode(resp, "Health check failed").await
    }
}

// ============================================================================
// TEST SUPPORT
// ============================================================================

/// Scriptable [`PetApi`] double for controller unit tests. Each operation
/// consumes a pre-loaded result; an unscripted call panics, which doubles
/// as a "no network call expected" assertion.
#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use chrono::NaiveDate;
    use paws_types::{Species, UserRole};
    use std::collections::VecDeque;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct StubApi {
        pub login: Mutex<Option<Result<AuthResponse>>>,
        pub signup: Mutex<Option<Result<AuthResponse>>>,
        pub logout: Mutex<Option<Result<()>>>,
        pub me: Mutex<Option<Result<User>>>,
        pub pages: Mutex<VecDeque<Result<PetPage>>>,
        pub pet: Mutex<Option<Result<Pet>>>,
        pub created: Mutex<Option<Result<Pet>>>,
        pub dashboard: Mutex<Option<Result<serde_json::Value>>>,
        pub probe: Mutex<Option<Result<HealthStatus>>>,
        /// What the last `create_pet` call carried, for payload assertions.
        pub last_new_pet: Mutex<Option<NewPet>>,
        calls: Mutex<Vec<&'static str>>,
    }

    impl StubApi {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_login(result: Result<AuthResponse>) -> Self {
            let stub = Self::new();
            *stub.login.lock().unwrap() = Some(result);
            stub
        }

        pub fn with_signup(result: Result<AuthResponse>) -> Self {
            let stub = Self::new();
            *stub.signup.lock().unwrap() = Some(result);
            stub
        }

        pub fn with_created(result: Result<Pet>) -> Self {
            let stub = Self::new();
            *stub.created.lock().unwrap() = Some(result);
            stub
        }

        pub fn push_page(&self, result: Result<PetPage>) {
            self.pages.lock().unwrap().push_back(result);
        }

        pub fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, op: &'static str) {
            self.calls.lock().unwrap().push(op);
        }
    }

    #[async_trait]
    impl PetApi for StubApi {
        async fn login(&self, _email: &str, _password: &str) -> Result<AuthResponse> {
            self.record("login");
            self.login.lock().unwrap().take().expect("unscripted login call")
        }

        async fn signup(&self, _req: SignupRequest) -> Result<AuthResponse> {
            self.record("signup");
            self.signup.lock().unwrap().take().expect("unscripted signup call")
        }

        async fn logout(&self) -> Result<()> {
            self.record("logout");
            self.logout.lock().unwrap().take().expect("unscripted logout call")
        }

        async fn me(&self) -> Result<User> {
            self.record("me");
            self.me.lock().unwrap().take().expect("unscripted me call")
        }

        async fn list_pets(&self, _filter: &PetFilter) -> Result<PetPage> {
            self.record("list_pets");
            self.pages
                .lock()
                .unwrap()
                .pop_front()
                .expect("unscripted list_pets call")
        }

        async fn get_pet(&self, _id: &str) -> Result<Pet> {
            self.record("get_pet");
            self.pet.lock().unwrap().take().expect("unscripted get_pet call")
        }

        async fn create_pet(&self, fields: NewPet, _image: ImageUpload) -> Result<Pet> {
            self.record("create_pet");
            *self.last_new_pet.lock().unwrap() = Some(fields);
            self.created
                .lock()
                .unwrap()
                .take()
                .expect("unscripted create_pet call")
        }

        async fn ngo_dashboard(&self) -> Result<serde_json::Value> {
            self.record("ngo_dashboard");
            self.dashboard
                .lock()
                .unwrap()
                .take()
                .expect("unscripted ngo_dashboard call")
        }

        async fn health(&self) -> Result<HealthStatus> {
            self.record("health");
            self.probe.lock().unwrap().take().expect("unscripted health call")
        }
    }

    // ── shared fixtures ──────────────────────────────────────────

    pub fn user(role: UserRole) -> User {
        User {
            id: "u-1".into(),
            email: "ana@example.com".into(),
            name: match role {
                UserRole::Adopter => "Ana".into(),
                UserRole::Ngo => "Paws Shelter".into(),
            },
            role,
        }
    }

    pub fn auth_response(role: UserRole) -> AuthResponse {
        AuthResponse {
            token: "tok-1".into(),
            user: user(role),
            redirect_url: role.home_route().to_string(),
        }
    }

    pub fn pet(id: &str, age: u32) -> Pet {
        Pet {
            id: id.into(),
            ngo_user_id: "u-ngo-1".into(),
            name: format!("pet-{id}"),
            species: Species::Dog,
            age,
            location: "Lisboa".into(),
            image_url: format!("https://img.example/{id}.jpg"),
            vaccinated: true,
            neutered: false,
            medical_notes: None,
            created_at: NaiveDate::from_ymd_opt(2026, 8, 25)
                .unwrap()
                .and_hms_opt(10, 30, 0)
                .unwrap(),
            ngo_name: None,
            ngo_email: None,
        }
    }

    pub fn page(pets: Vec<Pet>) -> PetPage {
        let total = pets.len() as u64;
        PetPage {
            pets,
            total,
            page: 1,
            limit: 100,
        }
    }

    pub fn png_upload() -> ImageUpload {
        ImageUpload {
            file_name: "rex.png".into(),
            content_type: "image/png".into(),
            bytes: vec![0x89, 0x50, 0x4e, 0x47],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── error body decoding ──────────────────────────────────────

    #[test]
    fn string_detail_is_surfaced_verbatim() {
        let body = br#"{"detail": "Invalid credentials"}"#;
        assert_eq!(
            error_message_from_body(body, "Login failed"),
            "Invalid credentials"
        );
    }

    #[test]
    fn missing_detail_uses_fallback() {
        assert_eq!(
            error_message_from_body(br#"{"error": "nope"}"#, "Login failed"),
            "Login failed"
        );
    }

    #[test]
    fn empty_or_null_detail_uses_fallback() {
        assert_eq!(
            error_message_from_body(br#"{"detail": ""}"#, "Signup failed"),
            "Signup failed"
        );
        assert_eq!(
            error_message_from_body(br#"{"detail": null}"#, "Signup failed"),
            "Signup failed"
        );
    }

    #[test]
    fn undecodable_body_uses_fallback() {
        assert_eq!(
            error_message_from_body(b"<html>504</html>", "Failed to fetch pets"),
            "Failed to fetch pets"
        );
        assert_eq!(error_message_from_body(b"", "Failed to fetch pets"), "Failed to fetch pets");
    }

    #[test]
    fn structured_detail_is_compacted() {
        // FastAPI-style validation errors ship the detail as an array.
        let body = br#"{"detail": [{"loc": ["body", "age"], "msg": "value is not a valid integer"}]}"#;
        let message = error_message_from_body(body, "Failed to create pet");
        assert!(message.contains("value is not a valid integer"));
    }

    // ── client construction ──────────────────────────────────────

    #[test]
    fn client_builds_from_explicit_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig {
            base_url: "http://localhost:8000".into(),
            timeout: std::time::Duration::from_secs(5),
            session_path: dir.path().join("session.json"),
        };
        let store = SessionStore::new(config.session_path.clone());
        let client = PawsClient::new(&config, store).unwrap();
        assert_eq!(client.url("/api/pets"), "http://localhost:8000/api/pets");
    }
}
