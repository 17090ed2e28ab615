//! # HTTP client for the scheduling service
//!
//! [`ApiClient`] wraps a [`reqwest::Client`], the service base URL, and a
//! [`SessionStore`] holding the bearer token. Every remote operation the UI needs is
//! one async method returning typed data or an [`ApiError`].
//!
//! ## Operations
//!
//! | Method | Request | Auth |
//! |--------|---------|------|
//! | [`current_user`](ApiClient::current_user) | `GET /users/me` | bearer, optional |
//! | [`signup`](ApiClient::signup) | `POST /users/signup` | none |
//! | [`signin`](ApiClient::signin) | `POST /users/signin` | none |
//! | [`logout`](ApiClient::logout) | `POST /users/logout` | bearer, optional |
//! | [`trainers`](ApiClient::trainers) | `GET /coaches` | bearer |
//! | [`trainer`](ApiClient::trainer) | `GET /coaches/{id}` | bearer |
//! | [`schedule`](ApiClient::schedule) | `GET /schedule?type=` | bearer |
//! | [`create_training`](ApiClient::create_training) | `POST /schedule` | bearer |
//! | [`update_training`](ApiClient::update_training) | `PUT /schedule/{id}` | bearer |
//! | [`groups`](ApiClient::groups) | `GET /groups` | bearer |
//! | [`halls`](ApiClient::halls) | `GET /halls` | bearer |
//!
//! ## Session handling
//!
//! A method marked "bearer" fails with [`ApiError::NotAuthenticated`] before any
//! request is sent when no token is stored. `current_user` instead reports a missing
//! or rejected token as `Ok(None)`: for the UI both simply mean "signed out".
//! `signin` persists the issued token; `logout` clears it whatever the service says.

use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::{ClientConfig, SessionStore};

use crate::error::ApiError;
use crate::models::{
    CreateTrainingRequest, Group, Hall, MessageResponse, SigninRequest, SigninResponse,
    SignupRequest, Trainer, TrainerWithSchedule, Training, TrainingKind, User,
};

#[derive(Clone, Debug)]
pub struct ApiClient<S> {
    http: reqwest::Client,
    base_url: String,
    store: S,
}

impl<S: SessionStore> ApiClient<S> {
    pub fn new(base_url: impl Into<String>, store: S) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            store,
        }
    }

    pub fn from_config(config: &ClientConfig, store: S) -> Self {
        Self::new(config.base_url(), store)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether a session token is currently stored.
    pub async fn has_session(&self) -> bool {
        self.store.token().await.is_some()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!("{} {}", method, path);
        self.http.request(method, self.url(path))
    }

    async fn authorized(&self, method: Method, path: &str) -> Result<RequestBuilder, ApiError> {
        let token = self.store.token().await.ok_or(ApiError::NotAuthenticated)?;
        Ok(self.request(method, path).bearer_auth(token))
    }

    /// Ensure a success status, converting anything else into [`ApiError::Status`].
    async fn check(response: Response, fallback: &str) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let err = ApiError::from_status(status, &body, fallback);
        tracing::warn!("{} -> {}: {}", fallback, status.as_u16(), err);
        Err(err)
    }

    async fn read_json<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T, ApiError> {
        let response = Self::check(response, fallback).await?;
        Ok(response.json::<T>().await?)
    }

    /// Fetch the signed-in user. `Ok(None)` when there is no usable session.
    pub async fn current_user(&self) -> Result<Option<User>, ApiError> {
        let request = match self.authorized(Method::GET, "/users/me").await {
            Ok(request) => request,
            Err(ApiError::NotAuthenticated) => return Ok(None),
            Err(e) => return Err(e),
        };
        let response = request.send().await?;
        if !response.status().is_success() {
            tracing::debug!("Session rejected with {}", response.status());
            return Ok(None);
        }
        Ok(Some(response.json::<User>().await?))
    }

    pub async fn signup(&self, request: &SignupRequest) -> Result<MessageResponse, ApiError> {
        let response = self
            .request(Method::POST, "/users/signup")
            .json(request)
            .send()
            .await?;
        let message: MessageResponse = Self::read_json(response, "Registration failed").await?;
        tracing::info!("Registered {}", request.email);
        Ok(message)
    }

    /// Sign in and persist the issued access token.
    pub async fn signin(&self, email: &str, password: &str) -> Result<SigninResponse, ApiError> {
        let body = SigninRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response = self
            .request(Method::POST, "/users/signin")
            .json(&body)
            .send()
            .await?;
        let signin: SigninResponse = Self::read_json(response, "Sign-in failed").await?;
        self.store.set_token(&signin.access_token).await;
        tracing::info!("Signed in as {}", email);
        Ok(signin)
    }

    /// Sign out. The stored token is cleared even when the service call fails.
    pub async fn logout(&self) -> Result<MessageResponse, ApiError> {
        let request = match self.authorized(Method::POST, "/users/logout").await {
            Ok(request) => request,
            Err(ApiError::NotAuthenticated) => {
                return Ok(MessageResponse::new("Logged out successfully"));
            }
            Err(e) => return Err(e),
        };
        let result: Result<MessageResponse, ApiError> = match request.send().await {
            Ok(response) => Self::read_json(response, "Logout failed").await,
            Err(e) => Err(ApiError::from(e)),
        };
        self.store.clear().await;
        tracing::info!("Session cleared");
        result
    }

    pub async fn trainers(&self) -> Result<Vec<Trainer>, ApiError> {
        let response = self.authorized(Method::GET, "/coaches").await?.send().await?;
        Self::read_json(response, "Failed to load trainers").await
    }

    pub async fn trainer(&self, id: i64) -> Result<TrainerWithSchedule, ApiError> {
        let response = self
            .authorized(Method::GET, &format!("/coaches/{id}"))
            .await?
            .send()
            .await?;
        Self::read_json(response, "Failed to load trainer").await
    }

    /// List schedule entries, optionally filtered by kind.
    pub async fn schedule(&self, kind: Option<TrainingKind>) -> Result<Vec<Training>, ApiError> {
        let mut request = self.authorized(Method::GET, "/schedule").await?;
        if let Some(kind) = kind {
            request = request.query(&[("type", kind.as_str())]);
        }
        let response = request.send().await?;
        Self::read_json(response, "Failed to load schedule").await
    }

    pub async fn create_training(&self, body: &CreateTrainingRequest) -> Result<(), ApiError> {
        let response = self
            .authorized(Method::POST, "/schedule")
            .await?
            .json(body)
            .send()
            .await?;
        Self::check(response, "Failed to create training").await?;
        tracing::info!("Training created for group {}", body.group_id);
        Ok(())
    }

    pub async fn update_training(&self, id: i64, body: &CreateTrainingRequest) -> Result<(), ApiError> {
        let response = self
            .authorized(Method::PUT, &format!("/schedule/{id}"))
            .await?
            .json(body)
            .send()
            .await?;
        Self::check(response, "Failed to update training").await?;
        tracing::info!("Training {} updated", id);
        Ok(())
    }

    pub async fn groups(&self) -> Result<Vec<Group>, ApiError> {
        let response = self.authorized(Method::GET, "/groups").await?.send().await?;
        Self::read_json(response, "Failed to load groups").await
    }

    pub async fn halls(&self) -> Result<Vec<Hall>, ApiError> {
        let response = self.authorized(Method::GET, "/halls").await?.send().await?;
        Self::read_json(response, "Failed to load halls").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use store::MemoryStore;
    use wiremock::{
        matchers::{body_json, header, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    async fn client_with_token(server: &MockServer, token: Option<&str>) -> ApiClient<MemoryStore> {
        let store = match token {
            Some(t) => MemoryStore::with_token(t),
            None => MemoryStore::new(),
        };
        ApiClient::new(server.uri(), store)
    }

    fn training_json(id: i64, kind: &str, date: &str) -> serde_json::Value {
        json!({
            "id": id,
            "coach": "Coach",
            "type": kind,
            "title": format!("Training {id}"),
            "time": "10:00 - 11:30",
            "location": "Hall 1",
            "date": date,
            "participants": if kind == "group" { json!(12) } else { json!(null) },
        })
    }

    #[tokio::test]
    async fn test_current_user_without_token_makes_no_request() {
        let server = MockServer::start().await;
        Mock::given(path("/users/me"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_with_token(&server, None).await;
        assert_eq!(client.current_user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_current_user_sends_bearer_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/me"))
            .and(header("Authorization", "Bearer tok-1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": 5, "name": "Maria", "isAdmin": false, "isAthlete": true
            })))
            .mount(&server)
            .await;

        let client = client_with_token(&server, Some("tok-1")).await;
        let user = client.current_user().await.unwrap().unwrap();
        assert_eq!(user.name, "Maria");
        assert!(user.is_athlete);
    }

    #[tokio::test]
    async fn test_rejected_token_reads_as_signed_out() {
        let server = MockServer::start().await;
        Mock::given(path("/users/me"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "expired"})))
            .mount(&server)
            .await;

        let client = client_with_token(&server, Some("stale")).await;
        assert_eq!(client.current_user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_signin_persists_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/signin"))
            .and(body_json(json!({"email": "a@b.c", "password": "pw"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "fresh", "refresh_token": "r", "token_type": "bearer"
            })))
            .mount(&server)
            .await;

        let client = client_with_token(&server, None).await;
        let response = client.signin("a@b.c", "pw").await.unwrap();
        assert_eq!(response.access_token, "fresh");
        assert_eq!(client.store().token().await.as_deref(), Some("fresh"));
        assert!(client.has_session().await);
    }

    #[tokio::test]
    async fn test_signin_failure_surfaces_message_and_keeps_signed_out() {
        let server = MockServer::start().await;
        Mock::given(path("/users/signin"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({"message": "Wrong password"})),
            )
            .mount(&server)
            .await;

        let client = client_with_token(&server, None).await;
        let err = client.signin("a@b.c", "bad").await.unwrap_err();
        assert_eq!(err.to_string(), "Wrong password");
        assert!(client.store().token().await.is_none());
    }

    #[tokio::test]
    async fn test_signup_posts_form() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/signup"))
            .and(body_json(json!({
                "email": "new@school.test",
                "password": "secret",
                "full_name": "New Athlete",
                "phone_number": "+7 900 000 00 00"
            })))
            .respond_with(
                ResponseTemplate::new(201).set_body_json(json!({"message": "User created"})),
            )
            .mount(&server)
            .await;

        let client = client_with_token(&server, None).await;
        let response = client
            .signup(&SignupRequest {
                email: "new@school.test".into(),
                password: "secret".into(),
                full_name: "New Athlete".into(),
                phone_number: "+7 900 000 00 00".into(),
            })
            .await
            .unwrap();
        assert_eq!(response.message, "User created");
    }

    #[tokio::test]
    async fn test_logout_without_token_skips_request() {
        let server = MockServer::start().await;
        Mock::given(path("/users/logout"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_with_token(&server, None).await;
        let response = client.logout().await.unwrap();
        assert_eq!(response.message, "Logged out successfully");
    }

    #[tokio::test]
    async fn test_logout_clears_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/logout"))
            .and(header("Authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "bye"})))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_with_token(&server, Some("tok")).await;
        assert_eq!(client.logout().await.unwrap().message, "bye");
        assert!(client.store().token().await.is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_token_even_when_server_fails() {
        let server = MockServer::start().await;
        Mock::given(path("/users/logout"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let client = client_with_token(&server, Some("tok")).await;
        let err = client.logout().await.unwrap_err();
        assert_eq!(err.to_string(), "Error 500: Internal Server Error");
        assert!(client.store().token().await.is_none());

        // Subsequent authorized calls fail locally
        assert_eq!(client.trainers().await.unwrap_err(), ApiError::NotAuthenticated);
        assert_eq!(client.current_user().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_authorized_call_without_token_fails_locally() {
        let server = MockServer::start().await;
        Mock::given(path("/coaches"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_with_token(&server, None).await;
        let err = client.trainers().await.unwrap_err();
        assert_eq!(err, ApiError::NotAuthenticated);
        assert_eq!(err.to_string(), "user not authorized");
    }

    #[tokio::test]
    async fn test_trainers_and_profile() {
        let server = MockServer::start().await;
        let trainer = json!({
            "id": 2, "experience_years": 8, "bio": "Boxing coach", "full_name": "Pavel Orlov",
            "email": "pavel@school.test", "specialization": ["Boxing"]
        });
        Mock::given(method("GET"))
            .and(path("/coaches"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([trainer.clone()])))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/coaches/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "trainer": trainer,
                "schedule": [training_json(11, "individual", "2024-05-26")]
            })))
            .mount(&server)
            .await;

        let client = client_with_token(&server, Some("tok")).await;
        let trainers = client.trainers().await.unwrap();
        assert_eq!(trainers.len(), 1);
        assert_eq!(trainers[0].full_name, "Pavel Orlov");

        let profile = client.trainer(2).await.unwrap();
        assert_eq!(profile.trainer.id, 2);
        assert_eq!(profile.schedule.len(), 1);
        assert_eq!(profile.schedule[0].id, 11);
    }

    #[tokio::test]
    async fn test_missing_trainer_reports_status() {
        let server = MockServer::start().await;
        Mock::given(path("/coaches/99"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"detail": "Coach not found"})),
            )
            .mount(&server)
            .await;

        let client = client_with_token(&server, Some("tok")).await;
        let err = client.trainer(99).await.unwrap_err();
        assert_eq!(err.status(), Some(404));
        assert_eq!(err.to_string(), "Coach not found");
    }

    #[tokio::test]
    async fn test_schedule_filters_by_kind() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/schedule"))
            .and(query_param("type", "group"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                training_json(1, "group", "2024-05-25"),
                training_json(2, "group", "2024-05-26"),
            ])))
            .mount(&server)
            .await;

        let client = client_with_token(&server, Some("tok")).await;
        let entries = client.schedule(Some(TrainingKind::Group)).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|t| t.kind == TrainingKind::Group));
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(path("/schedule"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
            .mount(&server)
            .await;

        let client = client_with_token(&server, Some("tok")).await;
        let err = client.schedule(None).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_create_training_conflict_is_surfaced() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/schedule"))
            .and(body_json(json!({
                "start_time": "2024-01-20T10:00:00",
                "end_time": "2024-01-20T11:30:00",
                "group_id": 1,
                "hall_id": 3
            })))
            .respond_with(
                ResponseTemplate::new(409)
                    .set_body_json(json!({"message": "Hall is already booked"})),
            )
            .mount(&server)
            .await;

        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        let body = CreateTrainingRequest {
            start_time: date.and_hms_opt(10, 0, 0).unwrap(),
            end_time: date.and_hms_opt(11, 30, 0).unwrap(),
            group_id: 1,
            hall_id: 3,
        };
        let client = client_with_token(&server, Some("tok")).await;
        let err = client.create_training(&body).await.unwrap_err();
        assert_eq!(err.to_string(), "Hall is already booked");
    }

    #[tokio::test]
    async fn test_update_training_uses_put() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/schedule/42"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 21).unwrap();
        let body = CreateTrainingRequest {
            start_time: date.and_hms_opt(9, 0, 0).unwrap(),
            end_time: date.and_hms_opt(10, 0, 0).unwrap(),
            group_id: 1,
            hall_id: 1,
        };
        let client = client_with_token(&server, Some("tok")).await;
        client.update_training(42, &body).await.unwrap();
    }

    #[tokio::test]
    async fn test_groups_and_halls() {
        let server = MockServer::start().await;
        Mock::given(path("/groups"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!([{"id": 1, "name": "Juniors"}])),
            )
            .mount(&server)
            .await;
        Mock::given(path("/halls"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 4, "name": "Main hall", "capacity": 30}
            ])))
            .mount(&server)
            .await;

        let client = client_with_token(&server, Some("tok")).await;
        let groups = client.groups().await.unwrap();
        assert_eq!(groups[0].name, "Juniors");
        let halls = client.halls().await.unwrap();
        assert_eq!(halls[0].label(), "Main hall (30 places)");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:8000/", MemoryStore::new());
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.url("/coaches"), "http://localhost:8000/coaches");
    }
}
