//! REST client for the event backend.
//!
//! The backend owns the event store and the credential flow; this client
//! wraps its endpoints and normalizes responses into the core types.
//! Malformed events in a fetch response are skipped, never fatal.

use reqwest::{Client, StatusCode};
use serde_json::json;
use url::Url;

use crate::auth::AuthSession;
use crate::error::{AuthError, CoreError, EventSourceError};
use crate::event::{CalendarEvent, RawEvent};

/// Client for the calendar event backend.
pub struct EventSourceClient {
    base_url: Url,
    http_client: Client,
}

impl EventSourceClient {
    /// Create a client for the backend at `base_url`.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            http_client: Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, EventSourceError> {
        self.base_url
            .join(path)
            .map_err(|e| EventSourceError::UnexpectedResponse(format!("bad endpoint {path}: {e}")))
    }

    /// Exchange username/password for a bearer session.
    ///
    /// POST `/auth/token`, form-encoded, mirroring the backend's OAuth2
    /// password flow.
    pub async fn login(&self, username: &str, password: &str) -> Result<AuthSession, CoreError> {
        let resp = self
            .http_client
            .post(self.endpoint("auth/token")?)
            .form(&[("username", username), ("password", password)])
            .send()
            .await
            .map_err(EventSourceError::from)?;

        if !resp.status().is_success() {
            let detail = error_detail(resp).await;
            return Err(AuthError::LoginFailed(detail).into());
        }

        let body: serde_json::Value = resp.json().await.map_err(EventSourceError::from)?;
        let token = body
            .get("access_token")
            .and_then(|t| t.as_str())
            .ok_or_else(|| {
                EventSourceError::UnexpectedResponse("token response missing access_token".into())
            })?;

        Ok(AuthSession::from_token(token))
    }

    /// Register a new account, then log in with the same credentials.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        email: &str,
    ) -> Result<AuthSession, CoreError> {
        let resp = self
            .http_client
            .post(self.endpoint("auth/register")?)
            .json(&json!({
                "username": username,
                "password": password,
                "email": email,
            }))
            .send()
            .await
            .map_err(EventSourceError::from)?;

        if !resp.status().is_success() {
            let detail = error_detail(resp).await;
            return Err(AuthError::RegistrationFailed(detail).into());
        }

        self.login(username, password).await
    }

    /// Fetch all events visible to the session.
    ///
    /// Events whose `start` cannot be parsed are dropped; the rest of the
    /// response still loads.
    pub async fn fetch_events(
        &self,
        session: &AuthSession,
    ) -> Result<Vec<CalendarEvent>, CoreError> {
        session.ensure_valid()?;

        let resp = self
            .http_client
            .get(self.endpoint("events/")?)
            .bearer_auth(&session.access_token)
            .send()
            .await
            .map_err(EventSourceError::from)?;

        let resp = check_status(resp).await?;
        let raw: Vec<RawEvent> = resp.json().await.map_err(EventSourceError::from)?;

        Ok(raw.into_iter().filter_map(CalendarEvent::from_raw).collect())
    }

    /// Persist a new or edited event.
    pub async fn save_event(
        &self,
        session: &AuthSession,
        event: &CalendarEvent,
    ) -> Result<(), CoreError> {
        session.ensure_valid()?;

        let resp = self
            .http_client
            .post(self.endpoint("events/")?)
            .bearer_auth(&session.access_token)
            .json(&event.to_raw())
            .send()
            .await
            .map_err(EventSourceError::from)?;

        check_status(resp).await?;
        Ok(())
    }

    /// Delete an event by id.
    pub async fn delete_event(&self, session: &AuthSession, id: &str) -> Result<(), CoreError> {
        session.ensure_valid()?;

        let resp = self
            .http_client
            .delete(self.endpoint(&format!("events/{id}"))?)
            .bearer_auth(&session.access_token)
            .send()
            .await
            .map_err(EventSourceError::from)?;

        check_status(resp).await?;
        Ok(())
    }
}

/// Map a non-success response to a typed error. 401 means the token was
/// rejected and the caller should re-authenticate.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, CoreError> {
    if resp.status() == StatusCode::UNAUTHORIZED {
        return Err(AuthError::SessionExpired.into());
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(EventSourceError::Status { status, body }.into());
    }
    Ok(resp)
}

/// Pull the backend's `detail` message out of an error response, falling
/// back to the raw body.
async fn error_detail(resp: reqwest::Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
        .unwrap_or_else(|| format!("{status}: {body}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn client_for(server: &mockito::ServerGuard) -> EventSourceClient {
        let base = Url::parse(&format!("{}/", server.url())).unwrap();
        EventSourceClient::new(base)
    }

    fn session() -> AuthSession {
        AuthSession::from_token("test-token")
    }

    #[tokio::test]
    async fn login_returns_session_from_access_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/auth/token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"access_token": "abc123", "token_type": "bearer"}"#)
            .create_async()
            .await;

        let session = client_for(&server).login("alice", "hunter2").await.unwrap();
        assert_eq!(session.access_token, "abc123");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn login_failure_surfaces_backend_detail() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/token")
            .with_status(401)
            .with_body(r#"{"detail": "Incorrect username or password"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .login("alice", "wrong")
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Incorrect username or password"));
    }

    #[tokio::test]
    async fn register_creates_account_then_logs_in() {
        let mut server = mockito::Server::new_async().await;
        let register = server
            .mock("POST", "/auth/register")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message": "User created successfully"}"#)
            .create_async()
            .await;
        let token = server
            .mock("POST", "/auth/token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"access_token": "fresh", "token_type": "bearer"}"#)
            .create_async()
            .await;

        let session = client_for(&server)
            .register("bob", "hunter2", "bob@example.com")
            .await
            .unwrap();
        assert_eq!(session.access_token, "fresh");
        register.assert_async().await;
        token.assert_async().await;
    }

    #[tokio::test]
    async fn duplicate_registration_is_rejected() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/auth/register")
            .with_status(400)
            .with_body(r#"{"detail": "Username already registered"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .register("bob", "hunter2", "bob@example.com")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoreError::Auth(AuthError::RegistrationFailed(_))
        ));
        assert!(err.to_string().contains("Username already registered"));
    }

    #[tokio::test]
    async fn fetch_events_skips_malformed_entries() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/events/")
            .match_header("authorization", "Bearer test-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[
                    {"id": "1", "title": "Gym", "start": "2024-04-10T18:00",
                     "end": "2024-04-10T19:00", "tags": "gym"},
                    {"id": "2", "title": "Broken", "start": "not-a-date"}
                ]"#,
            )
            .create_async()
            .await;

        let events = client_for(&server).fetch_events(&session()).await.unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Gym");
        assert_eq!(events[0].tags, vec!["gym"]);
    }

    #[tokio::test]
    async fn rejected_token_maps_to_session_expired() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/events/")
            .with_status(401)
            .create_async()
            .await;

        let err = client_for(&server)
            .fetch_events(&session())
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Auth(AuthError::SessionExpired)));
    }

    #[tokio::test]
    async fn save_event_posts_wire_shape() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/events/")
            .match_header("authorization", "Bearer test-token")
            .match_body(mockito::Matcher::PartialJson(serde_json::json!({
                "id": "e-1",
                "title": "Gym",
                "tags": "gym, personal",
            })))
            .with_status(200)
            .with_body(r#"{"message": "Event created successfully"}"#)
            .create_async()
            .await;

        let event = CalendarEvent {
            id: "e-1".into(),
            title: "Gym".into(),
            start: Utc::now(),
            end: None,
            description: None,
            tags: vec!["gym".into(), "personal".into()],
        };
        client_for(&server)
            .save_event(&session(), &event)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn delete_event_hits_id_path() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/events/e-1")
            .with_status(200)
            .create_async()
            .await;

        client_for(&server)
            .delete_event(&session(), "e-1")
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn server_error_carries_status_and_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/events/")
            .with_status(500)
            .with_body("boom")
            .create_async()
            .await;

        let err = client_for(&server)
            .fetch_events(&session())
            .await
            .unwrap_err();
        match err {
            CoreError::EventSource(EventSourceError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
