//! Tests for the API client functionality
//!
//! Validates base URL resolution, the requests each client method builds, and
//! the helpers components use to turn [`ApiError`] values into messages.

#[cfg(test)]
mod tests {
    use crate::api::{AgendaClient, ApiError, resolve_base_url};
    use crate::config::FrontendConfig;
    use reqwest::header::AUTHORIZATION;
    use reqwest::{Method, StatusCode};
    use shared::models::LoginRequest;

    const ORIGIN: &str = "http://localhost:8080";

    fn client() -> AgendaClient {
        AgendaClient::with_origin("/api", Some(ORIGIN))
    }

    /// Tests URL joining with and without trailing slashes
    #[test]
    fn test_api_url_joining() {
        let client = AgendaClient::new("http://localhost:8080/api/");
        assert_eq!(
            client.api_url("appointmentstable"),
            "http://localhost:8080/api/appointmentstable"
        );
        assert_eq!(
            client.api_url("/auth/login"),
            "http://localhost:8080/api/auth/login"
        );
    }

    /// Tests that relative bases are resolved against the page origin
    #[test]
    fn test_relative_base_resolves_against_origin() {
        assert_eq!(resolve_base_url("/api", Some(ORIGIN)), "http://localhost:8080/api");
        assert_eq!(resolve_base_url("/api/", Some("https://agenda.example.com/")), "https://agenda.example.com/api");
        assert_eq!(resolve_base_url("https://backend.example.com/v1", Some(ORIGIN)), "https://backend.example.com/v1");
    }

    /// Tests the fallback when no origin is known
    #[test]
    fn test_relative_base_without_origin() {
        assert_eq!(resolve_base_url("/api/", None), "/api");
    }

    /// Tests that the default configuration yields requests reqwest accepts
    #[test]
    fn test_default_config_builds_valid_request() {
        let client = AgendaClient::with_origin(FrontendConfig::new().api_base_url(), Some(ORIGIN));
        let request = client.list_appointments_request("t").build();
        assert!(request.is_ok(), "request from default config was rejected: {request:?}");
    }

    /// Tests the appointments listing request
    #[test]
    fn test_list_appointments_request() {
        let request = client().list_appointments_request("abc").build().unwrap();
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.url().as_str(), "http://localhost:8080/api/appointmentstable");
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer abc");
    }

    /// Tests the slot search request carries the date query
    #[test]
    fn test_search_slots_request() {
        let request = client().search_slots_request("abc", "2024-05-14").build().unwrap();
        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.url().path(), "/api/searchbardelete");
        assert_eq!(request.url().query(), Some("date=2024-05-14"));
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer abc");
    }

    /// Tests the slot delete request carries the id query
    #[test]
    fn test_delete_slot_request() {
        let request = client().delete_slot_request("abc", 42).build().unwrap();
        assert_eq!(request.method(), Method::DELETE);
        assert_eq!(request.url().path(), "/api/searchbardelete");
        assert_eq!(request.url().query(), Some("id=42"));
        assert_eq!(request.headers()[AUTHORIZATION], "Bearer abc");
    }

    /// Tests the login request posts credentials without a bearer token
    #[test]
    fn test_login_request() {
        let payload = LoginRequest {
            user: "admin".to_string(),
            password: "secret".to_string(),
        };
        let request = client().login_request(&payload).build().unwrap();
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.url().as_str(), "http://localhost:8080/api/auth/login");
        assert!(request.headers().get(AUTHORIZATION).is_none());
        let body = request.body().and_then(reqwest::Body::as_bytes).unwrap();
        let json: serde_json::Value = serde_json::from_slice(body).unwrap();
        assert_eq!(json, serde_json::json!({ "user": "admin", "password": "secret" }));
    }

    /// Tests message extraction from status errors
    #[test]
    fn test_status_error_message() {
        let error = ApiError::Status {
            status: StatusCode::UNAUTHORIZED,
            message: Some("Invalid credentials".to_string()),
        };
        assert_eq!(error.server_message(), Some("Invalid credentials"));
        assert_eq!(error.to_string(), "server responded with 401 Unauthorized");
    }

    /// Tests status errors without a body
    #[test]
    fn test_status_error_without_message() {
        let error = ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: None,
        };
        assert_eq!(error.server_message(), None);
        assert!(error.to_string().contains("500"));
    }
}
