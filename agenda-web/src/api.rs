use crate::config::FrontendConfig;
use reqwest::{Client, RequestBuilder, Response, StatusCode, Url};
use shared::models::{
    ApiErrorBody, Appointment, AppointmentSchedule, LoginRequest, LoginResponse,
};
use std::cell::OnceCell;
use thiserror::Error;

const APPOINTMENTS_PATH: &str = "appointmentstable";
const SLOTS_PATH: &str = "searchbardelete";
const LOGIN_PATH: &str = "auth/login";

thread_local! {
    static SHARED_CLIENT: OnceCell<AgendaClient> = const { OnceCell::new() };
}

/// Failures surfaced by [`AgendaClient`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),
    /// The server answered with a non-2xx status.
    #[error("server responded with {status}")]
    Status {
        status: StatusCode,
        /// Message extracted from the failure body, if any.
        message: Option<String>,
    },
    /// A 2xx response carried a body that could not be decoded.
    #[error("unexpected response body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl ApiError {
    /// Message supplied by the server for a non-2xx response.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

/// Lightweight API client for the appointments backend.
#[derive(Clone, Debug)]
pub struct AgendaClient {
    base_url: String,
    client: Client,
}

impl AgendaClient {
    /// Create a new API client with the provided base URL.
    ///
    /// A relative base such as `/api` is resolved against the page origin.
    pub fn new(base_url: &str) -> Self {
        Self::with_origin(base_url, page_origin().as_deref())
    }

    pub(crate) fn with_origin(base_url: &str, origin: Option<&str>) -> Self {
        Self {
            base_url: resolve_base_url(base_url, origin),
            client: Client::new(),
        }
    }

    /// Client bound to the configured base URL, created once per thread.
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await.map_err(ApiError::Network)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let message = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(ApiErrorBody::into_text);
        Err(ApiError::Status { status, message })
    }

    pub(crate) fn list_appointments_request(&self, token: &str) -> RequestBuilder {
        self.client
            .get(self.api_url(APPOINTMENTS_PATH))
            .bearer_auth(token)
    }

    pub(crate) fn search_slots_request(&self, token: &str, date: &str) -> RequestBuilder {
        self.client
            .get(self.api_url(SLOTS_PATH))
            .query(&[("date", date)])
            .bearer_auth(token)
    }

    pub(crate) fn delete_slot_request(&self, token: &str, id: i64) -> RequestBuilder {
        self.client
            .delete(self.api_url(SLOTS_PATH))
            .query(&[("id", id)])
            .bearer_auth(token)
    }

    pub(crate) fn login_request(&self, payload: &LoginRequest) -> RequestBuilder {
        self.client.post(self.api_url(LOGIN_PATH)).json(payload)
    }

    /// Fetch every appointment.
    pub async fn list_appointments(&self, token: &str) -> Result<Vec<Appointment>, ApiError> {
        let response = Self::send(self.list_appointments_request(token)).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    /// Fetch the schedule slots of one `YYYY-MM-DD` date.
    pub async fn search_slots(
        &self,
        token: &str,
        date: &str,
    ) -> Result<Vec<AppointmentSchedule>, ApiError> {
        let response = Self::send(self.search_slots_request(token, date)).await?;
        response.json().await.map_err(ApiError::Decode)
    }

    /// Delete a schedule slot by id.
    pub async fn delete_slot(&self, token: &str, id: i64) -> Result<(), ApiError> {
        Self::send(self.delete_slot_request(token, id)).await?;
        Ok(())
    }

    /// Exchange credentials for a bearer token.
    pub async fn login(&self, payload: &LoginRequest) -> Result<LoginResponse, ApiError> {
        let response = Self::send(self.login_request(payload)).await?;
        response.json().await.map_err(ApiError::Decode)
    }
}

/// Origin of the current page, e.g. `http://localhost:8080`.
fn page_origin() -> Option<String> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window().and_then(|window| window.location().origin().ok())
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Absolute base URL without a trailing slash.
///
/// Absolute bases are kept; relative ones are joined to `origin`. Without an
/// origin the base is returned as given.
pub(crate) fn resolve_base_url(base_url: &str, origin: Option<&str>) -> String {
    let trimmed = base_url.trim_end_matches('/');
    if Url::parse(trimmed).is_ok() {
        return trimmed.to_string();
    }
    let resolved = origin
        .and_then(|origin| Url::parse(origin).ok())
        .and_then(|origin| origin.join(trimmed).ok());
    match resolved {
        Some(url) => url.as_str().trim_end_matches('/').to_string(),
        None => {
            log::warn!("no page origin to resolve API base {trimmed}");
            trimmed.to_string()
        }
    }
}
