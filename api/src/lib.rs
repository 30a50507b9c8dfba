//! # api — HTTP client for the remote user store
//!
//! [`ApiClient`] talks to the backing service over plain HTTP and implements
//! [`store::UserStore`] for the rest of the workspace. The service predates
//! this client and has an uneven contract — mutations are multipart form
//! submissions, and several outcomes are signalled by sentinel strings rather
//! than status codes — so every response is normalized in [`wire`] into the
//! single `Result` shape the state layer handles.
//!
//! | Operation | Request |
//! |-----------|---------|
//! | list   | `GET  {base}/api/user/getdetails` |
//! | create | `POST {base}/api/user/create` — form fields `name, email, password, dob` |
//! | update | `POST {base}/api/user/updateuser` — form fields `id, name, email, password, dob` |
//! | delete | `POST {base}/api/user/deleteuser` — form field `id` |
//!
//! There are no retries and no caching: every call is fire-once, and a
//! failure surfaces as a [`store::StoreError`] message for the notification
//! layer. Non-2xx statuses and unreachable-host errors map to
//! [`StoreError::Transport`]; error fields and sentinel messages inside 2xx
//! bodies map to [`StoreError::Rejected`].

use reqwest::multipart::Form;
use store::{StoreError, User, UserDraft, UserId, UserStore};

mod wire;

/// Base URL the client is compiled against when no override is given.
pub const DEFAULT_BASE_URL: &str = "http://localhost/userdesk-backend/index.php";

/// Client for the configured deployment: the compile-time `USERDESK_API_BASE`
/// override when set, [`DEFAULT_BASE_URL`] otherwise.
pub fn make_client() -> ApiClient {
    ApiClient::new(option_env!("USERDESK_API_BASE").unwrap_or(DEFAULT_BASE_URL))
}

/// HTTP client for the four user operations.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Client against a specific base URL; a trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/user/{}", self.base_url, path)
    }

    async fn post_form(&self, path: &str, form: Form) -> Result<String, StoreError> {
        let response = self
            .http
            .post(self.endpoint(path))
            .multipart(form)
            .send()
            .await
            .map_err(transport)?;
        read_ok_body(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn transport(e: reqwest::Error) -> StoreError {
    StoreError::Transport(e.to_string())
}

/// Check the status and read the body text; a non-2xx answer is a transport
/// failure regardless of what the body says.
async fn read_ok_body(response: reqwest::Response) -> Result<String, StoreError> {
    let status = response.status();
    if !status.is_success() {
        return Err(StoreError::Transport(format!("server answered {status}")));
    }
    response.text().await.map_err(transport)
}

/// The four draft fields as discrete form parts, the shape the service's
/// mutation handlers expect.
fn draft_form(draft: &UserDraft) -> Form {
    Form::new()
        .text("name", draft.name.clone())
        .text("email", draft.email.clone())
        .text("password", draft.password.clone())
        .text("dob", draft.dob.clone())
}

impl UserStore for ApiClient {
    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let response = self
            .http
            .get(self.endpoint("getdetails"))
            .send()
            .await
            .map_err(transport)?;
        let body = read_ok_body(response).await?;
        wire::decode_list(&body).inspect_err(|e| tracing::error!("listing users failed: {e}"))
    }

    async fn create(&self, draft: &UserDraft) -> Result<(), StoreError> {
        let body = self.post_form("create", draft_form(draft)).await?;
        wire::decode_mutation(&body).inspect_err(|e| tracing::error!("creating user failed: {e}"))
    }

    async fn update(&self, id: &UserId, draft: &UserDraft) -> Result<(), StoreError> {
        let form = draft_form(draft).text("id", id.to_string());
        let body = self.post_form("updateuser", form).await?;
        wire::decode_mutation(&body).inspect_err(|e| tracing::error!("updating user failed: {e}"))
    }

    async fn delete(&self, id: &UserId) -> Result<(), StoreError> {
        let form = Form::new().text("id", id.to_string());
        let body = self.post_form("deleteuser", form).await?;
        wire::decode_delete(&body).inspect_err(|e| tracing::error!("deleting user failed: {e}"))
    }
}
