use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::{Request, RequestBuilder, Response};
use lucky_shared::constants::{LUCKY_DRAW_ENDPOINT, LUCKY_INIT_ENDPOINT, LUCKY_RECORDS_ENDPOINT};
use lucky_shared::lucky_wheel::{
    ApiErrorBody, DrawInit, DrawOutcome, DrawRecord, DrawService, ServiceError,
};
use serde::de::DeserializeOwned;
use web_sys::window;

// Get auth token from storage
pub fn get_auth_token() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item("token").ok().flatten())
        .or_else(|| window()
            .and_then(|w| w.session_storage().ok().flatten())
            .and_then(|s| s.get_item("token").ok().flatten()))
}

/// Remote draw service over the REST backend. Requests use the HTTP client's
/// default timeout.
#[derive(Clone, Debug)]
pub struct HttpDrawService {
    base_url: String,
}

impl HttpDrawService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }
}

fn authorized(request: RequestBuilder) -> RequestBuilder {
    match get_auth_token() {
        Some(token) => request.header("Authorization", &format!("Bearer {}", token)),
        None => request,
    }
}

async fn send(request: RequestBuilder) -> Result<Response, ServiceError> {
    authorized(request)
        .send()
        .await
        .map_err(|e| ServiceError::Network(format!("{:?}", e)))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ServiceError> {
    if response.ok() {
        return response
            .json::<T>()
            .await
            .map_err(|e| ServiceError::Malformed(format!("{:?}", e)));
    }

    let status = response.status();
    let url = response.url();
    let body = response.json::<ApiErrorBody>().await.ok();
    let err = ServiceError::from_response(status, body);
    log::debug!("{} answered {}: {}", url, status, err);
    Err(err)
}

impl DrawService for HttpDrawService {
    fn init_draw(&self) -> LocalBoxFuture<'_, Result<DrawInit, ServiceError>> {
        async move {
            let response = send(Request::get(&self.url(LUCKY_INIT_ENDPOINT))).await?;
            read_json(response).await
        }
        .boxed_local()
    }

    fn perform_draw(&self) -> LocalBoxFuture<'_, Result<DrawOutcome, ServiceError>> {
        async move {
            let response = send(Request::post(&self.url(LUCKY_DRAW_ENDPOINT))).await?;
            read_json(response).await
        }
        .boxed_local()
    }

    fn draw_records(&self) -> LocalBoxFuture<'_, Result<Vec<DrawRecord>, ServiceError>> {
        async move {
            let response = send(Request::get(&self.url(LUCKY_RECORDS_ENDPOINT))).await?;
            read_json(response).await
        }
        .boxed_local()
    }
}
