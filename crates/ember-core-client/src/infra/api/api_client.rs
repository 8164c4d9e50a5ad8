// ember-core-client/ember-core-client
//
// Copyright: 2024, Ember Team <dev@ember.app>
// License: Mozilla Public License v2.0 (MPL v2.0)

use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};
use url::Url;

use crate::app::deps::{DynAppContext, DynHttpTransport};
use crate::domain::shared::models::RequestError;
use crate::infra::api::{HttpMethod, HttpRequest, HttpResponse};

const CONTENT_TYPE_JSON: &str = "application/json";

/// Builds requests against the Ember backend and turns responses into `RequestError`s.
#[derive(Clone)]
pub struct ApiClient {
    ctx: DynAppContext,
    transport: DynHttpTransport,
}

#[derive(Deserialize)]
struct ErrorPayload {
    message: Option<String>,
    detail: Option<String>,
}

impl ApiClient {
    pub fn new(ctx: DynAppContext, transport: DynHttpTransport) -> Self {
        Self { ctx, transport }
    }

    /// Appends `segments` to the configured base URL.
    pub fn url<'a>(
        &self,
        segments: impl IntoIterator<Item = &'a str>,
    ) -> Result<Url, RequestError> {
        let mut url = self.ctx.config.api_base_url.clone();
        url.path_segments_mut()
            .map_err(|_| RequestError::Generic {
                msg: format!("{} cannot be used as a base URL", self.ctx.config.api_base_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub async fn send(
        &self,
        method: HttpMethod,
        url: Url,
        body: Option<String>,
        requires_auth: bool,
    ) -> Result<HttpResponse, RequestError> {
        let mut request = HttpRequest::new(method, url);
        request
            .headers
            .push(("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string()));

        if requires_auth {
            if let Some(tokens) = self.ctx.auth_tokens() {
                request.headers.push((
                    "Authorization".to_string(),
                    format!("Bearer {}", tokens.session_jwt.expose_secret()),
                ));
                request.headers.push((
                    "X-Session-Token".to_string(),
                    tokens.session_token.expose_secret().clone(),
                ));
                request
                    .headers
                    .push(("X-User-ID".to_string(), tokens.user_id.to_string()));
            }
        }
        request.body = body;

        debug!("{} {}", request.method, request.url);
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            let message = serde_json::from_str::<ErrorPayload>(&response.body)
                .ok()
                .and_then(|payload| payload.message.or(payload.detail))
                .unwrap_or_default();
            warn!("Request failed with status {}. {}", response.status, message);
            return Err(RequestError::Api {
                status: response.status,
                message,
            });
        }

        Ok(response)
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        url: Url,
        requires_auth: bool,
    ) -> Result<T, RequestError> {
        let response = self.send(HttpMethod::Get, url, None, requires_auth).await?;
        parse_json(&response.body)
    }
}

pub(super) fn parse_json<T: DeserializeOwned>(body: &str) -> Result<T, RequestError> {
    serde_json::from_str(body).map_err(|err| RequestError::Parse {
        msg: err.to_string(),
    })
}

pub(super) fn to_json<T: serde::Serialize>(value: &T) -> Result<String, RequestError> {
    serde_json::to_string(value).map_err(|err| RequestError::Generic {
        msg: err.to_string(),
    })
}
