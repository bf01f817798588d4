use super::transport::{
    FilePart, HttpReply, HttpRequest, Method, RequestBody, ReqwestTransport, Transport,
};
use super::wire::{decode_analysis, error_detail};
use crate::app::domain::input::{InputMode, SubmissionInput};
use crate::app::domain::settings::AppSettings;
use crate::app::domain::verdict::{AnalysisResult, ServiceStatus};
use crate::app::infrastructure::error::{AppError, SubmitError};

const HTTP_PAYLOAD_TOO_LARGE: i32 = 413;

/// Where each input mode is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub base_url: String,
    pub text: String,
    pub url: String,
    pub image: String,
}

impl Endpoints {
    pub fn from_settings(settings: &AppSettings) -> Self {
        Self {
            base_url: settings.api_base_url.clone(),
            text: settings.text_endpoint.clone(),
            url: settings.url_endpoint.clone(),
            image: settings.image_endpoint.clone(),
        }
    }

    pub fn url_for(&self, mode: InputMode) -> String {
        let path = match mode {
            InputMode::Text => &self.text,
            InputMode::Url => &self.url,
            InputMode::Image => &self.image,
        };
        join_url(&self.base_url, path)
    }

    pub fn status_url(&self) -> String {
        join_url(&self.base_url, "/")
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::from_settings(&AppSettings::default())
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim().trim_end_matches('/'),
        path.trim().trim_start_matches('/')
    )
}

/// Anything that can turn a submission into a verdict.
pub trait Classify: Send + Sync {
    fn classify(&self, input: &SubmissionInput) -> Result<AnalysisResult, SubmitError>;
}

pub struct ClassifierClient<T: Transport = ReqwestTransport> {
    endpoints: Endpoints,
    transport: T,
}

impl ClassifierClient<ReqwestTransport> {
    pub fn from_settings(settings: &AppSettings) -> Result<Self, AppError> {
        let transport = ReqwestTransport::new(settings.request_timeout_secs)
            .map_err(|e| AppError::Service(e.0))?;
        Ok(Self::new(Endpoints::from_settings(settings), transport))
    }
}

impl<T: Transport> ClassifierClient<T> {
    pub fn new(endpoints: Endpoints, transport: T) -> Self {
        Self {
            endpoints,
            transport,
        }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Encode the request for a submission: JSON for text and links,
    /// multipart for images.
    pub fn request_for(&self, input: &SubmissionInput) -> HttpRequest {
        let url = self.endpoints.url_for(input.mode());
        match input {
            SubmissionInput::Text(text) => json_post(url, serde_json::json!({ "text": text })),
            SubmissionInput::Url(link) => json_post(url, serde_json::json!({ "url": link })),
            SubmissionInput::Image(image) => HttpRequest {
                method: Method::Post,
                url,
                body: RequestBody::File(FilePart {
                    field: "file".to_string(),
                    file_name: image.file_name.clone(),
                    content_type: image.content_type.clone(),
                    data: image.data.clone(),
                }),
            },
        }
    }

    /// Probe the service's status endpoint.
    pub fn health(&self) -> Result<ServiceStatus, AppError> {
        let request = HttpRequest {
            method: Method::Get,
            url: self.endpoints.status_url(),
            body: RequestBody::Empty,
        };
        let reply = self
            .transport
            .send(request)
            .map_err(|e| AppError::Service(e.0))?;

        if !reply.is_success() {
            return Err(AppError::Service(format!("status endpoint returned HTTP {}", reply.status)));
        }
        Ok(serde_json::from_slice(&reply.body)?)
    }
}

impl<T: Transport> Classify for ClassifierClient<T> {
    fn classify(&self, input: &SubmissionInput) -> Result<AnalysisResult, SubmitError> {
        let mode = input.mode();
        let request = self.request_for(input);
        log::debug!("POST {}", request.url);

        let reply = self.transport.send(request).map_err(|e| {
            log::warn!("{} submission could not reach the service: {}", mode.display_name(), e);
            SubmitError::Network { mode, cause: e.0 }
        })?;

        interpret_reply(mode, reply)
    }
}

fn json_post(url: String, payload: serde_json::Value) -> HttpRequest {
    HttpRequest {
        method: Method::Post,
        url,
        body: RequestBody::Json(payload),
    }
}

/// Map an HTTP reply to a verdict or a classified failure.
pub fn interpret_reply(mode: InputMode, reply: HttpReply) -> Result<AnalysisResult, SubmitError> {
    if reply.is_success() {
        return decode_analysis(&reply.body).map_err(|e| {
            log::warn!("Unreadable analysis body (HTTP {}): {}", reply.status, e);
            SubmitError::unexpected_response(reply.status)
        });
    }

    if mode == InputMode::Image && reply.status == HTTP_PAYLOAD_TOO_LARGE {
        return Err(SubmitError::PayloadTooLarge);
    }

    match error_detail(&reply.body) {
        Some(detail) => Err(SubmitError::Server {
            status: Some(reply.status),
            message: detail,
        }),
        None => Err(SubmitError::server_generic(reply.status)),
    }
}
