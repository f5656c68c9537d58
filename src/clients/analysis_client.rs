/// Cliente HTTP del servicio de análisis
///
/// Solo transporta bytes: envía el multipart y devuelve estado y cuerpo tal
/// cual. La interpretación de la respuesta vive en `AnalysisService`.
use crate::config::Config;
use crate::error::{AppError, AppResult, SubmitError};
use crate::models::{AnalysisRequest, HealthStatus};
use reqwest::multipart::{Form, Part};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Respuesta HTTP cruda
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Estado en el rango 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Capacidad de enviar una petición de análisis
///
/// Errores de red o de construcción de la petición salen como
/// [`SubmitError::Transport`]; cualquier estado HTTP es un `Ok`.
pub trait AnalysisTransport {
    fn analyze(
        &self,
        request: &AnalysisRequest,
    ) -> impl Future<Output = Result<HttpReply, SubmitError>> + Send;
}

/// Cliente reqwest contra el servicio real
#[derive(Clone)]
pub struct HttpAnalysisClient {
    client: reqwest::Client,
    analyze_url: String,
    health_url: String,
}

impl HttpAnalysisClient {
    /// Crea el cliente a partir de la configuración
    ///
    /// Sin `request_timeout_secs` no hay límite de tiempo.
    pub fn new(config: &Config) -> AppResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| AppError::http(config.api_base_url.clone(), e))?;

        Ok(Self {
            client,
            analyze_url: config.analyze_url(),
            health_url: config.health_url(),
        })
    }

    pub fn analyze_url(&self) -> &str {
        &self.analyze_url
    }

    /// Comprueba `GET /health`
    pub async fn health(&self) -> AppResult<HealthStatus> {
        debug!("Comprobando salud del servicio: {}", self.health_url);

        let status = self
            .client
            .get(&self.health_url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| AppError::http(self.health_url.clone(), e))?
            .json::<HealthStatus>()
            .await
            .map_err(|e| AppError::http(self.health_url.clone(), e))?;

        Ok(status)
    }
}

impl AnalysisTransport for HttpAnalysisClient {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<HttpReply, SubmitError> {
        let form = build_form(request).map_err(SubmitError::transport)?;

        debug!(
            "POST {} (foto: {}, {} bytes)",
            self.analyze_url,
            request.photo.file_name,
            request.photo.bytes.len()
        );

        let response = self
            .client
            .post(&self.analyze_url)
            .multipart(form)
            .send()
            .await
            .map_err(SubmitError::transport)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(SubmitError::transport)?;

        debug!("Respuesta {} ({} bytes)", status, body.len());

        Ok(HttpReply::new(status, body.to_vec()))
    }
}

/// Construye el multipart con las partes `height`, `weight` y `photo`
fn build_form(request: &AnalysisRequest) -> reqwest::Result<Form> {
    let photo = Part::bytes(request.photo.bytes.clone())
        .file_name(request.photo.file_name.clone())
        .mime_str(&request.photo.mime)?;

    Ok(Form::new()
        .text("height", request.height.clone())
        .text("weight", request.weight.clone())
        .part("photo", photo))
}
