//! Servicio de análisis
//!
//! Envía una petición por el transporte y traduce la respuesta cruda a un
//! resultado o a un error listo para mostrar.

use crate::clients::{AnalysisTransport, HttpReply};
use crate::error::{SubmitError, MSG_ANALYSIS_FAILED};
use crate::models::{AnalysisRequest, AnalysisResult, AnalyzeResponse, ErrorBody};
use crate::utils::logging::truncate_text;
use tracing::debug;

/// Servicio de análisis sobre un transporte cualquiera
pub struct AnalysisService<T> {
    transport: T,
}

impl<T: AnalysisTransport> AnalysisService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Envía la petición y devuelve el análisis
    ///
    /// # Errores
    /// - [`SubmitError::Server`] si el estado no es 2xx
    /// - [`SubmitError::Transport`] si falla la red o el cuerpo no encaja
    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<AnalysisResult, SubmitError> {
        let reply = self.transport.analyze(request).await?;
        interpret_reply(&reply)
    }
}

/// Traduce una respuesta HTTP cruda
pub fn interpret_reply(reply: &HttpReply) -> Result<AnalysisResult, SubmitError> {
    if !reply.is_success() {
        let detail = serde_json::from_slice::<ErrorBody>(&reply.body)
            .ok()
            .and_then(|body| body.detail_message().map(str::to_string));

        let message = match detail {
            Some(detail) => detail,
            None => {
                debug!(
                    "Cuerpo de error sin detail: {}",
                    truncate_text(&String::from_utf8_lossy(&reply.body), 120)
                );
                MSG_ANALYSIS_FAILED.to_string()
            }
        };

        debug!("El servicio respondió {}: {}", reply.status, message);
        return Err(SubmitError::Server {
            status: reply.status,
            message,
        });
    }

    let response: AnalyzeResponse = serde_json::from_slice(&reply.body).map_err(|e| {
        debug!("Respuesta exitosa con cuerpo inesperado: {}", e);
        SubmitError::Transport {
            message: format!("Respuesta inválida del servidor: {}", e),
        }
    })?;

    if let Some(status) = &response.status {
        debug!("Estado del análisis: {}", status);
    }

    Ok(response.analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MSG_UNKNOWN_ERROR;
    use crate::models::PhotoFile;
    use std::sync::{Arc, Mutex};

    const EXAMPLE_BODY: &str = r##"{"analysis":{"body_type":"Rectángulo","face_shape":"Ovalado","color_palette":["#1a1a1a","#f5deb3"],"recommendations":["Camisa slim fit","Pantalón chino"]}}"##;

    struct CannedTransport(Result<HttpReply, SubmitError>);

    impl AnalysisTransport for CannedTransport {
        async fn analyze(&self, _request: &AnalysisRequest) -> Result<HttpReply, SubmitError> {
            self.0.clone()
        }
    }

    fn request() -> AnalysisRequest {
        AnalysisRequest {
            height: "180".to_string(),
            weight: "75".to_string(),
            photo: PhotoFile::new("yo.jpg", "image/jpeg", vec![0]),
        }
    }

    #[test]
    fn test_success_keeps_order() {
        let analysis = interpret_reply(&HttpReply::new(200, EXAMPLE_BODY)).unwrap();
        assert_eq!(analysis.body_type, "Rectángulo");
        assert_eq!(analysis.face_shape, "Ovalado");
        assert_eq!(analysis.color_palette, vec!["#1a1a1a", "#f5deb3"]);
        assert_eq!(analysis.recommendations, vec!["Camisa slim fit", "Pantalón chino"]);
    }

    #[test]
    fn test_error_detail_is_used_verbatim() {
        let reply = HttpReply::new(400, r#"{"detail":"Uploaded file must be an image"}"#);
        let err = interpret_reply(&reply).unwrap_err();
        assert_eq!(
            err,
            SubmitError::Server {
                status: 400,
                message: "Uploaded file must be an image".to_string(),
            }
        );
        assert_eq!(err.user_message(), "Uploaded file must be an image");
    }

    #[test]
    fn test_error_without_json_uses_generic_message() {
        let reply = HttpReply::new(502, "<html>Bad Gateway</html>");
        let err = interpret_reply(&reply).unwrap_err();
        assert_eq!(err.user_message(), MSG_ANALYSIS_FAILED);
    }

    #[test]
    fn test_error_with_non_string_detail_uses_generic_message() {
        let reply = HttpReply::new(422, r#"{"detail":[{"msg":"field required"}]}"#);
        assert_eq!(interpret_reply(&reply).unwrap_err().user_message(), MSG_ANALYSIS_FAILED);

        let reply = HttpReply::new(500, r#"{"error":"x"}"#);
        assert_eq!(interpret_reply(&reply).unwrap_err().user_message(), MSG_ANALYSIS_FAILED);
    }

    #[test]
    fn test_success_with_malformed_body_is_transport_error() {
        let err = interpret_reply(&HttpReply::new(200, r#"{"status":"success"}"#)).unwrap_err();
        assert!(matches!(err, SubmitError::Transport { .. }));
        assert!(err.user_message().starts_with("Respuesta inválida del servidor"));
    }

    /// Escritor en memoria para capturar la salida del subscriber
    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_server_error_is_not_logged_at_warn() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let _ = interpret_reply(&HttpReply::new(400, r#"{"detail":"X"}"#));
            let _ = interpret_reply(&HttpReply::new(200, "{}"));
        });

        assert!(captured.0.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_passes_through() {
        let service = AnalysisService::new(CannedTransport(Err(SubmitError::transport(""))));
        let err = service.analyze(&request()).await.unwrap_err();
        assert_eq!(err.user_message(), MSG_UNKNOWN_ERROR);
    }

    #[tokio::test]
    async fn test_analyze_through_transport() {
        let service = AnalysisService::new(CannedTransport(Ok(HttpReply::new(200, EXAMPLE_BODY))));
        let analysis = service.analyze(&request()).await.unwrap();
        assert_eq!(analysis.recommendations.len(), 2);
    }
}
