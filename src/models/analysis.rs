use serde::{Deserialize, Serialize};

/// Resultado del análisis devuelto por el servicio
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Tipo de cuerpo
    pub body_type: String,
    /// Forma del rostro
    pub face_shape: String,
    /// Colorimetría, en el orden recibido
    pub color_palette: Vec<String>,
    /// Prendas recomendadas, en el orden recibido
    pub recommendations: Vec<String>,
}

/// Cuerpo de una respuesta exitosa de `/analyze`
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub status: Option<String>,
    pub analysis: AnalysisResult,
}

/// Cuerpo opcional de una respuesta de error
///
/// `detail` queda como JSON crudo porque el servicio también puede mandar
/// listas de errores de validación en ese campo.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// `detail` solo si es un texto no vacío
    pub fn detail_message(&self) -> Option<&str> {
        self.detail
            .as_ref()
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
    }
}

/// Cuerpo de `/health`
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze_response() {
        let body = r##"{"status":"success","analysis":{"body_type":"hourglass","face_shape":"oval","color_palette":["#F5A9B8","#A9D0F5"],"recommendations":["Vestidos entallados","Cuellos en V"]}}"##;
        let response: AnalyzeResponse = serde_json::from_str(body).unwrap();

        assert_eq!(response.status.as_deref(), Some("success"));
        assert_eq!(response.analysis.body_type, "hourglass");
        assert_eq!(response.analysis.color_palette, vec!["#F5A9B8", "#A9D0F5"]);
        assert_eq!(
            response.analysis.recommendations,
            vec!["Vestidos entallados", "Cuellos en V"]
        );
    }

    #[test]
    fn test_status_is_optional() {
        let body = r#"{"analysis":{"body_type":"a","face_shape":"b","color_palette":[],"recommendations":[]}}"#;
        let response: AnalyzeResponse = serde_json::from_str(body).unwrap();
        assert!(response.status.is_none());
    }

    #[test]
    fn test_detail_message_only_for_non_empty_strings() {
        let text: ErrorBody = serde_json::from_str(r#"{"detail":"Uploaded file must be an image"}"#).unwrap();
        assert_eq!(text.detail_message(), Some("Uploaded file must be an image"));

        let empty: ErrorBody = serde_json::from_str(r#"{"detail":""}"#).unwrap();
        assert_eq!(empty.detail_message(), None);

        let list: ErrorBody =
            serde_json::from_str(r#"{"detail":[{"loc":["body","height"],"msg":"field required"}]}"#).unwrap();
        assert_eq!(list.detail_message(), None);

        let missing: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(missing.detail_message(), None);
    }
}
