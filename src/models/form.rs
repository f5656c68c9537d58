//! Estado del formulario
//!
//! Altura y peso se guardan tal cual se escriben; la foto es el archivo
//! elegido por el usuario. Nada se valida al escribir, solo al enviar.

use crate::error::{AppError, AppResult, ValidationError};
use phf::phf_map;
use std::path::Path;

/// Rango admitido de altura en cm (inclusivo)
pub const HEIGHT_MIN_CM: u32 = 100;
pub const HEIGHT_MAX_CM: u32 = 230;
/// Rango admitido de peso en kg (inclusivo)
pub const WEIGHT_MIN_KG: u32 = 30;
pub const WEIGHT_MAX_KG: u32 = 250;

const FALLBACK_MIME: &str = "application/octet-stream";

static IMAGE_MIME_BY_EXTENSION: phf::Map<&'static str, &'static str> = phf_map! {
    "jpg" => "image/jpeg",
    "jpeg" => "image/jpeg",
    "png" => "image/png",
    "gif" => "image/gif",
    "webp" => "image/webp",
    "bmp" => "image/bmp",
    "heic" => "image/heic",
    "avif" => "image/avif",
};

/// Archivo de foto seleccionado
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl PhotoFile {
    pub fn new(file_name: impl Into<String>, mime: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Lee una foto del disco deduciendo el tipo MIME por la extensión
    pub async fn from_path(path: &Path) -> AppResult<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AppError::io(path.display().to_string(), e))?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "photo".to_string());

        Ok(Self::new(file_name, mime_for_path(path), bytes))
    }

    pub fn is_image(&self) -> bool {
        self.mime.starts_with("image/")
    }
}

/// Tipo MIME según la extensión; las desconocidas no son imagen
pub fn mime_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .and_then(|ext| IMAGE_MIME_BY_EXTENSION.get(ext.as_str()).copied())
        .unwrap_or(FALLBACK_MIME)
}

/// Datos del formulario
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub height: String,
    pub weight: String,
    pub photo: Option<PhotoFile>,
}

/// Petición lista para enviar, ya validada
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub height: String,
    pub weight: String,
    pub photo: PhotoFile,
}

impl FormInput {
    /// Valida el formulario y construye la petición
    ///
    /// La foto se comprueba primero: sin foto el error es siempre
    /// [`ValidationError::MissingPhoto`], aunque falten otros campos.
    pub fn validate(&self) -> Result<AnalysisRequest, ValidationError> {
        let photo = self.photo.as_ref().ok_or(ValidationError::MissingPhoto)?;
        if !photo.is_image() {
            return Err(ValidationError::NotAnImage {
                mime: photo.mime.clone(),
            });
        }

        let height = self.height.trim();
        if height.is_empty() {
            return Err(ValidationError::MissingHeight);
        }
        let cm = parse_number(height, "altura")?;
        if !in_range(cm, HEIGHT_MIN_CM, HEIGHT_MAX_CM) {
            return Err(ValidationError::HeightOutOfRange {
                min: HEIGHT_MIN_CM,
                max: HEIGHT_MAX_CM,
            });
        }

        let weight = self.weight.trim();
        if weight.is_empty() {
            return Err(ValidationError::MissingWeight);
        }
        let kg = parse_number(weight, "peso")?;
        if !in_range(kg, WEIGHT_MIN_KG, WEIGHT_MAX_KG) {
            return Err(ValidationError::WeightOutOfRange {
                min: WEIGHT_MIN_KG,
                max: WEIGHT_MAX_KG,
            });
        }

        Ok(AnalysisRequest {
            height: height.to_string(),
            weight: weight.to_string(),
            photo: photo.clone(),
        })
    }
}

fn parse_number(value: &str, field: &'static str) -> Result<f64, ValidationError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .ok_or(ValidationError::NotANumber { field })
}

fn in_range(value: f64, min: u32, max: u32) -> bool {
    value >= f64::from(min) && value <= f64::from(max)
}
