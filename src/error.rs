use thiserror::Error;

/// Mensaje mostrado cuando se envía el formulario sin foto
pub const MSG_MISSING_PHOTO: &str = "Por favor, sube una foto.";
/// Mensaje genérico para respuestas no exitosas sin `detail` utilizable
pub const MSG_ANALYSIS_FAILED: &str = "Ha ocurrido un error al analizar la imagen.";
/// Último recurso cuando el error no trae mensaje propio
pub const MSG_UNKNOWN_ERROR: &str = "Error desconocido";

/// Errores de validación del formulario
///
/// Se detectan antes de cualquier llamada de red.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No se ha seleccionado foto
    #[error("Por favor, sube una foto.")]
    MissingPhoto,
    /// El archivo no tiene un tipo MIME de imagen
    #[error("La foto debe ser una imagen.")]
    NotAnImage { mime: String },
    /// Altura vacía
    #[error("Por favor, indica tu altura.")]
    MissingHeight,
    /// Peso vacío
    #[error("Por favor, indica tu peso.")]
    MissingWeight,
    /// El campo no es un número
    #[error("El campo {field} debe ser un número.")]
    NotANumber { field: &'static str },
    /// Altura fuera de [100, 230]
    #[error("La altura debe estar entre {min} y {max} cm.")]
    HeightOutOfRange { min: u32, max: u32 },
    /// Peso fuera de [30, 250]
    #[error("El peso debe estar entre {min} y {max} kg.")]
    WeightOutOfRange { min: u32, max: u32 },
}

/// Error de un envío al servicio de análisis
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Formulario inválido, no se hizo ninguna petición
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// El servidor respondió con un estado fuera del rango de éxito
    #[error("{message}")]
    Server { status: u16, message: String },
    /// Fallo de red, cuerpo ilegible o cualquier otro error durante la petición
    #[error("{message}")]
    Transport { message: String },
}

impl SubmitError {
    /// Crea un error de transporte a partir de cualquier error
    pub fn transport(source: impl std::fmt::Display) -> Self {
        SubmitError::Transport {
            message: source.to_string(),
        }
    }

    /// Texto exacto que se muestra al usuario
    pub fn user_message(&self) -> String {
        match self {
            SubmitError::Transport { message } if message.trim().is_empty() => {
                MSG_UNKNOWN_ERROR.to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Errores del binario (configuración, archivos, cliente HTTP)
#[derive(Debug, Error)]
pub enum AppError {
    /// Archivo de configuración ilegible o TOML inválido
    #[error("Error de configuración: {0}")]
    Config(String),
    /// Error de E/S al leer la foto o la configuración
    #[error("Error de archivo ({path}): {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// No se pudo construir el cliente HTTP o la petición de salud falló
    #[error("Error HTTP ({endpoint}): {source}")]
    Http {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// El análisis terminó en error
    #[error("{}", .0.user_message())]
    Submit(#[from] SubmitError),
}

impl AppError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn http(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Http {
            endpoint: endpoint.into(),
            source,
        }
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

/// Resultado del binario
pub type AppResult<T> = Result<T, AppError>;
