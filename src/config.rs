use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::path::Path;

/// Archivo de configuración buscado en el directorio de trabajo
pub const DEFAULT_CONFIG_FILE: &str = "outfit_advisor.toml";

/// Configuración del programa
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// URL base del servicio de análisis
    pub api_base_url: String,
    /// Ruta del endpoint de análisis
    pub analyze_path: String,
    /// Ruta del endpoint de salud
    pub health_path: String,
    /// Tiempo máximo por petición; `None` espera indefinidamente
    pub request_timeout_secs: Option<u64>,
    /// Mostrar logs de depuración
    pub verbose_logging: bool,
    /// Pintar las muestras de color con ANSI
    pub color_swatches: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            analyze_path: "/analyze".to_string(),
            health_path: "/health".to_string(),
            request_timeout_secs: None,
            verbose_logging: false,
            color_swatches: true,
        }
    }
}

/// Capa opcional leída del TOML; los campos ausentes no pisan nada
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    api_base_url: Option<String>,
    analyze_path: Option<String>,
    health_path: Option<String>,
    request_timeout_secs: Option<u64>,
    verbose_logging: Option<bool>,
    color_swatches: Option<bool>,
}

impl Config {
    /// Carga completa: valores por defecto ← archivo TOML ← variables de entorno
    ///
    /// Si `OUTFIT_ADVISOR_CONFIG` está definida el archivo debe existir; solo
    /// `outfit_advisor.toml` en el directorio de trabajo es opcional.
    pub fn load() -> AppResult<Self> {
        let explicit = std::env::var("OUTFIT_ADVISOR_CONFIG").ok();
        Ok(Self::base_layer(explicit.as_deref())?.with_env())
    }

    fn base_layer(explicit: Option<&str>) -> AppResult<Self> {
        match explicit {
            Some(path) => Self::from_toml_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_toml_file(DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::default()),
        }
    }

    /// Lee un archivo TOML encima de los valores por defecto
    pub fn from_toml_file(path: &str) -> AppResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> AppResult<Self> {
        let file: FileConfig = toml::from_str(content)?;
        Ok(Self::default().merge(file))
    }

    pub fn from_env() -> Self {
        Self::default().with_env()
    }

    fn merge(self, file: FileConfig) -> Self {
        Self {
            api_base_url: file.api_base_url.unwrap_or(self.api_base_url),
            analyze_path: file.analyze_path.unwrap_or(self.analyze_path),
            health_path: file.health_path.unwrap_or(self.health_path),
            request_timeout_secs: file.request_timeout_secs.or(self.request_timeout_secs),
            verbose_logging: file.verbose_logging.unwrap_or(self.verbose_logging),
            color_swatches: file.color_swatches.unwrap_or(self.color_swatches),
        }
    }

    fn with_env(self) -> Self {
        Self {
            api_base_url: std::env::var("OUTFIT_API_BASE_URL").unwrap_or(self.api_base_url),
            analyze_path: std::env::var("OUTFIT_ANALYZE_PATH").unwrap_or(self.analyze_path),
            health_path: std::env::var("OUTFIT_HEALTH_PATH").unwrap_or(self.health_path),
            request_timeout_secs: std::env::var("OUTFIT_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .or(self.request_timeout_secs),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.verbose_logging),
            color_swatches: std::env::var("OUTFIT_COLOR_SWATCHES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(self.color_swatches),
        }
    }

    /// URL completa del endpoint de análisis
    pub fn analyze_url(&self) -> String {
        join_url(&self.api_base_url, &self.analyze_path)
    }

    /// URL completa del endpoint de salud
    pub fn health_url(&self) -> String {
        join_url(&self.api_base_url, &self.health_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Los tests que tocan variables de entorno se ejecutan de uno en uno
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    const ENV_VARS: [&str; 7] = [
        "OUTFIT_ADVISOR_CONFIG",
        "OUTFIT_API_BASE_URL",
        "OUTFIT_ANALYZE_PATH",
        "OUTFIT_HEALTH_PATH",
        "OUTFIT_REQUEST_TIMEOUT_SECS",
        "VERBOSE_LOGGING",
        "OUTFIT_COLOR_SWATCHES",
    ];

    fn clear_env() {
        for var in ENV_VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_default_endpoint() {
        let config = Config::default();
        assert_eq!(config.analyze_url(), "http://localhost:8000/analyze");
        assert_eq!(config.health_url(), "http://localhost:8000/health");
        assert_eq!(config.request_timeout_secs, None);
    }

    #[test]
    fn test_toml_overrides_only_given_fields() {
        let config = Config::from_toml_str(
            r#"
            api_base_url = "http://analysis.internal:9000/"
            request_timeout_secs = 30
            "#,
        )
        .unwrap();

        assert_eq!(config.analyze_url(), "http://analysis.internal:9000/analyze");
        assert_eq!(config.request_timeout_secs, Some(30));
        assert!(config.color_swatches);
    }

    #[test]
    fn test_unknown_toml_key_is_rejected() {
        let result = Config::from_toml_str("api_url = \"x\"");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_explicit_config_path_must_exist() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        std::env::set_var("OUTFIT_ADVISOR_CONFIG", "/nonexistent/outfit_typo.toml");

        let result = Config::load();
        clear_env();

        assert!(matches!(result, Err(AppError::Io { .. })));
    }

    #[test]
    fn test_explicit_config_path_is_loaded() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        let path = std::env::temp_dir().join("outfit_advisor_explicit_config.toml");
        std::fs::write(&path, "api_base_url = \"http://otro:7000\"\n").unwrap();
        std::env::set_var("OUTFIT_ADVISOR_CONFIG", &path);

        let result = Config::load();
        clear_env();
        let _ = std::fs::remove_file(&path);

        assert_eq!(result.unwrap().analyze_url(), "http://otro:7000/analyze");
    }

    #[test]
    fn test_env_overrides_toml_layer() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        std::env::set_var("OUTFIT_API_BASE_URL", "http://desde-entorno:8100");
        std::env::set_var("VERBOSE_LOGGING", "true");

        let config = Config::from_toml_str(
            r#"
            api_base_url = "http://desde-archivo:9000"
            verbose_logging = false
            "#,
        )
        .unwrap()
        .with_env();
        clear_env();

        assert_eq!(config.analyze_url(), "http://desde-entorno:8100/analyze");
        assert!(config.verbose_logging);
    }

    #[test]
    fn test_unparseable_env_keeps_toml_value() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        clear_env();
        std::env::set_var("OUTFIT_REQUEST_TIMEOUT_SECS", "abc");
        std::env::set_var("OUTFIT_COLOR_SWATCHES", "quizá");

        let config = Config::from_toml_str(
            r#"
            request_timeout_secs = 30
            color_swatches = false
            "#,
        )
        .unwrap()
        .with_env();
        clear_env();

        assert_eq!(config.request_timeout_secs, Some(30));
        assert!(!config.color_swatches);
    }
}
