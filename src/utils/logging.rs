/// Utilidades de logging
///
/// Inicialización del subscriber y funciones auxiliares de formato
use crate::config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Inicializa el subscriber de `tracing`
///
/// `RUST_LOG` tiene prioridad; si no está, se usa `debug` con `verbose` y
/// `info` sin él. Llamarlo dos veces no hace nada.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Registra el arranque del programa
///
/// # Parámetros
/// - `config`: configuración en uso
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 OutfitAdvisor");
    info!("🌐 Servicio de análisis: {}", config.analyze_url());
    match config.request_timeout_secs {
        Some(secs) => info!("⏱️ Tiempo máximo por petición: {}s", secs),
        None => info!("⏱️ Sin tiempo máximo por petición"),
    }
    info!("{}", "=".repeat(60));
}

/// Trunca texto largo para mostrarlo en logs
///
/// # Parámetros
/// - `text`: texto original
/// - `max_len`: número máximo de caracteres
///
/// # Retorno
/// El texto truncado con "..." si superaba el límite
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
