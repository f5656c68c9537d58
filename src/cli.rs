use clap::Parser;
use std::path::PathBuf;

/// Línea de comandos del formulario
#[derive(Parser, Debug, Clone, Default)]
#[command(
    name = "outfit-advisor",
    version,
    about = "Analiza tu foto, altura y peso y recomienda prendas"
)]
pub struct Cli {
    #[arg(long, help = "Altura en cm (100-230)")]
    pub height: Option<String>,
    #[arg(long, help = "Peso en kg (30-250)")]
    pub weight: Option<String>,
    #[arg(long, help = "Foto de cuerpo entero o rostro")]
    pub photo: Option<PathBuf>,
    #[arg(long, help = "Comprobar /health antes de enviar")]
    pub check_health: bool,
    #[arg(long, short, help = "Logs de depuración")]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_form() {
        let cli = Cli::parse_from([
            "outfit-advisor",
            "--height",
            "180",
            "--weight",
            "75",
            "--photo",
            "yo.jpg",
            "--check-health",
        ]);
        assert_eq!(cli.height.as_deref(), Some("180"));
        assert_eq!(cli.weight.as_deref(), Some("75"));
        assert_eq!(cli.photo, Some(PathBuf::from("yo.jpg")));
        assert!(cli.check_health);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_all_fields_optional() {
        let cli = Cli::parse_from(["outfit-advisor"]);
        assert!(cli.photo.is_none());
        assert!(cli.height.is_none());
    }
}
