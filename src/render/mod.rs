//! Pintado del modelo de vista en texto para la terminal

use crate::models::{AnalysisResult, FormInput, ViewModel};
use phf::phf_map;
use regex::Regex;
use std::sync::OnceLock;

pub const TITLE: &str = "OutfitAdvisor";
pub const PANEL_BODY_TYPE: &str = "Tipo de cuerpo";
pub const PANEL_FACE_SHAPE: &str = "Rostro";
pub const PANEL_COLOR_PALETTE: &str = "Colorimetría";
pub const RECOMMENDATIONS_HEADING: &str = "Recomendaciones de prendas";

const SWATCH: &str = "●";

/// Colores CSS con nombre más habituales en paletas de ropa
static NAMED_COLORS: phf::Map<&'static str, (u8, u8, u8)> = phf_map! {
    "black" => (0, 0, 0),
    "white" => (255, 255, 255),
    "gray" => (128, 128, 128),
    "grey" => (128, 128, 128),
    "silver" => (192, 192, 192),
    "navy" => (0, 0, 128),
    "blue" => (0, 0, 255),
    "teal" => (0, 128, 128),
    "green" => (0, 128, 0),
    "olive" => (128, 128, 0),
    "khaki" => (240, 230, 140),
    "beige" => (245, 245, 220),
    "ivory" => (255, 255, 240),
    "wheat" => (245, 222, 179),
    "tan" => (210, 180, 140),
    "brown" => (165, 42, 42),
    "maroon" => (128, 0, 0),
    "burgundy" => (128, 0, 32),
    "red" => (255, 0, 0),
    "coral" => (255, 127, 80),
    "salmon" => (250, 128, 114),
    "orange" => (255, 165, 0),
    "gold" => (255, 215, 0),
    "yellow" => (255, 255, 0),
    "pink" => (255, 192, 203),
    "purple" => (128, 0, 128),
    "lavender" => (230, 230, 250),
    "turquoise" => (64, 224, 208),
};

fn hex_color_re() -> Option<&'static Regex> {
    static RE: OnceLock<Option<Regex>> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").ok())
        .as_ref()
}

/// Opciones de pintado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Colorear las muestras con secuencias ANSI de color verdadero
    pub ansi_swatches: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { ansi_swatches: true }
    }
}

/// Convierte `#rgb`, `#rrggbb` o un nombre CSS conocido a RGB
pub fn parse_color(value: &str) -> Option<(u8, u8, u8)> {
    let value = value.trim();
    if let Some(caps) = hex_color_re().and_then(|re| re.captures(value)) {
        let hex = &caps[1];
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        return if hex.len() == 3 {
            let mut digits = hex.chars().map(|c| c.to_string().repeat(2));
            Some((
                channel(digits.next()?.as_str())?,
                channel(digits.next()?.as_str())?,
                channel(digits.next()?.as_str())?,
            ))
        } else {
            Some((channel(&hex[0..2])?, channel(&hex[2..4])?, channel(&hex[4..6])?))
        };
    }
    NAMED_COLORS.get(value.to_ascii_lowercase().as_str()).copied()
}

/// Una muestra de color seguida de su valor
///
/// Los valores que no se reconocen como color se muestran solo como texto.
pub fn render_swatch(color: &str, options: RenderOptions) -> String {
    match parse_color(color) {
        Some((r, g, b)) if options.ansi_swatches => {
            format!("\x1b[38;2;{};{};{}m{}\x1b[0m {}", r, g, b, SWATCH, color)
        }
        Some(_) => format!("{} {}", SWATCH, color),
        None => color.to_string(),
    }
}

/// Pinta el formulario: campos, error y botón de envío
pub fn render_form(form: &FormInput, view: &ViewModel) -> String {
    let mut lines = vec![
        TITLE.to_string(),
        "=".repeat(60),
        format!("Altura (cm): {}", form.height),
        format!("Peso (kg): {}", form.weight),
        match &form.photo {
            Some(photo) => format!("Foto: {} ({})", photo.file_name, photo.mime),
            None => "Foto: (sin seleccionar)".to_string(),
        },
    ];

    if let Some(error) = view.error_message() {
        lines.push(String::new());
        lines.push(format!("❌ {}", error));
    }

    lines.push(String::new());
    if view.submit_enabled() {
        lines.push(format!("[ {} ]", view.submit_label()));
    } else {
        lines.push(format!("[ {} ] (deshabilitado)", view.submit_label()));
    }

    lines.join("\n")
}

/// Pinta los tres paneles y la lista de recomendaciones
pub fn render_analysis(analysis: &AnalysisResult, options: RenderOptions) -> String {
    let swatches = analysis
        .color_palette
        .iter()
        .map(|color| render_swatch(color, options))
        .collect::<Vec<_>>()
        .join("  ");

    let mut lines = vec![
        "Tu análisis".to_string(),
        "─".repeat(60),
        format!("{}: {}", PANEL_BODY_TYPE.to_uppercase(), analysis.body_type),
        format!("{}: {}", PANEL_FACE_SHAPE.to_uppercase(), analysis.face_shape),
        format!("{}: {}", PANEL_COLOR_PALETTE.to_uppercase(), swatches),
        String::new(),
        RECOMMENDATIONS_HEADING.to_uppercase(),
    ];
    lines.extend(
        analysis
            .recommendations
            .iter()
            .enumerate()
            .map(|(index, item)| format!("  {}. {}", index + 1, item)),
    );

    lines.join("\n")
}

/// Pinta la página entera: formulario y, si lo hay, el análisis
pub fn render_page(form: &FormInput, view: &ViewModel, options: RenderOptions) -> String {
    let mut page = render_form(form, view);
    if let Some(analysis) = view.analysis() {
        page.push_str("\n\n");
        page.push_str(&render_analysis(analysis, options));
    }
    page
}
