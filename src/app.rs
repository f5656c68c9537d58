use crate::cli::Cli;
use crate::clients::HttpAnalysisClient;
use crate::config::Config;
use crate::error::{AppError, AppResult, SubmitError};
use crate::models::{PhotoFile, RequestOutcome, ViewModel};
use crate::render::{render_form, render_page, RenderOptions};
use crate::utils::logging::log_startup;
use crate::workflow::SubmissionController;
use anyhow::{bail, Context, Result};
use tracing::info;

/// Estructura principal de la aplicación
pub struct App {
    config: Config,
    client: HttpAnalysisClient,
}

impl App {
    /// Inicializa la aplicación
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        let client =
            HttpAnalysisClient::new(&config).context("No se pudo crear el cliente HTTP")?;

        Ok(Self { config, client })
    }

    /// Comprueba que el servicio responde en `/health` con `"ok"`
    pub async fn check_health(&self) -> Result<()> {
        let status = self
            .client
            .health()
            .await
            .context("El servicio de análisis no responde")?;

        if !status.is_ok() {
            bail!("El servicio de análisis respondió estado '{}'", status.status);
        }
        info!("✓ Servicio de análisis disponible");
        Ok(())
    }

    /// Rellena el formulario, lo envía y pinta el resultado
    ///
    /// Un análisis fallido vuelve como [`AppError::Submit`] después de pintarse.
    pub async fn run(&self, cli: &Cli) -> Result<()> {
        let mut controller = SubmissionController::new(self.client.clone());

        if let Some(height) = &cli.height {
            controller.update_height(height.as_str());
        }
        if let Some(weight) = &cli.weight {
            controller.update_weight(weight.as_str());
        }
        if let Some(path) = &cli.photo {
            let photo = PhotoFile::from_path(path)
                .await
                .with_context(|| format!("No se pudo leer la foto: {}", path.display()))?;
            controller.update_photo(Some(photo));
        }

        println!("{}\n", render_form(controller.form(), controller.view()));

        let options = RenderOptions {
            ansi_swatches: self.config.color_swatches,
        };
        controller.submit().await;
        let view = controller.view();
        println!("{}", render_page(controller.form(), view, options));

        Ok(submission_result(view)?)
    }
}

/// Resultado final de un envío para el binario
fn submission_result(view: &ViewModel) -> AppResult<()> {
    match view.outcome() {
        RequestOutcome::Success(_) => Ok(()),
        RequestOutcome::Failure(err) => Err(AppError::Submit(err.clone())),
        RequestOutcome::Idle | RequestOutcome::Loading => {
            Err(AppError::Submit(SubmitError::transport("")))
        }
    }
}
