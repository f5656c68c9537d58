//! Flujo de envío del formulario
//!
//! `SubmissionController` guarda el formulario y el modelo de vista, y
//! orquesta un envío: validar → petición → resultado. Cada intento recibe un
//! número de secuencia; la respuesta de un intento ya superado se descarta.

use crate::clients::AnalysisTransport;
use crate::error::SubmitError;
use crate::models::{Action, AnalysisRequest, AnalysisResult, FormInput, PhotoFile, ViewModel};
use crate::services::AnalysisService;
use tracing::{debug, info, warn};

/// Envío en curso: secuencia y petición ya validada
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub seq: u64,
    pub request: AnalysisRequest,
}

/// Controlador del formulario
pub struct SubmissionController<T> {
    form: FormInput,
    view: ViewModel,
    next_seq: u64,
    service: AnalysisService<T>,
}

impl<T: AnalysisTransport> SubmissionController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            form: FormInput::default(),
            view: ViewModel::new(),
            next_seq: 1,
            service: AnalysisService::new(transport),
        }
    }

    pub fn update_height(&mut self, value: impl Into<String>) {
        self.form.height = value.into();
    }

    pub fn update_weight(&mut self, value: impl Into<String>) {
        self.form.weight = value.into();
    }

    pub fn update_photo(&mut self, photo: Option<PhotoFile>) {
        self.form.photo = photo;
    }

    pub fn form(&self) -> &FormInput {
        &self.form
    }

    pub fn view(&self) -> &ViewModel {
        &self.view
    }

    pub fn service(&self) -> &AnalysisService<T> {
        &self.service
    }

    /// Primera mitad del envío
    ///
    /// Limpia el resultado y el error anteriores. Si el formulario no es
    /// válido deja el error en la vista y devuelve `None`; si lo es, pasa a
    /// cargando y devuelve la petición a enviar.
    pub fn begin_submit(&mut self) -> Option<PendingSubmission> {
        let seq = self.next_seq;
        self.next_seq += 1;

        match self.form.validate() {
            Ok(request) => {
                debug!("[envío #{}] formulario válido, enviando", seq);
                self.view.reduce(Action::Started { seq });
                Some(PendingSubmission { seq, request })
            }
            Err(error) => {
                info!("[envío #{}] formulario rechazado: {}", seq, error);
                self.view.reduce(Action::Rejected { seq, error });
                None
            }
        }
    }

    /// Segunda mitad del envío
    ///
    /// Devuelve `false` si `seq` ya no es el último intento.
    pub fn complete(&mut self, seq: u64, result: Result<AnalysisResult, SubmitError>) -> bool {
        let ok = result.is_ok();
        let applied = self.view.reduce(Action::Finished { seq, result });

        if !applied {
            debug!(
                "[envío #{}] respuesta obsoleta descartada (último: #{})",
                seq,
                self.view.latest_seq()
            );
        } else if ok {
            info!("[envío #{}] ✓ análisis recibido", seq);
        } else {
            warn!(
                "[envío #{}] ❌ {}",
                seq,
                self.view.error_message().unwrap_or_default()
            );
        }
        applied
    }

    /// Envío completo: validar, enviar y aplicar el resultado
    pub async fn submit(&mut self) -> &ViewModel {
        if let Some(pending) = self.begin_submit() {
            let result = self.service.analyze(&pending.request).await;
            self.complete(pending.seq, result);
        }
        &self.view
    }
}
