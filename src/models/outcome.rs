//! Estado del envío y su función de transición
//!
//! El resultado y el error viven en la misma variante, así que nunca pueden
//! estar rellenos a la vez.

use crate::error::{SubmitError, ValidationError};
use crate::models::analysis::AnalysisResult;

pub const SUBMIT_LABEL_IDLE: &str = "Analizar y recomendar";
pub const SUBMIT_LABEL_LOADING: &str = "Analizando...";

/// Estado del flujo de envío
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestOutcome {
    #[default]
    Idle,
    Loading,
    Success(AnalysisResult),
    Failure(SubmitError),
}

/// Eventos que hacen avanzar el estado
///
/// Cada intento de envío lleva un número de secuencia creciente.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// El formulario no pasó la validación; no hay petición
    Rejected { seq: u64, error: ValidationError },
    /// La petición ha salido
    Started { seq: u64 },
    /// La petición terminó
    Finished {
        seq: u64,
        result: Result<AnalysisResult, SubmitError>,
    },
}

impl Action {
    pub fn seq(&self) -> u64 {
        match self {
            Action::Rejected { seq, .. } | Action::Started { seq } | Action::Finished { seq, .. } => {
                *seq
            }
        }
    }
}

/// Modelo de vista listo para pintar
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewModel {
    outcome: RequestOutcome,
    latest_seq: u64,
}

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Aplica una acción
    ///
    /// Devuelve `false` si la acción pertenece a un intento anterior al último
    /// y se descarta. `Rejected` y `Started` abren un intento nuevo; `Finished`
    /// solo cuenta si cierra el último.
    pub fn reduce(&mut self, action: Action) -> bool {
        let seq = action.seq();
        match action {
            Action::Rejected { error, .. } => {
                if seq < self.latest_seq {
                    return false;
                }
                self.latest_seq = seq;
                self.outcome = RequestOutcome::Failure(SubmitError::Validation(error));
            }
            Action::Started { .. } => {
                if seq < self.latest_seq {
                    return false;
                }
                self.latest_seq = seq;
                self.outcome = RequestOutcome::Loading;
            }
            Action::Finished { result, .. } => {
                if seq != self.latest_seq || !self.is_loading() {
                    return false;
                }
                self.outcome = match result {
                    Ok(analysis) => RequestOutcome::Success(analysis),
                    Err(err) => RequestOutcome::Failure(err),
                };
            }
        }
        true
    }

    pub fn outcome(&self) -> &RequestOutcome {
        &self.outcome
    }

    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.outcome, RequestOutcome::Loading)
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        match &self.outcome {
            RequestOutcome::Success(analysis) => Some(analysis),
            _ => None,
        }
    }

    /// Mensaje de error a mostrar, si lo hay
    pub fn error_message(&self) -> Option<String> {
        match &self.outcome {
            RequestOutcome::Failure(err) => Some(err.user_message()),
            _ => None,
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading() {
            SUBMIT_LABEL_LOADING
        } else {
            SUBMIT_LABEL_IDLE
        }
    }

    pub fn submit_enabled(&self) -> bool {
        !self.is_loading()
    }
}
