//! # OutfitAdvisor
//!
//! Cliente del servicio de análisis de OutfitAdvisor: recoge altura, peso y
//! una foto, los envía como multipart y muestra el tipo de cuerpo, la forma
//! del rostro, la colorimetría y las prendas recomendadas.
//!
//! ## Capas
//!
//! ### ① Modelos (`models/`)
//! - `FormInput` / `PhotoFile` - estado del formulario y su validación
//! - `AnalysisResult` - análisis devuelto por el servicio
//! - `ViewModel` - estado del envío (`RequestOutcome`) y su transición
//!
//! ### ② Clientes (`clients/`)
//! - `AnalysisTransport` - capacidad de enviar la petición
//! - `HttpAnalysisClient` - implementación con reqwest
//!
//! ### ③ Servicios (`services/`)
//! - `AnalysisService` - traduce la respuesta HTTP a análisis o error
//!
//! ### ④ Flujo (`workflow/`)
//! - `SubmissionController` - formulario, envío y números de secuencia
//!
//! ### ⑤ Presentación (`render/`, `app`, `cli`)

pub mod app;
pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod services;
pub mod utils;
pub mod workflow;

// Reexportación de los tipos más usados
pub use app::App;
pub use clients::{AnalysisTransport, HttpAnalysisClient, HttpReply};
pub use config::Config;
pub use error::{AppError, AppResult, SubmitError, ValidationError};
pub use models::{AnalysisResult, FormInput, PhotoFile, RequestOutcome, ViewModel};
pub use services::AnalysisService;
pub use workflow::{PendingSubmission, SubmissionController};
