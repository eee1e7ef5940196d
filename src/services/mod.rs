pub mod appointment_service;
pub mod auth_service;
pub mod bootstrap;
pub mod calendar_service;
pub mod credential_service;
pub mod document_service;
pub mod error;
pub mod feedback_service;
pub mod message_service;
pub mod task_service;
pub mod user_service;

pub use appointment_service::AppointmentService;
pub use auth_service::{AuthError, AuthService};
pub use calendar_service::CalendarService;
pub use credential_service::CredentialService;
pub use document_service::{DocumentService, UploadError};
pub use error::ServiceError;
pub use feedback_service::FeedbackService;
pub use message_service::MessageService;
pub use task_service::TaskService;
pub use user_service::UserService;
