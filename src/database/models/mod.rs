pub mod appointment;
pub mod credential;
pub mod document;
pub mod feedback;
pub mod message;
pub mod task;
pub mod user;

pub use appointment::{Appointment, AppointmentInput};
pub use credential::Credential;
pub use document::{Document, DocumentInput};
pub use feedback::{Feedback, FeedbackInput};
pub use message::{Inbox, Message, MessageInput};
pub use task::{Task, TaskInput};
pub use user::{NewUserProfile, UserProfile};
