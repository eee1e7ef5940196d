use axum::{
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use crate::config::AppConfig;
use crate::handlers;
use crate::state::AppState;

/// Build the full HTTP surface over `state`
pub fn app(state: AppState) -> Router {
    let config = state.config.clone();

    let router = Router::new()
        // Public
        .route("/", get(handlers::system::root))
        .route("/health", get(handlers::system::health))
        .merge(auth_public_routes())
        .merge(customer_routes())
        .merge(employee_task_routes())
        .merge(employee_document_routes())
        .merge(employee_appointment_routes())
        .merge(user_routes());

    let router = if config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    };

    router
        .layer(
            ServiceBuilder::new()
                .layer(cors_layer(&config))
                .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes)),
        )
        .with_state(state)
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers(Any)
}

fn auth_public_routes() -> Router<AppState> {
    use handlers::auth;

    Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
}

fn customer_routes() -> Router<AppState> {
    use handlers::customer::{appointments, calendar, feedback, messages};

    Router::new()
        .route("/customer/appointments", post(appointments::book))
        .route("/customer/appointments/history/:customerId", get(appointments::history))
        .route("/customer/calendar/:customerId", get(calendar::customer_calendar))
        .route("/customer/feedback", post(feedback::submit))
        .route("/customer/feedback/:customerId", get(feedback::list))
        .route("/customer/messages", post(messages::send))
        // `:id` is the customer for the GETs and the message for /read
        .route("/customer/messages/:id", get(messages::inbox))
        .route("/customer/messages/:id/unread", get(messages::unread))
        .route("/customer/messages/:id/read", put(messages::mark_read))
}

fn employee_task_routes() -> Router<AppState> {
    use handlers::employee::{calendar, tasks};

    Router::new()
        .route("/employee/tasks", post(tasks::create).get(tasks::list))
        .route("/employee/tasks/assigned/:userId", get(tasks::assigned))
        .route("/employee/tasks/created/:userId", get(tasks::created))
        .route("/employee/tasks/status/:status", get(tasks::by_status))
        .route("/employee/tasks/:id", get(tasks::get).put(tasks::update))
        .route("/employee/calendar/:userId", get(calendar::employee_calendar))
}

fn employee_document_routes() -> Router<AppState> {
    use handlers::employee::documents;

    Router::new()
        .route("/employee/documents", post(documents::create).get(documents::list))
        .route("/employee/documents/upload", post(documents::upload))
        .route("/employee/documents/created/:userId", get(documents::created))
        .route("/employee/documents/assigned/:userId", get(documents::assigned))
        .route("/employee/documents/status/:status", get(documents::by_status))
        .route("/employee/documents/:id", get(documents::get).put(documents::update))
}

fn employee_appointment_routes() -> Router<AppState> {
    use handlers::employee::appointments;

    Router::new()
        .route("/employee/appointments", get(appointments::list))
        .route("/employee/appointments/employee/:userId", get(appointments::for_employee))
        .route("/employee/appointments/status/:status", get(appointments::by_status))
        .route("/employee/appointments/:id", get(appointments::get).put(appointments::update))
}

fn user_routes() -> Router<AppState> {
    use handlers::users;

    Router::new()
        .route("/users", get(users::list))
        .route("/users/role/:role", get(users::by_role))
        .route("/users/email/:email", get(users::by_email))
        .route("/users/:id", get(users::get))
}
