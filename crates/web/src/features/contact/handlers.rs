use axum::{
    Form, Json,
    response::{IntoResponse, Response},
};
use storage::dto::{common::MessageResponse, contact::ContactForm};

pub const FEEDBACK_RECEIVED: &str = "Thank you for your feedback!";

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body(content = ContactForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Feedback received", body = MessageResponse)
    ),
    tag = "contact"
)]
pub async fn submit_feedback(Form(form): Form<ContactForm>) -> Response {
    tracing::info!(
        name = form.name.as_deref().unwrap_or_default(),
        email = form.email.as_deref().unwrap_or_default(),
        feedback = form.message.as_deref().unwrap_or_default(),
        "New feedback"
    );

    Json(MessageResponse::new(FEEDBACK_RECEIVED)).into_response()
}
