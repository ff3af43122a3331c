use crate::domain::passenger::Passenger;
use crate::utils::error::ServeError;
use crate::web::{pages, AppState};
use actix_web::http::header::ContentType;
use actix_web::{get, post, web, HttpResponse};
use serde::Deserialize;

#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(pages::render_index())
}

/// Raw form payload. Values stay strings here; numeric coercion (and
/// its error reporting) happens in the domain layer.
#[derive(Debug, Deserialize)]
pub struct PredictForm {
    #[serde(rename = "Pclass")]
    pub pclass: String,
    #[serde(rename = "Age")]
    pub age: String,
    #[serde(rename = "SibSp")]
    pub sib_sp: String,
    #[serde(rename = "Parch")]
    pub parch: String,
    #[serde(rename = "Fare")]
    pub fare: String,
}

#[post("/predict")]
pub async fn predict(
    state: web::Data<AppState>,
    form: web::Form<PredictForm>,
) -> Result<HttpResponse, ServeError> {
    let model = state.model.as_deref().ok_or(ServeError::ModelNotLoaded)?;

    let passenger = Passenger::from_fields(
        &form.pclass,
        &form.age,
        &form.sib_sp,
        &form.parch,
        &form.fare,
    )?;
    let row = passenger.to_row();

    let label = model.predict(&row)?;
    let probability = model.predict_proba(&row)?;
    tracing::debug!(
        "Prediction for {:?}: label={} probability={:.3}",
        row,
        label,
        probability
    );

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(pages::render_result(label == 1, probability, &passenger)))
}
