use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use chrono::Local;
use log::{debug, error, info};

use crate::chart::ChartResult;
use crate::document::{package_for_transfer, TransferMode, TransferPayload};
use crate::gpa::models::{GetGpaRequest, GpaSuccessResponse};
use crate::roll_number::RollNumber;
use crate::{AppState, ErrorResponse};

pub const EMPTY_ROLL_NUMBER_MESSAGE: &str = "Please enter a roll number";

/// Validate and fetch. Any failure is already turned into a 400 response.
async fn fetch_chart(state: &AppState, candidate: &str) -> Result<ChartResult, HttpResponse> {
    let roll_number = RollNumber::parse(candidate).map_err(|e| {
        debug!("Rejected roll number '{}': {}", candidate, e);
        HttpResponse::BadRequest().json(ErrorResponse::new(&e.to_string()))
    })?;

    let result = state.charts.fetch(&roll_number).await.map_err(|e| {
        error!("Could not produce chart for {}: {}", roll_number, e);
        HttpResponse::BadRequest().json(ErrorResponse::new(&e.to_string()))
    })?;

    if result.is_placeholder() {
        info!("Serving placeholder chart for {}", roll_number);
    }
    Ok(result)
}

fn respond(payload: TransferPayload) -> HttpResponse {
    match payload {
        TransferPayload::Inline(body) => HttpResponse::Ok().json(body),
        TransferPayload::Attachment(attachment) => HttpResponse::Ok()
            .content_type(attachment.content_type)
            .insert_header(ContentDisposition {
                disposition: DispositionType::Attachment,
                parameters: vec![DispositionParam::Filename(attachment.filename)],
            })
            .body(attachment.bytes),
    }
}

#[utoipa::path(
    tag = "GPA Chart",
    post,
    path = "/get_gpa",
    request_body = GetGpaRequest,
    responses(
        (status = 200, description = "Chart as base64 JPEG", body = GpaSuccessResponse),
        (status = 400, description = "Missing or malformed roll number", body = ErrorResponse)
    )
)]
pub async fn get_gpa(state: web::Data<AppState>, req: web::Json<GetGpaRequest>) -> impl Responder {
    let candidate = req.roll_number.trim();
    info!("Executing get_gpa handler for '{}'", candidate);

    if candidate.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(EMPTY_ROLL_NUMBER_MESSAGE));
    }

    match fetch_chart(&state, candidate).await {
        Ok(result) => respond(package_for_transfer(
            result,
            TransferMode::Inline,
            Local::now().naive_local(),
        )),
        Err(response) => response,
    }
}

#[utoipa::path(
    tag = "GPA Chart",
    get,
    path = "/download/{roll_number}",
    params(
        ("roll_number" = String, Path, description = "Roll number in FAXX-ABC-000 format")
    ),
    responses(
        (status = 200, description = "Chart as a JPEG attachment", content_type = "image/jpeg"),
        (status = 400, description = "Malformed roll number", body = ErrorResponse)
    )
)]
pub async fn download(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let candidate = path.into_inner();
    info!("Executing download handler for '{}'", candidate);

    match fetch_chart(&state, &candidate).await {
        Ok(result) => respond(package_for_transfer(
            result,
            TransferMode::Attachment,
            Local::now().naive_local(),
        )),
        Err(response) => response,
    }
}

fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let message = format!("Invalid request body: {}", err);
    debug!("{}", message);
    InternalError::from_response(err, HttpResponse::BadRequest().json(ErrorResponse::new(&message)))
        .into()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(web::resource("/get_gpa").route(web::post().to(get_gpa)))
        .service(web::resource("/download/{roll_number}").route(web::get().to(download)));
}
