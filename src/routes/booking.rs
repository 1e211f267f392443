use actix_web::{web, HttpResponse, Responder};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use uuid::Uuid;

use crate::db::catalog::TourCatalog;
use crate::db::sessions::{SessionStore, SubmissionGate};
use crate::models::booking::{
    BookingSeed, BookingSession, BookingStatus, BookingUpdate, GuestAdjustment, PaymentMethod,
};
use crate::models::quote::PriceQuote;
use crate::routes::LocaleQuery;
use crate::services::booking_service::{AddOn, BookingService, PAYPAL_RECIPIENT};
use crate::services::i18n_service::Translator;
use crate::services::pricing_service::PricingService;

#[derive(Debug, Serialize)]
struct BookingSessionResponse {
    session: BookingSession,
    quote: PriceQuote,
    transfer_included: bool,
    selectable_add_ons: Vec<AddOn>,
}

/// Session plus everything derived from it: the fresh quote and the add-on
/// capability gates for the currently selected tour.
fn session_payload(
    session: BookingSession,
    catalog: &TourCatalog,
    locale: &str,
) -> BookingSessionResponse {
    let tour = catalog.get_by_slug(&session.selection.tour);
    let quote = PricingService::quote(&session.selection, tour, locale);
    BookingSessionResponse {
        quote,
        transfer_included: tour.is_some_and(|tour| tour.transfer_included()),
        selectable_add_ons: tour.map(BookingService::selectable_add_ons).unwrap_or_default(),
        session,
    }
}

pub async fn create_booking(
    catalog: web::Data<Arc<TourCatalog>>,
    sessions: web::Data<Arc<SessionStore>>,
    seed: web::Query<BookingSeed>,
    query: web::Query<LocaleQuery>,
) -> impl Responder {
    let locale = Translator::resolve_locale(query.locale.as_deref());

    let session = BookingSession::new(seed.into_inner().into_selection());
    println!("Created booking session: {}", session.id);

    sessions.insert(session.clone());

    HttpResponse::Created().json(session_payload(session, &catalog, locale))
}

pub async fn get_booking(
    catalog: web::Data<Arc<TourCatalog>>,
    sessions: web::Data<Arc<SessionStore>>,
    path: web::Path<Uuid>,
    query: web::Query<LocaleQuery>,
) -> impl Responder {
    let id = path.into_inner();
    let locale = Translator::resolve_locale(query.locale.as_deref());

    match sessions.get(&id) {
        Some(session) => HttpResponse::Ok().json(session_payload(session, &catalog, locale)),
        None => HttpResponse::NotFound().json(json!({ "error": "Booking session not found" })),
    }
}

pub async fn update_booking(
    catalog: web::Data<Arc<TourCatalog>>,
    sessions: web::Data<Arc<SessionStore>>,
    path: web::Path<Uuid>,
    input: web::Json<BookingUpdate>,
    query: web::Query<LocaleQuery>,
) -> impl Responder {
    let id = path.into_inner();
    let locale = Translator::resolve_locale(query.locale.as_deref());

    let Some(existing) = sessions.get(&id) else {
        return HttpResponse::NotFound().json(json!({ "error": "Booking session not found" }));
    };
    if existing.status != BookingStatus::Editing {
        return HttpResponse::Conflict()
            .json(json!({ "error": "Booking can no longer be edited" }));
    }

    let update = input.into_inner();
    match sessions.update_editing(&id, |session| {
        BookingService::apply_update(&mut session.selection, update);
    }) {
        Some(session) => HttpResponse::Ok().json(session_payload(session, &catalog, locale)),
        None => HttpResponse::Conflict()
            .json(json!({ "error": "Booking can no longer be edited" })),
    }
}

pub async fn adjust_guests(
    catalog: web::Data<Arc<TourCatalog>>,
    sessions: web::Data<Arc<SessionStore>>,
    path: web::Path<Uuid>,
    input: web::Json<GuestAdjustment>,
    query: web::Query<LocaleQuery>,
) -> impl Responder {
    let id = path.into_inner();
    let locale = Translator::resolve_locale(query.locale.as_deref());
    let adjustment = input.into_inner();

    let Some(existing) = sessions.get(&id) else {
        return HttpResponse::NotFound().json(json!({ "error": "Booking session not found" }));
    };
    if existing.status != BookingStatus::Editing {
        return HttpResponse::Conflict()
            .json(json!({ "error": "Booking can no longer be edited" }));
    }

    match sessions.update_editing(&id, |session| {
        BookingService::adjust_guest_count(
            &mut session.selection,
            adjustment.category,
            adjustment.direction,
        );
    }) {
        Some(session) => HttpResponse::Ok().json(session_payload(session, &catalog, locale)),
        None => HttpResponse::Conflict()
            .json(json!({ "error": "Booking can no longer be edited" })),
    }
}

#[derive(Debug, Serialize)]
struct PaymentInstructions {
    title: String,
    note: String,
    recipient: String,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize)]
struct BookingConfirmation {
    status: BookingStatus,
    reference: String,
    title: String,
    message: String,
    tour_title: String,
    email: String,
    estimated_total_label: String,
    quote: PriceQuote,
    payment_instructions: Option<PaymentInstructions>,
}

/// Validated submit. The session moves `Editing -> Submitting` under the
/// store lock, waits out the simulated processing delay, then lands in the
/// terminal `Success` state with a booking reference.
pub async fn submit_booking(
    catalog: web::Data<Arc<TourCatalog>>,
    sessions: web::Data<Arc<SessionStore>>,
    translator: web::Data<Arc<Translator>>,
    path: web::Path<Uuid>,
    query: web::Query<LocaleQuery>,
) -> impl Responder {
    let id = path.into_inner();
    let locale = Translator::resolve_locale(query.locale.as_deref());

    let Some(session) = sessions.get(&id) else {
        return HttpResponse::NotFound().json(json!({ "error": "Booking session not found" }));
    };

    // Validation gates the workflow: a violated constraint never enters it.
    if let Some(errors) = BookingService::validation_errors(&session.selection) {
        return HttpResponse::BadRequest().json(json!({ "errors": errors }));
    }

    match sessions.begin_submission(&id) {
        SubmissionGate::Started(_) => {}
        SubmissionGate::AlreadyPending => {
            return HttpResponse::Conflict()
                .json(json!({ "error": "Submission already in progress" }));
        }
        SubmissionGate::AlreadyConfirmed => {
            return HttpResponse::Conflict()
                .json(json!({ "error": "Booking already confirmed" }));
        }
        SubmissionGate::NotFound => {
            return HttpResponse::NotFound()
                .json(json!({ "error": "Booking session not found" }));
        }
    }

    println!("Processing booking submission: {}", id);
    tokio::time::sleep(BookingService::submission_delay()).await;

    let reference = BookingService::generate_reference();
    let Some(confirmed) = sessions.complete_submission(&id, reference) else {
        eprintln!("Booking session {} disappeared mid-submission", id);
        return HttpResponse::NotFound().json(json!({ "error": "Booking session not found" }));
    };

    let selection = &confirmed.selection;
    let tour = catalog.get_by_slug(&selection.tour);
    let tour_title = tour
        .map(|tour| translator.text(locale, &format!("ToursData.{}.title", tour.slug)))
        .unwrap_or_else(|| selection.tour.clone());
    let quote = PricingService::quote(selection, tour, locale);

    let payment_instructions = (selection.payment_method == PaymentMethod::PayNow).then(|| {
        PaymentInstructions {
            title: translator.text(locale, "Booking.paymentTitle"),
            note: translator.text(locale, "Booking.paymentNote"),
            recipient: PAYPAL_RECIPIENT.to_string(),
        }
    });

    let confirmation = BookingConfirmation {
        status: confirmed.status,
        reference: confirmed.reference.clone().unwrap_or_default(),
        title: translator.text(locale, "Booking.successTitle"),
        message: translator.text_with(
            locale,
            "Booking.successMessage",
            &[
                ("name", selection.name.as_str()),
                ("tour", tour_title.as_str()),
                ("email", selection.email.as_str()),
            ],
        ),
        tour_title,
        email: selection.email.clone(),
        estimated_total_label: translator.text(locale, "Booking.estimatedTotal"),
        quote,
        payment_instructions,
    };

    println!("Booking submission confirmed: {}", id);
    HttpResponse::Ok().json(confirmation)
}

pub async fn delete_booking(
    sessions: web::Data<Arc<SessionStore>>,
    path: web::Path<Uuid>,
) -> impl Responder {
    let id = path.into_inner();

    match sessions.remove(&id) {
        Some(_) => HttpResponse::Ok().json(json!({ "message": "Booking session discarded" })),
        None => HttpResponse::NotFound().json(json!({ "error": "Booking session not found" })),
    }
}
