use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::db::catalog::TourCatalog;
use crate::models::booking::BookingSelection;
use crate::routes::LocaleQuery;
use crate::services::i18n_service::Translator;
use crate::services::pricing_service::PricingService;

/// Stateless quote for a posted selection. An unknown tour slug degrades to
/// the contact state instead of an error.
pub async fn create_quote(
    catalog: web::Data<Arc<TourCatalog>>,
    query: web::Query<LocaleQuery>,
    input: web::Json<BookingSelection>,
) -> impl Responder {
    let selection = input.into_inner();
    let locale = Translator::resolve_locale(query.locale.as_deref());

    let tour = catalog.get_by_slug(&selection.tour);
    let quote = PricingService::quote(&selection, tour, locale);

    HttpResponse::Ok().json(quote)
}
