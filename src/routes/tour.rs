use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;

use crate::db::catalog::TourCatalog;
use crate::models::booking::parse_guest_count;
use crate::models::tour::Tour;
use crate::routes::LocaleQuery;
use crate::services::booking_service::{AddOn, BookingService};
use crate::services::currency_service::CurrencyService;
use crate::services::i18n_service::Translator;
use crate::services::pricing_service::PricingService;

#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct TourResponse {
    pub slug: String,
    pub price: String,
    pub currency: String,
    pub category: String,
    pub price_on_request: bool,
    pub transfer_included: bool,
    pub title: String,
    pub duration: String,
    pub summary: String,
    pub inclusions: Vec<String>,
    pub display_price: Option<String>,
    pub selectable_add_ons: Vec<AddOn>,
}

/// Tour catalog entry combined with its localized labels.
pub fn localize_tour(tour: &Tour, translator: &Translator, locale: &str) -> TourResponse {
    let display_price = tour.numeric_price().map(|_| {
        format!(
            "{}{} {}",
            tour.price,
            tour.currency,
            translator.text(locale, "Common.perPerson")
        )
    });

    TourResponse {
        slug: tour.slug.clone(),
        price: tour.price.clone(),
        currency: tour.currency.clone(),
        category: tour.category.clone(),
        price_on_request: tour.is_price_on_request(),
        transfer_included: tour.transfer_included(),
        title: translator.text(locale, &format!("ToursData.{}.title", tour.slug)),
        duration: translator.text(locale, &format!("ToursData.{}.duration", tour.slug)),
        summary: translator.text(locale, &format!("ToursData.{}.summary", tour.slug)),
        inclusions: translator.string_list(locale, &format!("ToursData.{}.inclusions", tour.slug)),
        display_price,
        selectable_add_ons: BookingService::selectable_add_ons(tour),
    }
}

pub async fn get_tours(
    catalog: web::Data<Arc<TourCatalog>>,
    translator: web::Data<Arc<Translator>>,
    query: web::Query<LocaleQuery>,
) -> impl Responder {
    let locale = Translator::resolve_locale(query.locale.as_deref());
    let tours: Vec<TourResponse> = catalog
        .all()
        .iter()
        .map(|tour| localize_tour(tour, &translator, locale))
        .collect();
    HttpResponse::Ok().json(tours)
}

pub async fn get_tour_by_slug(
    catalog: web::Data<Arc<TourCatalog>>,
    translator: web::Data<Arc<Translator>>,
    path: web::Path<String>,
    query: web::Query<LocaleQuery>,
) -> impl Responder {
    let slug = path.into_inner();
    let locale = Translator::resolve_locale(query.locale.as_deref());

    match catalog.get_by_slug(&slug) {
        Some(tour) => HttpResponse::Ok().json(localize_tour(tour, &translator, locale)),
        None => HttpResponse::NotFound().json(json!({ "error": "Tour not found" })),
    }
}

#[derive(Debug, Deserialize)]
pub struct EstimateQuery {
    pub guests: Option<String>,
    pub locale: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Serialize)]
struct EstimateResponse {
    slug: String,
    guests: u32,
    price_on_request: bool,
    total_eur: Option<f32>,
    display_total: String,
}

/// Flat per-guest estimate backing the search widget: no discounts, no
/// add-ons. Accepts the widget's "9+" guest sentinel.
pub async fn get_estimate(
    catalog: web::Data<Arc<TourCatalog>>,
    path: web::Path<String>,
    query: web::Query<EstimateQuery>,
) -> impl Responder {
    let slug = path.into_inner();
    let locale = Translator::resolve_locale(query.locale.as_deref());

    let Some(tour) = catalog.get_by_slug(&slug) else {
        return HttpResponse::NotFound().json(json!({ "error": "Tour not found" }));
    };

    let guests = match query.guests.as_deref() {
        Some(raw) => match parse_guest_count(raw) {
            Some(count) => count,
            None => {
                return HttpResponse::BadRequest()
                    .json(json!({ "error": "Invalid guest count" }));
            }
        },
        None => 2,
    };

    let response = match PricingService::quick_estimate(tour, guests) {
        Some(total_eur) => EstimateResponse {
            slug,
            guests,
            price_on_request: false,
            total_eur: Some(total_eur),
            display_total: CurrencyService::format_total(total_eur, locale),
        },
        None => EstimateResponse {
            slug,
            guests,
            price_on_request: true,
            total_eur: None,
            display_total: CurrencyService::on_request_label(locale).to_string(),
        },
    };

    HttpResponse::Ok().json(response)
}
