use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App};
use std::sync::Arc;

use komani_tours_api::db::catalog::{create_tour_catalog, TourCatalog};
use komani_tours_api::db::sessions::{create_session_store, SessionStore};
use komani_tours_api::routes;
use komani_tours_api::services::i18n_service::{create_translator, Translator};

pub struct TestApp {
    pub catalog: Arc<TourCatalog>,
    pub sessions: Arc<SessionStore>,
    pub translator: Arc<Translator>,
}

impl TestApp {
    pub fn new() -> Self {
        // Submissions complete immediately under test.
        std::env::set_var("SUBMISSION_DELAY_MS", "0");

        Self {
            catalog: create_tour_catalog(),
            sessions: create_session_store(),
            translator: create_translator(),
        }
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(self.catalog.clone()))
            .app_data(web::Data::new(self.sessions.clone()))
            .app_data(web::Data::new(self.translator.clone()))
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .wrap(Logger::default())
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/tours")
                            .route("", web::get().to(routes::tour::get_tours))
                            .route("/{slug}", web::get().to(routes::tour::get_tour_by_slug))
                            .route(
                                "/{slug}/estimate",
                                web::get().to(routes::tour::get_estimate),
                            ),
                    )
                    .route("/quote", web::post().to(routes::quote::create_quote))
                    .service(
                        web::scope("/bookings")
                            .route("", web::post().to(routes::booking::create_booking))
                            .route("/{id}", web::get().to(routes::booking::get_booking))
                            .route("/{id}", web::patch().to(routes::booking::update_booking))
                            .route("/{id}", web::delete().to(routes::booking::delete_booking))
                            .route(
                                "/{id}/guests",
                                web::post().to(routes::booking::adjust_guests),
                            )
                            .route(
                                "/{id}/submit",
                                web::post().to(routes::booking::submit_booking),
                            ),
                    ),
            )
    }
}
