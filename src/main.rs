use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use komani_tours_api::db::catalog::create_tour_catalog;
use komani_tours_api::db::sessions::create_session_store;
use komani_tours_api::routes;
use komani_tours_api::services::i18n_service::create_translator;

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    println!("Application starting...");

    env_logger::init_from_env(Env::default().default_filter_or("info"));
    println!("Logger initialized");

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    } else {
        println!("Release mode");
    }

    let host = std::env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);
    println!("Attempting to bind to {}:{}", host, port);

    let catalog = create_tour_catalog();
    let sessions = create_session_store();
    let translator = create_translator();

    println!("Starting HTTP server...");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(web::Data::new(catalog.clone()))
            .app_data(web::Data::new(sessions.clone()))
            .app_data(web::Data::new(translator.clone()))
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
    })
    .bind((host, port))?
    .run()
    .await
}
