pub mod booking_service;
pub mod currency_service;
pub mod i18n_service;
pub mod pricing_service;
