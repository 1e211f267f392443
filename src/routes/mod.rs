pub mod booking;
pub mod health;
pub mod quote;
pub mod tour;

use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct LocaleQuery {
    pub locale: Option<String>,
}
