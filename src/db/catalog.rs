use std::sync::Arc;

use crate::models::tour::Tour;

const CATALOG_JSON: &str = include_str!("tours.json");

/// Static tour catalog, loaded once at process start. Immutable afterwards.
pub struct TourCatalog {
    tours: Vec<Tour>,
}

impl TourCatalog {
    pub fn all(&self) -> &[Tour] {
        &self.tours
    }

    pub fn get_by_slug(&self, slug: &str) -> Option<&Tour> {
        self.tours.iter().find(|tour| tour.slug == slug)
    }

    pub fn len(&self) -> usize {
        self.tours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tours.is_empty()
    }
}

pub fn create_tour_catalog() -> Arc<TourCatalog> {
    let tours: Vec<Tour> =
        serde_json::from_str(CATALOG_JSON).expect("Embedded tour catalog is malformed JSON");

    println!("Loaded tour catalog with {} tours", tours.len());

    Arc::new(TourCatalog { tours })
}
