//! Domain models for the collection-point registry.
//!
//! These are plain data types, independent of both the REST DTOs and the
//! ORM entities; conversions live at the respective boundaries.

use serde::{Deserialize, Serialize};
use url::Url;

/// A catalog entry for a recyclable material category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: i32,
    pub title: String,
    /// Stored image filename, never a full URL.
    pub image: String,
}

/// A registered waste-collection location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub id: i32,
    /// Stored image filename, never a full URL.
    pub image: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    /// First-level administrative subdivision code, e.g. "SP".
    pub uf: String,
}

/// A point pending registration; the id is generated by the database.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPoint {
    pub image: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
}

/// Search criteria for the point listing. All filters are optional;
/// `items` is an any-of match and an empty set means no item filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointFilter {
    pub uf: Option<String>,
    pub city: Option<String>,
    pub items: Vec<i32>,
}

/// A search result: the stored point plus its derived image URL.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchedPoint {
    pub point: Point,
    pub image_url: String,
}

/// The detail view: point, derived image URL and associated item titles.
#[derive(Debug, Clone, PartialEq)]
pub struct PointDetail {
    pub point: Point,
    pub image_url: String,
    pub items: Vec<String>,
}

/// A catalog item with its derived image URL, as exposed to clients.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemWithUrl {
    pub id: i32,
    pub title: String,
    pub image_url: String,
}

/// Pure projection of a stored filename to a client-facing URL.
///
/// The derived value is never persisted; it is recomputed on every read so a
/// base-URL change takes effect immediately.
#[must_use]
pub fn image_url(base: &Url, image: &str) -> String {
    format!("{}/uploads/{image}", base.as_str().trim_end_matches('/'))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn image_url_joins_base_and_filename() {
        let base = Url::parse("http://localhost:3333").unwrap();
        assert_eq!(
            image_url(&base, "a1b2c3-photo.jpg"),
            "http://localhost:3333/uploads/a1b2c3-photo.jpg"
        );
    }

    #[test]
    fn image_url_tolerates_trailing_slash() {
        let base = Url::parse("https://ecoleta.example/").unwrap();
        assert_eq!(
            image_url(&base, "x.png"),
            "https://ecoleta.example/uploads/x.png"
        );
    }
}
