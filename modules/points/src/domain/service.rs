use std::sync::Arc;

use sea_orm::{DatabaseConnection, TransactionTrait};
use tracing::{debug, info, instrument};
use url::Url;

use crate::domain::error::DomainError;
use crate::domain::model::{
    image_url, ItemWithUrl, NewPoint, Point, PointDetail, PointFilter, SearchedPoint,
};
use crate::domain::repos::{ItemsRepository, PointsRepository};

/// Service-level configuration: the base URL that image URLs are derived from.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub public_url: Url,
}

/// A point submission as received from the REST surface.
///
/// `items` is the raw comma-separated text; the service parses it so that
/// every caller gets the same validation.
#[derive(Debug, Clone)]
pub struct RegisterPointInput {
    /// Filename of the already-stored image; upload handling happens upstream.
    pub image: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
    pub items: String,
}

pub struct PointsService<P: PointsRepository, I: ItemsRepository> {
    db: DatabaseConnection,
    points: Arc<P>,
    items: Arc<I>,
    config: ServiceConfig,
}

impl<P: PointsRepository, I: ItemsRepository> PointsService<P, I> {
    pub fn new(db: DatabaseConnection, points: Arc<P>, items: Arc<I>, config: ServiceConfig) -> Self {
        Self {
            db,
            points,
            items,
            config,
        }
    }
}

// Business logic methods
impl<P: PointsRepository, I: ItemsRepository> PointsService<P, I> {
    /// Register a point and its item associations as one unit of change.
    ///
    /// All input validation happens before the transaction opens; any failure
    /// after that rolls the whole write back, so no observer ever sees a
    /// point with zero or partial item rows.
    #[instrument(skip(self, input), fields(point_name = %input.name, uf = %input.uf))]
    pub async fn register_point(&self, input: RegisterPointInput) -> Result<Point, DomainError> {
        info!("Registering collection point");

        let item_ids = parse_item_ids(&input.items)?;
        let new_point = validate_submission(input)?;

        let txn = self.db.begin().await?;
        let point = self.points.insert(&txn, new_point).await?;
        self.points.attach_items(&txn, point.id, &item_ids).await?;
        txn.commit().await?;

        info!(point_id = point.id, items = item_ids.len(), "Registered collection point");
        Ok(point)
    }

    /// Search points by subdivision, city and any-of item criteria.
    #[instrument(skip(self))]
    pub async fn search_points(
        &self,
        uf: Option<String>,
        city: Option<String>,
        items: Option<&str>,
    ) -> Result<Vec<SearchedPoint>, DomainError> {
        debug!("Searching collection points");

        let filter = PointFilter {
            uf: non_blank(uf),
            city: non_blank(city),
            items: parse_filter_ids(items)?,
        };

        let points = self.points.search(&self.db, &filter).await?;

        debug!(matches = points.len(), "Search finished");
        Ok(points
            .into_iter()
            .map(|point| {
                let image_url = image_url(&self.config.public_url, &point.image);
                SearchedPoint { point, image_url }
            })
            .collect())
    }

    /// Fetch one point plus the titles of its associated items.
    #[instrument(skip(self), fields(point_id = id))]
    pub async fn point_detail(&self, id: i32) -> Result<PointDetail, DomainError> {
        debug!("Getting point detail");

        let point = self
            .points
            .get(&self.db, id)
            .await?
            .ok_or_else(|| DomainError::point_not_found(id))?;

        let items = self.points.item_titles(&self.db, id).await?;
        let image_url = image_url(&self.config.public_url, &point.image);

        Ok(PointDetail {
            point,
            image_url,
            items,
        })
    }

    /// The static recyclable-item catalog with derived image URLs.
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> Result<Vec<ItemWithUrl>, DomainError> {
        let items = self.items.list(&self.db).await?;

        Ok(items
            .into_iter()
            .map(|item| ItemWithUrl {
                image_url: image_url(&self.config.public_url, &item.image),
                id: item.id,
                title: item.title,
            })
            .collect())
    }
}

/// Parse the registration item list: comma-separated positive integers,
/// at least one required, duplicates collapsed preserving first occurrence.
pub fn parse_item_ids(raw: &str) -> Result<Vec<i32>, DomainError> {
    let ids = parse_id_list(raw)?;
    if ids.is_empty() {
        return Err(DomainError::validation(
            "items",
            "at least one item id is required",
        ));
    }
    Ok(ids)
}

/// A blank query value means the filter is absent, same as omitting it.
fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Parse the optional search item filter; absent or blank means no filter.
pub fn parse_filter_ids(raw: Option<&str>) -> Result<Vec<i32>, DomainError> {
    match raw {
        Some(s) => parse_id_list(s),
        None => Ok(Vec::new()),
    }
}

fn parse_id_list(raw: &str) -> Result<Vec<i32>, DomainError> {
    let mut ids = Vec::new();
    for part in raw.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        let id: i32 = part.parse().map_err(|_| {
            DomainError::validation("items", format!("'{part}' is not a valid item id"))
        })?;
        if id <= 0 {
            return Err(DomainError::validation(
                "items",
                format!("item id must be positive, got {id}"),
            ));
        }
        if !ids.contains(&id) {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Reject incomplete submissions before any persistence write.
fn validate_submission(input: RegisterPointInput) -> Result<NewPoint, DomainError> {
    let RegisterPointInput {
        image,
        name,
        email,
        whatsapp,
        latitude,
        longitude,
        city,
        uf,
        items: _,
    } = input;

    let required = [
        ("image", &image),
        ("name", &name),
        ("email", &email),
        ("whatsapp", &whatsapp),
        ("city", &city),
        ("uf", &uf),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(DomainError::validation(field, "must not be empty"));
        }
    }

    if !latitude.is_finite() {
        return Err(DomainError::validation("latitude", "must be a finite number"));
    }
    if !longitude.is_finite() {
        return Err(DomainError::validation("longitude", "must be a finite number"));
    }

    Ok(NewPoint {
        image,
        name,
        email,
        whatsapp,
        latitude,
        longitude,
        city,
        uf,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn parse_item_ids_accepts_spaced_list() {
        assert_eq!(parse_item_ids("1, 2,3").unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn parse_item_ids_collapses_duplicates() {
        assert_eq!(parse_item_ids("2,1,2,1").unwrap(), vec![2, 1]);
    }

    #[test]
    fn parse_item_ids_rejects_empty_list() {
        assert!(matches!(
            parse_item_ids("  , ,"),
            Err(DomainError::Validation { .. })
        ));
        assert!(matches!(
            parse_item_ids(""),
            Err(DomainError::Validation { .. })
        ));
    }

    #[test]
    fn parse_item_ids_rejects_non_numeric() {
        assert!(matches!(
            parse_item_ids("1,two"),
            Err(DomainError::Validation { .. })
        ));
    }

    #[test]
    fn parse_item_ids_rejects_non_positive() {
        assert!(parse_item_ids("0").is_err());
        assert!(parse_item_ids("-3").is_err());
    }

    #[test]
    fn non_blank_drops_empty_and_whitespace_values() {
        assert_eq!(non_blank(Some("SP".to_owned())), Some("SP".to_owned()));
        assert_eq!(non_blank(Some(String::new())), None);
        assert_eq!(non_blank(Some("   ".to_owned())), None);
        assert_eq!(non_blank(None), None);
    }

    #[test]
    fn parse_filter_ids_defaults_to_empty() {
        assert_eq!(parse_filter_ids(None).unwrap(), Vec::<i32>::new());
        assert_eq!(parse_filter_ids(Some("")).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn validate_submission_requires_image() {
        let input = RegisterPointInput {
            image: String::new(),
            name: "Eco X".to_owned(),
            email: "eco@example.com".to_owned(),
            whatsapp: "11999990000".to_owned(),
            latitude: -23.68,
            longitude: -46.62,
            city: "Diadema".to_owned(),
            uf: "SP".to_owned(),
            items: "1".to_owned(),
        };
        assert!(matches!(
            validate_submission(input),
            Err(DomainError::Validation { .. })
        ));
    }

    #[test]
    fn validate_submission_rejects_non_finite_coordinates() {
        let input = RegisterPointInput {
            image: "photo.jpg".to_owned(),
            name: "Eco X".to_owned(),
            email: "eco@example.com".to_owned(),
            whatsapp: "11999990000".to_owned(),
            latitude: f64::NAN,
            longitude: -46.62,
            city: "Diadema".to_owned(),
            uf: "SP".to_owned(),
            items: "1".to_owned(),
        };
        assert!(validate_submission(input).is_err());
    }
}
