use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::model::{ItemWithUrl, Point, PointDetail, SearchedPoint};

/// REST DTO for a freshly registered point: literal stored fields plus the
/// generated id, no derived URL.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointDto {
    pub id: i32,
    pub image: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
}

/// REST DTO for search results and the detail view, with the derived URL.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointWithUrlDto {
    pub id: i32,
    pub image: String,
    pub name: String,
    pub email: String,
    pub whatsapp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub city: String,
    pub uf: String,
    pub image_url: String,
}

/// REST DTO for the detail response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PointDetailDto {
    pub point: PointWithUrlDto,
    pub items: Vec<ItemTitleDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemTitleDto {
    pub title: String,
}

/// REST DTO for a catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ItemDto {
    pub id: i32,
    pub title: String,
    pub image_url: String,
}

/// Query parameters for the point search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub uf: Option<String>,
    pub city: Option<String>,
    /// Comma-separated item ids, any-of semantics.
    pub items: Option<String>,
}

impl From<Point> for PointDto {
    fn from(p: Point) -> Self {
        Self {
            id: p.id,
            image: p.image,
            name: p.name,
            email: p.email,
            whatsapp: p.whatsapp,
            latitude: p.latitude,
            longitude: p.longitude,
            city: p.city,
            uf: p.uf,
        }
    }
}

impl From<SearchedPoint> for PointWithUrlDto {
    fn from(s: SearchedPoint) -> Self {
        Self {
            id: s.point.id,
            image: s.point.image,
            name: s.point.name,
            email: s.point.email,
            whatsapp: s.point.whatsapp,
            latitude: s.point.latitude,
            longitude: s.point.longitude,
            city: s.point.city,
            uf: s.point.uf,
            image_url: s.image_url,
        }
    }
}

impl From<PointDetail> for PointDetailDto {
    fn from(d: PointDetail) -> Self {
        Self {
            point: PointWithUrlDto::from(SearchedPoint {
                point: d.point,
                image_url: d.image_url,
            }),
            items: d
                .items
                .into_iter()
                .map(|title| ItemTitleDto { title })
                .collect(),
        }
    }
}

impl From<ItemWithUrl> for ItemDto {
    fn from(i: ItemWithUrl) -> Self {
        Self {
            id: i.id,
            title: i.title,
            image_url: i.image_url,
        }
    }
}
