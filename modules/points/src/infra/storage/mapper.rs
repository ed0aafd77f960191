//! Conversions between ORM entities and domain models.

use crate::domain::model::{Item, Point};
use crate::infra::storage::entity::{item, point};

impl From<point::Model> for Point {
    fn from(m: point::Model) -> Self {
        Self {
            id: m.id,
            image: m.image,
            name: m.name,
            email: m.email,
            whatsapp: m.whatsapp,
            latitude: m.latitude,
            longitude: m.longitude,
            city: m.city,
            uf: m.uf,
        }
    }
}

impl From<item::Model> for Item {
    fn from(m: item::Model) -> Self {
        Self {
            id: m.id,
            title: m.title,
            image: m.image,
        }
    }
}
