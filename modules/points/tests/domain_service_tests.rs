#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Service-level tests over an in-memory database.
//!
//! These cover the registration atomicity guarantees, the any-of /
//! exact-match search semantics, deduplication across the item join, and
//! the derived image URL projection.

mod support;

use std::collections::HashSet;

use sea_orm::EntityTrait;

use ecoleta_points::domain::error::DomainError;
use ecoleta_points::domain::service::RegisterPointInput;
use ecoleta_points::infra::storage::entity::{point, point_item};
use support::{inmem_db, make_service, sample_input};

// ==================== Registration ====================

#[tokio::test]
async fn register_creates_point_and_one_join_row_per_item() {
    let db = inmem_db().await;
    let (svc, _) = make_service(&db);

    let created = svc.register_point(sample_input("1,2,3")).await.unwrap();
    assert!(created.id >= 1);
    assert_eq!(created.name, "Eco X");
    assert_eq!(created.image, "photo.jpg");

    let joins = point_item::Entity::find().all(&db).await.unwrap();
    assert_eq!(joins.len(), 3);

    let item_ids: HashSet<i32> = joins
        .iter()
        .inspect(|j| assert_eq!(j.point_id, created.id))
        .map(|j| j.item_id)
        .collect();
    assert_eq!(item_ids, HashSet::from([1, 2, 3]));
}

#[tokio::test]
async fn register_with_uncatalogued_item_rolls_back_everything() {
    let db = inmem_db().await;
    let (svc, _) = make_service(&db);

    let err = svc.register_point(sample_input("1,999")).await.unwrap_err();
    assert!(matches!(err, DomainError::UnknownItem));

    // No partial state: neither the point nor any join row survived.
    assert!(point::Entity::find().all(&db).await.unwrap().is_empty());
    assert!(point_item::Entity::find().all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn register_rejects_empty_item_list_before_writing() {
    let db = inmem_db().await;
    let (svc, _) = make_service(&db);

    for items in ["", " , ,"] {
        let err = svc.register_point(sample_input(items)).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    assert!(point::Entity::find().all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn register_rejects_malformed_item_ids() {
    let db = inmem_db().await;
    let (svc, _) = make_service(&db);

    let err = svc
        .register_point(sample_input("1,garbage"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
    assert!(point::Entity::find().all(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn register_rejects_blank_required_fields() {
    let db = inmem_db().await;
    let (svc, _) = make_service(&db);

    let mut input = sample_input("1");
    input.name = "   ".to_owned();

    let err = svc.register_point(input).await.unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
}

#[tokio::test]
async fn register_collapses_duplicate_item_ids() {
    let db = inmem_db().await;
    let (svc, _) = make_service(&db);

    let created = svc.register_point(sample_input("2,2,2")).await.unwrap();

    let joins = point_item::Entity::find().all(&db).await.unwrap();
    assert_eq!(joins.len(), 1);
    assert_eq!(joins[0].point_id, created.id);
    assert_eq!(joins[0].item_id, 2);
}

// ==================== Search ====================

async fn seed_three_points(svc: &ecoleta_points::Service) -> (i32, i32, i32) {
    let a = svc.register_point(sample_input("1,2")).await.unwrap();

    let mut b = sample_input("2,3");
    b.name = "Eco Santos".to_owned();
    b.city = "Santos".to_owned();
    let b = svc.register_point(b).await.unwrap();

    let mut c = sample_input("4");
    c.name = "Eco Rio".to_owned();
    c.city = "Diadema".to_owned();
    c.uf = "RJ".to_owned();
    let c = svc.register_point(c).await.unwrap();

    (a.id, b.id, c.id)
}

#[tokio::test]
async fn search_without_filters_returns_each_point_once() {
    let db = inmem_db().await;
    let (svc, _) = make_service(&db);
    let (a, b, c) = seed_three_points(&svc).await;

    let results = svc.search_points(None, None, None).await.unwrap();

    let ids: Vec<i32> = results.iter().map(|r| r.point.id).collect();
    assert_eq!(ids.len(), 3, "multi-item points must not be duplicated");
    let ids: HashSet<i32> = ids.into_iter().collect();
    assert_eq!(ids, HashSet::from([a, b, c]));
}

#[tokio::test]
async fn search_items_filter_is_any_of_and_deduplicated() {
    let db = inmem_db().await;
    let (svc, _) = make_service(&db);
    let (a, b, _c) = seed_three_points(&svc).await;

    // Point `a` matches both item 1 and item 2, but appears exactly once.
    let results = svc.search_points(None, None, Some("1,2")).await.unwrap();

    let ids: Vec<i32> = results.iter().map(|r| r.point.id).collect();
    assert_eq!(ids.len(), 2);
    let ids: HashSet<i32> = ids.into_iter().collect();
    assert_eq!(ids, HashSet::from([a, b]));
}

#[tokio::test]
async fn search_uf_and_city_are_exact_matches() {
    let db = inmem_db().await;
    let (svc, _) = make_service(&db);
    let (a, _b, _c) = seed_three_points(&svc).await;

    let results = svc
        .search_points(Some("SP".to_owned()), Some("Diadema".to_owned()), None)
        .await
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].point.id, a);

    // Case-sensitive: "diadema" is not "Diadema".
    let results = svc
        .search_points(Some("SP".to_owned()), Some("diadema".to_owned()), None)
        .await
        .unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn search_results_carry_derived_image_url() {
    let db = inmem_db().await;
    let (svc, _) = make_service(&db);
    let _ = svc.register_point(sample_input("1")).await.unwrap();

    let results = svc.search_points(None, None, None).await.unwrap();
    assert_eq!(
        results[0].image_url,
        "http://localhost:3333/uploads/photo.jpg"
    );
}

#[tokio::test]
async fn search_rejects_malformed_items_filter() {
    let db = inmem_db().await;
    let (svc, _) = make_service(&db);

    let err = svc
        .search_points(None, None, Some("1,x"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation { .. }));
}

// ==================== Detail ====================

#[tokio::test]
async fn detail_returns_point_with_url_and_item_titles() {
    let db = inmem_db().await;
    let (svc, _) = make_service(&db);

    let created = svc.register_point(sample_input("1,2,3")).await.unwrap();
    let detail = svc.point_detail(created.id).await.unwrap();

    assert_eq!(detail.point.id, created.id);
    assert_eq!(
        detail.image_url,
        "http://localhost:3333/uploads/photo.jpg"
    );

    let titles: HashSet<&str> = detail.items.iter().map(String::as_str).collect();
    assert_eq!(
        titles,
        HashSet::from(["Lâmpadas", "Pilhas e Baterias", "Papéis e Papelão"])
    );
}

#[tokio::test]
async fn detail_for_unknown_id_is_not_found() {
    let db = inmem_db().await;
    let (svc, _) = make_service(&db);

    let err = svc.point_detail(4242).await.unwrap_err();
    assert!(matches!(err, DomainError::PointNotFound { id: 4242 }));
}

// ==================== Catalog ====================

#[tokio::test]
async fn list_items_returns_seeded_catalog_with_urls() {
    let db = inmem_db().await;
    let (svc, _) = make_service(&db);

    let items = svc.list_items().await.unwrap();
    assert_eq!(items.len(), 6);

    assert_eq!(items[0].id, 1);
    assert_eq!(items[0].title, "Lâmpadas");
    assert_eq!(
        items[0].image_url,
        "http://localhost:3333/uploads/lampadas.svg"
    );
    assert_eq!(items[5].title, "Óleo de Cozinha");
}

// ==================== Worked example ====================

#[tokio::test]
async fn register_then_detail_round_trip() {
    let db = inmem_db().await;
    let (svc, _) = make_service(&db);

    let input = RegisterPointInput {
        image: "ecox.jpg".to_owned(),
        name: "Eco X".to_owned(),
        email: "eco@x.example".to_owned(),
        whatsapp: "11988887777".to_owned(),
        latitude: -23.7,
        longitude: -46.6,
        city: "Diadema".to_owned(),
        uf: "SP".to_owned(),
        items: "1,2,3".to_owned(),
    };

    let created = svc.register_point(input).await.unwrap();
    assert_eq!(created.city, "Diadema");
    assert_eq!(created.uf, "SP");

    let detail = svc.point_detail(created.id).await.unwrap();
    assert_eq!(detail.items.len(), 3);
    assert_eq!(detail.point.name, "Eco X");
}
