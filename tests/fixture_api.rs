//! End-to-end tests against fixture files.

#![allow(clippy::panic, clippy::indexing_slicing)]

mod common;

use reqwest::StatusCode;
use serde_json::{Value, json};

use common::{data_dir, get_bytes, get_json, slugs, spawn_fixture_api, strings, write_fixture};

fn summer_gala() -> Value {
    json!({
        "id": "evt-1",
        "slug": "summer-gala",
        "name": "Summer Gala",
        "date": "2025-07-19",
        "startTime": "6:00 PM",
        "endTime": "10:00 PM",
        "location": "The Grand Ballroom",
        "locationAddress": "1200 Brickell Ave, Miami, FL",
        "locationMapUrl": "https://maps.example.com/grand-ballroom",
        "image": "/images/gala.jpg",
        "bannerImage": "/images/gala-banner.jpg",
        "shortDescription": "Our annual celebration.",
        "description": "Dinner, music and awards.",
        "host": "Valeria Martinez",
        "hostTitle": "Founder",
        "hostImage": "/images/valeria.jpg",
        "ticketPrice": "85",
        "ticketLink": "https://tickets.example.com/gala",
        "isPast": false
    })
}

fn blog_fixture() -> Value {
    json!({
        "blog": [
            {"slug": "lead-1", "category": "Leadership", "tags": ["career", "growth"], "featured": true},
            {"slug": "biz-1", "category": "Business", "tags": ["Career"], "featured": true},
            {"slug": "lead-2", "category": "leadership", "tags": ["mentoring"], "featured": false},
            {"slug": "fin-1", "category": "Finance", "tags": ["money"], "featured": false}
        ],
        "categories": ["Leadership", "Business", "Finance", "Wellness"],
        "popularTags": ["career", "money"]
    })
}

#[tokio::test]
async fn event_by_slug_returns_exact_record() {
    let dir = data_dir();
    write_fixture(&dir, "events.json", &json!({ "events": [summer_gala()] }));
    let base = spawn_fixture_api(dir.path()).await;

    let (status, body) = get_json(&format!("{base}/api/events/summer-gala")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, summer_gala());

    let (status, body) = get_json(&format!("{base}/api/events/winter-gala")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn events_list_is_newest_first() {
    let dir = data_dir();
    write_fixture(
        &dir,
        "events.json",
        &json!({ "events": [
            {"slug": "spring", "date": "2025-03-01"},
            {"slug": "tba", "date": "TBA"},
            {"slug": "fall", "date": "2025-10-04"},
            {"slug": "summer", "date": "2025-07-19"}
        ]}),
    );
    let base = spawn_fixture_api(dir.path()).await;

    let (status, body) = get_json(&format!("{base}/api/events")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slugs(&body, "events"), vec!["fall", "summer", "spring", "tba"]);
}

#[tokio::test]
async fn missing_fixture_is_404_not_500() {
    let dir = data_dir();
    let base = spawn_fixture_api(dir.path()).await;

    for path in ["/api/events", "/api/ambassadors", "/api/leaders", "/api/blog"] {
        let (status, body) = get_json(&format!("{base}{path}")).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
        assert!(body.get("error").is_some(), "{path}");
    }
}

#[tokio::test]
async fn corrupt_fixture_is_404() {
    let dir = data_dir();
    if let Err(e) = std::fs::write(dir.path().join("events.json"), "{ \"events\": [") {
        panic!("write: {e}");
    }
    let base = spawn_fixture_api(dir.path()).await;

    let (status, _) = get_json(&format!("{base}/api/events")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = get_json(&format!("{base}/api/events/anything")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn leaders_alias_matches_ambassadors_byte_for_byte() {
    let dir = data_dir();
    write_fixture(
        &dir,
        "ambassadors.json",
        &json!({ "ambassadors": [
            {"id": 1, "slug": "maria-lopez", "name": "Maria Lopez", "languages": ["Spanish"],
             "socialMedia": {"instagram": "@maria"}, "yearsInProgram": 2, "eventsHosted": 7},
            {"id": 2, "slug": "ana-ruiz", "name": "Ana Ruiz"}
        ]}),
    );
    let base = spawn_fixture_api(dir.path()).await;

    let (a_status, a_body) = get_bytes(&format!("{base}/api/ambassadors/maria-lopez")).await;
    let (l_status, l_body) = get_bytes(&format!("{base}/api/leaders/maria-lopez")).await;
    assert_eq!(a_status, StatusCode::OK);
    assert_eq!(l_status, StatusCode::OK);
    assert_eq!(a_body, l_body);

    let (_, a_list) = get_bytes(&format!("{base}/api/ambassadors")).await;
    let (_, l_list) = get_bytes(&format!("{base}/api/leaders")).await;
    assert_eq!(a_list, l_list);

    let (_, body) = get_json(&format!("{base}/api/leaders")).await;
    assert_eq!(slugs(&body, "ambassadors"), vec!["maria-lopez", "ana-ruiz"]);

    let (status, _) = get_json(&format!("{base}/api/leaders/nobody")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unfiltered_blog_returns_fixture_facets_verbatim() {
    let dir = data_dir();
    write_fixture(&dir, "blog.json", &blog_fixture());
    let base = spawn_fixture_api(dir.path()).await;

    let (status, body) = get_json(&format!("{base}/api/blog")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slugs(&body, "blog"), vec!["lead-1", "biz-1", "lead-2", "fin-1"]);
    assert_eq!(
        strings(&body, "categories"),
        vec!["Leadership", "Business", "Finance", "Wellness"]
    );
    assert_eq!(strings(&body, "popularTags"), vec!["career", "money"]);
}

#[tokio::test]
async fn blog_category_filter_narrows_facets() {
    let dir = data_dir();
    write_fixture(&dir, "blog.json", &blog_fixture());
    let base = spawn_fixture_api(dir.path()).await;

    let (status, body) = get_json(&format!("{base}/api/blog?category=Leadership")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slugs(&body, "blog"), vec!["lead-1", "lead-2"]);
    let categories = strings(&body, "categories");
    assert!(!categories.is_empty());
    assert!(categories.iter().all(|c| c.to_lowercase() == "leadership"));
    assert!(!categories.contains(&"Wellness".to_string()));
}

#[tokio::test]
async fn blog_featured_and_tag_compose() {
    let dir = data_dir();
    write_fixture(&dir, "blog.json", &blog_fixture());
    let base = spawn_fixture_api(dir.path()).await;

    let (status, body) = get_json(&format!("{base}/api/blog?featured=true&tag=career")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slugs(&body, "blog"), vec!["lead-1", "biz-1"]);
    for post in body["blog"].as_array().cloned().unwrap_or_default() {
        assert_eq!(post["featured"], json!(true));
    }
}

#[tokio::test]
async fn blog_filter_without_matches_is_empty_200() {
    let dir = data_dir();
    write_fixture(&dir, "blog.json", &blog_fixture());
    let base = spawn_fixture_api(dir.path()).await;

    let (status, body) = get_json(&format!("{base}/api/blog?category=Travel")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(slugs(&body, "blog").is_empty());
    assert!(strings(&body, "categories").is_empty());
    assert!(strings(&body, "popularTags").is_empty());
}

#[tokio::test]
async fn blog_filters_fold_accented_case() {
    let dir = data_dir();
    write_fixture(
        &dir,
        "blog.json",
        &json!({ "blog": [
            {"slug": "exito-1", "category": "Éxito", "tags": ["Éxito"]},
            {"slug": "exito-2", "category": "éxito", "tags": ["mujeres"]},
            {"slug": "plain", "category": "Exito", "tags": ["Exito"]}
        ]}),
    );
    let base = spawn_fixture_api(dir.path()).await;

    let (status, body) = get_json(&format!("{base}/api/blog?tag=%C3%A9xito")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slugs(&body, "blog"), vec!["exito-1"]);

    let (status, body) = get_json(&format!("{base}/api/blog?category=%C3%89XITO")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slugs(&body, "blog"), vec!["exito-1", "exito-2"]);
    assert_eq!(strings(&body, "categories"), vec!["Éxito"]);
}

#[tokio::test]
async fn null_fields_keep_the_rest_of_the_file() {
    let dir = data_dir();
    write_fixture(
        &dir,
        "events.json",
        &json!({ "events": [
            summer_gala(),
            {"slug": "brunch", "date": "2025-03-08", "ticketLink": null, "host": null}
        ]}),
    );
    let base = spawn_fixture_api(dir.path()).await;

    let (status, body) = get_json(&format!("{base}/api/events")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(slugs(&body, "events"), vec!["summer-gala", "brunch"]);

    let (status, body) = get_json(&format!("{base}/api/events/summer-gala")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, summer_gala());

    let (status, body) = get_json(&format!("{base}/api/events/brunch")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ticketLink"], json!(""));
    assert_eq!(body["host"], json!(""));
}

#[tokio::test]
async fn blog_post_by_slug() {
    let dir = data_dir();
    write_fixture(&dir, "blog.json", &blog_fixture());
    let base = spawn_fixture_api(dir.path()).await;

    let (status, body) = get_json(&format!("{base}/api/blog/fin-1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["category"], json!("Finance"));

    let (status, body) = get_json(&format!("{base}/api/blog/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn admin_posts_are_rejected() {
    let dir = data_dir();
    write_fixture(&dir, "events.json", &json!({ "events": [summer_gala()] }));
    let base = spawn_fixture_api(dir.path()).await;

    let client = reqwest::Client::new();
    for path in ["/api/events", "/api/ambassadors", "/api/blog"] {
        let Ok(response) = client
            .post(format!("{base}{path}"))
            .json(&json!({"name": "New"}))
            .send()
            .await
        else {
            panic!("post to {path} failed");
        };
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{path}");
    }
}

#[tokio::test]
async fn unknown_path_is_json_404() {
    let dir = data_dir();
    let base = spawn_fixture_api(dir.path()).await;

    let (status, body) = get_json(&format!("{base}/api/does-not-exist")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.get("error").is_some());
}

#[tokio::test]
async fn health_reports_fixture_source() {
    let dir = data_dir();
    let base = spawn_fixture_api(dir.path()).await;

    let (status, body) = get_json(&format!("{base}/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("healthy"));
    assert_eq!(body["source"], json!("fixture"));
}

#[tokio::test]
async fn shipped_data_directory_serves_every_collection() {
    let data = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let base = spawn_fixture_api(&data).await;

    for (path, key) in [
        ("/api/events", "events"),
        ("/api/ambassadors", "ambassadors"),
        ("/api/blog", "blog"),
    ] {
        let (status, body) = get_json(&format!("{base}{path}")).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert!(!slugs(&body, key).is_empty(), "{path}");
    }
}
