mod common;

use actix_web::{App, http::StatusCode, test, web};
use common::{SEMESTER_JW_ID, TestEnv, datum_json, section_json, semester_json};
use serde_json::{Value, json};
use std::sync::Arc;
use ustc_catalog::importer::import_from_cache;
use ustc_catalog::models::AppStartTime;
use ustc_catalog::routes;
use ustc_catalog::storage::Storage;
use ustc_catalog::utils::{path_error_handler, query_error_handler};

async fn seeded_env() -> TestEnv {
    let env = TestEnv::new().await;
    env.write_semesters(semester_json());
    env.write_sections(SEMESTER_JW_ID, json!([section_json(1001, 501)]));
    env.write_datum(
        1001,
        datum_json(1001, "张三", Some(123), None, &["2024-09-09", "2024-09-02"]),
    );
    import_from_cache(env.db(), env.layout.root()).await.unwrap();
    env
}

macro_rules! catalog_app {
    ($env:expr) => {{
        let storage: Arc<dyn Storage> = Arc::new($env.storage.clone());
        test::init_service(
            App::new()
                .app_data(web::PathConfig::default().error_handler(path_error_handler))
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::Data::new(storage))
                .app_data(web::Data::new(AppStartTime {
                    start_datetime: chrono::Utc::now(),
                }))
                .configure(routes::configure_system_routes)
                .configure(routes::configure_semesters_routes)
                .configure(routes::configure_courses_routes)
                .configure(routes::configure_sections_routes)
                .configure(routes::configure_teachers_routes),
        )
        .await
    }};
}

#[actix_web::test]
async fn test_section_detail_and_schedules() {
    let env = seeded_env().await;
    let app = catalog_app!(env);

    let req = test::TestRequest::get().uri("/api/v1/sections/1001").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["jw_id"], 1001);
    assert_eq!(body["data"]["course"]["jw_id"], 501);
    assert_eq!(body["data"]["semester"]["code"], "2024-2025-1");
    assert_eq!(body["data"]["teachers"][0]["name_cn"], "张三");
    assert_eq!(body["data"]["teachers"][0]["person_id"], 123);
    assert_eq!(body["data"]["admin_classes"][0]["name_cn"], "计算机2401班");

    let req = test::TestRequest::get()
        .uri("/api/v1/sections/1001/schedules")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let items = body["data"]["schedules"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["date"], "2024-09-02");
    assert_eq!(items[1]["date"], "2024-09-09");
    assert_eq!(items[0]["room"]["building_name_cn"], "第三教学楼");
    assert_eq!(items[0]["teacher_name_cn"], "张三");
}

#[actix_web::test]
async fn test_unknown_ids_return_not_found() {
    let env = seeded_env().await;
    let app = catalog_app!(env);

    for (uri, code) in [
        ("/api/v1/semesters/1", 2001),
        ("/api/v1/semesters/1/sections", 2001),
        ("/api/v1/courses/1", 2002),
        ("/api/v1/sections/1", 2003),
        ("/api/v1/sections/1/schedules", 2003),
        ("/api/v1/teachers/999999", 2004),
    ] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], code, "{uri}");
        assert!(body.get("data").is_none());
    }
}

#[actix_web::test]
async fn test_invalid_path_parameter_is_bad_request() {
    let env = seeded_env().await;
    let app = catalog_app!(env);

    let req = test::TestRequest::get().uri("/api/v1/sections/abc").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 1000);
}

#[actix_web::test]
async fn test_overview_and_semester_listing() {
    let env = seeded_env().await;
    let app = catalog_app!(env);

    let req = test::TestRequest::get().uri("/api/v1/overview").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["counts"]["semesters"], 1);
    assert_eq!(body["data"]["counts"]["sections"], 1);
    assert_eq!(body["data"]["counts"]["teachers"], 1);
    assert_eq!(body["data"]["recent_semesters"][0]["jw_id"], SEMESTER_JW_ID);

    let req = test::TestRequest::get()
        .uri("/api/v1/semesters/2024001/sections")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    let sections = body["data"]["sections"].as_array().unwrap();
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0]["course_name_cn"], "计算机程序设计");

    let req = test::TestRequest::get().uri("/api/v1/courses/501").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["category"]["name_cn"], "本科计划内课程");
    assert_eq!(body["data"]["sections"][0]["jw_id"], 1001);
}
