//! API integration tests
//!
//! These run against a live server backed by PostgreSQL:
//! `cargo test -- --ignored`. Set `GRUPOS_TEST_URL` to point elsewhere than
//! `http://localhost:8080/api/v1`.

use std::time::{SystemTime, UNIX_EPOCH};

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

fn base_url() -> String {
    std::env::var("GRUPOS_TEST_URL").unwrap_or_else(|_| "http://localhost:8080/api/v1".to_string())
}

/// Unique, accent-free token so concurrent runs don't see each other's rows
fn unique(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before epoch")
        .as_nanos();
    format!("{}{}", prefix, nanos)
}

fn grupo_body(nombre: &str, linea: &str, fecha: &str) -> Value {
    json!({
        "nombre": nombre,
        "numeroResolucion": "RES-001",
        "lineaInvestigacion": linea,
        "tipoInvestigacion": "Aplicada",
        "fechaRegistro": fecha,
        "archivo": "acta.pdf"
    })
}

async fn create_grupo(client: &Client, body: Value) -> Value {
    let response = client
        .post(format!("{}/grupos", base_url()))
        .json(&body)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    response.json().await.expect("Failed to parse response")
}

async fn create_investigador(client: &Client, nombre: &str, apellido: &str) -> i64 {
    let response = client
        .post(format!("{}/investigadores", base_url()))
        .json(&json!({ "nombre": nombre, "apellido": apellido }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: Value = response.json().await.expect("Failed to parse response");
    body["idInvestigador"].as_i64().expect("No id in response")
}

async fn search(client: &Client, query: &[(&str, &str)]) -> Value {
    let response = client
        .get(format!("{}/grupos", base_url()))
        .query(query)
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    response.json().await.expect("Failed to parse response")
}

fn grupo_ids(page: &Value) -> Vec<i64> {
    page["data"]
        .as_array()
        .expect("data is not an array")
        .iter()
        .map(|g| g["grupo"]["idGrupo"].as_i64().expect("No group id"))
        .collect()
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", base_url()))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_failed_link_insert_leaves_no_group() {
    let client = Client::new();
    let nombre = unique("rollback");

    let response = client
        .post(format!("{}/grupos/with-details", base_url()))
        .json(&json!({
            "grupo": grupo_body(&nombre, "Sistemas", "2023-04-10"),
            "investigadores": [
                { "idInvestigador": i32::MAX, "tipoRelacion": "leader" }
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Database error");

    let page = search(&client, &[("grupo", nombre.as_str())]).await;
    assert_eq!(page["pagination"]["totalItems"], 0);
    assert!(page["data"].as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore]
async fn test_with_details_creates_group_and_links() {
    let client = Client::new();
    let leader = create_investigador(&client, &unique("Ana"), "Lopez").await;
    let member = create_investigador(&client, &unique("Luis"), "Perez").await;

    let response = client
        .post(format!("{}/grupos/with-details", base_url()))
        .json(&json!({
            "grupo": grupo_body(&unique("details"), "Sistemas", "2023-04-10"),
            "investigadores": [
                { "idInvestigador": member, "tipoRelacion": "member" },
                { "idInvestigador": leader, "tipoRelacion": "leader" }
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let grupo: Value = response.json().await.expect("Failed to parse response");
    assert!(grupo["createdAt"].is_string());

    let id = grupo["idGrupo"].as_i64().unwrap();
    let details: Value = client
        .get(format!("{}/grupos/{}/details", base_url(), id))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");

    let investigadores = details["investigadores"].as_array().unwrap();
    assert_eq!(investigadores.len(), 2);
    // ordered by investigator id
    assert_eq!(investigadores[0]["idInvestigador"], leader);
    assert_eq!(investigadores[0]["rol"], "leader");
    assert_eq!(investigadores[1]["rol"], "member");
}

#[tokio::test]
#[ignore]
async fn test_with_details_empty_list() {
    let client = Client::new();

    let response = client
        .post(format!("{}/grupos/with-details", base_url()))
        .json(&json!({
            "grupo": grupo_body(&unique("empty"), "Sistemas", "2023-04-10"),
            "investigadores": []
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);

    let grupo: Value = response.json().await.expect("Failed to parse response");
    let details: Value = client
        .get(format!("{}/grupos/{}/details", base_url(), grupo["idGrupo"]))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert!(details["investigadores"].as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore]
async fn test_unfiltered_listing_pagination() {
    let client = Client::new();
    create_grupo(&client, grupo_body(&unique("list"), "Sistemas", "2023-01-01")).await;

    let page = search(&client, &[("limit", "10")]).await;
    let data = page["data"].as_array().unwrap();
    assert!(data.len() <= 10);
    // plain listing: groups are not wrapped with investigators
    assert!(data[0]["idGrupo"].is_number());

    let total = page["pagination"]["totalItems"].as_i64().unwrap();
    let pages = page["pagination"]["totalPages"].as_i64().unwrap();
    assert!(total >= 1);
    assert_eq!(pages, (total + 9) / 10);
    assert_eq!(page["pagination"]["currentPage"], 1);
    assert_eq!(page["pagination"]["limit"], 10);
}

#[tokio::test]
#[ignore]
async fn test_invalid_paging_values_fall_back_to_defaults() {
    let client = Client::new();
    let page = search(&client, &[("page", "zero"), ("limit", "1000")]).await;
    assert_eq!(page["pagination"]["currentPage"], 1);
    assert_eq!(page["pagination"]["limit"], 100);
}

#[tokio::test]
#[ignore]
async fn test_research_line_match_ignores_accents() {
    let client = Client::new();
    let token = unique("ln");
    create_grupo(
        &client,
        grupo_body(&unique("accent"), &format!("Ánalisis de datos {}", token), "2023-02-02"),
    )
    .await;

    let accented = search(
        &client,
        &[("lineaInvestigacion", format!("ánalisis de datos {}", token).as_str())],
    )
    .await;
    let plain = search(
        &client,
        &[("lineaInvestigacion", format!("ANALISIS DE DATOS {}", token).as_str())],
    )
    .await;

    assert_eq!(grupo_ids(&accented).len(), 1);
    assert_eq!(grupo_ids(&accented), grupo_ids(&plain));
}

#[tokio::test]
#[ignore]
async fn test_investigator_filter_keeps_all_members() {
    let client = Client::new();
    let apellido = unique("Zuniga");
    let matching = create_investigador(&client, "Maria", &apellido).await;
    let other = create_investigador(&client, "Pedro", "Gomez").await;

    let response = client
        .post(format!("{}/grupos/with-details", base_url()))
        .json(&json!({
            "grupo": grupo_body(&unique("members"), "Sistemas", "2023-04-10"),
            "investigadores": [
                { "idInvestigador": matching, "tipoRelacion": "leader" },
                { "idInvestigador": other, "tipoRelacion": "member" }
            ]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);

    // accented query against an unaccented surname
    let query = apellido.replacen("Zuniga", "zúñiga", 1);
    let page = search(&client, &[("investigador", query.as_str())]).await;

    let data = page["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(page["pagination"]["totalItems"], 1);
    assert_eq!(data[0]["investigadores"].as_array().unwrap().len(), 2);
}

#[tokio::test]
#[ignore]
async fn test_name_search_with_letters_unaccent_maps() {
    let client = Client::new();
    let token = unique("k");
    let nombre = format!("Łukasz{}", token);
    let apellido = format!("Strauß{}", token);
    let id = create_investigador(&client, &nombre, &apellido).await;

    let response = client
        .post(format!("{}/grupos/with-details", base_url()))
        .json(&json!({
            "grupo": grupo_body(&unique("polaco"), "Sistemas", "2023-04-10"),
            "investigadores": [{ "idInvestigador": id, "tipoRelacion": "leader" }]
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::CREATED);
    let grupo: Value = response.json().await.expect("Failed to parse response");

    for term in [nombre.clone(), format!("lukasz{}", token), format!("STRAUSS{}", token)] {
        let page = search(&client, &[("investigador", term.as_str())]).await;
        assert_eq!(grupo_ids(&page), vec![grupo["idGrupo"].as_i64().unwrap()], "{}", term);
    }

    let listing: Value = client
        .get(format!("{}/investigadores", base_url()))
        .query(&[("name", nombre.as_str())])
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(listing["pagination"]["totalItems"], 1);
    assert_eq!(listing["data"][0]["idInvestigador"], id);
}

#[tokio::test]
#[ignore]
async fn test_year_filter_uses_year_only() {
    let client = Client::new();
    let nombre = unique("year");

    let in_year = create_grupo(&client, grupo_body(&format!("{} a", nombre), "X", "2023-12-31")).await;
    create_grupo(&client, grupo_body(&format!("{} b", nombre), "X", "2022-12-31")).await;
    create_grupo(&client, grupo_body(&format!("{} c", nombre), "X", "2024-01-01")).await;

    let page = search(&client, &[("grupo", nombre.as_str()), ("año", "2023")]).await;
    assert_eq!(grupo_ids(&page), vec![in_year["idGrupo"].as_i64().unwrap()]);

    let page = search(&client, &[("grupo", nombre.as_str())]).await;
    assert_eq!(page["pagination"]["totalItems"], 3);
}

#[tokio::test]
#[ignore]
async fn test_delete_missing_investigador_is_not_an_error() {
    let client = Client::new();

    let missing = client
        .delete(format!("{}/investigadores/{}", base_url(), i32::MAX))
        .send()
        .await
        .expect("Failed to send request");

    let id = create_investigador(&client, "Temp", "Orary").await;
    let existing = client
        .delete(format!("{}/investigadores/{}", base_url(), id))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(missing.status(), StatusCode::NO_CONTENT);
    assert_eq!(existing.status(), missing.status());
}

#[tokio::test]
#[ignore]
async fn test_deleting_group_removes_links() {
    let client = Client::new();
    let investigador = create_investigador(&client, "Link", "Owner").await;

    let response = client
        .post(format!("{}/grupos/with-details", base_url()))
        .json(&json!({
            "grupo": grupo_body(&unique("cascade"), "X", "2023-04-10"),
            "investigadores": [{ "idInvestigador": investigador, "tipoRelacion": "member" }]
        }))
        .send()
        .await
        .expect("Failed to send request");
    let grupo: Value = response.json().await.expect("Failed to parse response");
    let id = grupo["idGrupo"].as_i64().unwrap();

    let response = client
        .delete(format!("{}/grupos/{}", base_url(), id))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let grupos: Value = client
        .get(format!("{}/investigadores/{}/grupos", base_url(), investigador))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert!(grupos.as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore]
async fn test_get_missing_grupo_is_not_found() {
    let client = Client::new();

    let response = client
        .get(format!("{}/grupos/{}", base_url(), i32::MAX))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["error"], "NoSuchData");
}

#[tokio::test]
#[ignore]
async fn test_update_uses_path_id() {
    let client = Client::new();
    let id = create_investigador(&client, "Old", "Name").await;

    let response = client
        .put(format!("{}/investigadores/{}", base_url(), id))
        .json(&json!({ "idInvestigador": 1, "nombre": "New", "apellido": "Name" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["idInvestigador"], id);
    assert_eq!(body["nombre"], "New");
}
