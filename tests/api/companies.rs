use reqwest::StatusCode;

use sqlx::PgPool;

use roster::repo::CompanyRepo;

use crate::helpers::{assert_employee_json, CompanyBody, TestApp};

#[sqlx::test]
async fn find_companies_returns_all_companies(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;
    let company = app.seed_company("OOCL").await;

    let res = app.get("companies").await.expect("Failed to execute request");
    assert_eq!(StatusCode::OK, res.status());

    let body: serde_json::Value = res.json().await.expect("Failed to parse body");
    let companies = body.as_array().expect("Expected a JSON array");

    assert_eq!(1, companies.len());
    assert_eq!(company.id, companies[0]["id"]);
    assert_eq!("OOCL", companies[0]["name"]);

    Ok(())
}

#[sqlx::test]
async fn find_company_by_id_includes_employees(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;
    let company = app.seed_company("OOCL").await;
    let employee = app
        .seed_employee("Alice", 23, "Female", 5000, Some(company.id))
        .await;

    let res = app
        .get(&format!("companies/{}", company.id))
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::OK, res.status());

    let body: serde_json::Value = res.json().await.expect("Failed to parse body");

    assert_eq!(company.id, body["id"]);
    assert_eq!("OOCL", body["name"]);
    let employees = body["employees"].as_array().expect("Expected employees");
    assert_eq!(1, employees.len());
    assert_employee_json(&employee, &employees[0]);

    Ok(())
}

#[sqlx::test]
async fn find_missing_company_returns_not_found(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    let res = app.get("companies/99").await.expect("Failed to execute request");

    assert_eq!(StatusCode::NOT_FOUND, res.status());

    Ok(())
}

#[sqlx::test]
async fn create_company_exposes_employee_count(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    let body = CompanyBody {
        name: Some("OOCL".into()),
    };
    let res = app
        .post_json("companies", &body)
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::CREATED, res.status());

    let created: serde_json::Value = res.json().await.expect("Failed to parse body");

    assert!(created["id"].is_i64());
    assert_eq!("OOCL", created["name"]);
    assert_eq!(0, created["employeesCount"]);

    let stored = CompanyRepo::find_by_id(&pool, created["id"].as_i64().unwrap()).await?;
    assert_eq!(Some("OOCL".to_string()), stored.map(|c| c.name));

    Ok(())
}

#[sqlx::test]
async fn create_company_without_name_is_rejected(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    let res = app
        .post_json("companies", &CompanyBody { name: None })
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST, res.status());

    Ok(())
}

#[sqlx::test]
async fn update_company_name(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;
    let previous = app.seed_company("Facebook").await;

    let body = CompanyBody {
        name: Some("Thoughtworks".into()),
    };
    let res = app
        .put_json(&format!("companies/{}", previous.id), &body)
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::NO_CONTENT, res.status());

    let updated = CompanyRepo::find_by_id(&pool, previous.id)
        .await?
        .expect("Company is missing after update");

    assert_eq!(previous.id, updated.id);
    assert_eq!("Thoughtworks", updated.name);

    Ok(())
}

#[sqlx::test]
async fn update_missing_company_returns_not_found(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    let body = CompanyBody {
        name: Some("Thoughtworks".into()),
    };
    let res = app
        .put_json("companies/99", &body)
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::NOT_FOUND, res.status());

    Ok(())
}

#[sqlx::test]
async fn delete_company(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;
    let company = app.seed_company("OOCL").await;

    let res = app
        .delete(&format!("companies/{}", company.id))
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::NO_CONTENT, res.status());

    assert!(CompanyRepo::find_by_id(&pool, company.id).await?.is_none());

    let res = app
        .delete(&format!("companies/{}", company.id))
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::NOT_FOUND, res.status());

    Ok(())
}

#[sqlx::test]
async fn find_companies_by_page(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;
    let first = app.seed_company("OOCL").await;
    let second = app.seed_company("Thoughtworks").await;
    app.seed_company("Facebook").await;

    let res = app
        .get("companies?pageNumber=1&pageSize=2")
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::OK, res.status());

    let body: serde_json::Value = res.json().await.expect("Failed to parse body");
    let companies = body.as_array().expect("Expected a JSON array");

    assert_eq!(2, companies.len());
    assert_eq!(first.id, companies[0]["id"]);
    assert_eq!(first.name.as_str(), companies[0]["name"]);
    assert_eq!(second.id, companies[1]["id"]);
    assert_eq!(second.name.as_str(), companies[1]["name"]);

    Ok(())
}

#[sqlx::test]
async fn invalid_page_parameters_are_rejected(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    let test_cases = vec![
        ("zero page number", "companies?pageNumber=0&pageSize=2"),
        ("zero page size", "companies?pageNumber=1&pageSize=0"),
        ("missing page size", "companies?pageNumber=1"),
        ("non-numeric page number", "companies?pageNumber=first&pageSize=2"),
    ];

    for (desc, url) in test_cases {
        let res = app.get(url).await.expect("Failed to execute request");

        assert_eq!(
            StatusCode::BAD_REQUEST,
            res.status(),
            "API did not fail when query was {}",
            desc
        );
    }

    Ok(())
}

#[sqlx::test]
async fn find_employees_by_company(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;
    let company = app.seed_company("OOCL").await;
    let employee = app
        .seed_employee("Alice", 18, "Female", 2000, Some(company.id))
        .await;
    app.seed_employee("Bob", 30, "Male", 3000, None).await;

    let res = app
        .get(&format!("companies/{}/employees", company.id))
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::OK, res.status());

    let body: serde_json::Value = res.json().await.expect("Failed to parse body");
    let employees = body.as_array().expect("Expected a JSON array");

    assert_eq!(1, employees.len());
    assert_employee_json(&employee, &employees[0]);

    Ok(())
}

#[sqlx::test]
async fn find_employees_of_missing_company_returns_not_found(pool: PgPool) -> sqlx::Result<()> {
    let app = TestApp::spawn(&pool).await;

    let res = app
        .get("companies/99/employees")
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::NOT_FOUND, res.status());

    Ok(())
}
