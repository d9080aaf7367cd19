use actix_web::dev::HttpServiceFactory;
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};

use serde::{Deserialize, Serialize};

use sqlx::PgPool;

use crate::controller::PageQuery;
use crate::error::{RestError, RestResult};
use crate::model::{Company, CompanySummary, Employee, NewCompany};
use crate::repo::{CompanyRepo, EmployeeRepo};

/// JSON body for creating or renaming a company
#[derive(Debug, Deserialize, Serialize)]
pub struct CompanyRequest {
    pub name: String,
}

impl From<CompanyRequest> for NewCompany {
    fn from(request: CompanyRequest) -> Self {
        Self { name: request.name }
    }
}

/// A company together with its employees
#[derive(Debug, Serialize)]
pub struct CompanyDetails {
    pub id: i64,
    pub name: String,
    pub employees: Vec<Employee>,
}

impl CompanyDetails {
    fn new(company: Company, employees: Vec<Employee>) -> Self {
        Self {
            id: company.id,
            name: company.name,
            employees,
        }
    }
}

fn company_not_found(id: i64) -> RestError {
    RestError::NotFound(format!("No company with id {}", id))
}

#[tracing::instrument(name = "List companies", skip(pool))]
#[get("")]
async fn list(
    pool: web::Data<PgPool>,
    query: web::Query<PageQuery>,
) -> RestResult<impl Responder> {
    let page = query.page()?;

    let companies = CompanyRepo::find_all(pool.get_ref(), page).await?;

    Ok(HttpResponse::Ok().json(companies))
}

#[tracing::instrument(name = "Fetch a company", skip(pool))]
#[get("/{id}")]
async fn find(pool: web::Data<PgPool>, path: web::Path<(i64,)>) -> RestResult<impl Responder> {
    let (id,) = path.into_inner();
    let pool = pool.get_ref();

    let company = CompanyRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| company_not_found(id))?;
    let employees = EmployeeRepo::find_by_company_id(pool, id).await?;

    Ok(HttpResponse::Ok().json(CompanyDetails::new(company, employees)))
}

#[tracing::instrument(name = "List employees of a company", skip(pool))]
#[get("/{id}/employees")]
async fn list_employees(
    pool: web::Data<PgPool>,
    path: web::Path<(i64,)>,
) -> RestResult<impl Responder> {
    let (id,) = path.into_inner();
    let pool = pool.get_ref();

    if !CompanyRepo::exists(pool, id).await? {
        return Err(company_not_found(id));
    }
    let employees = EmployeeRepo::find_by_company_id(pool, id).await?;

    Ok(HttpResponse::Ok().json(employees))
}

#[tracing::instrument(name = "Create a company", skip(pool))]
#[post("")]
async fn create(
    pool: web::Data<PgPool>,
    body: web::Json<CompanyRequest>,
) -> RestResult<impl Responder> {
    let pool = pool.get_ref();
    let new_company: NewCompany = body.into_inner().into();

    let company = CompanyRepo::insert(pool, &new_company).await?;
    let employees_count = EmployeeRepo::count_by_company_id(pool, company.id).await?;

    Ok(HttpResponse::Created().json(CompanySummary {
        id: company.id,
        name: company.name,
        employees_count,
    }))
}

#[tracing::instrument(name = "Update a company", skip(pool))]
#[put("/{id}")]
async fn update(
    pool: web::Data<PgPool>,
    path: web::Path<(i64,)>,
    body: web::Json<CompanyRequest>,
) -> RestResult<impl Responder> {
    let (id,) = path.into_inner();

    if !CompanyRepo::update_name(pool.get_ref(), id, &body.name).await? {
        return Err(company_not_found(id));
    }

    Ok(HttpResponse::NoContent().finish())
}

#[tracing::instrument(name = "Delete a company", skip(pool))]
#[delete("/{id}")]
async fn remove(pool: web::Data<PgPool>, path: web::Path<(i64,)>) -> RestResult<impl Responder> {
    let (id,) = path.into_inner();

    if !CompanyRepo::delete_by_id(pool.get_ref(), id).await? {
        return Err(company_not_found(id));
    }

    Ok(HttpResponse::NoContent().finish())
}

/// Companies API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/companies")
        .service(list)
        .service(create)
        .service(find)
        .service(update)
        .service(remove)
        .service(list_employees)
}
