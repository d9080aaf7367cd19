use actix_web::dev::HttpServiceFactory;
use actix_web::{delete, get, post, put, web, HttpResponse, Responder};

use serde::{Deserialize, Serialize};

use sqlx::PgPool;

use crate::domain::PageRequest;
use crate::error::{RestError, RestResult};
use crate::model::{Employee, EmployeeFilter, EmployeeUpdate, NewEmployee};
use crate::repo::EmployeeRepo;

/// JSON body for hiring a new employee
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub salary: i32,
    #[serde(default)]
    pub company_id: Option<i64>,
}

impl From<EmployeeRequest> for NewEmployee {
    fn from(request: EmployeeRequest) -> Self {
        Self {
            name: request.name,
            age: request.age,
            gender: request.gender,
            salary: request.salary,
            company_id: request.company_id,
        }
    }
}

/// JSON body for updating an employee.
/// Only `age`, `gender` and `salary` are applied, anything else is ignored.
#[derive(Debug, Deserialize)]
pub struct EmployeeUpdateRequest {
    age: Option<i32>,
    gender: Option<String>,
    salary: Option<i32>,
}

impl From<EmployeeUpdateRequest> for EmployeeUpdate {
    fn from(request: EmployeeUpdateRequest) -> Self {
        Self {
            age: request.age,
            gender: request.gender,
            salary: request.salary,
        }
    }
}

/// Newly created employee, salary is not echoed back
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub company_id: Option<i64>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.name,
            age: employee.age,
            gender: employee.gender,
            company_id: employee.company_id,
        }
    }
}

/// Query parameters for listing employees
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeQuery {
    gender: Option<String>,
    page_number: Option<i64>,
    page_size: Option<i64>,
}

impl EmployeeQuery {
    fn filter(&self) -> EmployeeFilter {
        EmployeeFilter {
            gender: self.gender.clone(),
        }
    }

    fn page(&self) -> RestResult<Option<PageRequest>> {
        PageRequest::from_query(self.page_number, self.page_size).map_err(RestError::BadRequest)
    }
}

fn employee_not_found(id: i64) -> RestError {
    RestError::NotFound(format!("No employee with id {}", id))
}

#[tracing::instrument(name = "List employees", skip(pool))]
#[get("")]
async fn list(
    pool: web::Data<PgPool>,
    query: web::Query<EmployeeQuery>,
) -> RestResult<impl Responder> {
    let page = query.page()?;

    let employees = EmployeeRepo::find_all(pool.get_ref(), &query.filter(), page).await?;

    Ok(HttpResponse::Ok().json(employees))
}

#[tracing::instrument(name = "Fetch an employee", skip(pool))]
#[get("/{id}")]
async fn find(pool: web::Data<PgPool>, path: web::Path<(i64,)>) -> RestResult<impl Responder> {
    let (id,) = path.into_inner();

    let employee = EmployeeRepo::find_by_id(pool.get_ref(), id)
        .await?
        .ok_or_else(|| employee_not_found(id))?;

    Ok(HttpResponse::Ok().json(employee))
}

#[tracing::instrument(name = "Create an employee", skip(pool))]
#[post("")]
async fn create(
    pool: web::Data<PgPool>,
    body: web::Json<EmployeeRequest>,
) -> RestResult<impl Responder> {
    let new_employee: NewEmployee = body.into_inner().into();

    let employee = EmployeeRepo::insert(pool.get_ref(), &new_employee).await?;

    Ok(HttpResponse::Created().json(EmployeeResponse::from(employee)))
}

#[tracing::instrument(name = "Update an employee", skip(pool))]
#[put("/{id}")]
async fn update(
    pool: web::Data<PgPool>,
    path: web::Path<(i64,)>,
    body: web::Json<EmployeeUpdateRequest>,
) -> RestResult<impl Responder> {
    let (id,) = path.into_inner();
    let changes: EmployeeUpdate = body.into_inner().into();

    if !EmployeeRepo::update(pool.get_ref(), id, &changes).await? {
        return Err(employee_not_found(id));
    }

    Ok(HttpResponse::NoContent().finish())
}

#[tracing::instrument(name = "Delete an employee", skip(pool))]
#[delete("/{id}")]
async fn remove(pool: web::Data<PgPool>, path: web::Path<(i64,)>) -> RestResult<impl Responder> {
    let (id,) = path.into_inner();

    if !EmployeeRepo::delete_by_id(pool.get_ref(), id).await? {
        return Err(employee_not_found(id));
    }

    Ok(HttpResponse::NoContent().finish())
}

/// Employees API endpoints
pub fn scope() -> impl HttpServiceFactory {
    web::scope("/employees")
        .service(list)
        .service(create)
        .service(find)
        .service(update)
        .service(remove)
}
