use sqlx::PgExecutor;

use crate::domain::PageRequest;
use crate::model::{Employee, EmployeeFilter, EmployeeUpdate, NewEmployee};

/// Repository for interfacing with the employees table
pub struct EmployeeRepo;

impl EmployeeRepo {
    #[tracing::instrument(name = "Insert employee", skip(executor))]
    pub async fn insert<'con>(
        executor: impl PgExecutor<'con>,
        new_employee: &NewEmployee,
    ) -> sqlx::Result<Employee> {
        sqlx::query_as::<_, Employee>(
            r#"
            insert into employees(name, age, gender, salary, company_id)
            values ($1, $2, $3, $4, $5)
            returning id, name, age, gender, salary, company_id
            "#,
        )
        .bind(&new_employee.name)
        .bind(new_employee.age)
        .bind(&new_employee.gender)
        .bind(new_employee.salary)
        .bind(new_employee.company_id)
        .fetch_one(executor)
        .await
    }

    #[tracing::instrument(name = "Fetch an employee by id", skip(executor))]
    pub async fn find_by_id<'con>(
        executor: impl PgExecutor<'con>,
        id: i64,
    ) -> sqlx::Result<Option<Employee>> {
        sqlx::query_as::<_, Employee>(
            "select id, name, age, gender, salary, company_id from employees where id=$1",
        )
        .bind(id)
        .fetch_optional(executor)
        .await
    }

    /// Fetch employees in insertion order, narrowed by `filter` and optionally restricted to a page
    #[tracing::instrument(name = "Fetch all employees", skip(executor))]
    pub async fn find_all<'con>(
        executor: impl PgExecutor<'con>,
        filter: &EmployeeFilter,
        page: Option<PageRequest>,
    ) -> sqlx::Result<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(
            r#"
            select id, name, age, gender, salary, company_id
            from employees
            where ($1::text is null or gender = $1)
            order by id
            limit $2 offset $3
            "#,
        )
        .bind(filter.gender.as_deref())
        .bind(page.map(|p| p.limit()))
        .bind(page.map(|p| p.offset()).unwrap_or(0))
        .fetch_all(executor)
        .await
    }

    #[tracing::instrument(name = "Fetch employees of a company", skip(executor))]
    pub async fn find_by_company_id<'con>(
        executor: impl PgExecutor<'con>,
        company_id: i64,
    ) -> sqlx::Result<Vec<Employee>> {
        sqlx::query_as::<_, Employee>(
            r#"
            select id, name, age, gender, salary, company_id
            from employees
            where company_id=$1
            order by id
            "#,
        )
        .bind(company_id)
        .fetch_all(executor)
        .await
    }

    #[tracing::instrument(name = "Count employees of a company", skip(executor))]
    pub async fn count_by_company_id<'con>(
        executor: impl PgExecutor<'con>,
        company_id: i64,
    ) -> sqlx::Result<i64> {
        sqlx::query_scalar::<_, i64>("select count(*) from employees where company_id=$1")
            .bind(company_id)
            .fetch_one(executor)
            .await
    }

    /// Apply the present fields of `update`, returns `false` if no employee has this id
    #[tracing::instrument(name = "Update an employee", skip(executor))]
    pub async fn update<'con>(
        executor: impl PgExecutor<'con>,
        id: i64,
        update: &EmployeeUpdate,
    ) -> sqlx::Result<bool> {
        let result = sqlx::query(
            r#"
            update employees
            set age = coalesce($2, age),
                gender = coalesce($3, gender),
                salary = coalesce($4, salary)
            where id=$1
            "#,
        )
        .bind(id)
        .bind(update.age)
        .bind(update.gender.as_deref())
        .bind(update.salary)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete an employee, returns `false` if no employee has this id
    #[tracing::instrument(name = "Delete an employee by id", skip(executor))]
    pub async fn delete_by_id<'con>(executor: impl PgExecutor<'con>, id: i64) -> sqlx::Result<bool> {
        let result = sqlx::query("delete from employees where id=$1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
