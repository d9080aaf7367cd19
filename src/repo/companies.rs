use sqlx::PgExecutor;

use crate::domain::PageRequest;
use crate::model::{Company, CompanySummary, NewCompany};

/// Repository for interfacing with the companies table
pub struct CompanyRepo;

impl CompanyRepo {
    #[tracing::instrument(name = "Insert company", skip(executor))]
    pub async fn insert<'con>(
        executor: impl PgExecutor<'con>,
        new_company: &NewCompany,
    ) -> sqlx::Result<Company> {
        sqlx::query_as::<_, Company>("insert into companies(name) values ($1) returning id, name")
            .bind(&new_company.name)
            .fetch_one(executor)
            .await
    }

    #[tracing::instrument(name = "Fetch a company by id", skip(executor))]
    pub async fn find_by_id<'con>(
        executor: impl PgExecutor<'con>,
        id: i64,
    ) -> sqlx::Result<Option<Company>> {
        sqlx::query_as::<_, Company>("select id, name from companies where id=$1")
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    #[tracing::instrument(name = "Check a company exists", skip(executor))]
    pub async fn exists<'con>(executor: impl PgExecutor<'con>, id: i64) -> sqlx::Result<bool> {
        sqlx::query_scalar::<_, bool>("select exists(select 1 from companies where id=$1)")
            .bind(id)
            .fetch_one(executor)
            .await
    }

    /// Fetch companies in insertion order, optionally restricted to a single page
    #[tracing::instrument(name = "Fetch all companies", skip(executor))]
    pub async fn find_all<'con>(
        executor: impl PgExecutor<'con>,
        page: Option<PageRequest>,
    ) -> sqlx::Result<Vec<CompanySummary>> {
        sqlx::query_as::<_, CompanySummary>(
            r#"
            select c.id, c.name, count(e.id) as employees_count
            from companies c
            left join employees e on e.company_id = c.id
            group by c.id
            order by c.id
            limit $1 offset $2
            "#,
        )
        // A null limit returns every remaining row
        .bind(page.map(|p| p.limit()))
        .bind(page.map(|p| p.offset()).unwrap_or(0))
        .fetch_all(executor)
        .await
    }

    /// Rename a company, returns `false` if no company has this id
    #[tracing::instrument(name = "Update a company name", skip(executor))]
    pub async fn update_name<'con>(
        executor: impl PgExecutor<'con>,
        id: i64,
        name: &str,
    ) -> sqlx::Result<bool> {
        let result = sqlx::query("update companies set name=$2 where id=$1")
            .bind(id)
            .bind(name)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a company, returns `false` if no company has this id.
    /// Employees of the company are kept and detached.
    #[tracing::instrument(name = "Delete a company by id", skip(executor))]
    pub async fn delete_by_id<'con>(executor: impl PgExecutor<'con>, id: i64) -> sqlx::Result<bool> {
        let result = sqlx::query("delete from companies where id=$1")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
