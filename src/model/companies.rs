use serde::Serialize;

/// New Company request
#[derive(Debug, Clone)]
pub struct NewCompany {
    pub name: String,
}

/// Stored Company record
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Company {
    pub id: i64,
    pub name: String,
}

/// Company record with its derived employee count
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CompanySummary {
    pub id: i64,
    pub name: String,
    pub employees_count: i64,
}
