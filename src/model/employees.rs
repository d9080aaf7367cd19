use serde::Serialize;

/// New Employee request
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub salary: i32,
    pub company_id: Option<i64>,
}

/// Stored Employee record
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub salary: i32,
    /// `None` when the employee is not attached to any company
    pub company_id: Option<i64>,
}

/// Mutable subset of an Employee.
/// Absent fields keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub salary: Option<i32>,
}

/// Equality filters for listing employees
#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    pub gender: Option<String>,
}
