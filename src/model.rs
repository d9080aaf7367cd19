mod companies;
mod employees;

pub use companies::{Company, CompanySummary, NewCompany};
pub use employees::{Employee, EmployeeFilter, EmployeeUpdate, NewEmployee};
