mod companies;
mod employees;

pub use companies::CompanyRepo;
pub use employees::EmployeeRepo;
