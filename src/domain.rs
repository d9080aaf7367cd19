mod page_request;

pub use page_request::PageRequest;
