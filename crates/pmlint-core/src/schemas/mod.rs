//! Schema definitions for Postman collection documents

pub mod collection;
