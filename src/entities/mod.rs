pub mod customer_quotation;
pub mod error_log;
pub mod quotation;
pub mod quotation_detail;
