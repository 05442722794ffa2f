// Quotation read side
pub mod quotation_queries;

// Identifier generation
pub mod quotation_numbers;

// Quotation write side and copy workflow
pub mod quotations;
