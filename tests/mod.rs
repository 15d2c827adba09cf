// Integration tests for ddlgen

pub mod cli;
pub mod unit;
