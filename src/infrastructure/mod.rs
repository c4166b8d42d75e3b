pub mod discount_catalog;
