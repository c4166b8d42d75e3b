pub mod catalog;
pub mod invoices;
pub mod kitty;
