pub mod billing_service;
