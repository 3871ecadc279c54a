pub mod use_provider_status;
