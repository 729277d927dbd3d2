pub mod provider_config;
