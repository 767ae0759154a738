pub mod nyc_health_client;
