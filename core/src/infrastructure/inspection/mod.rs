pub mod socrata_client;
