use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::application::http::server::http_server::{router, state};
use crate::args::{Args, LogArgs};

mod application;
mod args;

fn init_logger(args: &LogArgs) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.filter.as_str()));
    let subscriber = tracing_subscriber::fmt().with_env_filter(filter);

    if args.json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logger(&args.log);

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;

    let state = state(args.clone()).await?;
    let router = router(state)?;

    info!("listening on {}", addr);
    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
