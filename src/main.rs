use portico::config::Config;
use portico::http::request::Method;
use portico::server::Server;
use portico::static_files::static_handler;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load();
    let root = cfg.static_root.clone();

    let mut server = Server::new(cfg);
    server.register_handler("/", Method::Get, static_handler(root.clone()));
    server.register_handler("/index.css", Method::Get, static_handler(root.clone()));
    server.register_handler("/index.js", Method::Get, static_handler(root));

    let shutdown = server.shutdown_handle();

    tokio::select! {
        res = server.up() => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
            shutdown.down();
        }
    }

    Ok(())
}
