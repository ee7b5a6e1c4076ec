use clap::Parser;
use dotenvy::dotenv;
use talkable_adaptor_web::{WebUiConfig, WebUiServer};
use talkable_core::utils::logger::init_logging;
use talkable_core::{get_env_bool, get_env_int, get_env_or};

#[derive(Parser, Debug)]
#[command(name = "run-talkable-ui", about = "Serve the Talkable web UI and proxy endpoints")]
struct Cli {
    #[arg(long, env = "TALKABLE_LOG_LEVEL", default_value = "info")]
    log_level: String,
}

fn main() -> talkable_core::Result<()> {
    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    rt.block_on(async move {
        let cli = Cli::parse();
        std::env::set_var("TALKABLE_LOG_LEVEL", &cli.log_level);
        init_logging();
        let _ = dotenv();

        // Single backend by default; chat and store URLs can diverge via env
        let backend = get_env_or("TALKABLE_BACKEND_URL", "http://localhost:8000");
        let config = WebUiConfig {
            enabled: true,
            host: get_env_or("TALKABLE_HOST", "127.0.0.1"),
            port: get_env_int("TALKABLE_PORT", 3000),
            chat_service_url: get_env_or("TALKABLE_CHAT_URL", &backend),
            store_service_url: get_env_or("TALKABLE_STORE_URL", &backend),
            enable_cors: get_env_bool("TALKABLE_CORS", true),
        };

        let server = WebUiServer::new(config)?;
        server.start().await?;
        tracing::info!(
            "Talkable web UI listening on http://{}:{}",
            server.config.host,
            server.config.port
        );

        tokio::signal::ctrl_c().await?;
        server.stop().await?;
        tracing::info!("Talkable web UI stopped");
        Ok(())
    })
}
