use clap::Parser;

use ipgeo::cli::Cli;
use ipgeo::config::{get_config, init_config, init_config_from};
use ipgeo::runtime::modes::{Mode, detect_mode};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.config.as_deref() {
        Some(path) => init_config_from(path),
        None => init_config(),
    }
    let config = get_config();

    match detect_mode(cli.command.as_ref()) {
        #[cfg(feature = "server")]
        Mode::Server => {
            // 日志 guard 必须存活到进程退出
            let _guard = ipgeo::system::init_logging(&config.logging)?;
            ipgeo::runtime::modes::run_server(&config).await
        }
        #[cfg(feature = "cli")]
        Mode::Cli => {
            let Some(command) = cli.command else {
                return Ok(());
            };
            if let Err(e) = ipgeo::runtime::modes::run_cli(&config, command).await {
                eprintln!("{}", e.format_colored());
                std::process::exit(1);
            }
            Ok(())
        }
        Mode::Unknown => {
            eprintln!("No execution mode available. Build with the `server` feature.");
            std::process::exit(1);
        }
    }
}
