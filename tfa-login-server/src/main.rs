use clap::Parser;
use std::error::Error;
use std::time::Duration;

use tfa_login_server::Server;

#[derive(Parser, Debug)]
#[command(name = "tfa-login-server")]
#[command(about = "Two-factor login development server", long_about = None)]
#[command(version)]
struct Args {
    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// HTTP port of the API
    #[arg(long, default_value = "8080")]
    port: u16,

    /// Simulated processing time of every API request, in milliseconds
    #[arg(long, default_value = "800")]
    delay_ms: u64,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    log::info!("Starting two-factor login server");
    log::info!("API on {}:{}", args.host, args.port);

    let server =
        Server::new(&args.host, args.port).with_delay(Duration::from_millis(args.delay_ms));
    server.print_banner();
    server.run()?;

    Ok(())
}
