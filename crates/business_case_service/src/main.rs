use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use business_case::BusinessCaseRequest;
use business_case_service::config::ServiceConfig;
use business_case_service::generate::{generate, GenerateContext};
use business_case_service::llm_client::{LlmClient, OpenAiClient};
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};

#[derive(Debug, Parser)]
#[command(name = "business_case_service")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Serve POST /generate over HTTP.
    Serve {
        #[arg(long, default_value_t = 8000)]
        port: u16,
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
    },
    /// Generate once from a request JSON file and print the response.
    Generate {
        #[arg(long)]
        request: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    business_case_service::logging::init_tracing();
    let cli = Cli::parse();

    let cfg = match ServiceConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("config error: {e}");
            std::process::exit(1);
        }
    };
    let client = match OpenAiClient::from_config(&cfg) {
        Ok(c) => c,
        Err(e) => {
            error!("client error: {e}");
            std::process::exit(1);
        }
    };
    info!(model = %cfg.model, base_url = %cfg.base_url, "completion client ready");
    let ctx = GenerateContext::with_settings(LlmClient::OpenAi(client), cfg.generation.clone());

    match cli.cmd {
        Cmd::Serve { port, host } => {
            let ip: IpAddr = host.parse().unwrap_or_else(|_| {
                warn!("invalid host {host:?}, binding 0.0.0.0");
                IpAddr::V4(Ipv4Addr::new(0, 0, 0, 0))
            });
            let addr = SocketAddr::new(ip, port);
            if let Err(e) = business_case_service::server::serve(addr, ctx).await {
                error!("server error: {e}");
                std::process::exit(1);
            }
        }
        Cmd::Generate { request } => {
            let req = match read_request(&request) {
                Ok(req) => req,
                Err(e) => {
                    error!("invalid request file {}: {e}", request.display());
                    std::process::exit(1);
                }
            };
            match generate(&req, &ctx).await {
                Ok(resp) => match serde_json::to_string_pretty(&resp) {
                    Ok(out) => println!("{out}"),
                    Err(e) => {
                        error!("encode error: {e}");
                        std::process::exit(1);
                    }
                },
                Err(e) => {
                    error!("{e}");
                    std::process::exit(1);
                }
            }
        }
    }
}

fn read_request(path: &Path) -> Result<BusinessCaseRequest, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
