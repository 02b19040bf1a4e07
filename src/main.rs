use std::time::Duration;

use clap::Parser;
use ipinfo::{providers::DEFAULT_ENDPOINT, TaobaoProvider};
use log::debug;

#[derive(Debug, Parser)]
#[clap(
    version,
    about = "Looks up the location and ISP of an IP address through the ip.taobao.com API"
)]
struct Cli {
    #[clap(help = "IP address to look up")]
    ip: String,
    #[clap(
        long,
        env,
        default_value = DEFAULT_ENDPOINT,
        help = "URL prefix of the lookup API, the IP is appended to it"
    )]
    endpoint: String,
    #[clap(long, env, help = "Request timeout in seconds")]
    timeout: Option<u64>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "ipinfo=info");
    }
    env_logger::init();

    let cli = Cli::parse();

    let mut client = reqwest::Client::builder();
    if let Some(timeout) = cli.timeout {
        client = client.timeout(Duration::from_secs(timeout));
    }
    let provider = TaobaoProvider::with_client(client.build()?, cli.endpoint);
    debug!("Using endpoint {}", provider.endpoint());

    let record = provider.lookup(&cli.ip).await?;
    println!("{}", record);

    Ok(())
}
