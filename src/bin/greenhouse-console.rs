// Terminal dashboard for the greenhouse telemetry service
use clap::Parser;
use greenhouse_telemetry::client::api_client::ApiClient;
use greenhouse_telemetry::client::dashboard::Dashboard;
use greenhouse_telemetry::init_tracing;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Parser)]
#[command(name = "greenhouse-console", about = "Terminal dashboard for simulated sensor readings")]
struct Args {
    /// Base URL of the telemetry service
    #[arg(long, default_value = "http://localhost:3002")]
    server: String,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log: String,
}

const HELP: &str = "commands: [g]enerate  [r]efresh  [+] increase  [-] decrease  [q]uit";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(&args.log);

    let mut dashboard = Dashboard::new(ApiClient::new(args.server));
    dashboard.initialize().await;
    println!("{}", dashboard.state.render());
    println!("{}", HELP);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "g" => dashboard.generate().await,
            "r" => dashboard.refresh().await,
            "+" => dashboard.state.increase(),
            "-" => dashboard.state.decrease(),
            "q" => break,
            "" => continue,
            _ => {
                println!("{}", HELP);
                continue;
            }
        }
        println!("{}", dashboard.state.render());
    }

    Ok(())
}
