use clap::Parser;
use dbxchat::run_and_print;
use dotenv::dotenv;

/// dbxchat - one-shot chat completion against a Databricks serving endpoint
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Override the user message from the config
    #[arg(short, long)]
    prompt: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables from `.env` file into std::env (optional)
    dotenv().ok();

    // Parse command line arguments
    let args = Args::parse();

    // Load config, init logging, send the request and print the completion
    run_and_print(&args.config, args.prompt.as_deref()).await
}
