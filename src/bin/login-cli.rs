use clap::Parser;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "login-cli")]
#[command(about = "Try a login against a running login-service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[arg(short = 'n', long)]
    username: String,

    #[arg(short, long, env = "LOGIN_CLI_PASSWORD")]
    password: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/login", cli.url.trim_end_matches('/')))
        .json(&json!({ "username": cli.username, "password": cli.password }))
        .send()
        .await?;

    let status = res.status();
    println!("Status: {}", status);

    let text = res.text().await?;
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }

    if !status.is_success() {
        std::process::exit(1);
    }
    Ok(())
}
