use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "demo-cli")]
#[command(about = "Command-line client for the Mono/Flux demo server", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum UserMode {
    /// Delayed lookup
    Delayed,
    Immediate,
    /// Fails for negative ids
    Validated,
    Email,
    Summary,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a single user
    User {
        #[arg(allow_negative_numbers = true)]
        id: i32,
        #[arg(short, long, value_enum, default_value = "delayed")]
        mode: UserMode,
    },
    /// List products, optionally filtered
    Products {
        /// Only products priced at or below this value
        #[arg(long)]
        max_price: Option<f64>,
        /// Print items as they arrive instead of one array
        #[arg(long)]
        stream: bool,
    },
    /// Products whose quantity is below the threshold
    LowStock {
        #[arg(long)]
        threshold: Option<i32>,
    },
    /// Product names only
    Names {
        #[arg(long)]
        stream: bool,
    },
    /// Cheap products followed by mid-range ones, without repeats
    Combined,
    /// Application metadata
    Info,
    /// Mono vs Flux explanation
    Explanation,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let (path, streaming) = match cli.command {
        Commands::User { id, mode } => {
            let route = match mode {
                UserMode::Delayed => "user",
                UserMode::Immediate => "user-immediate",
                UserMode::Validated => "user-validated",
                UserMode::Email => "user-email",
                UserMode::Summary => "user-summary",
            };
            (format!("/api/mono/{}/{}", route, id), false)
        }
        Commands::Products { max_price, stream } => {
            let route = match (max_price.is_some(), stream) {
                (false, false) => "products",
                (false, true) => "products-stream",
                (true, false) => "products-by-price",
                (true, true) => "products-by-price-stream",
            };
            let query = max_price
                .map(|p| format!("?maxPrice={}", p))
                .unwrap_or_default();
            (format!("/api/flux/{}{}", route, query), stream)
        }
        Commands::LowStock { threshold } => {
            let query = threshold
                .map(|t| format!("?threshold={}", t))
                .unwrap_or_default();
            (format!("/api/flux/low-stock{}", query), false)
        }
        Commands::Names { stream } => {
            let route = if stream { "product-names-stream" } else { "product-names" };
            (format!("/api/flux/{}", route), stream)
        }
        Commands::Combined => ("/api/flux/products-combined".to_string(), false),
        Commands::Info => ("/api/info".to_string(), false),
        Commands::Explanation => ("/api/explanation".to_string(), false),
    };

    let res = client.get(format!("{}{}", base, path)).send().await?;
    if streaming {
        print_stream(res).await
    } else {
        print_response(res).await
    }
}

async fn print_stream(mut res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    if !res.status().is_success() {
        return print_response(res).await;
    }
    while let Some(chunk) = res.chunk().await? {
        print!("{}", String::from_utf8_lossy(&chunk));
    }
    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let text = res.text().await?;
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        eprintln!("Response: {}", text);
        return Ok(());
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
