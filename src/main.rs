use clap::Parser;
use geo_lookup::utils::{logger, validation::Validate};
use geo_lookup::{build_handler, CliConfig, GeocodeQuery};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting geo-lookup CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 載入並驗證配置
    let config = match cli.resolve().and_then(|config| config.validate().map(|_| config)) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(
                "❌ Configuration failed: {} (Category: {:?})",
                e,
                e.category()
            );
            eprintln!("❌ {}", e);
            std::process::exit(2);
        }
    };

    let handler = build_handler(&config);
    if handler.latency_enabled() {
        tracing::info!("⏳ Latency call enabled: {}", config.latency.url);
    }
    let query = GeocodeQuery::new(cli.city, cli.state);

    let response = handler.handle(&query).await;

    println!("HTTP {}", response.status);
    for (name, value) in &response.headers {
        println!("{}: {}", name, value);
    }
    println!("{}", response.body);

    if !response.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
