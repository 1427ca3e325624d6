mod cli;

use folio::{config, server};
use folio_media::{MediaRequest, MediaResolver};

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

async fn start_server(
    host: Option<String>,
    port: Option<u16>,
    config_path: Option<&std::path::Path>,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;

    // Override host/port from CLI if specified
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }
    config::validate_config(&config)?;

    tracing::info!("Starting folio server");
    tracing::info!(
        "Server will listen on {}:{}",
        config.server.host,
        config.server.port
    );
    tracing::info!("Media served under {}", config.media.route_prefix);

    server::start_server(config).await
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "folio=trace,folio_media=trace,tower_http=debug".to_string()
        } else {
            "folio=debug,folio_media=debug,tower_http=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Start { host, port } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(start_server(host, port, cli.config.as_deref()))
        }
        Commands::Resolve { path, json } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(resolve_path(&path, json, cli.config.as_deref()))
        }
        Commands::Validate { file } => {
            let path = file.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("folio {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

async fn resolve_path(
    raw: &str,
    json: bool,
    config_path: Option<&std::path::Path>,
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;
    let resolver = MediaResolver::new(config.media.media_roots()?)
        .confine_paths(config.media.confine_paths);

    let request = MediaRequest::from_raw_path(raw)?;
    let probes = resolver.probe_all(&request).await?;
    let winner = probes.iter().find(|p| p.exists);

    if json {
        let candidates: Vec<_> = probes
            .iter()
            .map(|p| {
                serde_json::json!({
                    "root": p.root.as_str(),
                    "path": p.path,
                    "exists": p.exists,
                })
            })
            .collect();
        let output = serde_json::json!({
            "requested": request.logical_path(),
            "candidates": candidates,
            "resolved": winner.map(|p| &p.path),
            "content_type": winner.map(|p| folio_media::content_type_for_path(&p.path)),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("Requested: {}", request.logical_path());
        for probe in &probes {
            let mark = if probe.exists { "found" } else { "missing" };
            println!("  [{:<13}] {:<7} {}", probe.root.as_str(), mark, probe.path.display());
        }
        match winner {
            Some(p) => println!(
                "Resolved: {} ({})",
                p.path.display(),
                folio_media::content_type_for_path(&p.path)
            ),
            None => println!("Resolved: not found"),
        }
    }

    if winner.is_none() {
        anyhow::bail!("File not found under any media root");
    }

    Ok(())
}

fn validate_config(path: Option<&std::path::Path>) -> Result<()> {
    let config = config::load_config_or_default(path)?;
    config::validate_config(&config)?;

    println!("Configuration is valid");
    println!("  Server: {}:{}", config.server.host, config.server.port);
    println!("  Media prefix: {}", config.media.route_prefix);
    println!("  Cache-Control: {}", config.media.cache_control());
    println!(
        "  Path confinement: {}",
        if config.media.confine_paths { "on" } else { "off" }
    );
    for root in config.media.media_roots()?.iter() {
        println!("  Root ({}): {}", root.kind, root.base.display());
    }

    Ok(())
}
