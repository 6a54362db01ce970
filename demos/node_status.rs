//! Print a node's identity, on-chain balance and channels.
//!
//! Reads `LND_HOST`, `LND_MACAROON` (hex, or a path to `admin.macaroon`),
//! `LND_REST_PORT` and `LND_TLS_CERT` (path to `tls.cert`) from the
//! environment or a `.env` file.
//!
//! Run: RUST_LOG=lnd_rest_sdk=debug cargo run --example node_status

use std::env;
use std::path::Path;

use lnd_rest_sdk::prelude::*;
use tracing_subscriber::EnvFilter;

fn load_macaroon(value: &str) -> Result<Macaroon, Box<dyn std::error::Error>> {
    if Path::new(value).is_file() {
        Ok(Macaroon::from_bytes(&std::fs::read(value)?))
    } else {
        Ok(Macaroon::from_hex(value))
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let host = env::var("LND_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let macaroon = load_macaroon(&env::var("LND_MACAROON")?)?;

    let mut builder = LndClient::builder(host, macaroon);
    if let Ok(port) = env::var("LND_REST_PORT") {
        builder = builder.port(port.parse()?);
    }
    if let Ok(cert_path) = env::var("LND_TLS_CERT") {
        builder = builder.tls_certificate_pem(std::fs::read(cert_path)?);
    }
    let client = builder.build()?;

    let info = client.info().get().await?;
    println!("{} ({})", info.alias, info.identity_pubkey);
    println!(
        "  version {}  height {}  network {}",
        info.version,
        info.block_height,
        info.network().unwrap_or("unknown")
    );
    println!(
        "  synced to chain: {}  synced to graph: {}",
        info.synced_to_chain, info.synced_to_graph
    );

    let balance = client.wallet().balance().await?;
    println!(
        "\nWallet: {} sat confirmed, {} sat unconfirmed, {} sat locked",
        balance.confirmed, balance.unconfirmed, balance.locked
    );

    let channels = client.channels().list().await?;
    println!("\nChannels ({}):", channels.len());
    for ch in &channels {
        println!(
            "  {}  {} local / {} remote  {}",
            ch.channel_point,
            ch.local_balance,
            ch.remote_balance,
            if ch.active { "active" } else { "inactive" }
        );
    }

    match client.peers().list().await {
        Ok(peers) => println!("\nPeers: {}", peers.len()),
        Err(e) => eprintln!("\nCould not list peers: {}", e),
    }

    Ok(())
}
