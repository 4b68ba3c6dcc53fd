//! btc-wallet: generate or import a single-account Bitcoin key pair.
//!
//! Secrets go to stdout only; logs go to stderr (`RUST_LOG` controls verbosity).

use btc_wallet_core::{api, crypto::CurveContext, Wallet, WalletConfig};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "btc-wallet")]
#[command(about = "Generate self-custodied Bitcoin keys", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate new wallets
    Generate {
        /// How many wallets to produce
        #[arg(long, short = 'c', default_value_t = 1)]
        count: usize,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,

        /// Rejection-sampling bound for key generation
        #[arg(long)]
        max_keygen_attempts: Option<u32>,
    },
    /// Rebuild a wallet from a compressed WIF
    Import {
        wif: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "btc_wallet_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut ctx = CurveContext::new();
    api::init_core(&mut ctx)
        .map_err(|e| anyhow::anyhow!("Failed to initialize curve context: {}", e))?;

    let result = run(&ctx, cli.command);

    api::teardown_core(&mut ctx);
    result
}

fn run(ctx: &CurveContext, command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Generate {
            count,
            json,
            max_keygen_attempts,
        } => {
            let mut config = WalletConfig::default();
            if let Some(attempts) = max_keygen_attempts {
                config.max_keygen_attempts = attempts;
            }

            info!(count, "generating wallets");
            for _ in 0..count {
                let wallet = Wallet::create_with_config(ctx, &config)?;
                print_wallet(&wallet, json)?;
                api::free_wallet(Some(wallet));
            }
        }
        Commands::Import { wif, json } => {
            let wallet = api::import_wallet(ctx, wif.trim())?;
            print_wallet(&wallet, json)?;
        }
    }
    Ok(())
}

fn print_wallet(wallet: &Wallet, json: bool) -> anyhow::Result<()> {
    let fields = api::wallet_fields(wallet);
    if json {
        println!("{}", serde_json::to_string(&fields)?);
        return Ok(());
    }

    println!("Mainnet address: {}", fields.mainnet_address);
    println!("Testnet address: {}", fields.testnet_address);
    println!("Public key:      {}", fields.public_key_hex);
    println!("Private key:     {}", fields.private_key_hex);
    println!("WIF:             {}", fields.wif);
    println!();
    Ok(())
}
