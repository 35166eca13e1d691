//! EN-CLI: Entangled Engine command line tool
//!
//! Thin front-end over [`entangled_engine::Engine`]. Seeds are read from
//! `--seed` or `ENTANGLED_SEED` and wiped after use.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use entangled_engine::{Engine, EngineConfig, SpongeKind};
use tracing::info;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

/// EN-CLI: Entangled Engine command line tool
#[derive(Parser, Debug)]
#[command(name = "en-cli")]
#[command(about = "Ternary addresses, signatures, proof of work and bundle mining")]
struct Args {
    /// Sponge for key derivation (kerl, curl-p27, curl-p81)
    #[arg(long, global = true)]
    sponge: Option<SpongeKind>,

    /// Worker threads for proof of work (0 = all cores)
    #[arg(long, global = true)]
    threads: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive addresses
    Address {
        /// Seed trytes (defaults to ENTANGLED_SEED)
        #[arg(long)]
        seed: Option<String>,
        #[arg(short, long, default_value_t = 0)]
        index: u64,
        #[arg(short, long, default_value_t = 1)]
        count: usize,
        #[arg(short, long)]
        security: Option<u8>,
    },
    /// Sign a bundle hash
    Sign {
        #[arg(long)]
        seed: Option<String>,
        #[arg(short, long, default_value_t = 0)]
        index: u64,
        #[arg(short, long)]
        security: Option<u8>,
        /// Bundle hash trytes
        bundle: String,
    },
    /// Verify a signature
    Verify {
        address: String,
        bundle: String,
        /// Signature trytes
        signature: String,
    },
    /// Find a nonce for a transaction
    Pow {
        /// Transaction trytes
        transaction: String,
        #[arg(short, long)]
        mwm: Option<usize>,
    },
    /// Attach a bundle (one transaction per line in FILE)
    PowBundle {
        file: PathBuf,
        #[arg(long)]
        trunk: String,
        #[arg(long)]
        branch: String,
        #[arg(short, long)]
        mwm: Option<usize>,
    },
    /// Curl-P-81 transaction hash
    Hash {
        transaction: String,
    },
    /// Mine a secure bundle index
    Mine {
        /// Bundle essence trytes
        essence: String,
        /// Already signed bundle hashes for the same key
        #[arg(long = "signed")]
        signed: Vec<String>,
        #[arg(short, long, default_value_t = 1_000)]
        count: u64,
        #[arg(short, long)]
        security: Option<u8>,
        #[arg(long)]
        nprocs: Option<usize>,
        /// Accept the best index with at most this many extremes
        #[arg(long)]
        threshold: Option<usize>,
    },
}

fn read_seed(seed: Option<String>) -> Result<Zeroizing<String>> {
    match seed {
        Some(seed) => Ok(Zeroizing::new(seed)),
        None => std::env::var("ENTANGLED_SEED")
            .map(Zeroizing::new)
            .context("no --seed given and ENTANGLED_SEED is not set"),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = EngineConfig::from_env();
    if let Some(sponge) = args.sponge {
        config.signing.sponge = sponge;
    }
    if let Some(threads) = args.threads {
        config.pow.threads = threads;
    }
    let engine = Engine::new(config)?;
    let defaults = engine.config().clone();

    match args.command {
        Command::Address {
            seed,
            index,
            count,
            security,
        } => {
            let seed = read_seed(seed)?;
            let security = security.unwrap_or(defaults.signing.security.as_u8());
            let addresses = engine.gen_addresses_trytes(&seed, index, count, security)?;
            for (i, address) in (index..).zip(addresses) {
                println!("{i}\t{address}");
            }
        }
        Command::Sign {
            seed,
            index,
            security,
            bundle,
        } => {
            let seed = read_seed(seed)?;
            let security = security.unwrap_or(defaults.signing.security.as_u8());
            println!("{}", engine.gen_signature_trytes(&seed, index, security, &bundle)?);
        }
        Command::Verify {
            address,
            bundle,
            signature,
        } => {
            let valid = engine.verify_signature(&address, &signature, &bundle)?;
            println!("{valid}");
            if !valid {
                std::process::exit(1);
            }
        }
        Command::Pow { transaction, mwm } => {
            let mwm = mwm.unwrap_or(defaults.pow.mwm);
            println!("{}", engine.pow_trytes(&transaction, mwm)?);
        }
        Command::PowBundle {
            file,
            trunk,
            branch,
            mwm,
        } => {
            let contents = fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            let transactions: Vec<&str> = contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .collect();
            if transactions.is_empty() {
                bail!("{} holds no transactions", file.display());
            }
            let mwm = mwm.unwrap_or(defaults.pow.mwm);
            for attached in engine.pow_bundle(&transactions, &trunk, &branch, mwm)? {
                println!("{attached}");
            }
        }
        Command::Hash { transaction } => {
            println!("{}", engine.transaction_hash(&transaction)?);
        }
        Command::Mine {
            essence,
            signed,
            count,
            security,
            nprocs,
            threshold,
        } => {
            let mut normalized_max = entangled_engine::NormalizedHash::floor();
            for bundle in &signed {
                normalized_max = normalized_max.max_with(&engine.normalize_bundle(bundle)?);
            }
            let essence = engine.trytes_to_trits(&essence)?;

            let mined = if security.is_none() && nprocs.is_none() && threshold.is_none() {
                engine.bundle_miner_default(normalized_max.values(), &essence, count)?
            } else {
                engine.bundle_miner(
                    normalized_max.values(),
                    security.unwrap_or(defaults.mining.security.as_u8()),
                    &essence,
                    essence.len(),
                    count,
                    nprocs.unwrap_or(defaults.mining.nprocs),
                    threshold.unwrap_or(defaults.mining.threshold),
                    threshold.is_none() && defaults.mining.fully_secure,
                )?
            };
            info!(index = mined.index, optimal = mined.optimal, "mined");
            println!(
                "{}",
                serde_json::json!({
                    "index": mined.index,
                    "optimal": mined.optimal,
                    "extremes": mined.extremes,
                    "forgery_probability": mined.forgery_probability,
                })
            );
        }
    }

    Ok(())
}
