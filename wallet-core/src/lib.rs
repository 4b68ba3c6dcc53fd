// wallet-core/src/lib.rs

//! Self-custodied key material for a single Bitcoin account.
//!
//! One call produces a random secp256k1 private key, its compressed public
//! key, and the encodings callers consume: hex, WIF and Base58Check P2PKH
//! addresses for mainnet and testnet.
//!
//! ```no_run
//! use btc_wallet_core::{api, crypto::CurveContext};
//!
//! let mut ctx = CurveContext::new();
//! api::init_core(&mut ctx)?;
//! let wallet = api::create_wallet(&ctx)?;
//! println!("{}", wallet.mainnet_address());
//! api::free_wallet(Some(wallet));
//! api::teardown_core(&mut ctx);
//! # Ok::<(), btc_wallet_core::WalletError>(())
//! ```

pub mod api;
pub mod chains;
pub mod config;
pub mod crypto;
pub mod encoding;
pub mod error;
pub mod wallet;

pub use chains::{Network, NetworkParams};
pub use config::WalletConfig;
pub use error::{CryptoError, EncodingError, WalletError, WalletResult};
pub use wallet::Wallet;
