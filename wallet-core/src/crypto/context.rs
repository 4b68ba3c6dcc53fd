// wallet-core/src/crypto/context.rs
//
// Curve Context - owned handle to the secp256k1 engine
//
// Vòng đời:
//   CurveContext::new()  →  Uninitialized
//   init()               →  Ready (sign + verify, blinded)
//   teardown()           →  Uninitialized
//
// Key operations borrow `&CurveContext`; `init`/`teardown` need `&mut`,
// so lifecycle changes cannot race with in-flight derivations.

use crate::crypto::keygen::{EntropySource, OsEntropy};
use crate::error::{CryptoError, WalletError, WalletResult};
use secp256k1::{All, Secp256k1};
use zeroize::Zeroizing;

pub struct CurveContext {
    engine: Option<Secp256k1<All>>,
}

impl std::fmt::Debug for CurveContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurveContext")
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

impl Default for CurveContext {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveContext {
    /// Uninitialized context; every key operation fails until [`init`](Self::init).
    pub const fn new() -> Self {
        Self { engine: None }
    }

    /// Shorthand for `new()` + `init()`.
    pub fn initialized() -> WalletResult<Self> {
        let mut ctx = Self::new();
        ctx.init()?;
        Ok(ctx)
    }

    /// Create and blind the engine using OS randomness.
    ///
    /// Calling this on an already-initialized context is a no-op success.
    pub fn init(&mut self) -> WalletResult<()> {
        self.init_with(&mut OsEntropy)
    }

    /// Same as [`init`](Self::init) with a caller-supplied entropy source.
    ///
    /// On failure the context stays uninitialized and the half-built engine
    /// is dropped before returning.
    pub fn init_with<E: EntropySource>(&mut self, entropy: &mut E) -> WalletResult<()> {
        if self.engine.is_some() {
            tracing::debug!("curve context already initialized");
            return Ok(());
        }

        let mut engine = Secp256k1::new();

        // Seed chỉ sống trong scope này, tự zeroize khi drop
        let mut seed = Zeroizing::new([0u8; 32]);
        entropy.fill(&mut seed[..])?;
        engine.seeded_randomize(&seed);

        self.engine = Some(engine);
        tracing::debug!("curve context initialized");
        Ok(())
    }

    /// Destroy the engine if present.
    pub fn teardown(&mut self) {
        if self.engine.take().is_some() {
            tracing::debug!("curve context torn down");
        }
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.engine.is_some()
    }

    /// Borrow the engine or fail with `ContextUninitialized`.
    pub(crate) fn engine(&self) -> WalletResult<&Secp256k1<All>> {
        self.engine
            .as_ref()
            .ok_or(WalletError::Crypto(CryptoError::ContextUninitialized))
    }
}
