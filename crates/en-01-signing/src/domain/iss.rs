//! # Winternitz One-Time Signatures
//!
//! Key derivation chain for one address:
//!
//! ```text
//! seed + index --hash--> subseed --squeeze--> private key (security x 6561)
//!   each 243-trit key block --hash x26--> chain end
//!   27 chain ends --hash--> fragment digest
//!   fragment digests --hash--> address
//! ```
//!
//! Signing walks block `j` of fragment `f` `13 - n` steps along its chain,
//! where `n` is value `j` of normalized bundle chunk `f mod 3`. A verifier
//! walks the remaining `n + 13` steps and must land on the address.
//!
//! Every function is generic over the sponge; the sponge is reset before
//! each use, so callers may pass one instance through the whole chain.

use crate::domain::entities::{PrivateKey, Signature, Subseed};
use crate::domain::errors::SigningError;
use shared_crypto::Sponge;
use shared_types::{
    add_assign, Hash, NormalizedHash, SecurityLevel, Seed, Trit, FRAGMENT_TRIT_LENGTH,
    HASH_TRIT_LENGTH, NORMALIZED_MAX,
};
use zeroize::Zeroizing;

/// Steps from a private key block to its public chain end.
pub const CHAIN_LENGTH: usize = 2 * NORMALIZED_MAX as usize;

/// Hash one 243-trit block in place, `times` times.
fn chain<S: Sponge>(sponge: &mut S, block: &mut [Trit], times: usize) -> Result<(), SigningError> {
    for _ in 0..times {
        sponge.reset();
        sponge.absorb(block)?;
        sponge.squeeze(block)?;
    }
    Ok(())
}

/// `hash(seed + index)`, the index added in balanced ternary with wrap-around.
pub fn subseed<S: Sponge>(sponge: &mut S, seed: &Seed, index: u64) -> Result<Subseed, SigningError> {
    let mut trits = Zeroizing::new(*seed.as_trits());
    add_assign(trits.as_mut_slice(), index);

    let mut out = Zeroizing::new([0 as Trit; HASH_TRIT_LENGTH]);
    sponge.reset();
    sponge.absorb(trits.as_slice())?;
    sponge.squeeze(out.as_mut_slice())?;
    Ok(Subseed::new(*out))
}

/// Squeeze `security * 6561` key trits from a subseed.
pub fn key<S: Sponge>(
    sponge: &mut S,
    subseed: &Subseed,
    security: SecurityLevel,
) -> Result<PrivateKey, SigningError> {
    let mut trits = Zeroizing::new(vec![0 as Trit; security.key_length()]);
    sponge.reset();
    sponge.absorb(subseed.as_trits())?;
    sponge.squeeze(&mut trits)?;
    Ok(PrivateKey::new(std::mem::take(&mut *trits), security))
}

/// One 243-trit digest per fragment: every block walked to the end of its
/// chain, then the 27 chain ends hashed together.
pub fn digests<S: Sponge>(sponge: &mut S, key: &PrivateKey) -> Result<Vec<Trit>, SigningError> {
    let security = key.security();
    let mut out = vec![0 as Trit; security.digests_length()];

    for (fragment_index, digest) in out.chunks_exact_mut(HASH_TRIT_LENGTH).enumerate() {
        let mut buffer = Zeroizing::new(key.fragment(fragment_index).to_vec());
        for block in buffer.chunks_exact_mut(HASH_TRIT_LENGTH) {
            chain(sponge, block, CHAIN_LENGTH)?;
        }

        sponge.reset();
        sponge.absorb(&buffer)?;
        sponge.squeeze(digest)?;
    }

    Ok(out)
}

/// Hash of the concatenated fragment digests.
pub fn address<S: Sponge>(sponge: &mut S, digests: &[Trit]) -> Result<Hash, SigningError> {
    Ok(sponge.digest(digests)?)
}

/// Address for `seed` at `index`.
pub fn generate_address<S: Sponge>(
    sponge: &mut S,
    seed: &Seed,
    index: u64,
    security: SecurityLevel,
) -> Result<Hash, SigningError> {
    let subseed = subseed(sponge, seed, index)?;
    let key = key(sponge, &subseed, security)?;
    let digests = Zeroizing::new(digests(sponge, &key)?);
    address(sponge, &digests)
}

/// Sign a bundle hash with a private key.
pub fn sign<S: Sponge>(
    sponge: &mut S,
    key: &PrivateKey,
    bundle: &Hash,
) -> Result<Signature, SigningError> {
    let normalized = NormalizedHash::from_hash(bundle);
    let mut trits = Zeroizing::new(key.as_trits().to_vec());

    for (fragment_index, fragment) in trits.chunks_exact_mut(FRAGMENT_TRIT_LENGTH).enumerate() {
        let values = normalized.fragment(fragment_index);
        for (block, value) in fragment.chunks_exact_mut(HASH_TRIT_LENGTH).zip(values) {
            chain(sponge, block, (NORMALIZED_MAX - value) as usize)?;
        }
    }

    Ok(Signature::from_vec(std::mem::take(&mut *trits)))
}

/// Signature for `seed` at `index` over `bundle`.
pub fn generate_signature<S: Sponge>(
    sponge: &mut S,
    seed: &Seed,
    index: u64,
    security: SecurityLevel,
    bundle: &Hash,
) -> Result<Signature, SigningError> {
    let subseed = subseed(sponge, seed, index)?;
    let key = key(sponge, &subseed, security)?;
    sign(sponge, &key, bundle)
}

/// Finish every signature chain and hash each fragment back to its digest.
pub fn digests_from_signature<S: Sponge>(
    sponge: &mut S,
    signature: &Signature,
    bundle: &Hash,
) -> Result<Vec<Trit>, SigningError> {
    let normalized = NormalizedHash::from_hash(bundle);
    let mut out = Vec::with_capacity(signature.security().digests_length());

    for (fragment_index, fragment) in signature.fragments().enumerate() {
        let values = normalized.fragment(fragment_index);
        let mut buffer = fragment.to_vec();
        for (block, value) in buffer.chunks_exact_mut(HASH_TRIT_LENGTH).zip(values) {
            chain(sponge, block, (value + NORMALIZED_MAX) as usize)?;
        }

        let digest = sponge.digest(&buffer)?;
        out.extend_from_slice(digest.as_trits());
    }

    Ok(out)
}

/// True when `signature` over `bundle` was produced by the key behind `address`.
pub fn verify<S: Sponge>(
    sponge: &mut S,
    address: &Hash,
    signature: &Signature,
    bundle: &Hash,
) -> Result<bool, SigningError> {
    let digests = digests_from_signature(sponge, signature, bundle)?;
    let recovered = sponge.digest(&digests)?;
    Ok(recovered == *address)
}
