//! The hybrid KEM engine

use rand::{CryptoRng, RngCore};
use tracing::{debug, warn};
use zkem_api::error::validate;
use zkem_api::{
    Ciphertext, HashAlgorithm, Kem, KemSizes, PublicKey, Result, ResultExt, SecretKey,
    SharedSecret,
};
use zkem_common::SecretVec;
use zkem_kem::{KemAlgorithm, KemInstance};

use super::combiner::NestedPrf;
use super::config::HybridConfig;

/// Hybrid KEM over an ordered, non-empty list of component KEMs
///
/// Immutable after construction; holds no secrets between calls, so one
/// instance may be shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HybridKem {
    components: Vec<KemInstance>,
    hash: HashAlgorithm,
    sizes: KemSizes,
}

impl HybridKem {
    /// Fails with `InvalidParameter` on an empty component list
    pub fn new(components: Vec<KemInstance>, hash: HashAlgorithm) -> Result<Self> {
        validate::parameter(
            !components.is_empty(),
            "HybridKem::new",
            "at least one component KEM is required",
        )?;
        let sizes = components
            .iter()
            .fold(KemSizes::EMPTY, |acc, c| acc.concat(c.sizes()));
        Ok(Self {
            components,
            hash,
            sizes: KemSizes {
                shared_secret: hash.output_size(),
                ..sizes
            },
        })
    }

    /// Instantiate each algorithm with `hash` and combine them in order
    pub fn from_algorithms(algorithms: &[KemAlgorithm], hash: HashAlgorithm) -> Result<Self> {
        let components = algorithms
            .iter()
            .map(|a| a.instantiate(hash))
            .collect::<Result<Vec<_>>>()?;
        Self::new(components, hash)
    }

    pub fn from_config(config: &HybridConfig) -> Result<Self> {
        Self::from_algorithms(&config.algorithms, config.hash)
    }

    pub fn components(&self) -> &[KemInstance] {
        &self.components
    }

    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    /// The configuration this combiner was built from
    pub fn config(&self) -> HybridConfig {
        HybridConfig::new(
            self.components.iter().map(KemInstance::algorithm).collect(),
            self.hash,
        )
    }
}

/// Split `bytes` into consecutive slices of the given lengths
///
/// The caller has checked that the lengths sum to `bytes.len()`.
fn split<'a>(bytes: &'a [u8], lengths: impl Iterator<Item = usize>) -> Vec<&'a [u8]> {
    let mut rest = bytes;
    lengths
        .map(|len| {
            let (head, tail) = rest.split_at(len);
            rest = tail;
            head
        })
        .collect()
}

impl Kem for HybridKem {
    fn name(&self) -> &'static str {
        "hybrid"
    }

    fn sizes(&self) -> KemSizes {
        self.sizes
    }

    fn keypair<R: CryptoRng + RngCore>(&self, rng: &mut R) -> Result<(PublicKey, SecretKey)> {
        let mut pk = Vec::with_capacity(self.sizes.public_key);
        let mut sk = SecretVec::with_capacity(self.sizes.secret_key);

        for (index, component) in self.components.iter().enumerate() {
            let (pk_i, sk_i) = component
                .keypair(rng)
                .inspect_err(|e| warn!(index, algorithm = component.name(), error = %e, "component keypair failed"))
                .for_component(index)?;
            pk.extend_from_slice(pk_i.as_bytes());
            sk.extend_from_slice(sk_i.as_bytes());
        }

        debug!(components = self.components.len(), pk_len = pk.len(), "hybrid keypair generated");
        Ok((PublicKey::new(pk), SecretKey::new(sk)))
    }

    fn encapsulate<R: CryptoRng + RngCore>(
        &self,
        rng: &mut R,
        public_key: &PublicKey,
    ) -> Result<(Ciphertext, SharedSecret)> {
        validate::length("HybridKem::encapsulate public key", public_key.len(), self.sizes.public_key)?;

        let pk_parts = split(
            public_key.as_bytes(),
            self.components.iter().map(|c| c.sizes().public_key),
        );
        let mut ct = Vec::with_capacity(self.sizes.ciphertext);
        let mut prf = NestedPrf::new(self.hash);

        for (index, (component, pk_i)) in self.components.iter().zip(pk_parts).enumerate() {
            let (ct_i, ss_i) = component
                .encapsulate(rng, &PublicKey::from_slice(pk_i))
                .inspect_err(|e| warn!(index, algorithm = component.name(), error = %e, "component encapsulation failed"))
                .for_component(index)?;
            ct.extend_from_slice(ct_i.as_bytes());
            prf.absorb(ss_i).for_component(index)?;
        }

        let ss = prf.finalize(&ct)?;
        debug!(components = self.components.len(), ct_len = ct.len(), "hybrid encapsulation complete");
        Ok((Ciphertext::new(ct), ss))
    }

    fn decapsulate(&self, secret_key: &SecretKey, ciphertext: &Ciphertext) -> Result<SharedSecret> {
        validate::length("HybridKem::decapsulate secret key", secret_key.len(), self.sizes.secret_key)?;
        validate::length("HybridKem::decapsulate ciphertext", ciphertext.len(), self.sizes.ciphertext)?;

        let sk_parts = split(
            secret_key.as_bytes(),
            self.components.iter().map(|c| c.sizes().secret_key),
        );
        let ct_parts = split(
            ciphertext.as_bytes(),
            self.components.iter().map(|c| c.sizes().ciphertext),
        );
        let mut prf = NestedPrf::new(self.hash);

        for (index, ((component, sk_i), ct_i)) in self
            .components
            .iter()
            .zip(sk_parts)
            .zip(ct_parts)
            .enumerate()
        {
            let ss_i = component
                .decapsulate(&SecretKey::from_slice(sk_i), &Ciphertext::from_slice(ct_i))
                .inspect_err(|e| warn!(index, algorithm = component.name(), error = %e, "component decapsulation failed"))
                .for_component(index)?;
            prf.absorb(ss_i).for_component(index)?;
        }

        // The ciphertext is folded exactly as received
        let ss = prf.finalize(ciphertext.as_bytes())?;
        debug!(components = self.components.len(), "hybrid decapsulation complete");
        Ok(ss)
    }
}
