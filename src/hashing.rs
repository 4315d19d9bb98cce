/*!

# Fingerprinting Hidden State

An opaque type gives callers no way to look at its representation, which is the point. Yet
callers sometimes need to know whether two values hold the same state, or whether a value
changed since they last saw it, without the type exposing its fields or committing to a
stable `Hash` output.

A 128-bit content fingerprint answers both questions. The type hashes its private state into
an [`Xxh3Hasher128`] and hands back a `u128`. Nothing about the representation leaks
through the number, and the representation can change freely as long as equal states still
hash equally within one build.

The backing hash function is chosen here and nowhere else. Everything else in the crate calls
[`fingerprint`], so switching to a different 128-bit hash touches only this module.

Fingerprints are not stable across versions of this crate and must not be persisted.

*/

use std::hash::{Hash, Hasher};

use twox_hash::XxHash3_128;

/// A `Hasher` that keeps the full 128-bit XXH3 state, so `Hash` impls can feed a fingerprint.
pub struct Xxh3Hasher128(XxHash3_128);

impl Default for Xxh3Hasher128 {
    fn default() -> Self {
        Self(XxHash3_128::new())
    }
}

impl Hasher for Xxh3Hasher128 {
    fn write(&mut self, bytes: &[u8]) {
        self.0.write(bytes);
    }

    // `Hasher` wants a u64. Fingerprints read the digest through `finish_u128` and never see
    // this truncation; the low half of an XXH3-128 digest is itself a well-mixed 64-bit hash.
    fn finish(&self) -> u64 {
        self.0.finish_128() as u64
    }
}

impl Xxh3Hasher128 {
    /// Consumes the hasher and returns the whole digest.
    pub fn finish_u128(self) -> u128 {
        self.0.finish_128()
    }
}

/// The 128-bit content fingerprint of `value`.
pub fn fingerprint<T: Hash + ?Sized>(value: &T) -> u128 {
    let mut h = Xxh3Hasher128::default();
    value.hash(&mut h);
    h.finish_u128()
}
