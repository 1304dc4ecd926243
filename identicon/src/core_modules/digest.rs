// THEORY:
// The `digest` module is the first stage of the identicon transform. It turns an
// arbitrary byte string into a fixed 16-byte fingerprint. Every later stage reads
// only this fingerprint, never the original input, so the whole identicon is a
// pure function of it.
//
// MD5 is used for its stable, well-known mapping and its 16-byte width, not for
// its security properties. Nothing downstream depends on collision resistance.

pub mod digest {
    use md5::{Digest as _, Md5};

    pub type Byte = u8;

    /// Width of the fingerprint in bytes.
    pub const DIGEST_LEN: usize = 16;

    /// A fixed-length fingerprint of the input bytes.
    pub type Digest = [Byte; DIGEST_LEN];

    /// Hashes `input` into a 16-byte digest. Total over all inputs, including empty.
    pub fn digest(input: &[Byte]) -> Digest {
        let hash = Md5::digest(input);
        let mut digest = [0u8; DIGEST_LEN];
        digest.copy_from_slice(&hash);
        digest
    }

    /// Lowercase hexadecimal form of a digest.
    pub fn to_hex(digest: &Digest) -> String {
        hex::encode(digest)
    }
}
