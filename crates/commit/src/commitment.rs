use super::*;
use hmac::Hmac;
use hmac::Mac;
use rpsx_core::DIGEST_BYTES;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 of a move name, published before the opponent moves.
///
/// ```text
/// commitment = HMAC-SHA256(key, utf8(move))
/// ```
///
/// Binding follows from the MAC: without the key nobody can tell which
/// move was committed, and once the key is out nobody can find a second
/// move (or a second key) with the same tag.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Commitment([u8; DIGEST_BYTES]);

impl Commitment {
    /// Commits to `name` under `key`. Same inputs, same commitment.
    pub fn commit(key: &SecretKey, name: &str) -> Self {
        Self(digest(key.as_bytes(), name.as_bytes()))
    }
    /// Checks a revealed `(key, name)` pair against this commitment.
    ///
    /// The comparison runs in constant time.
    pub fn verify(&self, key: &SecretKey, name: &str) -> bool {
        let mut mac = keyed(key.as_bytes());
        mac.update(name.as_bytes());
        mac.verify_slice(&self.0).is_ok()
    }
}

fn keyed(key: &[u8]) -> HmacSha256 {
    HmacSha256::new_from_slice(key).expect("HMAC accepts keys of any size")
}

fn digest(key: &[u8], message: &[u8]) -> [u8; DIGEST_BYTES] {
    let mut mac = keyed(key);
    mac.update(message);
    let mut output = [0u8; DIGEST_BYTES];
    output.copy_from_slice(&mac.finalize().into_bytes());
    output
}

/// hex isomorphism, either case
impl std::str::FromStr for Commitment {
    type Err = CommitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; DIGEST_BYTES];
        hex::decode_to_slice(s.trim(), &mut bytes)
            .map_err(|e| CommitError::InvalidCommitment(e.to_string()))?;
        Ok(Self(bytes))
    }
}

impl std::fmt::Display for Commitment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
