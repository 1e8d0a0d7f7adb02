use super::*;
use rpsx_core::KEY_BITS;
use rpsx_core::KEY_BYTES;

/// Per-session HMAC key.
///
/// Generated fresh for every game from an [`Entropy`] source and kept by
/// the session until the result is revealed. `Debug` is redacted so the
/// key cannot leak through logs; `Display` renders uppercase hex and is
/// only meant for the reveal.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; KEY_BYTES]);

impl SecretKey {
    /// Draws [`KEY_BITS`] bits from `entropy`.
    pub fn generate(entropy: &mut impl Entropy) -> Result<Self, CommitError> {
        let mut bytes = [0u8; KEY_BYTES];
        entropy.fill(&mut bytes)?;
        log::debug!("generated {}-bit session key", KEY_BITS);
        Ok(Self(bytes))
    }
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// bytes isomorphism
impl From<[u8; KEY_BYTES]> for SecretKey {
    fn from(bytes: [u8; KEY_BYTES]) -> Self {
        Self(bytes)
    }
}

/// hex isomorphism, either case
impl std::str::FromStr for SecretKey {
    type Err = CommitError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; KEY_BYTES];
        hex::decode_to_slice(s.trim(), &mut bytes)
            .map_err(|e| CommitError::InvalidKey(e.to_string()))?;
        Ok(Self(bytes))
    }
}

impl std::fmt::Display for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecretKey(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counting(u8);
    impl Entropy for Counting {
        fn fill(&mut self, bytes: &mut [u8]) -> Result<(), CommitError> {
            for b in bytes.iter_mut() {
                *b = self.0;
                self.0 = self.0.wrapping_add(1);
            }
            Ok(())
        }
    }

    struct Unavailable;
    impl Entropy for Unavailable {
        fn fill(&mut self, _: &mut [u8]) -> Result<(), CommitError> {
            Err(CommitError::EntropySourceUnavailable("offline".into()))
        }
    }

    #[test]
    fn generates_full_width() {
        let key = SecretKey::generate(&mut Counting(0)).unwrap();
        assert_eq!(key.as_bytes().len(), 32);
        assert_eq!(key.as_bytes()[31], 31);
    }

    #[test]
    fn unavailable_source_is_fatal() {
        assert_eq!(
            SecretKey::generate(&mut Unavailable),
            Err(CommitError::EntropySourceUnavailable("offline".into()))
        );
    }

    #[test]
    fn os_keys_differ() {
        let a = SecretKey::generate(&mut Os).unwrap();
        let b = SecretKey::generate(&mut Os).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn displays_uppercase_hex() {
        let key = SecretKey::from([0xab; 32]);
        assert_eq!(key.to_string(), "AB".repeat(32));
    }

    #[test]
    fn parses_revealed_hex() {
        let key = SecretKey::generate(&mut Counting(7)).unwrap();
        let shown = key.to_string();
        assert_eq!(shown.parse::<SecretKey>(), Ok(key.clone()));
        assert_eq!(shown.to_lowercase().parse::<SecretKey>(), Ok(key));
    }

    #[test]
    fn rejects_bad_hex() {
        assert!(matches!("zz".parse::<SecretKey>(), Err(CommitError::InvalidKey(_))));
        assert!(matches!("AB".repeat(31).parse::<SecretKey>(), Err(CommitError::InvalidKey(_))));
    }

    #[test]
    fn debug_is_redacted() {
        let key = SecretKey::from([0xab; 32]);
        assert!(!format!("{:?}", key).contains("AB"));
        assert!(!format!("{:?}", key).contains("ab"));
    }
}
