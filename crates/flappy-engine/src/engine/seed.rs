use std::{fmt, str::FromStr};

use rand::{
    Rng, SeedableRng as _,
    distr::{Distribution, StandardUniform},
};
use rand_pcg::Pcg32;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ParseSeedError;

/// The random source of a session.
///
/// Pipe gaps, spawn spacing, bird spawn heights and colors, perceptron weights
/// and fallback decisions are all drawn from one generator of this type.
pub type GameRng = Pcg32;

/// Seed for a deterministic session.
///
/// A 128-bit seed that initializes the [`GameRng`] of a session. Two sessions
/// built from the same seed and configuration, fed the same inputs, produce the
/// same runs frame for frame.
///
/// Seeds are written as 32 lowercase hex digits. Parsing also accepts upper
/// case hex digits and plain decimal numbers (see [`GameSeed::from_u64`]).
///
/// # Example
///
/// ```
/// use flappy_engine::GameSeed;
/// use rand::Rng as _;
///
/// let seed: GameSeed = rand::rng().random();
/// let parsed: GameSeed = seed.to_string().parse().unwrap();
/// assert_eq!(seed, parsed);
///
/// let small: GameSeed = "23".parse().unwrap();
/// assert_eq!(small, GameSeed::from_u64(23));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSeed([u8; 16]);

impl GameSeed {
    /// Builds a seed from a small number, big-endian in the low bytes.
    #[must_use]
    pub fn from_u64(value: u64) -> Self {
        Self(u128::from(value).to_be_bytes())
    }

    /// Creates a fresh generator seeded with this seed.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        Pcg32::from_seed(self.0)
    }
}

impl fmt::Display for GameSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:032x}", u128::from_be_bytes(self.0))
    }
}

impl FromStr for GameSeed {
    type Err = ParseSeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseSeedError {
            input: s.to_owned(),
        };
        if s.len() == 32 {
            let num = u128::from_str_radix(s, 16).map_err(|_| err())?;
            return Ok(Self(num.to_be_bytes()));
        }
        s.parse::<u64>().map(Self::from_u64).map_err(|_| err())
    }
}

impl Serialize for GameSeed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for GameSeed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        if hex_str.len() != 32 {
            return Err(serde::de::Error::custom(format!(
                "invalid hex: expected 32 characters, got {}",
                hex_str.len()
            )));
        }
        hex_str
            .parse::<Self>()
            .map_err(|e| serde::de::Error::custom(format!("invalid hex: {e}")))
    }
}

impl Distribution<GameSeed> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GameSeed {
        let mut seed = [0; 16];
        rng.fill(&mut seed);
        GameSeed(seed)
    }
}

#[cfg(test)]
mod tests {
    use rand::RngCore as _;

    use super::*;

    #[test]
    fn test_known_value_small_number() {
        let seed = GameSeed::from_u64(23);
        assert_eq!(seed.to_string(), "00000000000000000000000000000017");
        let serialized = serde_json::to_string(&seed).unwrap();
        assert_eq!(serialized, "\"00000000000000000000000000000017\"");
    }

    #[test]
    fn test_serde_roundtrip_preserves_stream() {
        let seed: GameSeed = rand::rng().random();
        let serialized = serde_json::to_string(&seed).unwrap();
        let deserialized: GameSeed = serde_json::from_str(&serialized).unwrap();

        let mut a = seed.rng();
        let mut b = deserialized.rng();
        for _ in 0..20 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn test_parse_accepts_upper_case_hex() {
        let seed: GameSeed = "0123456789ABCDEFFEDCBA9876543210".parse().unwrap();
        assert_eq!(seed.to_string(), "0123456789abcdeffedcba9876543210");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("not a seed".parse::<GameSeed>().is_err());
        assert!("ghijklmnopqrstuvwxyzghijklmnopqr".parse::<GameSeed>().is_err());
        let err = "-1".parse::<GameSeed>().unwrap_err();
        assert!(err.to_string().contains("\"-1\""));
    }

    #[test]
    fn test_deserialize_requires_hex() {
        let result: Result<GameSeed, _> = serde_json::from_str("\"23\"");
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("invalid hex"));
    }

    #[test]
    fn test_deserialize_agrees_with_parse() {
        let text = "0123456789ABCDEFFEDCBA9876543210";
        let deserialized: GameSeed = serde_json::from_str(&format!("\"{text}\"")).unwrap();
        assert_eq!(deserialized, text.parse::<GameSeed>().unwrap());

        let garbage = "ghijklmnopqrstuvwxyzghijklmnopqr";
        let err = serde_json::from_str::<GameSeed>(&format!("\"{garbage}\"")).unwrap_err();
        assert!(err.to_string().contains(garbage));
    }

    #[test]
    fn test_distinct_seeds_give_distinct_streams() {
        let mut a = GameSeed::from_u64(1).rng();
        let mut b = GameSeed::from_u64(2).rng();
        let a: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let b: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(a, b);
    }
}
