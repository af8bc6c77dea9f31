//! Cosmetic room codes.

use core::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;

/// Characters used in room codes. Look-alikes such as `0`/`O` and `1`/`I` are left out.
const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// A four-character room code shown to players.
///
/// The code is decoration only; nothing is ever sent anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RoomCode([u8; 4]);

impl RoomCode {
    /// Draws a new code.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut code = [b'A'; 4];
        for byte in &mut code {
            *byte = ALPHABET.choose(rng).copied().unwrap_or(b'A');
        }
        Self(code)
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Every byte comes from the ASCII alphabet.
        core::str::from_utf8(&self.0).unwrap_or("AAAA")
    }
}

impl fmt::Display for RoomCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
