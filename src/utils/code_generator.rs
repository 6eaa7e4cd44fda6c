//! Short code generation.
//!
//! The generator is a trait so deterministic sequences can be injected in
//! tests to force collision and exhaustion scenarios; production uses the
//! operating system CSPRNG.

/// Default short code length, in characters.
pub const DEFAULT_CODE_LENGTH: usize = 7;

/// Source of candidate short codes.
///
/// The encoding must be deterministic in format (lowercase hex here) while
/// the value stays unpredictable to an external observer, so implementations
/// must not use a weak or seedable generator reused across requests.
pub trait CodeGenerator: Send + Sync {
    /// Draws one candidate code.
    fn generate(&self) -> String;
}

/// Generates fixed-length lowercase hex codes from OS-sourced random bytes.
///
/// Draws `ceil(length / 2)` random bytes, hex-encodes them, and truncates to
/// the configured length.
#[derive(Debug, Clone)]
pub struct HexCodeGenerator {
    length: usize,
}

impl HexCodeGenerator {
    /// Creates a generator producing codes of `length` characters.
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    /// The configured code length.
    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for HexCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for HexCodeGenerator {
    /// # Panics
    ///
    /// Panics if the system random number generator fails (extremely rare).
    fn generate(&self) -> String {
        let mut buffer = vec![0u8; self.length.div_ceil(2)];

        getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

        let mut code = hex::encode(buffer);
        code.truncate(self.length);
        code
    }
}
