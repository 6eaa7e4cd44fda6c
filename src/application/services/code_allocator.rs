//! Short code allocation with bounded collision retry.
//!
//! The allocator draws random candidates and checks each against the caller's
//! existence predicate. The check-then-insert sequence it participates in is
//! not atomic end-to-end: two concurrent requests can both see a candidate as
//! free before either inserts. The storage-level UNIQUE constraint is the
//! final arbiter of that race; the allocator only keeps collisions rare.

use std::future::Future;

use serde_json::json;

use crate::error::AppError;
use crate::utils::code_generator::CodeGenerator;

/// Default ceiling on candidate draws per allocation.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Errors produced by [`CodeAllocator::allocate`].
///
/// Store failures are kept distinct from exhaustion: a failing existence
/// check aborts the allocation immediately and is never counted as a
/// collision.
#[derive(Debug, thiserror::Error)]
pub enum AllocationError {
    /// Every candidate within the attempt ceiling was already taken.
    #[error("No free short code after {attempts} attempts")]
    Exhausted { attempts: usize },

    /// The existence predicate itself failed.
    #[error(transparent)]
    Store(#[from] AppError),
}

impl From<AllocationError> for AppError {
    fn from(err: AllocationError) -> Self {
        match err {
            AllocationError::Exhausted { attempts } => AppError::capacity_exhausted(
                "Failed to generate a unique short code",
                json!({ "attempts": attempts }),
            ),
            AllocationError::Store(e) => e,
        }
    }
}

/// Allocates unique short codes against a collaborator store.
#[derive(Debug, Clone)]
pub struct CodeAllocator<G> {
    generator: G,
    max_attempts: usize,
}

impl<G: CodeGenerator> CodeAllocator<G> {
    /// Creates an allocator drawing from `generator`, bounded to
    /// `max_attempts` candidate draws per allocation.
    pub fn new(generator: G, max_attempts: usize) -> Self {
        Self {
            generator,
            max_attempts,
        }
    }

    /// Allocates a code not currently known to the store.
    ///
    /// Draws a candidate, asks `exists` whether it is taken, and returns the
    /// first free one. Collisions trigger a redraw, up to the attempt
    /// ceiling.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError::Exhausted`] when the ceiling is reached
    /// without finding a free code, and [`AllocationError::Store`] as soon as
    /// the predicate itself fails.
    pub async fn allocate<F, Fut>(&self, exists: F) -> Result<String, AllocationError>
    where
        F: Fn(String) -> Fut,
        Fut: Future<Output = Result<bool, AppError>>,
    {
        for _ in 0..self.max_attempts {
            let candidate = self.generator.generate();

            if !exists(candidate.clone()).await? {
                return Ok(candidate);
            }

            tracing::debug!("Short code collision on {candidate}, redrawing");
        }

        Err(AllocationError::Exhausted {
            attempts: self.max_attempts,
        })
    }
}
