/*
[INPUT]:  Wall clock time (microseconds)
[OUTPUT]: Strictly increasing nonces for request signing
[POS]:    Auth layer - replay protection
[UPDATE]: When changing nonce resolution or source
*/

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;

/// Source of request nonces.
///
/// Values handed out by one source must strictly increase, including across
/// threads sharing the same client.
pub trait NonceSource: Send + Sync + std::fmt::Debug {
    fn next_nonce(&self) -> u64;
}

/// Clock-seeded atomic nonce generator
#[derive(Debug, Default)]
pub struct MonotonicNonce {
    last: AtomicU64,
}

impl MonotonicNonce {
    pub fn new() -> Self {
        Self::default()
    }

    fn now_micros() -> u64 {
        Utc::now().timestamp_micros().max(0) as u64
    }
}

impl NonceSource for MonotonicNonce {
    fn next_nonce(&self) -> u64 {
        let now = Self::now_micros();
        let mut current = self.last.load(Ordering::Acquire);
        loop {
            let next = now.max(current + 1);
            match self.last.compare_exchange_weak(
                current,
                next,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return next,
                Err(observed) => current = observed,
            }
        }
    }
}
