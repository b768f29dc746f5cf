//! The only recoverable-error channel in this crate.
//!
//! Everything else here is data (`Input`, `Step`) or a contract violation
//! (calling [`crate::step::Step::unsafe_value`] on a `Cont`, or constructing
//! a sub-2-element chunk) that panics rather than returning a `Result`.
//! `join_i_bounded` is the exception: a generic combinator library cannot
//! let an untrusted inner `Step` hang a caller forever, so it reports
//! divergence instead of looping without bound.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JoinError {
    #[error("joinI did not reach Done after feeding end {max_steps} time(s); inner Step diverges")]
    Diverged { max_steps: usize },
}

/// Early-returns `$e` as-is. Callers whose function returns a bare
/// `Result` pass `Err(...)`; callers whose function returns an effectful
/// `F::Wrap<Result<...>>` (as `join_i_bounded`'s does) pass the already
/// wrapped value, e.g. `bail!(F::pure(Err(err)))`.
#[macro_export]
macro_rules! bail {
    ($e:expr) => {
        return $e;
    };
}

/// `bail!($err)` unless `$cond` holds.
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !($cond) {
            $crate::bail!($err);
        }
    };
}
