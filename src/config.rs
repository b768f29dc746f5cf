//! Runtime knobs for the combinator library.
//!
//! This layer has no CLI and no config file; the handful of options a
//! caller might want to set are a plain struct with a `Default` impl,
//! constructed programmatically rather than parsed from flags inside
//! library code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinOptions {
    /// Maximum number of `Input::End` feeds `join_i_bounded` will attempt
    /// before reporting [`crate::errors::JoinError::Diverged`].
    pub max_join_steps: usize,
}

impl Default for JoinOptions {
    fn default() -> Self {
        JoinOptions {
            max_join_steps: 1_024,
        }
    }
}

impl JoinOptions {
    pub fn with_max_join_steps(max_join_steps: usize) -> Self {
        JoinOptions { max_join_steps }
    }
}
