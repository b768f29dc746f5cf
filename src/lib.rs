//! An iteratee-style streaming consumer library: a [`Step`] is a small
//! state machine that consumes [`Input`] chunks and produces a result,
//! either synchronously (under the [`effects::Identity`] effect) or
//! driven by an async `Future` chain (under [`effects::BoxedFuture`]).
//!
//! The public surface is re-exported flat at the crate root, so callers
//! write `stepwise::{Step, Input, fold, take, zip}` rather than reaching
//! into `stepwise::ops::fold::fold`.

pub mod config;
pub mod effect;
pub mod effects;
pub mod errors;
pub mod input;
pub mod ops;
pub mod step;

pub use config::JoinOptions;
pub use effect::Effect;
pub use effects::{BoxedFuture, Identity};
pub use errors::JoinError;
pub use input::Input;
pub use ops::{
    drain, drain_to, drop_n, drop_while, fold, fold_m, head, join_i, join_i_bounded,
    join_i_with_options, lift_m, peek, take, take_while, zip, Container,
};
pub use step::{ContFn, Step, StepFolder};
