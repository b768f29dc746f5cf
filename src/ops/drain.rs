use crate::effect::Effect;
use crate::ops::drain_to::drain_to;
use crate::step::Step;

/// Accumulates every element into an ordered `Vec<E>`. `on_end` completes
/// with `early(xs, end)`, preserving the order of chunk elements.
pub fn drain<F, E>() -> Step<F, E, Vec<E>>
where
    F: Effect,
    E: Send + 'static,
{
    drain_to::<F, E, Vec<E>>()
}
