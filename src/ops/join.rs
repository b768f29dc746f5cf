use crate::config::JoinOptions;
use crate::effect::Effect;
use crate::errors::JoinError;
use crate::input::Input;
use crate::step::Step;

/// Collapses a `Step<F, E, Step<F, B, C>>` into `F[Step<F, E, C>]`.
/// `outer` must already be `Done`/`Early` — calling this with a `Cont` is
/// the same programming error as [`crate::step::Step::unsafe_value`] on a
/// `Cont`. Once the inner `Step` is in hand, `Input::End` is fed to it
/// repeatedly until it reaches `Done`; an inner `Step` that never
/// completes under `end`-feeding makes this diverge. The inner
/// `B`-stream's own leftover is discarded (there is no `B`-stream left to
/// replay it into); `outer`'s leftover at the `E`-stream level is
/// preserved.
pub fn join_i<F, E, B, C>(outer: Step<F, E, Step<F, B, C>>) -> F::Wrap<Step<F, E, C>>
where
    F: Effect,
    E: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
{
    match outer {
        Step::Cont(_) => {
            panic!("join_i called on a Cont: the outer Step has no result yet")
        }
        Step::Done(inner) => F::map(drive_to_done(inner), Step::done),
        Step::Early(inner, remainder) => {
            F::map(drive_to_done(inner), move |c| Step::early(c, remainder))
        }
    }
}

fn drive_to_done<F, B, C>(inner: Step<F, B, C>) -> F::Wrap<C>
where
    F: Effect,
    B: Send + 'static,
    C: Send + 'static,
{
    match inner {
        Step::Done(c) => F::pure(c),
        Step::Early(c, _) => F::pure(c),
        Step::Cont(mut k) => F::flat_map(k(Input::End), drive_to_done::<F, B, C>),
    }
}

/// Guarded variant of [`join_i`]: reports [`JoinError::Diverged`] instead
/// of looping forever once `max_steps` `end`-feeds have not produced a
/// `Done` inner `Step`. The unbounded `join_i` above is unaffected and
/// remains available for callers that can accept its divergence contract.
pub fn join_i_bounded<F, E, B, C>(
    outer: Step<F, E, Step<F, B, C>>,
    max_steps: usize,
) -> F::Wrap<Result<Step<F, E, C>, JoinError>>
where
    F: Effect,
    E: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
{
    match outer {
        Step::Cont(_) => {
            panic!("join_i_bounded called on a Cont: the outer Step has no result yet")
        }
        Step::Done(inner) => F::map(drive_bounded(inner, max_steps, 0), |r| r.map(Step::done)),
        Step::Early(inner, remainder) => {
            F::map(drive_bounded(inner, max_steps, 0), move |r| {
                r.map(|c| Step::early(c, remainder))
            })
        }
    }
}

/// As [`join_i_bounded`], reading the step bound from a [`JoinOptions`]
/// instead of a bare integer.
pub fn join_i_with_options<F, E, B, C>(
    outer: Step<F, E, Step<F, B, C>>,
    options: &JoinOptions,
) -> F::Wrap<Result<Step<F, E, C>, JoinError>>
where
    F: Effect,
    E: Send + 'static,
    B: Send + 'static,
    C: Send + 'static,
{
    join_i_bounded(outer, options.max_join_steps)
}

fn drive_bounded<F, B, C>(
    inner: Step<F, B, C>,
    max_steps: usize,
    steps_taken: usize,
) -> F::Wrap<Result<C, JoinError>>
where
    F: Effect,
    B: Send + 'static,
    C: Send + 'static,
{
    match inner {
        Step::Done(c) => F::pure(Ok(c)),
        Step::Early(c, _) => F::pure(Ok(c)),
        Step::Cont(mut k) => {
            crate::ensure!(
                steps_taken < max_steps,
                F::pure({
                    log::trace!("join_i_bounded: giving up after {max_steps} end-feeds");
                    Err(JoinError::Diverged { max_steps })
                })
            );
            log::trace!("join_i_bounded: inner Step still Cont after {steps_taken} end-feed(s)");
            F::flat_map(k(Input::End), move |next| {
                drive_bounded::<F, B, C>(next, max_steps, steps_taken + 1)
            })
        }
    }
}
