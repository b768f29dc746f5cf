//! The consumer's state machine: awaiting input (`Cont`), finished with no
//! leftover (`Done`), or finished with leftover input to replay (`Early`).

use std::sync::Arc;

use crate::effect::Effect;
use crate::input::Input;

/// A `Cont`'s continuation. Boxed because each collector needs to return a
/// *fresh* `Step` per input while being free to reuse a single heap cell by
/// mutating a captured accumulator — `FnMut` models that reuse directly,
/// rather than `FnOnce`.
pub type ContFn<F, E, A> = Box<dyn FnMut(Input<E>) -> <F as Effect>::Wrap<Step<F, E, A>> + Send>;

pub enum Step<F: Effect, E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    Cont(ContFn<F, E, A>),
    Done(A),
    Early(A, Input<E>),
}

/// Three-arm visitor over [`Step`]. `on_early` defaults to delegating to
/// `on_done` when the caller doesn't care about the leftover.
pub trait StepFolder<F: Effect, E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    type Output;

    fn on_cont(self, k: ContFn<F, E, A>) -> Self::Output;
    fn on_done(self, a: A) -> Self::Output;
    fn on_early(self, a: A, _remainder: Input<E>) -> Self::Output
    where
        Self: Sized,
    {
        self.on_done(a)
    }
}

impl<F: Effect, E, A> Step<F, E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    pub fn cont(k: impl FnMut(Input<E>) -> F::Wrap<Step<F, E, A>> + Send + 'static) -> Self {
        Step::Cont(Box::new(k))
    }

    /// Optimised form where `k` returns a `Step` directly, wrapped into the
    /// effect by the framework. Semantically identical to
    /// `Step::cont(move |in| F::pure(k(in)))`.
    pub fn pure_cont(mut k: impl FnMut(Input<E>) -> Step<F, E, A> + Send + 'static) -> Self {
        Step::cont(move |input| F::pure(k(input)))
    }

    pub fn done(a: A) -> Self {
        log::debug!("Step::done");
        Step::Done(a)
    }

    pub fn early(a: A, remainder: Input<E>) -> Self {
        log::debug!("Step::early, remainder {} elements", remainder.len());
        Step::Early(a, remainder)
    }

    /// Completion triggered by end-of-stream: `end` is preserved as the
    /// leftover so downstream consumers also see termination.
    pub fn ended(a: A) -> Self {
        Step::early(a, Input::End)
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Step::Done(_) | Step::Early(_, _))
    }

    /// Extracts the final result. Calling this on a `Cont` is a programming
    /// error: it panics — callers must check `is_done` first.
    pub fn unsafe_value(self) -> A {
        match self {
            Step::Done(a) => a,
            Step::Early(a, _) => a,
            Step::Cont(_) => {
                panic!("Step::unsafe_value called on a Cont: the consumer has no result yet")
            }
        }
    }

    pub fn fold<Z>(self, folder: impl StepFolder<F, E, A, Output = Z>) -> Z {
        match self {
            Step::Cont(k) => folder.on_cont(k),
            Step::Done(a) => folder.on_done(a),
            Step::Early(a, r) => folder.on_early(a, r),
        }
    }

    /// Ad-hoc three-closure dispatch, for call sites that don't want to
    /// name a [`StepFolder`] type.
    pub fn fold_with<Z>(
        self,
        on_cont: impl FnOnce(ContFn<F, E, A>) -> Z,
        on_done: impl FnOnce(A) -> Z,
        on_early: impl FnOnce(A, Input<E>) -> Z,
    ) -> Z {
        match self {
            Step::Cont(k) => on_cont(k),
            Step::Done(a) => on_done(a),
            Step::Early(a, r) => on_early(a, r),
        }
    }

    /// Advances the consumer. `Done`/`Early` yield themselves purely, with
    /// no effect performed — idempotent under `feed`.
    pub fn feed(self, input: Input<E>) -> F::Wrap<Step<F, E, A>> {
        match self {
            Step::Cont(mut k) => k(input),
            done_or_early => F::pure(done_or_early),
        }
    }
}

impl<F: Effect, E, A> Step<F, E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    /// Maps the eventual result. Preserves variant: `Done` stays `Done`,
    /// `Early` stays `Early` with the same remainder, `Cont` stays `Cont`
    /// with the mapping pushed inside the continuation's effectful result.
    pub fn map<B>(self, f: impl Fn(A) -> B + Send + Sync + 'static) -> Step<F, E, B>
    where
        B: Send + 'static,
    {
        self.map_shared(Arc::new(f))
    }

    fn map_shared<B>(self, f: Arc<dyn Fn(A) -> B + Send + Sync>) -> Step<F, E, B>
    where
        B: Send + 'static,
    {
        match self {
            Step::Done(a) => Step::Done(f(a)),
            Step::Early(a, r) => Step::Early(f(a), r),
            Step::Cont(mut k) => Step::cont(move |input| {
                let f = f.clone();
                F::map(k(input), move |step| step.map_shared(f))
            }),
        }
    }

    /// Sequential composition: on `Done(a)`, runs `f(a)` directly; on
    /// `Early(a, rem)`, runs `f(a)` and replays `rem` into the result if it
    /// is a `Cont`, otherwise preserves `rem` as the outer leftover (the
    /// outer leftover is real unconsumed producer data; the inner consumer
    /// produced by `f` has not seen a producer yet); on `Cont(k)`, feeds
    /// input into `k` and binds the result.
    pub fn bind_f<B>(
        self,
        f: impl Fn(A) -> F::Wrap<Step<F, E, B>> + Send + Sync + 'static,
    ) -> F::Wrap<Step<F, E, B>>
    where
        B: Send + 'static,
    {
        self.bind_f_shared(Arc::new(f))
    }

    fn bind_f_shared<B>(
        self,
        f: Arc<dyn Fn(A) -> F::Wrap<Step<F, E, B>> + Send + Sync>,
    ) -> F::Wrap<Step<F, E, B>>
    where
        B: Send + 'static,
    {
        match self {
            Step::Done(a) => f(a),
            Step::Early(a, rem) => {
                let inner = f(a);
                F::flat_map(inner, move |inner_step| match inner_step {
                    Step::Cont(mut k) => k(rem),
                    Step::Done(b) => F::pure(Step::Early(b, rem)),
                    Step::Early(b, _inner_rem) => F::pure(Step::Early(b, rem)),
                })
            }
            Step::Cont(mut k) => Step::cont(move |input| {
                let f = f.clone();
                F::flat_map(k(input), move |step| step.bind_f_shared(f))
            }),
        }
    }
}
