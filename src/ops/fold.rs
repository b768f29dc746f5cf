use std::sync::Arc;

use crate::effect::Effect;
use crate::input::Input;
use crate::step::Step;

/// Pure left fold over the stream. `on_end` completes as `early(acc, end)`
/// so downstream consumers also see termination; `on_empty` remains in the
/// same `Cont` with the same accumulator.
pub fn fold<F, E, A>(init: A, f: impl Fn(A, E) -> A + Send + Sync + 'static) -> Step<F, E, A>
where
    F: Effect,
    E: Send + 'static,
    A: Send + 'static,
{
    fold_loop(init, Arc::new(f))
}

fn fold_loop<F, E, A>(acc: A, f: Arc<dyn Fn(A, E) -> A + Send + Sync>) -> Step<F, E, A>
where
    F: Effect,
    E: Send + 'static,
    A: Send + 'static,
{
    let mut acc = Some(acc);
    Step::pure_cont(move |input: Input<E>| {
        let cur = acc
            .take()
            .expect("fold continuation invoked after it already produced a Step");
        match input {
            Input::Empty => fold_loop(cur, f.clone()),
            Input::El(e) => fold_loop(f(cur, e), f.clone()),
            Input::Chunk(e1, e2, rest) => {
                let mut next = f(f(cur, e1), e2);
                for e in rest {
                    next = f(next, e);
                }
                fold_loop(next, f.clone())
            }
            Input::End => Step::early(cur, Input::End),
        }
    })
}
