use std::sync::Arc;

use crate::effect::Effect;
use crate::input::Input;
use crate::step::Step;

type FoldFn<F, E, A> = Arc<dyn Fn(A, E) -> <F as Effect>::Wrap<A> + Send + Sync>;

/// As [`crate::ops::fold::fold`], but `f` returns an effectful `A`. Each
/// chunk element's effect is sequenced left-to-right before advancing.
pub fn fold_m<F, E, A>(
    init: A,
    f: impl Fn(A, E) -> F::Wrap<A> + Send + Sync + 'static,
) -> Step<F, E, A>
where
    F: Effect,
    E: Send + 'static,
    A: Send + 'static,
{
    fold_m_loop(init, Arc::new(f))
}

fn fold_m_loop<F, E, A>(acc: A, f: FoldFn<F, E, A>) -> Step<F, E, A>
where
    F: Effect,
    E: Send + 'static,
    A: Send + 'static,
{
    let mut acc = Some(acc);
    Step::cont(move |input: Input<E>| {
        let cur = acc
            .take()
            .expect("foldM continuation invoked after it already produced a Step");
        match input {
            Input::Empty => F::pure(fold_m_loop(cur, f.clone())),
            Input::El(e) => {
                let f_next = f.clone();
                F::map(f(cur, e), move |next| fold_m_loop(next, f_next))
            }
            Input::Chunk(e1, e2, rest) => {
                let sequenced = sequence_chunk::<F, E, A>(cur, e1, e2, rest, f.clone());
                let f_next = f.clone();
                F::map(sequenced, move |next| fold_m_loop(next, f_next))
            }
            Input::End => F::pure(Step::early(cur, Input::End)),
        }
    })
}

/// Threads `f`'s effect across `e1`, `e2`, then every element of `rest`,
/// left to right.
fn sequence_chunk<F, E, A>(acc: A, e1: E, e2: E, rest: Vec<E>, f: FoldFn<F, E, A>) -> F::Wrap<A>
where
    F: Effect,
    E: Send + 'static,
    A: Send + 'static,
{
    let f_second = f.clone();
    let after_first = f(acc, e1);
    let after_second = F::flat_map(after_first, move |a| f_second(a, e2));
    rest.into_iter().fold(after_second, move |effect, e| {
        let f_rest = f.clone();
        F::flat_map(effect, move |a| f_rest(a, e))
    })
}
