use std::sync::Arc;

use crate::effect::Effect;
use crate::input::Input;
use crate::step::Step;

type Pred<E> = Arc<dyn Fn(&E) -> bool + Send + Sync>;

/// Discards the longest prefix satisfying `p`, analogous to [`crate::ops::drop_n::drop_n`]
/// but predicate-driven instead of count-driven.
pub fn drop_while<F, E>(p: impl Fn(&E) -> bool + Send + Sync + 'static) -> Step<F, E, ()>
where
    F: Effect,
    E: Send + 'static,
{
    drop_while_loop(Arc::new(p))
}

fn drop_while_loop<F, E>(p: Pred<E>) -> Step<F, E, ()>
where
    F: Effect,
    E: Send + 'static,
{
    let mut state = Some(p);
    Step::pure_cont(move |input: Input<E>| {
        let p = state
            .take()
            .expect("dropWhile continuation invoked after it already produced a Step");
        match input {
            Input::Empty => drop_while_loop(p),
            Input::El(e) => {
                if p(&e) {
                    drop_while_loop(p)
                } else {
                    Step::early((), Input::el(e))
                }
            }
            Input::Chunk(e1, e2, rest) => {
                let mut all: Vec<E> = itertools::chain!([e1, e2], rest).collect();
                match all.iter().position(|e| !p(e)) {
                    Some(pos) => {
                        let tail = all.split_off(pos);
                        Step::early((), Input::chunk_from_vec(tail))
                    }
                    None => drop_while_loop(p),
                }
            }
            Input::End => Step::early((), Input::End),
        }
    })
}
