use std::sync::Arc;

use crate::effect::Effect;
use crate::input::Input;
use crate::step::Step;

type Pred<E> = Arc<dyn Fn(&E) -> bool + Send + Sync>;

/// Longest prefix satisfying `p`. Leftover is the first failing element
/// onward, normalised the same way `take`'s split remainder is.
pub fn take_while<F, E>(p: impl Fn(&E) -> bool + Send + Sync + 'static) -> Step<F, E, Vec<E>>
where
    F: Effect,
    E: Send + 'static,
{
    take_while_loop(Vec::new(), Arc::new(p))
}

fn take_while_loop<F, E>(acc: Vec<E>, p: Pred<E>) -> Step<F, E, Vec<E>>
where
    F: Effect,
    E: Send + 'static,
{
    let mut state = Some((acc, p));
    Step::pure_cont(move |input: Input<E>| {
        let (mut acc, p) = state
            .take()
            .expect("takeWhile continuation invoked after it already produced a Step");
        match input {
            Input::Empty => take_while_loop(acc, p),
            Input::El(e) => {
                if p(&e) {
                    acc.push(e);
                    take_while_loop(acc, p)
                } else {
                    Step::early(acc, Input::el(e))
                }
            }
            Input::Chunk(e1, e2, rest) => {
                let mut all: Vec<E> = itertools::chain!([e1, e2], rest).collect();
                match all.iter().position(|e| !p(e)) {
                    Some(pos) => {
                        let tail = all.split_off(pos);
                        acc.extend(all);
                        Step::early(acc, Input::chunk_from_vec(tail))
                    }
                    None => {
                        acc.extend(all);
                        take_while_loop(acc, p)
                    }
                }
            }
            Input::End => Step::early(acc, Input::End),
        }
    })
}
