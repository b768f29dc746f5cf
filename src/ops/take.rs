use crate::effect::Effect;
use crate::input::Input;
use crate::step::Step;

/// Collects up to `n` elements in order. `n == 0` completes immediately
/// with `Done([])` — no `Cont` is even created. Exact counts complete
/// with no leftover; a chunk longer than what's needed splits, returning
/// the normalised tail as the leftover.
pub fn take<F, E>(n: usize) -> Step<F, E, Vec<E>>
where
    F: Effect,
    E: Send + 'static,
{
    take_loop(Vec::new(), n)
}

fn take_loop<F, E>(acc: Vec<E>, n: usize) -> Step<F, E, Vec<E>>
where
    F: Effect,
    E: Send + 'static,
{
    if n == 0 {
        return Step::done(acc);
    }
    let mut state = Some((acc, n));
    Step::pure_cont(move |input: Input<E>| {
        let (mut acc, n) = state
            .take()
            .expect("take continuation invoked after it already produced a Step");
        match input {
            Input::Empty => take_loop(acc, n),
            Input::El(e) => {
                acc.push(e);
                if n == 1 {
                    Step::done(acc)
                } else {
                    take_loop(acc, n - 1)
                }
            }
            Input::Chunk(e1, e2, rest) => {
                let mut all: Vec<E> = itertools::chain!([e1, e2], rest).collect();
                match all.len().cmp(&n) {
                    std::cmp::Ordering::Less => {
                        let taken = all.len();
                        acc.extend(all);
                        take_loop(acc, n - taken)
                    }
                    std::cmp::Ordering::Equal => {
                        acc.extend(all);
                        Step::done(acc)
                    }
                    std::cmp::Ordering::Greater => {
                        let remainder_elements = all.split_off(n);
                        acc.extend(all);
                        Step::early(acc, Input::chunk_from_vec(remainder_elements))
                    }
                }
            }
            Input::End => Step::early(acc, Input::End),
        }
    })
}
