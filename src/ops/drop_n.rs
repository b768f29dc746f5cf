use crate::effect::Effect;
use crate::input::Input;
use crate::step::Step;

/// Discards the first `n` elements. `n == 0` completes immediately with
/// `Done(())`. A chunk longer than `n` splits, returning the unconsumed
/// tail as the leftover.
pub fn drop_n<F, E>(n: usize) -> Step<F, E, ()>
where
    F: Effect,
    E: Send + 'static,
{
    drop_loop(n)
}

fn drop_loop<F, E>(n: usize) -> Step<F, E, ()>
where
    F: Effect,
    E: Send + 'static,
{
    if n == 0 {
        return Step::done(());
    }
    let mut state = Some(n);
    Step::pure_cont(move |input: Input<E>| {
        let n = state
            .take()
            .expect("drop continuation invoked after it already produced a Step");
        match input {
            Input::Empty => drop_loop(n),
            Input::El(_e) => drop_loop(n - 1),
            Input::Chunk(e1, e2, rest) => {
                let len = 2 + rest.len();
                if len <= n {
                    drop_loop(n - len)
                } else {
                    let mut all: Vec<E> = itertools::chain!([e1, e2], rest).collect();
                    let remainder = all.split_off(n);
                    Step::early((), Input::chunk_from_vec(remainder))
                }
            }
            Input::End => Step::early((), Input::End),
        }
    })
}
