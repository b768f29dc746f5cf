use crate::effect::Effect;
use crate::input::Input;
use crate::ops::container::Container;
use crate::step::Step;

/// Generalises `drain` across any container capability: accumulates every
/// element it sees, in order, into `C` via [`Container::append`]. `on_end`
/// completes with `early(acc, end)` — the terminal input is preserved as
/// the leftover, the same way `fold` does.
pub fn drain_to<F, E, C>() -> Step<F, E, C>
where
    F: Effect,
    E: Send + 'static,
    C: Container<E> + Send + 'static,
{
    drain_to_loop(C::empty())
}

fn drain_to_loop<F, E, C>(acc: C) -> Step<F, E, C>
where
    F: Effect,
    E: Send + 'static,
    C: Container<E> + Send + 'static,
{
    let mut acc = Some(acc);
    Step::pure_cont(move |input: Input<E>| {
        let cur = acc
            .take()
            .expect("drainTo continuation invoked after it already produced a Step");
        match input {
            Input::Empty => drain_to_loop(cur),
            Input::El(e) => drain_to_loop(cur.append(e)),
            Input::Chunk(e1, e2, rest) => {
                let mut next = cur.append(e1).append(e2);
                for e in rest {
                    next = next.append(e);
                }
                drain_to_loop(next)
            }
            Input::End => Step::early(cur, Input::End),
        }
    })
}
