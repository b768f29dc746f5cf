use crate::effect::Effect;
use crate::input::Input;
use crate::step::{ContFn, Step};

/// Runs two consumers over a single input stream. Every combination point
/// classifies both operands — finished (`Done`/`Early`, capturing any
/// leftover) or pending (`Cont`) — and applies one of three rules: both
/// finished combine their leftovers via the shorter-remainder rule; one
/// finished/one pending keeps re-feeding the pending side, pairing its
/// eventual result with the fixed finished value; both pending forwards
/// each input to both sides, A before B, then reclassifies.
pub fn zip<F, E, A, B>(sa: Step<F, E, A>, sb: Step<F, E, B>) -> F::Wrap<Step<F, E, (A, B)>>
where
    F: Effect,
    E: Clone + Send + 'static,
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
{
    F::pure(zip_steps(sa, sb))
}

fn zip_steps<F, E, A, B>(sa: Step<F, E, A>, sb: Step<F, E, B>) -> Step<F, E, (A, B)>
where
    F: Effect,
    E: Clone + Send + 'static,
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
{
    match (sa, sb) {
        (Step::Cont(ka), Step::Cont(kb)) => {
            log::trace!("zip: both sides pending, forwarding next input to both");
            both_pending(ka, kb)
        }
        (Step::Cont(ka), sb) => {
            log::trace!("zip: left pending, right finished");
            let (b, rb) = extract(sb);
            pending_then_finished(ka, b, rb)
        }
        (sa, Step::Cont(kb)) => {
            log::trace!("zip: left finished, right pending");
            let (a, ra) = extract(sa);
            finished_then_pending(a, ra, kb)
        }
        (sa, sb) => {
            log::trace!("zip: both sides finished, combining remainders");
            let (a, ra) = extract(sa);
            let (b, rb) = extract(sb);
            combine_finished(a, ra, b, rb)
        }
    }
}

/// Splits an already-finished `Step` into its result and optional
/// leftover: `Done` has none, `Early` carries one.
fn extract<F, E, A>(step: Step<F, E, A>) -> (A, Option<Input<E>>)
where
    F: Effect,
    E: Send + 'static,
    A: Send + 'static,
{
    match step {
        Step::Done(a) => (a, None),
        Step::Early(a, r) => (a, Some(r)),
        Step::Cont(_) => unreachable!("extract called on a Cont"),
    }
}

fn combine_finished<F, E, A, B>(
    a: A,
    ra: Option<Input<E>>,
    b: B,
    rb: Option<Input<E>>,
) -> Step<F, E, (A, B)>
where
    F: Effect,
    E: Clone + Send + 'static,
    A: Send + 'static,
    B: Send + 'static,
{
    match shorter_remainder(ra, rb) {
        None => Step::done((a, b)),
        Some(r) => Step::early((a, b), r),
    }
}

fn finished_then_pending<F, E, A, B>(
    a: A,
    ra: Option<Input<E>>,
    kb: ContFn<F, E, B>,
) -> Step<F, E, (A, B)>
where
    F: Effect,
    E: Clone + Send + 'static,
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
{
    let mut kb = kb;
    Step::cont(move |input: Input<E>| {
        let a = a.clone();
        let ra = ra.clone();
        F::map(kb(input), move |sb2| {
            let sa = match ra {
                Some(r) => Step::early(a, r),
                None => Step::done(a),
            };
            zip_steps(sa, sb2)
        })
    })
}

fn pending_then_finished<F, E, A, B>(
    ka: ContFn<F, E, A>,
    b: B,
    rb: Option<Input<E>>,
) -> Step<F, E, (A, B)>
where
    F: Effect,
    E: Clone + Send + 'static,
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
{
    let mut ka = ka;
    Step::cont(move |input: Input<E>| {
        let b = b.clone();
        let rb = rb.clone();
        F::map(ka(input), move |sa2| {
            let sb = match rb {
                Some(r) => Step::early(b, r),
                None => Step::done(b),
            };
            zip_steps(sa2, sb)
        })
    })
}

fn both_pending<F, E, A, B>(ka: ContFn<F, E, A>, kb: ContFn<F, E, B>) -> Step<F, E, (A, B)>
where
    F: Effect,
    E: Clone + Send + 'static,
    A: Clone + Send + 'static,
    B: Clone + Send + 'static,
{
    let mut ka = ka;
    // `kb` is only ever needed once (each `Cont` this module builds is fed
    // at most once — `feed` consumes the `Step` by value), but it has to be
    // moved into the closure nested inside `F::flat_map` below, which an
    // `FnMut` body cannot do directly. `Option::take` gives that one move
    // without changing `both_pending`'s own signature, the same trick
    // `fold`/`drain_to`'s loops use for their accumulators.
    let mut kb = Some(kb);
    Step::cont(move |input: Input<E>| {
        let input_for_b = input.clone();
        let fa = ka(input);
        let mut kb = kb
            .take()
            .expect("zip's Cont invoked after it already produced a Step");
        F::flat_map(fa, move |sa2| {
            let fb = kb(input_for_b);
            F::map(fb, move |sb2| zip_steps(sa2, sb2))
        })
    })
}

/// When exactly one side is absent (a `Done`), the combined leftover is
/// simply the other side's remainder, present or not — `zip(early(a, r),
/// done(b))` must yield `early((a,b), r)`, and `zip(done(a), sB)` must
/// carry exactly `sB`'s leftover. When both are present, `end` dominates;
/// otherwise the shorter one wins, ties going to `ra`.
fn shorter_remainder<E>(ra: Option<Input<E>>, rb: Option<Input<E>>) -> Option<Input<E>> {
    match (ra, rb) {
        (None, None) => None,
        (None, Some(rb)) => Some(rb),
        (Some(ra), None) => Some(ra),
        (Some(ra), Some(rb)) => {
            if ra.is_end() {
                Some(ra)
            } else if rb.is_end() {
                Some(rb)
            } else if ra.len() <= rb.len() {
                Some(ra)
            } else {
                Some(rb)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Identity;
    use crate::ops::take::take;

    fn feed_all<A, B>(
        mut step: Step<Identity, i32, (A, B)>,
        inputs: Vec<Input<i32>>,
    ) -> Step<Identity, i32, (A, B)>
    where
        A: Clone + Send + 'static,
        B: Clone + Send + 'static,
    {
        for input in inputs {
            step = step.feed(input);
        }
        step
    }

    #[test]
    fn scenario_6_zip_take_2_take_3_on_a_chunk_of_5() {
        let step: Step<Identity, i32, (Vec<i32>, Vec<i32>)> = zip(take(2), take(3));
        match step.feed(Input::chunk(1, 2, vec![3, 4, 5])) {
            Step::Early((a, b), r) => {
                assert_eq!(a, vec![1, 2]);
                assert_eq!(b, vec![1, 2, 3]);
                assert_eq!(r, Input::chunk(4, 5, vec![]));
            }
            _ => panic!("expected Early"),
        }
    }

    #[test]
    fn zip_of_two_dones_has_no_leftover() {
        let step: Step<Identity, i32, (i32, i32)> = zip(Step::done(1), Step::done(2));
        match step {
            Step::Done(pair) => assert_eq!(pair, (1, 2)),
            _ => panic!("expected Done"),
        }
    }

    #[test]
    fn zip_early_and_done_keeps_the_earlys_remainder() {
        let step: Step<Identity, i32, (i32, i32)> =
            zip(Step::early(1, Input::el(9)), Step::done(2));
        match step {
            Step::Early(pair, r) => {
                assert_eq!(pair, (1, 2));
                assert_eq!(r, Input::el(9));
            }
            _ => panic!("expected Early((1,2), el(9))"),
        }
    }

    #[test]
    fn zip_done_with_a_pending_consumer_carries_the_pendings_leftover() {
        let step: Step<Identity, i32, (i32, Vec<i32>)> = zip(Step::done(1), take(2));
        match step.feed(Input::chunk(10, 20, vec![])) {
            Step::Done((a, b)) => {
                assert_eq!(a, 1);
                assert_eq!(b, vec![10, 20]);
            }
            _ => panic!("expected Done((1, [10,20]))"),
        }
    }

    #[test]
    fn zip_done_with_a_pending_consumer_that_leaves_a_remainder() {
        let step: Step<Identity, i32, (i32, Vec<i32>)> = zip(Step::done(1), take(2));
        match step.feed(Input::chunk(10, 20, vec![30])) {
            Step::Early((a, b), r) => {
                assert_eq!(a, 1);
                assert_eq!(b, vec![10, 20]);
                assert_eq!(r, Input::el(30));
            }
            _ => panic!("expected Early((1, [10,20]), el(30))"),
        }
    }

    #[test]
    fn zip_end_dominates_over_a_shorter_non_end_remainder() {
        let step: Step<Identity, i32, (i32, i32)> = zip(
            Step::early(1, Input::end()),
            Step::early(2, Input::chunk(1, 2, vec![])),
        );
        match step {
            Step::Early(pair, Input::End) => assert_eq!(pair, (1, 2)),
            _ => panic!("expected Early(_, End)"),
        }
    }

    #[test]
    fn zip_both_pending_forwards_every_input_until_both_resolve() {
        let step: Step<Identity, i32, (Vec<i32>, Vec<i32>)> = zip(take(3), take(3));
        let step = feed_all(step, vec![Input::el(1), Input::el(2)]);
        assert!(!step.is_done());
        match step.feed(Input::el(3)) {
            Step::Done((a, b)) => {
                assert_eq!(a, vec![1, 2, 3]);
                assert_eq!(b, vec![1, 2, 3]);
            }
            _ => panic!("expected Done"),
        }
    }
}
