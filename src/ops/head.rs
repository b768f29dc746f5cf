use crate::effect::Effect;
use crate::input::Input;
use crate::step::Step;

/// Consumes exactly one element. Empty input is a no-op that remains in
/// the same `Cont`; `end` yields `None` with no leftover to replay.
pub fn head<F, E>() -> Step<F, E, Option<E>>
where
    F: Effect,
    E: Send + 'static,
{
    Step::pure_cont(move |input: Input<E>| match input {
        Input::Empty => head::<F, E>(),
        Input::El(e) => Step::done(Some(e)),
        Input::Chunk(e1, e2, rest) => Step::early(Some(e1), Input::from_remaining(e2, rest)),
        Input::End => Step::early(None, Input::End),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Identity;

    #[test]
    fn scenario_7_head_on_el_is_done_with_no_leftover() {
        let step: Step<Identity, i32, Option<i32>> = head();
        match step.feed(Input::el(7)) {
            Step::Done(a) => assert_eq!(a, Some(7)),
            _ => panic!("expected Done(Some(7))"),
        }
    }

    #[test]
    fn head_on_chunk_splits_off_the_first_element() {
        let step: Step<Identity, i32, Option<i32>> = head();
        match step.feed(Input::chunk(1, 2, vec![3, 4])) {
            Step::Early(a, r) => {
                assert_eq!(a, Some(1));
                assert_eq!(r, Input::chunk(2, 3, vec![4]));
            }
            _ => panic!("expected Early"),
        }
    }

    #[test]
    fn head_on_two_element_chunk_leaves_a_single_element() {
        let step: Step<Identity, i32, Option<i32>> = head();
        match step.feed(Input::chunk(1, 2, vec![])) {
            Step::Early(a, r) => {
                assert_eq!(a, Some(1));
                assert_eq!(r, Input::el(2));
            }
            _ => panic!("expected Early"),
        }
    }

    #[test]
    fn head_on_end_is_none_with_end_leftover() {
        let step: Step<Identity, i32, Option<i32>> = head();
        match step.feed(Input::end()) {
            Step::Early(a, Input::End) => assert_eq!(a, None),
            _ => panic!("expected Early(None, End)"),
        }
    }

    #[test]
    fn head_on_empty_stream_stays_in_cont() {
        let step: Step<Identity, i32, Option<i32>> = head();
        let step = step.feed(Input::empty());
        assert!(!step.is_done());
        match step.feed(Input::end()) {
            Step::Early(a, Input::End) => assert_eq!(a, None),
            _ => panic!("expected Early(None, End)"),
        }
    }
}
