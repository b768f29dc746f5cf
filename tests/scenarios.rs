//! Eight concrete worked scenarios covering every collector and combinator
//! in this crate.

use pretty_assertions::assert_eq;
use stepwise::effects::Identity;
use stepwise::{fold, head, join_i, peek, take, take_while, zip, Input, Step};

type S<A> = Step<Identity, i32, A>;

fn feed_all<A: Send + 'static>(mut step: S<A>, inputs: Vec<Input<i32>>) -> S<A> {
    for input in inputs {
        step = step.feed(input);
    }
    step
}

#[test]
fn scenario_1_take_3_on_chunk_1_2_3_4_5() {
    let _ = env_logger::try_init();
    let step: S<Vec<i32>> = take(3);
    match step.feed(Input::chunk(1, 2, vec![3, 4, 5])) {
        Step::Early(acc, r) => {
            assert_eq!(acc, vec![1, 2, 3]);
            assert_eq!(r, Input::chunk(4, 5, vec![]));
        }
        _ => panic!("expected Early([1,2,3], chunk(4,5,[]))"),
    }
}

#[test]
fn scenario_2_take_3_fed_one_element_at_a_time() {
    let step: S<Vec<i32>> = take(3);
    let step = feed_all(step, vec![Input::el(1), Input::el(2), Input::el(3)]);
    match step {
        Step::Done(acc) => assert_eq!(acc, vec![1, 2, 3]),
        _ => panic!("expected Done([1,2,3])"),
    }
}

#[test]
fn scenario_3_take_while_lt_3_on_chunk_1_2_3_4() {
    let step: S<Vec<i32>> = take_while(|x| *x < 3);
    match step.feed(Input::chunk(1, 2, vec![3, 4])) {
        Step::Early(acc, r) => {
            assert_eq!(acc, vec![1, 2]);
            assert_eq!(r, Input::chunk(3, 4, vec![]));
        }
        _ => panic!("expected Early([1,2], chunk(3,4,[]))"),
    }
}

#[test]
fn scenario_4_drop_2_on_chunk_1_2_3_4_5() {
    let step: S<()> = stepwise::drop_n(2);
    match step.feed(Input::chunk(1, 2, vec![3, 4, 5])) {
        Step::Early((), r) => assert_eq!(r, Input::chunk(3, 4, vec![5])),
        _ => panic!("expected Early((), chunk(3,4,[5]))"),
    }
}

#[test]
fn scenario_5_fold_plus_over_el_chunk_end() {
    let step: S<i32> = fold(0, |acc, e| acc + e);
    let step = feed_all(
        step,
        vec![Input::el(1), Input::chunk(2, 3, vec![4]), Input::end()],
    );
    match step {
        Step::Early(sum, Input::End) => assert_eq!(sum, 10),
        _ => panic!("expected Early(10, End)"),
    }
}

#[test]
fn scenario_6_zip_take_2_take_3_shorter_remainder_wins() {
    let step: S<(Vec<i32>, Vec<i32>)> = zip(take(2), take(3));
    match step.feed(Input::chunk(1, 2, vec![3, 4, 5])) {
        Step::Early((a, b), r) => {
            assert_eq!(a, vec![1, 2]);
            assert_eq!(b, vec![1, 2, 3]);
            assert_eq!(r, Input::chunk(4, 5, vec![]));
        }
        _ => panic!("expected Early(([1,2],[1,2,3]), chunk(4,5,[]))"),
    }
}

#[test]
fn scenario_7_head_and_peek_on_el_7() {
    let head_step: S<Option<i32>> = head();
    match head_step.feed(Input::el(7)) {
        Step::Done(a) => assert_eq!(a, Some(7)),
        _ => panic!("expected Done(Some(7))"),
    }

    let peek_step: S<Option<i32>> = peek();
    match peek_step.feed(Input::el(7)) {
        Step::Early(a, r) => {
            assert_eq!(a, Some(7));
            assert_eq!(r, Input::el(7));
        }
        _ => panic!("expected Early(Some(7), el(7))"),
    }
}

#[test]
fn scenario_8_join_i_over_fold_map_done_times_two() {
    let fold_step: S<i32> = fold(0, |acc, e| acc + e);
    let fold_step = feed_all(
        fold_step,
        vec![Input::el(1), Input::el(2), Input::el(3), Input::end()],
    );
    let outer: Step<Identity, i32, Step<Identity, i32, i32>> =
        fold_step.map(|sum| Step::done(sum * 2));
    match join_i(outer) {
        Step::Done(twelve) => assert_eq!(twelve, 12),
        Step::Early(twelve, Input::End) => assert_eq!(twelve, 12),
        _ => panic!("expected 12"),
    }
}
