use crate::effect::Effect;
use crate::input::Input;
use crate::step::Step;

/// Wraps an effectful value into a `Step` that immediately `Done`s with it,
/// without inspecting whatever triggers the first `feed`. Useful as the
/// first stage of a `bind_f` chain that needs to run an `F`-effect before
/// any stream element is examined.
pub fn lift_m<F, E, A>(fa: F::Wrap<A>) -> Step<F, E, A>
where
    F: Effect,
    E: Send + 'static,
    A: Send + 'static,
{
    let mut fa = Some(fa);
    Step::cont(move |_input: Input<E>| {
        let fa = fa
            .take()
            .expect("liftM continuation invoked after it already produced a Step");
        F::map(fa, Step::done)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::Identity;

    #[test]
    fn lift_m_dones_with_the_wrapped_value_on_first_feed() {
        let step: Step<Identity, i32, &str> = lift_m("hello");
        match step.feed(Input::empty()) {
            Step::Done(a) => assert_eq!(a, "hello"),
            _ => panic!("expected Done"),
        }
    }

    #[test]
    fn lift_m_ignores_the_content_of_whatever_triggers_it() {
        let step: Step<Identity, i32, i32> = lift_m(42);
        match step.feed(Input::el(999)) {
            Step::Done(a) => assert_eq!(a, 42),
            _ => panic!("expected Done(42), unaffected by the fed element"),
        }
    }
}
