use crate::effect::Effect;
use crate::input::Input;
use crate::step::Step;

/// Like `head`, but never consumes: whatever arrives is replayed whole as
/// the leftover.
pub fn peek<F, E>() -> Step<F, E, Option<E>>
where
    F: Effect,
    E: Clone + Send + 'static,
{
    Step::pure_cont(move |input: Input<E>| match input {
        Input::Empty => peek::<F, E>(),
        Input::El(ref e) => Step::early(Some(e.clone()), input),
        Input::Chunk(ref e1, _, _) => {
            let first = e1.clone();
            Step::early(Some(first), input)
        }
        Input::End => Step::early(None, Input::End),
    })
}
