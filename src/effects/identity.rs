use crate::effect::Effect;

/// The synchronous effect: `Wrap<T> = T`. Every collector's own unit tests
/// drive a `Step<Identity, E, A>` directly, with no producer collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity;

impl Effect for Identity {
    type Wrap<T>
        = T
    where
        T: Send + 'static;

    fn pure<T: Send + 'static>(value: T) -> T {
        value
    }

    fn map<T: Send + 'static, U: Send + 'static>(fa: T, f: impl FnOnce(T) -> U + Send + 'static) -> U {
        f(fa)
    }

    fn flat_map<T: Send + 'static, U: Send + 'static>(
        fa: T,
        f: impl FnOnce(T) -> U + Send + 'static,
    ) -> U {
        f(fa)
    }
}
