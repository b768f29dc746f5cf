use futures::future::{BoxFuture, FutureExt};

use crate::effect::Effect;

/// An asynchronous effect backed by `futures::future::BoxFuture`.
/// Demonstrates that the Step/Input core drives an asynchronous producer
/// without any change to the collector implementations in `src/ops/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxedFuture;

impl Effect for BoxedFuture {
    type Wrap<T>
        = BoxFuture<'static, T>
    where
        T: Send + 'static;

    fn pure<T: Send + 'static>(value: T) -> BoxFuture<'static, T> {
        async move { value }.boxed()
    }

    fn map<T: Send + 'static, U: Send + 'static>(
        fa: BoxFuture<'static, T>,
        f: impl FnOnce(T) -> U + Send + 'static,
    ) -> BoxFuture<'static, U> {
        fa.map(f).boxed()
    }

    fn flat_map<T: Send + 'static, U: Send + 'static>(
        fa: BoxFuture<'static, T>,
        f: impl FnOnce(T) -> BoxFuture<'static, U> + Send + 'static,
    ) -> BoxFuture<'static, U> {
        fa.then(|a| f(a)).boxed()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn pure_resolves_to_value() {
        assert_eq!(block_on(BoxedFuture::pure(7)), 7);
    }

    #[test]
    fn map_transforms_the_resolved_value() {
        let fa = BoxedFuture::pure(7);
        assert_eq!(block_on(BoxedFuture::map(fa, |x| x * 2)), 14);
    }

    #[test]
    fn flat_map_sequences_two_futures() {
        let fa = BoxedFuture::pure(7);
        let fb = BoxedFuture::flat_map(fa, |x| BoxedFuture::pure(x + 1));
        assert_eq!(block_on(fb), 8);
    }
}
