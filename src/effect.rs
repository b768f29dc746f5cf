//! The effect capability `Step` is generic over.
//!
//! The surrounding effect is an abstract `F[_]`. Rust has no native
//! higher-kinded types, so this is expressed as a trait/interface bound
//! instead: `F` is a type parameter bounded by this trait, and the trait
//! carries its wrapped type as a generic associated type rather than a
//! type parameter on the trait itself. Any type implementing `pure`,
//! `map`, and `flat_map` satisfying the monad laws can drive a `Step`.
//!
//! `Wrap<T>` is bounded by `T: Send + 'static` because a `Step` may cross
//! an await point under the `BoxedFuture` effect (`src/effects/boxed_future.rs`);
//! `Identity` pays for the bound but never needs it.
pub trait Effect {
    type Wrap<T>: 'static
    where
        T: Send + 'static;

    fn pure<T: Send + 'static>(value: T) -> Self::Wrap<T>;

    fn map<T: Send + 'static, U: Send + 'static>(
        fa: Self::Wrap<T>,
        f: impl FnOnce(T) -> U + Send + 'static,
    ) -> Self::Wrap<U>;

    fn flat_map<T: Send + 'static, U: Send + 'static>(
        fa: Self::Wrap<T>,
        f: impl FnOnce(T) -> Self::Wrap<U> + Send + 'static,
    ) -> Self::Wrap<U>;
}
