pub mod boxed_future;
pub mod identity;

pub use boxed_future::BoxedFuture;
pub use identity::Identity;
