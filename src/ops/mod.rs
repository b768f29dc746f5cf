//! Collectors and combinators built on top of [`crate::step::Step`].
//! Each submodule holds one operation, tested in place, one file per
//! operator.

pub mod container;
pub mod drain;
pub mod drain_to;
pub mod drop_n;
pub mod drop_while;
pub mod fold;
pub mod fold_m;
pub mod head;
pub mod join;
pub mod lift;
pub mod peek;
pub mod take;
pub mod take_while;
pub mod zip;

pub use container::Container;
pub use drain::drain;
pub use drain_to::drain_to;
pub use drop_n::drop_n;
pub use drop_while::drop_while;
pub use fold::fold;
pub use fold_m::fold_m;
pub use head::head;
pub use join::{join_i, join_i_bounded, join_i_with_options};
pub use lift::lift_m;
pub use peek::peek;
pub use take::take;
pub use take_while::take_while;
pub use zip::zip;
