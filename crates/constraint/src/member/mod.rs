//! Member constraint sets.
//!
//! A [`MemberConstraintSet`] holds constraint chains registered against
//! named members of a message type. Members are addressed by their full
//! dotted [`Member`] path, which is also the key every failure is reported
//! under.

mod builder;
mod entry;
mod path;
mod set;

pub use builder::MemberBuilder;
pub use path::{DEFAULT_MEMBER_NAME, Member};
pub(crate) use path::short_type_name;
pub use set::MemberConstraintSet;
