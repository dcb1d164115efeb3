//! Built-in lints for type graph validation.

mod duplicate_type;
mod member_name;
mod reachability;

pub use duplicate_type::DuplicateTypeLint;
pub use member_name::MemberNameLint;
pub use reachability::ReachabilityLint;
