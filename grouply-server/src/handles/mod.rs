mod group_handle;
mod member_handle;
mod project_handle;

pub use group_handle::*;
pub use member_handle::*;
pub use project_handle::*;

/// Contact fields are significant only when present and non-empty.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}
