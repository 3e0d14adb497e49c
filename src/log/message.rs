use super::Error;

pub const MISSING_TEMPLATE: &str = "missing template";
pub const EXCESSIVE_DEPTH: &str = "excessive depth";

/// Return an [`Error`] describing a missing template.
pub fn error_missing_template(name: &str) -> Error {
    Error::build(MISSING_TEMPLATE).with_name(name).with_help(format!(
        "template `{}` not found in engine, add it with `.add_template`",
        name
    ))
}

/// Return an [`Error`] describing a render that exceeded the recursion limit.
pub fn error_excessive_depth(max_depth: usize) -> Error {
    Error::build(EXCESSIVE_DEPTH).with_help(format!(
        "render passed through more than {} nested regions, \
        does an item marker refer back to its own region?",
        max_depth
    ))
}
