pub const FUNCTION_PATH: &str = "/system/function";
pub const NAMESPACE_KEY: &str = "namespace";
pub const USAGE_KEY: &str = "usage";

///splits a constant API path into the segments appended to the gateway path
pub(crate) fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}
