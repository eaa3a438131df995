/// Classification for cache-fallback policy.
///
/// Used to determine how the fetch layer should respond to errors from the
/// backend API.
///
/// # Behavior Summary
///
/// | Class | Read Cached Snapshot? | Surface To User As |
/// |-------|-----------------------|--------------------|
/// | `UseCache` | Yes | stale data + notice, or failure line |
/// | `Terminal` | No | failure line only |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FallbackClass {
    /// The live request failed but a previously cached snapshot is still a
    /// meaningful answer. Covers unreachable backends, non-2xx statuses,
    /// malformed bodies, and application-level API errors.
    UseCache,

    /// The API answered authoritatively that the requested data does not
    /// exist. Showing an old snapshot would contradict the live answer, so
    /// the cache is not consulted.
    Terminal,
}
