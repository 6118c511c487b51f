mod path;

use tracing::trace;

use crate::types::Node;
use crate::{Error, Result};

pub use path::{parse_path, Segment, Segments};

/// Resolves a dot/bracket path against `root`.
///
/// Every miss, whether the container has the wrong kind or the key or index
/// is absent, is reported as [`Error::NodeNotFound`]. A path with no segments
/// never resolves to the root.
pub fn query<'a>(root: &'a Node, path: &str) -> Result<&'a Node> {
    let segments = parse_path(path);
    if segments.is_empty() {
        trace!(path, "query has no segments");
        return Err(Error::not_found(path));
    }

    let mut current = root;
    for (depth, segment) in segments.iter().enumerate() {
        let next = match *segment {
            Segment::Index(index) => usize::try_from(index)
                .ok()
                .and_then(|index| current.get_index(index)),
            Segment::Key(key) => current.get(key),
        };
        current = match next {
            Some(node) => node,
            None => {
                trace!(
                    path,
                    depth,
                    segment = %segment,
                    found = %current.kind(),
                    "query miss"
                );
                return Err(Error::not_found(path));
            }
        };
    }
    Ok(current)
}

impl Node {
    pub fn query(&self, path: &str) -> Result<&Node> {
        query(self, path)
    }
}
