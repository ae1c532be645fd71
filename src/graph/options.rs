//! Construction-time configuration for [`CitationGraph`](super::CitationGraph).

/// How `add_edge(v, v)` is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SelfLoopPolicy {
    /// Fail with [`CdIndexError::SelfLoop`](crate::cdindex_error::CdIndexError::SelfLoop).
    #[default]
    Reject,
    /// Store the self-loop like any other edge. A vertex never witnesses its
    /// own CD index (the window's lower bound is strict), so a self-loop only
    /// affects degrees, `iindex`, and shared-citation tests of other vertices.
    Allow,
}

/// Optional knobs applied when a graph is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GraphOptions {
    pub self_loops: SelfLoopPolicy,
    /// Vertex slots reserved up front.
    pub vertex_capacity: usize,
}

impl GraphOptions {
    pub fn with_self_loops(mut self, policy: SelfLoopPolicy) -> Self {
        self.self_loops = policy;
        self
    }

    pub fn with_vertex_capacity(mut self, capacity: usize) -> Self {
        self.vertex_capacity = capacity;
        self
    }
}
