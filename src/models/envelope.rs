//! The reply handed back to the orchestrator.

/// Ordered text segments returned from a tool call.
///
/// There is no empty constructor: an envelope always starts from one
/// segment, so it can never be rendered as an empty reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEnvelope {
    segments: Vec<String>,
}

impl ResponseEnvelope {
    pub fn new(first: impl Into<String>) -> Self {
        Self {
            segments: vec![first.into()],
        }
    }

    /// Append a segment (builder style).
    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn into_segments(self) -> Vec<String> {
        self.segments
    }
}
