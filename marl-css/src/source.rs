use std::collections::HashMap;

/// Identifies a particular source.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct SourceId(usize);

impl SourceId {
    pub fn span(&self, start: usize, end: usize) -> Span {
        Span { source: *self, start, end }
    }
}

/// Identifies some portion of the source text, as byte offsets.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Span {
    pub source: SourceId,
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// A zero-width span at the start of this one.
    pub fn collapse(self) -> Span {
        Span { end: self.start, ..self }
    }
}

/// A single source text with its identity.
#[derive(Debug)]
pub struct Source {
    pub id: SourceId,
    pub content: String,
}

/// Stores individual source files.
#[derive(Debug, Default)]
pub struct Sources {
    sources: HashMap<SourceId, Source>,
    counter: usize,
}

impl Sources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, content: impl Into<String>) -> SourceId {
        self.counter += 1;
        let id = SourceId(self.counter);
        self.sources.insert(id, Source { id, content: content.into() });
        id
    }

    pub fn get(&self, id: SourceId) -> &Source {
        self.sources.get(&id).expect("source ids are only made by this store")
    }
}
