use std::sync::Arc;

use parking_lot::RwLock;

use crate::Corpus;

/// Process-wide handle to the current corpus.
///
/// Readers take an [`Arc`] snapshot and keep using it for the whole request, so a
/// concurrent [`CorpusStore::replace`] never exposes a half-built corpus.
#[derive(Debug, Default)]
pub struct CorpusStore {
    current: RwLock<Arc<Corpus>>,
}

impl CorpusStore {
    pub fn new(corpus: Corpus) -> Self {
        Self {
            current: RwLock::new(Arc::new(corpus)),
        }
    }

    pub fn snapshot(&self) -> Arc<Corpus> {
        self.current.read().clone()
    }

    /// Publishes a fully prepared corpus, returning the previous one.
    pub fn replace(&self, corpus: Corpus) -> Arc<Corpus> {
        let next = Arc::new(corpus);
        std::mem::replace(&mut *self.current.write(), next)
    }

    pub fn len(&self) -> usize {
        self.current.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.read().is_empty()
    }
}

impl From<Corpus> for CorpusStore {
    fn from(corpus: Corpus) -> Self {
        Self::new(corpus)
    }
}
