//! Document store builder: raw content records into a read-only lookup keyed
//! by canonical URL.

use std::collections::HashMap;

use serde_json::Value;
use sw_core::MalformedRecord;
use sw_core::entities::Document;
use sw_core::raw::parse_document;
use tracing::debug;

/// Documents keyed by URL, iterated in first-ingestion order.
///
/// A later record with an already-seen URL replaces the earlier document's
/// content but keeps its position.
#[derive(Debug, Clone, Default)]
pub struct DocumentStore {
    documents: Vec<Document>,
    index: HashMap<String, usize>,
}

/// Result of building a store from raw records.
#[derive(Debug, Clone, Default)]
pub struct StoreBuild {
    pub store: DocumentStore,
    pub rejected: Vec<MalformedRecord>,
    /// Records that replaced an earlier record with the same URL.
    pub duplicates: usize,
}

impl DocumentStore {
    /// Validate and index raw content records.
    #[must_use]
    pub fn build(records: &[Value]) -> StoreBuild {
        let mut store = Self::default();
        let mut rejected = Vec::new();
        let mut duplicates = 0;

        for (index, value) in records.iter().enumerate() {
            match parse_document(index, value) {
                Ok(document) => {
                    if store.insert(document) {
                        duplicates += 1;
                    }
                }
                Err(record) => {
                    debug!(%record, "skipping document");
                    rejected.push(record);
                }
            }
        }

        StoreBuild {
            store,
            rejected,
            duplicates,
        }
    }

    /// Insert a document. Returns `true` if it replaced one with the same URL.
    pub fn insert(&mut self, document: Document) -> bool {
        if let Some(&position) = self.index.get(&document.url) {
            debug!(url = %document.url, "duplicate document url, keeping latest");
            self.documents[position] = document;
            return true;
        }
        self.index.insert(document.url.clone(), self.documents.len());
        self.documents.push(document);
        false
    }

    #[must_use]
    pub fn get(&self, url: &str) -> Option<&Document> {
        self.index.get(url).map(|&i| &self.documents[i])
    }

    /// Insertion position of the document with this URL.
    #[must_use]
    pub fn position(&self, url: &str) -> Option<usize> {
        self.index.get(url).copied()
    }

    #[must_use]
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl FromIterator<Document> for DocumentStore {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        let mut store = Self::default();
        for document in iter {
            store.insert(document);
        }
        store
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn record(id: u32, url: &str, body: &str) -> Value {
        json!({
            "id": id,
            "link": url,
            "date": "2024-01-01T00:00:00",
            "modified": "2024-06-01T00:00:00",
            "title": {"rendered": format!("Post {id}")},
            "content": {"rendered": body},
        })
    }

    #[test]
    fn builds_lookup_in_input_order() {
        let built = DocumentStore::build(&[
            record(1, "/b", ""),
            record(2, "/a", ""),
            record(3, "/c", ""),
        ]);

        let urls: Vec<&str> = built.store.iter().map(|d| d.url.as_str()).collect();
        assert_eq!(urls, vec!["/b", "/a", "/c"]);
        assert_eq!(built.store.get("/a").unwrap().id, "2");
        assert_eq!(built.store.position("/c"), Some(2));
        assert!(built.rejected.is_empty());
        assert_eq!(built.duplicates, 0);
    }

    #[test]
    fn duplicate_url_keeps_latest_content_at_first_position() {
        let built = DocumentStore::build(&[
            record(1, "/a", "old body"),
            record(2, "/b", ""),
            record(3, "/a", "new body"),
        ]);

        assert_eq!(built.store.len(), 2);
        assert_eq!(built.duplicates, 1);
        assert_eq!(built.store.position("/a"), Some(0));
        let a = built.store.get("/a").unwrap();
        assert_eq!(a.body, "new body");
        assert_eq!(a.id, "3");
    }

    #[test]
    fn records_without_url_or_timestamp_are_rejected() {
        let built = DocumentStore::build(&[
            json!({"id": 1, "date": "2024-01-01", "modified": "2024-01-01"}),
            json!({"id": 2, "link": "/b", "modified": "2024-01-01"}),
            record(3, "/c", ""),
        ]);

        assert_eq!(built.store.len(), 1);
        let indices: Vec<usize> = built.rejected.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(built.rejected[1].key.as_deref(), Some("/b"));
    }
}
