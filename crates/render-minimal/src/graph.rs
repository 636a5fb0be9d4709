/// Body of one indirect object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectBody {
    /// A structural dictionary, already serialized (e.g. `<< /Type /Catalog ... >>`).
    Dictionary(String),
    /// A content stream. `/Length` is derived from `data` at write time.
    Stream { extra_entries: String, data: Vec<u8> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectRecord {
    pub id: u32,
    pub body: ObjectBody,
}

/// Ordered set of indirect objects. Identifiers are handed out sequentially
/// from 1, so they are always contiguous.
#[derive(Debug, Clone, Default)]
pub struct ObjectGraph {
    records: Vec<ObjectRecord>,
}

impl ObjectGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifier the next pushed object will receive.
    pub fn next_id(&self) -> u32 {
        self.records.len() as u32 + 1
    }

    pub fn push(&mut self, body: ObjectBody) -> u32 {
        let id = self.next_id();
        self.records.push(ObjectRecord { id, body });
        id
    }

    pub fn push_dictionary(&mut self, dictionary: impl Into<String>) -> u32 {
        self.push(ObjectBody::Dictionary(dictionary.into()))
    }

    pub fn push_stream(&mut self, data: Vec<u8>) -> u32 {
        self.push(ObjectBody::Stream {
            extra_entries: String::new(),
            data,
        })
    }

    pub fn records(&self) -> &[ObjectRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_sequential_from_one() {
        let mut graph = ObjectGraph::new();
        assert_eq!(graph.next_id(), 1);
        assert_eq!(graph.push_dictionary("<< >>"), 1);
        assert_eq!(graph.push_stream(b"BT ET".to_vec()), 2);
        assert_eq!(graph.push_dictionary("<< >>"), 3);
        let ids: Vec<u32> = graph.records().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
