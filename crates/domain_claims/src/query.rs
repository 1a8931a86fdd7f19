//! Query result encoding for `queryAllClaims`
//!
//! The array is assembled byte by byte rather than through a serializer:
//! keys are written verbatim and record bytes are spliced in untouched, so a
//! record that is not valid JSON yields a malformed array. Existing consumers
//! depend on this exact shape:
//!
//! ```text
//! [{"Key":"CLAIM0", "Record":{...}},{"Key":"CLAIM1", "Record":{...}}]
//! ```

/// Accumulates `{Key, Record}` members into a JSON array
#[derive(Debug)]
pub struct QueryResultBuffer {
    buffer: Vec<u8>,
    members: usize,
}

impl Default for QueryResultBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryResultBuffer {
    pub fn new() -> Self {
        Self {
            buffer: vec![b'['],
            members: 0,
        }
    }

    /// Appends one member
    pub fn push(&mut self, key: &str, record: &[u8]) {
        if self.members > 0 {
            self.buffer.push(b',');
        }
        self.buffer.extend_from_slice(br#"{"Key":""#);
        self.buffer.extend_from_slice(key.as_bytes());
        self.buffer.push(b'"');
        self.buffer.extend_from_slice(br#", "Record":"#);
        self.buffer.extend_from_slice(record);
        self.buffer.push(b'}');
        self.members += 1;
    }

    /// Number of members written so far
    pub fn len(&self) -> usize {
        self.members
    }

    pub fn is_empty(&self) -> bool {
        self.members == 0
    }

    /// Closes the array and returns its bytes
    pub fn finish(mut self) -> Vec<u8> {
        self.buffer.push(b']');
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_array() {
        assert_eq!(QueryResultBuffer::new().finish(), b"[]");
    }

    #[test]
    fn test_members_separated_without_trailing_comma() {
        let mut buffer = QueryResultBuffer::new();
        buffer.push("CLAIM0", br#"{"a":"1"}"#);
        buffer.push("CLAIM1", br#"{"b":"2"}"#);

        assert_eq!(buffer.len(), 2);
        assert_eq!(
            String::from_utf8(buffer.finish()).unwrap(),
            r#"[{"Key":"CLAIM0", "Record":{"a":"1"}},{"Key":"CLAIM1", "Record":{"b":"2"}}]"#
        );
    }

    #[test]
    fn test_record_bytes_spliced_raw() {
        let mut buffer = QueryResultBuffer::new();
        buffer.push("k", b"not json");

        assert_eq!(buffer.finish(), br#"[{"Key":"k", "Record":not json}]"#.to_vec());
    }
}
