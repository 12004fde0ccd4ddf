use itertools::Itertools;
use serde::Serialize;
use std::collections::HashMap;

/// Bidirectional IR line ↔ source line index.
///
/// Both directions are multi-maps: sequences keep duplicates and discovery
/// order. Every resolved reference is recorded in both directions at once, so
/// `(ir, src)` is in `forward` exactly when `(src, ir)` is in `backward`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineMapping {
    forward: HashMap<u32, Vec<u32>>,
    backward: HashMap<u32, Vec<u32>>,
}

impl LineMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `ir_line` originates from `source_line`.
    pub fn record(&mut self, ir_line: u32, source_line: u32) {
        self.forward.entry(ir_line).or_default().push(source_line);
        self.backward.entry(source_line).or_default().push(ir_line);
    }

    /// Source lines for an IR line, empty when unmapped.
    pub fn lookup_forward(&self, ir_line: u32) -> &[u32] {
        self.forward.get(&ir_line).map(Vec::as_slice).unwrap_or(&[])
    }

    /// IR lines for a source line, empty when unmapped.
    pub fn lookup_backward(&self, source_line: u32) -> &[u32] {
        self.backward
            .get(&source_line)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// Number of recorded (ir, source) pairs.
    pub fn pair_count(&self) -> usize {
        self.forward.values().map(Vec::len).sum()
    }

    /// Forward entries ordered by IR line.
    pub fn forward_entries(&self) -> impl Iterator<Item = (u32, &[u32])> {
        self.forward
            .iter()
            .sorted_by_key(|(line, _)| **line)
            .map(|(line, targets)| (*line, targets.as_slice()))
    }

    /// Backward entries ordered by source line.
    pub fn backward_entries(&self) -> impl Iterator<Item = (u32, &[u32])> {
        self.backward
            .iter()
            .sorted_by_key(|(line, _)| **line)
            .map(|(line, targets)| (*line, targets.as_slice()))
    }
}

/// Serialized as two ordered maps keyed by line number.
impl Serialize for LineMapping {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        use std::collections::BTreeMap;

        let forward: BTreeMap<_, _> = self.forward.iter().collect();
        let backward: BTreeMap<_, _> = self.backward.iter().collect();
        let mut state = serializer.serialize_struct("LineMapping", 2)?;
        state.serialize_field("forward", &forward)?;
        state.serialize_field("backward", &backward)?;
        state.end()
    }
}

/// Free-function form of [`LineMapping::lookup_forward`].
pub fn lookup_forward(mapping: &LineMapping, ir_line: u32) -> &[u32] {
    mapping.lookup_forward(ir_line)
}

/// Free-function form of [`LineMapping::lookup_backward`].
pub fn lookup_backward(mapping: &LineMapping, source_line: u32) -> &[u32] {
    mapping.lookup_backward(source_line)
}
