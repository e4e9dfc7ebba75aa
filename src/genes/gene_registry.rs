use crate::logical_function::{InputPair, StateLevel};

pub type GeneId = usize;

/// A gene with fixed activator and inhibitor levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gene {
    id: GeneId,
    activators: StateLevel,
    inhibitors: StateLevel,
}

impl Gene {
    pub fn new(id: GeneId, activators: StateLevel, inhibitors: StateLevel) -> Self {
        Self { id, activators, inhibitors }
    }

    pub fn get_id(&self) -> GeneId {
        self.id
    }

    pub fn get_activators(&self) -> StateLevel {
        self.activators
    }

    pub fn get_inhibitors(&self) -> StateLevel {
        self.inhibitors
    }

    pub fn input_pair(&self) -> InputPair {
        InputPair::new(self.activators, self.inhibitors)
    }

    /// Column label used in reports, numbered from 1.
    pub fn label(&self) -> String {
        format!("Gene{}", self.id + 1)
    }
}

/// The canonical gene set: one gene per input pair, id = canonical position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneRegistry {
    genes: Vec<Gene>,
}

impl GeneRegistry {
    pub fn canonical() -> Self {
        let genes = InputPair::canonical()
            .iter()
            .enumerate()
            .map(|(id, pair)| Gene::new(id, pair.activator, pair.inhibitor))
            .collect();
        Self { genes }
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn get(&self, id: GeneId) -> Option<&Gene> {
        self.genes.get(id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Gene> {
        self.genes.iter()
    }

    pub fn genes(&self) -> &[Gene] {
        &self.genes
    }

    pub fn labels(&self) -> Vec<String> {
        self.genes.iter().map(Gene::label).collect()
    }
}

impl<'a> IntoIterator for &'a GeneRegistry {
    type Item = &'a Gene;
    type IntoIter = std::slice::Iter<'a, Gene>;

    fn into_iter(self) -> Self::IntoIter {
        self.genes.iter()
    }
}
