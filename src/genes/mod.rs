mod gene_registry;

pub use gene_registry::{Gene, GeneId, GeneRegistry};
