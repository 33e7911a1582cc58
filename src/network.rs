//! TagNetwork: one ingestion run over a prompt corpus

use crate::error::TagnetResult;
use crate::filter::NumberFilter;
use crate::graph::{Graph, PairAggregator};
use crate::index::{TagId, TagIndex, TagUsage};
use crate::prompt::extract_tags;
use tracing::{debug, info};

/// Owns the tag index and pair aggregator of a single run.
///
/// Each run starts from empty state; nothing is shared between networks.
/// Ingestion takes `&mut self`, so writers are serialized by the borrow
/// checker.
#[derive(Debug, Clone, Default)]
pub struct TagNetwork {
    index: TagIndex,
    pairs: PairAggregator,
    prompts: usize,
}

impl TagNetwork {
    /// Create a new run with empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract the tags of one prompt and ingest them
    pub fn ingest_prompt(&mut self, prompt: &str) -> TagnetResult<Vec<TagId>> {
        let tags = extract_tags(prompt);
        self.ingest_tags(tags.as_slice())
    }

    /// Register pre-extracted tags of one prompt and record their pairs
    pub fn ingest_tags<S: AsRef<str>>(&mut self, tags: &[S]) -> TagnetResult<Vec<TagId>> {
        let ids = self.index.register_many(tags)?;
        self.pairs.record_pairs(ids.iter().copied());
        self.prompts += 1;
        debug!(tags = ids.len(), "ingested prompt");
        Ok(ids)
    }

    /// Ingest every prompt, returning how many were ingested
    pub fn ingest_all<I, S>(&mut self, prompts: I) -> TagnetResult<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ingested = 0;
        for prompt in prompts {
            self.ingest_prompt(prompt.as_ref())?;
            ingested += 1;
        }
        info!(
            prompts = ingested,
            tags = self.index.len(),
            edges = self.pairs.distinct_edge_count(),
            "ingestion finished"
        );
        Ok(ingested)
    }

    /// Assemble the co-occurrence graph of everything ingested so far
    pub fn graph(&self) -> TagnetResult<Graph> {
        Graph::assemble(&self.index, &self.pairs)
    }

    /// Usage table, optionally restricted to counts matching `filter`
    pub fn usage(&self, filter: Option<&NumberFilter>) -> Vec<TagUsage> {
        let rows = self.index.usage_table();
        match filter {
            Some(filter) => rows.into_iter().filter(|row| filter.matches(row.count)).collect(),
            None => rows,
        }
    }

    pub fn index(&self) -> &TagIndex {
        &self.index
    }

    pub fn pairs(&self) -> &PairAggregator {
        &self.pairs
    }

    /// Number of prompts ingested
    pub fn prompt_count(&self) -> usize {
        self.prompts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Comparison;

    #[test]
    fn ingest_prompt_registers_and_pairs() {
        let mut network = TagNetwork::new();
        let ids = network
            .ingest_prompt(".imagine omicron ; vray ; HDR illumination ; contest winner")
            .unwrap();

        assert_eq!(ids, vec![TagId::new(0), TagId::new(1), TagId::new(2)]);
        assert_eq!(network.pairs().distinct_edge_count(), 3);
        assert_eq!(network.prompt_count(), 1);
    }

    #[test]
    fn repeated_tag_in_prompt_counts_but_does_not_self_pair() {
        let mut network = TagNetwork::new();
        network.ingest_tags(&["vray", "VRAY", "PBR"]).unwrap();

        assert_eq!(network.index().occurrence_count(TagId::new(0)), Some(2));
        assert_eq!(network.pairs().distinct_edge_count(), 1);
        assert_eq!(network.pairs().total_updates(), 1);
    }

    #[test]
    fn prompts_without_tags_are_counted() {
        let mut network = TagNetwork::new();
        let ingested = network.ingest_all(["no tags here", "s ; one"]).unwrap();

        assert_eq!(ingested, 2);
        assert_eq!(network.index().len(), 1);
        assert!(network.pairs().is_empty());
    }

    #[test]
    fn usage_with_filter() {
        let mut network = TagNetwork::new();
        network
            .ingest_all(["p ; a ; b", "q ; A ; c", "r ; a"])
            .unwrap();

        let all = network.usage(None);
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "a");
        assert_eq!(all[0].count, 3);

        let filter = NumberFilter::new(Comparison::Ge, 2);
        let frequent = network.usage(Some(&filter));
        assert_eq!(frequent.len(), 1);
        assert_eq!(frequent[0].name, "a");
    }

    #[test]
    fn graph_reflects_run() {
        let mut network = TagNetwork::new();
        network
            .ingest_all(["p ; VFX ; HDR", "q ; vfx ; hdr", "r ; HDR ; DSLR"])
            .unwrap();

        let graph = network.graph().unwrap();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edges()[0].weight, 1.0);
        assert_eq!(graph.edges()[1].weight, 0.5);
    }

    #[test]
    fn rejected_tags_do_not_count_as_prompt() {
        let mut network = TagNetwork::new();
        assert!(network.ingest_tags(&["ok", ""]).is_err());
        assert_eq!(network.prompt_count(), 0);
        assert!(network.index().is_empty());
    }
}
