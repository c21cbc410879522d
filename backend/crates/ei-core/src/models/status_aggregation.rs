use crate::{Repo, TaggedStatusChange};

use serde::{Deserialize, Serialize};

/// All status changes keyed by source collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct StatusAggregation {
    pub eip: Vec<TaggedStatusChange>,
    pub erc: Vec<TaggedStatusChange>,
    pub rip: Vec<TaggedStatusChange>,
}

impl StatusAggregation {
    /// Mutable access to the bucket for a given collection
    pub fn bucket_mut(&mut self, repo: Repo) -> &mut Vec<TaggedStatusChange> {
        match repo {
            Repo::Eip => &mut self.eip,
            Repo::Erc => &mut self.erc,
            Repo::Rip => &mut self.rip,
        }
    }

    pub fn total(&self) -> usize {
        self.eip.len() + self.erc.len() + self.rip.len()
    }
}
