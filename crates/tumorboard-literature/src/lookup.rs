//! Literature lookup seam.

use async_trait::async_trait;
use tumorboard_common::Result;

/// Resolves a PubMed id to the record's title.
#[async_trait]
pub trait LiteratureLookup: Send + Sync {
    /// Fetch the title of the record with this PMID.
    async fn title_for_pmid(&self, pmid: u64) -> Result<String>;
}
