//! Retrieval-Augmented Query Use Case
//!
//! Per request: consult the response cache, embed the question, run the
//! owner-scoped similarity search, synthesize an answer from the retrieved
//! context, and write the result back to the cache best-effort. Exactly one
//! embedding call, one store call, and at most one completion call.

use crate::response_cache::ResponseCache;
use rgw_domain::constants::{DEFAULT_MATCH_LIMIT, DEFAULT_MATCH_THRESHOLD};
use rgw_domain::error::Result;
use rgw_domain::ports::providers::{ChunkStore, CompletionProvider, EmbeddingProvider};
use rgw_domain::value_objects::{ChunkMatch, SimilarityQuery, UserId};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::debug;

/// System instruction for answer synthesis
const SYSTEM_PROMPT: &str = "You are a careful assistant. Answer the question using only the \
     provided context excerpts. If the context does not contain the answer, say so.";

/// Answer returned when retrieval finds nothing above the threshold
const NO_CONTEXT_ANSWER: &str =
    "I could not find anything in your documents that answers this question.";

/// A retrieval-augmented answer with its supporting matches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryAnswer {
    /// Synthesized answer text
    pub answer: String,
    /// Matches the answer was synthesized from, ranked by similarity
    pub sources: Vec<ChunkMatch>,
    /// Whether this response was served from the cache
    pub cached: bool,
}

/// Query service
pub struct QueryService {
    cache: ResponseCache,
    embeddings: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn ChunkStore>,
    completions: Arc<dyn CompletionProvider>,
}

impl QueryService {
    /// Create a query service with injected collaborators
    pub fn new(
        cache: ResponseCache,
        embeddings: Arc<dyn EmbeddingProvider>,
        store: Arc<dyn ChunkStore>,
        completions: Arc<dyn CompletionProvider>,
    ) -> Self {
        Self {
            cache,
            embeddings,
            store,
            completions,
        }
    }

    /// Answer `question` for `owner`, scoped to their documents
    pub async fn answer(
        &self,
        owner: UserId,
        question: &str,
        threshold: Option<f32>,
        limit: Option<usize>,
    ) -> Result<QueryAnswer> {
        let threshold = threshold.unwrap_or(DEFAULT_MATCH_THRESHOLD);
        let limit = limit.unwrap_or(DEFAULT_MATCH_LIMIT);

        // Tuning parameters are part of the cached identity: the same
        // question under a different threshold is a different query.
        let cache_content = format!("{question}\n{threshold}\n{limit}");
        if let Some(mut hit) = self.cache.get::<QueryAnswer>(owner, &cache_content).await {
            debug!(owner = %owner, "query served from cache");
            hit.cached = true;
            return Ok(hit);
        }

        let embedding = self.embeddings.embed(question).await?;
        let query = SimilarityQuery::scoped(owner, embedding.vector, threshold, limit);
        query.validate()?;
        let matches = self.store.search(&query).await?;

        let answer = if matches.is_empty() {
            NO_CONTEXT_ANSWER.to_string()
        } else {
            let prompt = build_prompt(question, &matches);
            self.completions.complete(SYSTEM_PROMPT, &prompt).await?
        };

        let response = QueryAnswer {
            answer,
            sources: matches,
            cached: false,
        };
        // Fire-and-forget with respect to correctness: a failed write never
        // invalidates the response.
        self.cache.put(owner, &cache_content, &response).await;
        Ok(response)
    }
}

/// Assemble the user prompt from the question and numbered context excerpts
fn build_prompt(question: &str, matches: &[ChunkMatch]) -> String {
    let mut prompt = String::from("Context excerpts:\n");
    for (i, m) in matches.iter().enumerate() {
        let _ = writeln!(prompt, "[{}] {}", i + 1, m.content);
    }
    let _ = write!(prompt, "\nQuestion: {question}");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_match(content: &str) -> ChunkMatch {
        ChunkMatch {
            id: uuid::Uuid::new_v4(),
            document_id: uuid::Uuid::new_v4(),
            content: content.to_string(),
            metadata: serde_json::Value::Null,
            similarity: 0.9,
        }
    }

    #[test]
    fn prompt_numbers_excerpts_and_ends_with_question() {
        let matches = vec![sample_match("first"), sample_match("second")];
        let prompt = build_prompt("why?", &matches);
        assert!(prompt.contains("[1] first\n"));
        assert!(prompt.contains("[2] second\n"));
        assert!(prompt.ends_with("Question: why?"));
    }
}
