use crate::ports::RecordStore;
use quartz_dns_domain::{
    split_apex, Answer, FallbackAnswers, Question, RecordData, Reply, ReplySource,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// The resolution engine: one synchronous pass per question, no retries and
/// no cross-query state. Every failure path converges on the fallback pair,
/// so every question gets an answer and no resolution failure reaches the
/// transport as an error.
///
/// The store handle and the fallback answers are injected at construction;
/// independent instances (e.g. against distinct fixture stores) can coexist.
pub struct ResolveQueryUseCase {
    store: Arc<dyn RecordStore>,
    fallback: FallbackAnswers,
}

impl ResolveQueryUseCase {
    pub fn new(store: Arc<dyn RecordStore>, fallback: FallbackAnswers) -> Self {
        Self { store, fallback }
    }

    pub async fn execute(&self, question: &Question) -> Reply {
        let split = match split_apex(&question.name) {
            Ok(split) => split,
            Err(e) => {
                debug!(name = %question.name, error = %e, "Classification failed, serving fallback");
                return self.fallback.reply(&question.name);
            }
        };

        debug!(
            record_type = %question.record_type,
            apex = %split.apex,
            subdomain = %split.subdomain,
            "Resolving question"
        );

        let rows = match self
            .store
            .lookup(&split.apex, question.record_type, &split.subdomain)
            .await
        {
            Ok(rows) => rows,
            Err(e) => {
                warn!(apex = %split.apex, error = %e, "Record lookup failed, serving fallback");
                return self.fallback.reply(&question.name);
            }
        };

        // Per-row synthesis failures are skipped; the rest of the result set
        // still goes out.
        let mut answers = Vec::with_capacity(rows.len());
        for row in &rows {
            match RecordData::parse(row.record_type, &row.value) {
                Ok(data) => answers.push(Answer {
                    name: question.name.clone(),
                    ttl: self.fallback.ttl,
                    data,
                }),
                Err(e) => debug!(error = %e, "Skipping unparseable record row"),
            }
        }

        if answers.is_empty() {
            debug!(
                apex = %split.apex,
                subdomain = %split.subdomain,
                rows = rows.len(),
                "Nothing synthesized, serving fallback"
            );
            return self.fallback.reply(&question.name);
        }

        debug!(answers = answers.len(), "Resolved from record store");
        Reply {
            answers,
            source: ReplySource::Stored,
        }
    }
}
