//! Process-wide memo of compiled date patterns.
//!
//! Entries are built on first use per `(pattern, lenient)` and never
//! evicted. Compilation happens outside the map's shard lock; when two
//! threads race on the same key, the first insert wins and both get the
//! same `Arc`.

use std::sync::{Arc, LazyLock};

use dashmap::DashMap;

use super::pattern::DatePattern;
use crate::error::CoerceResult;

static PATTERNS: LazyLock<PatternCache> = LazyLock::new(PatternCache::new);

/// Compiled pattern for `(pattern, lenient)`, compiling it on first use.
pub fn compiled(pattern: &str, lenient: bool) -> CoerceResult<Arc<DatePattern>> {
    PATTERNS.get_or_compile(pattern, lenient)
}

/// Number of cached compiled patterns
pub fn len() -> usize {
    PATTERNS.strict.len() + PATTERNS.lenient.len()
}

struct PatternCache {
    strict: DashMap<String, Arc<DatePattern>>,
    lenient: DashMap<String, Arc<DatePattern>>,
}

impl PatternCache {
    fn new() -> Self {
        Self {
            strict: DashMap::new(),
            lenient: DashMap::new(),
        }
    }

    fn get_or_compile(&self, pattern: &str, lenient: bool) -> CoerceResult<Arc<DatePattern>> {
        let map = if lenient { &self.lenient } else { &self.strict };

        if let Some(hit) = map.get(pattern) {
            return Ok(Arc::clone(hit.value()));
        }

        let compiled = Arc::new(DatePattern::compile(pattern, lenient)?);
        let entry = map.entry(pattern.to_owned()).or_insert(compiled);
        tracing::trace!(pattern, lenient, "cached date pattern");
        Ok(Arc::clone(entry.value()))
    }
}
