//! Compiled pattern cache shared across validations

use dashmap::DashMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

/// Counters describing cache usage
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternCacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Memoizes compiled regular expressions by source string.
///
/// Entries are never evicted. Concurrent callers may compile the same
/// pattern at the same time; the first stored matcher wins and every caller
/// gets that one back.
#[derive(Debug, Default)]
pub struct PatternCache {
    patterns: DashMap<String, Arc<Regex>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl PatternCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the compiled matcher for `pattern`, compiling it on first use.
    /// Patterns that fail to compile are not remembered.
    pub fn get_or_compile(&self, pattern: &str) -> Result<Arc<Regex>, regex::Error> {
        if let Some(entry) = self.patterns.get(pattern) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(Arc::clone(entry.value()));
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let compiled = Arc::new(Regex::new(pattern)?);
        debug!(pattern, "compiled validation pattern");

        let entry = self
            .patterns
            .entry(pattern.to_string())
            .or_insert(compiled);
        Ok(Arc::clone(entry.value()))
    }

    /// Check if a pattern has already been compiled
    pub fn contains(&self, pattern: &str) -> bool {
        self.patterns.contains_key(pattern)
    }

    /// Number of cached patterns
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Snapshot of hit/miss counters
    pub fn stats(&self) -> PatternCacheStats {
        PatternCacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.patterns.len(),
        }
    }
}
