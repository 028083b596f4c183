use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordStats {
    pub mean_length: f64,
    pub max_length: usize,
    pub min_length: usize,
}

impl WordStats {
    /// Computes length statistics over `words`, counting characters rather than bytes.
    /// An empty slice yields all-zero stats.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        let lengths: Vec<usize> = words.iter().map(|w| w.as_ref().chars().count()).collect();

        let (Some(&max_length), Some(&min_length)) = (lengths.iter().max(), lengths.iter().min())
        else {
            return Self::default();
        };

        let total: usize = lengths.iter().sum();
        Self {
            mean_length: total as f64 / lengths.len() as f64,
            max_length,
            min_length,
        }
    }
}

/// Outcome of processing one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessResult {
    pub message: String,
    pub words: Vec<String>,
    pub word_count: usize,
    pub word_stats: WordStats,
    /// First line of the loaded config resource
    pub config: String,
}

/// Report from the optional network probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub url: String,
    pub status: u16,
    pub rate_limit_url: Option<String>,
}
