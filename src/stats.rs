//! Statistics collection for minimax searches

use std::time::Duration;

/// Statistics collected during a search
#[derive(Debug, Clone)]
pub struct SearchStatistics {
    /// Number of positions whose value was computed
    pub nodes_visited: usize,

    /// Number of visited positions that were terminal
    pub terminal_nodes: usize,

    /// Number of times the remaining siblings of a node were skipped
    pub cutoffs: usize,

    /// Deepest ply reached below the root
    pub max_depth: usize,

    /// Total time spent searching
    pub total_time: Duration,
}

impl SearchStatistics {
    /// Creates a new, empty statistics object
    pub fn new() -> Self {
        SearchStatistics {
            nodes_visited: 0,
            terminal_nodes: 0,
            cutoffs: 0,
            max_depth: 0,
            total_time: Duration::from_secs(0),
        }
    }

    pub(crate) fn record_node(&mut self, depth: usize) {
        self.nodes_visited += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    /// Returns the number of nodes visited per second
    pub fn nodes_per_second(&self) -> f64 {
        if self.total_time.as_secs_f64() <= 0.0 {
            return 0.0;
        }
        self.nodes_visited as f64 / self.total_time.as_secs_f64()
    }

    /// Returns a summary of the statistics as a string
    pub fn summary(&self) -> String {
        format!(
            "Minimax Search Statistics:\n\
             - Nodes visited: {}\n\
             - Terminal nodes: {}\n\
             - Cutoffs: {}\n\
             - Max depth: {}\n\
             - Total time: {:.3} seconds\n\
             - Nodes per second: {:.1}",
            self.nodes_visited,
            self.terminal_nodes,
            self.cutoffs,
            self.max_depth,
            self.total_time.as_secs_f64(),
            self.nodes_per_second()
        )
    }
}

impl Default for SearchStatistics {
    fn default() -> Self {
        Self::new()
    }
}
