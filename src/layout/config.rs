//! Configuration for the placement engine

/// Configuration options for a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Attempts allowed per word still queued after the seed
    pub budget_per_word: usize,

    /// Number of words after the seed that keep caller order instead of longest-first
    pub preserve_order: usize,

    /// Stop early once a full pass over the queue places nothing
    pub detect_stuck: bool,

    /// Explicit grid size; by default the grid is square with a side equal to the total tile count
    pub grid_size: Option<(usize, usize)>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            budget_per_word: 10,
            preserve_order: 0,
            detect_stuck: true,
            grid_size: None,
        }
    }
}

impl GenerationConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the attempt budget per queued word
    pub fn with_budget_per_word(mut self, budget: usize) -> Self {
        self.budget_per_word = budget;
        self
    }

    /// Keep the first `count` words after the seed in caller order
    pub fn with_preserve_order(mut self, count: usize) -> Self {
        self.preserve_order = count;
        self
    }

    /// Enable or disable stuck detection
    pub fn with_stuck_detection(mut self, enabled: bool) -> Self {
        self.detect_stuck = enabled;
        self
    }

    /// Use a fixed grid size
    pub fn with_grid_size(mut self, width: usize, height: usize) -> Self {
        self.grid_size = Some((width, height));
        self
    }

    /// Grid dimensions for a run over `total_tiles` tiles
    pub fn grid_dimensions(&self, total_tiles: usize) -> (usize, usize) {
        self.grid_size.unwrap_or((total_tiles, total_tiles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GenerationConfig::default();
        assert_eq!(config.budget_per_word, 10);
        assert_eq!(config.preserve_order, 0);
        assert!(config.detect_stuck);
        assert_eq!(config.grid_size, None);
        assert_eq!(config.grid_dimensions(12), (12, 12));
    }

    #[test]
    fn test_builder_pattern() {
        let config = GenerationConfig::new()
            .with_budget_per_word(3)
            .with_preserve_order(2)
            .with_stuck_detection(false)
            .with_grid_size(20, 8);

        assert_eq!(config.budget_per_word, 3);
        assert_eq!(config.preserve_order, 2);
        assert!(!config.detect_stuck);
        assert_eq!(config.grid_dimensions(100), (20, 8));
    }
}
