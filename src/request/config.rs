use super::FieldPolicy;

/// Bounds and decoding policy used by [`crate::finder::Finder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Smallest accepted marker count, inclusive.
    pub min_markers: usize,
    /// Largest accepted marker count, inclusive.
    pub max_markers: usize,
    pub policy: FieldPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_markers: 1,
            max_markers: 99,
            policy: FieldPolicy::default(),
        }
    }
}

impl Config {
    pub fn with_policy(mut self, policy: FieldPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn accepts(&self, count: usize) -> bool {
        (self.min_markers..=self.max_markers).contains(&count)
    }
}
