use std::time::Duration;

/// Resource ceilings and execution options of a [`Reasoner`](crate::Reasoner).
///
/// All ceilings are disabled by default, and rules are evaluated in parallel.
///
/// ```
/// # use closure_reasoner::ReasonerConfig;
/// # use std::time::Duration;
/// let config = ReasonerConfig::default()
///     .with_max_triples(1_000_000)
///     .with_timeout(Duration::from_secs(60));
/// assert_eq!(config.max_triples, Some(1_000_000));
/// assert!(config.parallel);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReasonerConfig {
    /// Maximum number of iterations
    pub max_iterations: Option<usize>,
    /// Maximum number of triples in the store;
    /// insertion stops as soon as the store reaches that size
    pub max_triples: Option<usize>,
    /// Maximum number of new candidate triples produced by a single iteration;
    /// an iteration exceeding it is discarded
    pub max_candidates: Option<usize>,
    /// Maximum duration of the closure, checked between iterations
    pub timeout: Option<Duration>,
    /// Whether rules are evaluated in parallel on the rayon thread pool
    pub parallel: bool,
}

impl ReasonerConfig {
    /// Set [`max_iterations`](Self::max_iterations).
    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = Some(max);
        self
    }

    /// Set [`max_triples`](Self::max_triples).
    pub fn with_max_triples(mut self, max: usize) -> Self {
        self.max_triples = Some(max);
        self
    }

    /// Set [`max_candidates`](Self::max_candidates).
    pub fn with_max_candidates(mut self, max: usize) -> Self {
        self.max_candidates = Some(max);
        self
    }

    /// Set [`timeout`](Self::timeout).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set [`parallel`](Self::parallel).
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

impl Default for ReasonerConfig {
    fn default() -> Self {
        ReasonerConfig {
            max_iterations: None,
            max_triples: None,
            max_candidates: None,
            timeout: None,
            parallel: true,
        }
    }
}
