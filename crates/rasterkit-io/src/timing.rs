use std::time::{Duration, Instant};

/// A labelled duration, typically the average time of an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimingRecord {
    /// The name of the timed operation.
    pub name: String,
    /// The measured duration.
    pub elapsed: Duration,
}

impl TimingRecord {
    /// Creates a new `TimingRecord`.
    pub fn new(name: impl Into<String>, elapsed: Duration) -> Self {
        Self {
            name: name.into(),
            elapsed,
        }
    }
}

impl std::fmt::Display for TimingRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<16}: {}ms", self.name, self.elapsed.as_millis())
    }
}

/// Run `f` repeatedly and measure its average wall clock time.
///
/// # Arguments
///
/// * `name` - The label of the returned record.
/// * `iterations` - How many times to run `f`; zero is treated as one.
/// * `f` - The operation to time.
///
/// # Returns
///
/// The timing record with the average duration and the result of the last run.
///
/// # Examples
///
/// ```
/// use rasterkit_io::timing::time_average;
///
/// let (record, sum) = time_average("sum", 3, || (0..100u32).sum::<u32>());
///
/// assert_eq!(record.name, "sum");
/// assert_eq!(sum, 4950);
/// ```
pub fn time_average<T>(
    name: impl Into<String>,
    iterations: u32,
    mut f: impl FnMut() -> T,
) -> (TimingRecord, T) {
    let iterations = iterations.max(1);

    let start = Instant::now();
    let mut result = f();
    for _ in 1..iterations {
        result = f();
    }
    let elapsed = start.elapsed() / iterations;

    let record = TimingRecord::new(name, elapsed);
    log::debug!("{} took {:?} on average over {} runs", record.name, elapsed, iterations);

    (record, result)
}
