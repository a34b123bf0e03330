use rand::Rng;
use rand::distributions::{Distribution, Uniform};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum InputError {
    #[error("empty value range: lowest ({lowest}) is greater than highest ({highest})")]
    EmptyRange { lowest: i32, highest: i32 },
}

/// Where the numbers to sort come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Values given on the command line, sorted as-is.
    Explicit(Vec<i32>),
    /// `count` values drawn uniformly from `lowest..=highest`.
    Random {
        count: usize,
        lowest: i32,
        highest: i32,
    },
}

impl Source {
    /// Produces the input sequence, drawing from `rng` for random sources.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::EmptyRange`] when a random source has
    /// `lowest > highest`.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<i32>, InputError> {
        match *self {
            Self::Explicit(ref values) => Ok(values.clone()),
            Self::Random {
                count,
                lowest,
                highest,
            } => {
                if lowest > highest {
                    return Err(InputError::EmptyRange { lowest, highest });
                }
                let dist = Uniform::new_inclusive(lowest, highest);
                Ok(dist.sample_iter(rng).take(count).collect())
            }
        }
    }
}

/// Renders values space-separated, the way the sorted output is printed.
pub fn format_values(values: &[i32]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
