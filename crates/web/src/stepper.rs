use mergeinsert::chain::{self, Chains};
use mergeinsert::insert::{ChainInserter, Inserted};
use mergeinsert::merge;
use mergeinsert::pairs::{self, Pair};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum ParseError {
    #[error("'{0}' is not a 32-bit integer")]
    NotAnInteger(String),
}

/// Parses integers separated by commas and/or whitespace.
pub(crate) fn parse_values(text: &str) -> Result<Vec<i32>, ParseError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse()
                .map_err(|_| ParseError::NotAnInteger(token.to_string()))
        })
        .collect()
}

pub(crate) fn format_values(values: &[i32]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn format_pairs(pairs: &[Pair<i32>]) -> String {
    pairs
        .iter()
        .map(|p| format!("({} {})", p.small, p.large))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The chain right after one insertion (or before the first one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Frame {
    pub(crate) chain: Vec<i32>,
    pub(crate) pending: Vec<(usize, i32)>,
    pub(crate) step: Option<Inserted>,
}

impl Frame {
    pub(crate) fn caption(&self) -> String {
        let Some(step) = self.step else {
            return "main chain and pend list after extraction".to_string();
        };
        let value = self.chain[step.position];
        match step.window_end {
            None => format!(
                "pend[{}] = {value} seeded at the front, no comparison needed",
                step.pend_index
            ),
            Some(end) => format!(
                "pend[{}] = {value} inserted at {} after searching [0, {end}]",
                step.pend_index, step.position
            ),
        }
    }

    /// CSS class for chain cell `i`: the new element, the cells its search
    /// could look at, or nothing.
    pub(crate) fn cell_class(&self, i: usize) -> &'static str {
        let Some(step) = self.step else {
            return "";
        };
        if i == step.position {
            return "inserted";
        }
        match step.window_end {
            // Cells after the new element moved up by one.
            Some(end) if i <= end + 1 => "window",
            _ => "",
        }
    }
}

/// One sort, recorded stage by stage for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Walkthrough {
    input: Vec<i32>,
    split: Vec<Pair<i32>>,
    sorted_pairs: Vec<Pair<i32>>,
    leftover: Option<i32>,
    chains: Chains<i32>,
    frames: Vec<Frame>,
    comparisons: usize,
}

impl Walkthrough {
    pub(crate) fn new(input: Vec<i32>) -> Self {
        let mut comparisons = 0usize;
        let mut is_less = |a: &i32, b: &i32| {
            comparisons += 1;
            a < b
        };

        let mut work = input.clone();
        pairs::sort_within_pairs(&mut work, &mut is_less);
        let (split, leftover) = pairs::into_pairs(work);
        let sorted_pairs = merge::merge_sort_pairs(split.clone(), &mut is_less);
        let chains = chain::extract(sorted_pairs.clone(), leftover);

        let mut inserter = ChainInserter::new(chains.clone());
        let mut frames = vec![Self::snapshot(&inserter, None)];
        while let Some(step) = inserter.step(&mut is_less) {
            frames.push(Self::snapshot(&inserter, Some(step)));
        }

        Self {
            input,
            split,
            sorted_pairs,
            leftover,
            chains,
            frames,
            comparisons,
        }
    }

    fn snapshot(inserter: &ChainInserter<i32>, step: Option<Inserted>) -> Frame {
        Frame {
            chain: inserter.main_chain().to_vec(),
            pending: inserter.remaining().map(|(i, &v)| (i, v)).collect(),
            step,
        }
    }

    pub(crate) fn input(&self) -> &[i32] {
        &self.input
    }

    pub(crate) fn split_pairs(&self) -> &[Pair<i32>] {
        &self.split
    }

    pub(crate) fn sorted_pairs(&self) -> &[Pair<i32>] {
        &self.sorted_pairs
    }

    pub(crate) fn leftover(&self) -> Option<i32> {
        self.leftover
    }

    pub(crate) fn chains(&self) -> &Chains<i32> {
        &self.chains
    }

    /// Never empty: the first frame shows the chain before any insertion.
    pub(crate) fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub(crate) fn comparisons(&self) -> usize {
        self.comparisons
    }
}
