//! In-memory posting list: a vector-backed [`PostingCursor`] implementation with
//! galloping skip-ahead. Used to run conjunctive queries without an index backend,
//! and as the reference cursor in tests.

use crate::cursor::{DocId, PostingCursor, ScoredPostingCursor, TERMINATED};

/// Posting list held in memory as a sorted `Vec<DocId>` plus one score per posting.
#[derive(Clone, Debug)]
pub struct RamPostingList {
    postings: Vec<DocId>,
    scores: Vec<f32>,
    position: usize,
}

impl RamPostingList {
    /// Creates a cursor over `postings`, which must be strictly increasing.
    /// Every posting contributes a constant score of `1.0`, so the aggregate score
    /// of a scored conjunctive query equals the number of matched terms.
    pub fn new(postings: Vec<DocId>) -> RamPostingList {
        let scores = vec![1.0; postings.len()];
        RamPostingList::with_scores(postings, scores)
    }

    /// Creates a cursor over `postings` with an explicit score contribution per
    /// posting. `postings` must be strictly increasing and `scores` must have the
    /// same length.
    pub fn with_scores(postings: Vec<DocId>, scores: Vec<f32>) -> RamPostingList {
        debug_assert_eq!(postings.len(), scores.len());
        debug_assert!(
            postings.windows(2).all(|pair| pair[0] < pair[1]),
            "postings must be strictly increasing"
        );

        RamPostingList {
            postings,
            scores,
            position: 0,
        }
    }
}

impl PostingCursor for RamPostingList {
    #[inline(always)]
    fn docid(&self) -> DocId {
        if self.position < self.postings.len() {
            self.postings[self.position]
        } else {
            TERMINATED
        }
    }

    #[inline(always)]
    fn next(&mut self) {
        if self.position < self.postings.len() {
            self.position += 1;
        }
    }

    fn next_geq(&mut self, target: DocId) {
        if self.docid() >= target {
            return;
        }

        // gallop forward in doubling steps until the target is bracketed,
        // then binary-search the bracketed range
        let mut start = self.position;
        let mut step = 1;
        let mut end = start + step;
        while end < self.postings.len() && self.postings[end] < target {
            start = end;
            step <<= 1;
            end = start + step;
        }
        let end = end.min(self.postings.len());

        self.position = start + self.postings[start..end].partition_point(|&docid| docid < target);
        debug_assert!(self.docid() >= target);
    }

    #[inline(always)]
    fn size(&self) -> usize {
        self.postings.len()
    }
}

impl ScoredPostingCursor for RamPostingList {
    #[inline(always)]
    fn score(&self) -> f32 {
        debug_assert!(self.position < self.scores.len());
        self.scores[self.position]
    }
}
