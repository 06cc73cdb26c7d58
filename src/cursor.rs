//! Posting cursor capability: the boundary between the intersection engine and the
//! posting-list storage layer. Any backend (block-compressed, skip-list, in-memory)
//! that can report its current document id, advance, and skip ahead satisfies it.

/// Document identifier within an index.
pub type DocId = u32;

/// Docid reported by an exhausted cursor.
/// Larger than any valid `max_docid`, so the termination test `candidate < max_docid`
/// and the cross-cursor equality check remain plain integer comparisons.
pub const TERMINATED: DocId = DocId::MAX;

/// Stateful, forward-only iterator over one term's posting list, kept sorted by docid.
///
/// Contract required by the intersection engine:
/// - `docid` is non-decreasing across successive `next`/`next_geq` calls.
/// - Postings are strictly increasing (no duplicate docids within one list).
/// - Once exhausted, `docid` returns [`TERMINATED`] and never a smaller value again.
///
/// Violations are not defended against in release builds; the posting-list
/// construction layer is responsible for upholding them.
pub trait PostingCursor {
    /// Current posting position, or [`TERMINATED`] once the list is exhausted.
    fn docid(&self) -> DocId;

    /// Advance to the next posting. No-op once exhausted.
    fn next(&mut self);

    /// Advance to the first posting `>= target`. No-op if the current docid already
    /// satisfies the target. Never moves backward.
    /// Backends should implement this with skip pointers or galloping search;
    /// the sub-linear cost of conjunctive queries depends on it.
    fn next_geq(&mut self, target: DocId);

    /// Document frequency: the total number of postings in this list.
    /// Fixed for the lifetime of the cursor; used to order cursors so that the
    /// rarest term drives the intersection.
    fn size(&self) -> usize;
}

/// Posting cursor that additionally carries a per-posting relevance contribution,
/// e.g. a precomputed BM25 term score for the current document.
pub trait ScoredPostingCursor: PostingCursor {
    /// Contribution of the current posting to the aggregate document score.
    /// Only defined while the cursor is positioned on a valid posting.
    fn score(&self) -> f32;
}
