//! Conjunctive (AND) query evaluation: exact intersection of posting lists via an
//! align-or-advance merge over independently skipping cursors.

use crate::cursor::{DocId, PostingCursor, ScoredPostingCursor};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Inline capacity of the per-query cursor view; queries rarely exceed this many terms.
pub(crate) const MAX_TERM_NUMBER: usize = 10;

/// Engine-private ordering of the caller's cursors: indices into the cursor slice,
/// sorted ascending by document frequency. The caller's slice is never reordered.
type OrderedCursors = SmallVec<[usize; MAX_TERM_NUMBER]>;

/// A matching document and its aggregate score, as returned by [`scored_and_query`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct ScoredResult {
    /// Document id present in every queried posting list.
    pub doc_id: DocId,
    /// Sum of the per-term score contributions for this document.
    pub score: f32,
}

/// Conjunctive query (intersection).
///
/// Returns the docids `< max_docid` present in **every** cursor's posting list,
/// in strictly increasing order. This variant does no scoring; for the scored
/// version see [`scored_and_query`].
///
/// Every cursor must already be positioned on its first posting (or at exhaustion).
/// The cursors are advanced in place; their order within the slice is not changed.
/// An empty slice yields an empty result.
pub fn and_query<C: PostingCursor>(cursors: &mut [C], max_docid: DocId) -> Vec<DocId> {
    let mut results = Vec::new();
    if cursors.is_empty() {
        return results;
    }

    intersect(cursors, max_docid, |_, _, candidate| {
        results.push(candidate);
    });
    results
}

/// Scored conjunctive query.
///
/// Like [`and_query`], but accumulates a score per matching document: the sum of
/// every cursor's [`score`](ScoredPostingCursor::score) contribution at that docid.
/// Scores are summed in ascending document-frequency order (ties keep the input
/// order of the slice), so the f32 sums are reproducible for a given input.
pub fn scored_and_query<C: ScoredPostingCursor>(
    cursors: &mut [C],
    max_docid: DocId,
) -> Vec<ScoredResult> {
    let mut results = Vec::new();
    if cursors.is_empty() {
        return results;
    }

    intersect(cursors, max_docid, |cursors, ordered, candidate| {
        // all cursors are aligned on candidate here; sum in view order
        let mut score = 0.0f32;
        for &cursor_index in ordered {
            score += cursors[cursor_index].score();
        }
        results.push(ScoredResult {
            doc_id: candidate,
            score,
        });
    });
    results
}

/// Shared traversal for both query variants. Finds every docid `< max_docid` on which
/// all cursors align and invokes `on_match` with the cursor slice, the ordered view
/// and the matching docid. The accumulator closure is the only point of divergence
/// between the unscored and the scored variant.
fn intersect<C, F>(cursors: &mut [C], max_docid: DocId, on_match: F)
where
    C: PostingCursor,
    F: FnMut(&mut [C], &[usize], DocId),
{
    let ordered = ordered_by_size(cursors);

    if ordered.len() == 2 {
        intersect_two(cursors, &ordered, max_docid, on_match);
    } else {
        intersect_ordered(cursors, &ordered, max_docid, on_match);
    }
}

/// Indices of `cursors` sorted by increasing document frequency; the rarest term
/// drives the intersection. Stable sort, so cursors of equal size keep their
/// input order.
#[inline(always)]
fn ordered_by_size<C: PostingCursor>(cursors: &[C]) -> OrderedCursors {
    let mut ordered: OrderedCursors = (0..cursors.len()).collect();
    ordered.sort_by_key(|&cursor_index| cursors[cursor_index].size());
    ordered
}

/// General align-or-advance loop over any number of cursors.
///
/// `candidate` is the docid currently under test, `i` the next view position to
/// verify. A cursor that overshoots the candidate promotes its docid to the new
/// candidate and restarts verification from view position 0: cursors checked
/// earlier may no longer agree with the larger candidate. When every view position
/// agrees, the match is recorded and the driver advances by one posting.
fn intersect_ordered<C, F>(cursors: &mut [C], ordered: &[usize], max_docid: DocId, mut on_match: F)
where
    C: PostingCursor,
    F: FnMut(&mut [C], &[usize], DocId),
{
    let mut candidate = cursors[ordered[0]].docid();
    let mut i = 1;

    while candidate < max_docid {
        while i < ordered.len() {
            let cursor = &mut cursors[ordered[i]];
            cursor.next_geq(candidate);
            let docid = cursor.docid();
            debug_assert!(docid >= candidate, "next_geq moved a cursor backward");
            if docid != candidate {
                candidate = docid;
                i = 0;
                break;
            }
            i += 1;
        }

        if i == ordered.len() {
            on_match(cursors, ordered, candidate);

            let driver = &mut cursors[ordered[0]];
            driver.next();
            candidate = driver.docid();
            i = 1;
        }
    }
}

/// Two-cursor leapfrog. Same observable behavior as [`intersect_ordered`] for a
/// view of two, without the index bookkeeping of the general loop.
fn intersect_two<C, F>(cursors: &mut [C], ordered: &[usize], max_docid: DocId, mut on_match: F)
where
    C: PostingCursor,
    F: FnMut(&mut [C], &[usize], DocId),
{
    let (lead, other) = (ordered[0], ordered[1]);
    let mut candidate = cursors[lead].docid();

    while candidate < max_docid {
        let cursor = &mut cursors[other];
        cursor.next_geq(candidate);
        let docid = cursor.docid();
        debug_assert!(docid >= candidate, "next_geq moved a cursor backward");

        if docid == candidate {
            on_match(cursors, ordered, candidate);

            let driver = &mut cursors[lead];
            driver.next();
            candidate = driver.docid();
        } else {
            let driver = &mut cursors[lead];
            driver.next_geq(docid);
            candidate = driver.docid();
        }
    }
}
