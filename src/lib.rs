// This crate is a library
#![crate_type = "lib"]
// The library is named "conjunct"
#![crate_name = "conjunct"]

//! # `conjunct`
//!
//! Conjunctive (AND) query evaluation over inverted-index posting lists:
//! given one posting cursor per query term, **conjunct** computes the exact set of
//! documents present in every list, optionally accumulating a relevance score per
//! matching document. Cursors are ordered by ascending document frequency so that
//! the rarest term drives the merge, and are advanced with the skip-ahead primitive
//! `next_geq` rather than scanned — retrieval cost stays sub-linear in the total
//! posting count as long as the cursor backend skips efficiently.
//!
//! Any posting-list backend that implements [`cursor::PostingCursor`] can be
//! queried; [`ram_posting::RamPostingList`] ships as an in-memory implementation.
//!
//! ### build posting cursors
//! ```rust
//! use conjunct::ram_posting::RamPostingList;
//!
//! let mut cursors = vec![
//!     RamPostingList::new(vec![1, 3, 5, 7, 9]),
//!     RamPostingList::new(vec![3, 5, 9]),
//!     RamPostingList::new(vec![2, 3, 5, 9, 11]),
//! ];
//! ```
//!
//! ### intersect
//! ```rust
//! # use conjunct::ram_posting::RamPostingList;
//! # let mut cursors = vec![
//! #     RamPostingList::new(vec![1, 3, 5, 7, 9]),
//! #     RamPostingList::new(vec![3, 5, 9]),
//! #     RamPostingList::new(vec![2, 3, 5, 9, 11]),
//! # ];
//! use conjunct::intersection::and_query;
//!
//! let max_docid = 100;
//! let doc_ids = and_query(&mut cursors, max_docid);
//! assert_eq!(doc_ids, vec![3, 5, 9]);
//! ```
//!
//! ### intersect with scoring
//! ```rust
//! # use conjunct::ram_posting::RamPostingList;
//! use conjunct::intersection::scored_and_query;
//!
//! let mut cursors = vec![
//!     RamPostingList::with_scores(vec![1, 3, 5], vec![0.25, 0.5, 0.75]),
//!     RamPostingList::with_scores(vec![3, 4, 5], vec![1.0, 1.0, 2.0]),
//! ];
//!
//! let results = scored_and_query(&mut cursors, 100);
//! assert_eq!(results[0].doc_id, 3);
//! assert_eq!(results[0].score, 1.5);
//! ```

/// Posting cursor capability consumed by the intersection engine: current docid,
/// advancement, skip-ahead, document frequency and (for scored queries) the
/// per-posting score contribution.
pub mod cursor;
/// Conjunctive query evaluation: `and_query` (document ids only) and
/// `scored_and_query` (document ids with accumulated scores).
pub mod intersection;
/// In-memory vector-backed posting cursor with galloping skip-ahead.
pub mod ram_posting;
