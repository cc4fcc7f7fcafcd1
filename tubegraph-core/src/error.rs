//! Error types for the tubegraph core library.
//!
//! Every fallible operation reports a dedicated error enum. Each enum carries a
//! companion code enum with stable, machine-readable identifiers so callers
//! can log or match on failures without depending on message text.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors raised while building a [`crate::WeightedGraph`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// An edge endpoint lies outside `0..card_v`.
    #[error("vertex {vertex} is outside the graph (card_v = {card_v})")]
    InvalidVertex {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the graph.
        card_v: usize,
    },
    /// An edge weight was NaN or infinite.
    #[error("edge ({u}, {v}) has a non-finite weight")]
    NonFiniteWeight {
        /// First endpoint as supplied.
        u: usize,
        /// Second endpoint as supplied.
        v: usize,
    },
    /// A triple referenced a label the index does not know.
    #[error("label `{label}` is not present in the label index")]
    UnknownLabel {
        /// The unresolved label.
        label: String,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge endpoint lies outside the vertex range.
        InvalidVertex => InvalidVertex { .. } => "GRAPH_INVALID_VERTEX",
        /// An edge weight was NaN or infinite.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
        /// A triple referenced an unknown label.
        UnknownLabel => UnknownLabel { .. } => "GRAPH_UNKNOWN_LABEL",
    }
}

/// Errors raised by [`crate::MinHeapPriorityQueue`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum QueueError {
    /// `extract_min` was called on an empty queue.
    #[error("cannot extract from an empty priority queue")]
    Empty,
    /// `decrease_key` was asked to raise a key.
    #[error("decrease_key for item {item} requested {requested}, above current key {current}")]
    DecreaseKeyViolation {
        /// Item whose key was being lowered.
        item: usize,
        /// Key currently associated with the item.
        current: f64,
        /// Key the caller asked for.
        requested: f64,
    },
    /// The item handle exceeds the queue's capacity.
    #[error("item {item} is outside the queue capacity {capacity}")]
    ItemOutOfRange {
        /// The offending handle.
        item: usize,
        /// Number of handles the queue was created for.
        capacity: usize,
    },
    /// The item is already stored in the heap.
    #[error("item {item} is already queued")]
    AlreadyQueued {
        /// The duplicated handle.
        item: usize,
    },
    /// The item is not currently stored in the heap.
    #[error("item {item} is not queued")]
    NotQueued {
        /// The missing handle.
        item: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`QueueError`] variants.
    enum QueueErrorCode for QueueError {
        /// `extract_min` on an empty queue.
        Empty => Empty => "QUEUE_EMPTY",
        /// `decrease_key` with a larger key.
        DecreaseKeyViolation => DecreaseKeyViolation { .. } => "QUEUE_DECREASE_KEY_VIOLATION",
        /// Handle outside the queue capacity.
        ItemOutOfRange => ItemOutOfRange { .. } => "QUEUE_ITEM_OUT_OF_RANGE",
        /// Handle inserted twice.
        AlreadyQueued => AlreadyQueued { .. } => "QUEUE_ALREADY_QUEUED",
        /// Handle not present in the heap.
        NotQueued => NotQueued { .. } => "QUEUE_NOT_QUEUED",
    }
}

/// Errors raised by [`crate::DisjointSet`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The element was never added to the structure.
    #[error("element {element} is outside the disjoint set (len = {len})")]
    ElementOutOfRange {
        /// The offending element.
        element: usize,
        /// Number of elements in the structure.
        len: usize,
    },
    /// `make_set` was called with an element other than the next id.
    #[error("element {element} cannot be added; the next element is {expected}")]
    NonSequentialElement {
        /// The rejected element.
        element: usize,
        /// The element `make_set` expected.
        expected: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// Element outside `0..len`.
        ElementOutOfRange => ElementOutOfRange { .. } => "DISJOINT_SET_ELEMENT_OUT_OF_RANGE",
        /// Element added out of order.
        NonSequentialElement => NonSequentialElement { .. } => "DISJOINT_SET_NON_SEQUENTIAL_ELEMENT",
    }
}

/// Errors raised while reconstructing a path from predecessor data.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PathError {
    /// The requested target lies outside the graph.
    #[error("vertex {vertex} is outside the graph (card_v = {card_v})")]
    InvalidVertex {
        /// The offending vertex index.
        vertex: usize,
        /// Number of vertices in the graph.
        card_v: usize,
    },
    /// No path exists from the source to the target.
    #[error("no path from {origin} to {target}")]
    Unreachable {
        /// Source of the shortest-path search.
        origin: usize,
        /// Requested destination.
        target: usize,
    },
    /// The predecessor chain did not terminate within `limit` steps.
    #[error("predecessor chain for {target} exceeded {limit} steps")]
    CorruptPredecessors {
        /// Requested destination.
        target: usize,
        /// Maximum number of steps walked.
        limit: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`PathError`] variants.
    enum PathErrorCode for PathError {
        /// Target outside the graph.
        InvalidVertex => InvalidVertex { .. } => "PATH_INVALID_VERTEX",
        /// Target not reachable from the source.
        Unreachable => Unreachable { .. } => "PATH_UNREACHABLE",
        /// Cyclic predecessor chain.
        CorruptPredecessors => CorruptPredecessors { .. } => "PATH_CORRUPT_PREDECESSORS",
    }
}

/// Errors raised by the Dijkstra search.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SearchError {
    /// The source vertex lies outside the graph.
    #[error("source {vertex} is outside the graph (card_v = {card_v})")]
    InvalidSource {
        /// Requested source vertex.
        vertex: usize,
        /// Number of vertices in the graph.
        card_v: usize,
    },
    /// An edge carried a negative weight.
    #[error("edge ({u}, {v}) has a negative weight")]
    NegativeWeight {
        /// Tail of the offending edge.
        u: usize,
        /// Head of the offending edge.
        v: usize,
    },
    /// The priority queue reported a contract violation.
    #[error("priority queue failed: {0}")]
    Queue(#[from] QueueError),
    /// Reconstructing a path from a finished search failed.
    #[error("path reconstruction failed: {0}")]
    Path(#[from] PathError),
}

define_error_codes! {
    /// Stable codes describing [`SearchError`] variants.
    enum SearchErrorCode for SearchError {
        /// Source outside the graph.
        InvalidSource => InvalidSource { .. } => "SEARCH_INVALID_SOURCE",
        /// Negative edge weight.
        NegativeWeight => NegativeWeight { .. } => "SEARCH_NEGATIVE_WEIGHT",
        /// Priority queue contract violation.
        Queue => Queue(..) => "SEARCH_QUEUE_FAILURE",
        /// Path reconstruction failure.
        Path => Path(..) => "SEARCH_PATH_FAILURE",
    }
}

/// Errors returned while computing a minimum spanning tree or forest.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MstError {
    /// The caller requested an MST for an empty graph.
    #[error("cannot compute an MST for an empty graph")]
    EmptyGraph,
    /// Spanning trees are only defined for undirected graphs.
    #[error("cannot compute an MST for a directed graph")]
    DirectedGraph,
    /// Prim's root lies outside the graph.
    #[error("root {root} is outside the graph (card_v = {card_v})")]
    InvalidRoot {
        /// Requested root vertex.
        root: usize,
        /// Number of vertices in the graph.
        card_v: usize,
    },
    /// The priority queue reported a contract violation.
    #[error("priority queue failed: {0}")]
    Queue(#[from] QueueError),
    /// Inserting a tree edge into the result graph failed.
    #[error("building the tree graph failed: {0}")]
    Graph(#[from] GraphError),
    /// The disjoint-set structure rejected an element.
    #[error("disjoint set failed: {0}")]
    DisjointSet(#[from] DisjointSetError),
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// Empty input graph.
        EmptyGraph => EmptyGraph => "MST_EMPTY_GRAPH",
        /// Directed input graph.
        DirectedGraph => DirectedGraph => "MST_DIRECTED_GRAPH",
        /// Root outside the graph.
        InvalidRoot => InvalidRoot { .. } => "MST_INVALID_ROOT",
        /// Priority queue contract violation.
        Queue => Queue(..) => "MST_QUEUE_FAILURE",
        /// Result graph construction failure.
        Graph => Graph(..) => "MST_GRAPH_FAILURE",
        /// Disjoint-set contract violation.
        DisjointSet => DisjointSet(..) => "MST_DISJOINT_SET_FAILURE",
    }
}
