//! Edge weights.
//!
//! A weighted graph requires each edge payload to expose its weight through
//! the [`EdgeWeight`] capability. The capability is a trait bound on the
//! payload type, so the check at insertion time is only about the value: a
//! payload type may declare that some (or all) of its values carry no weight
//! by returning `None`.
//!
//! # Examples
//!
//! ```
//! use adjgraph::{core::{GraphConfig, Labeled}, Graph};
//!
//! let mut graph = Graph::new(GraphConfig::new().weighted());
//!
//! graph.add_edge("Prague", "Vienna", Labeled::new("D1", 293u32)).unwrap();
//! graph.add_edge("Vienna", "Bratislava", Labeled::new("A4", 79)).unwrap();
//!
//! let shortest_paths = graph.dijkstra(&"Prague").unwrap();
//! assert_eq!(shortest_paths.dist(&"Bratislava"), Some(&372));
//! ```

use std::{cmp::Ordering, fmt, ops::Add};

mod ordered_float;

pub use ordered_float::OrderedFloat;

pub trait Weight: PartialOrd + Add<Self, Output = Self> + Clone + Sized {
    type Ord: Ord + From<Self> + Into<Self>;

    fn zero() -> Self;
    fn inf() -> Self;
    fn is_unsigned() -> bool;

    /// Adds two weights, returning `None` if the sum is not representable.
    fn checked_add(self, other: Self) -> Option<Self>;
}

/// Capability of an edge payload to provide a numeric weight.
///
/// Adding an edge requires this trait even in an unweighted graph, because
/// the weight check happens on the value. The unit type, `bool`, `char` and
/// strings implement it without a weight. A custom payload that never
/// carries a weight returns `None`:
///
/// ```
/// use adjgraph::core::{EdgeWeight, GraphConfig};
/// use adjgraph::Graph;
///
/// #[derive(Clone, Debug)]
/// struct Road(&'static str);
///
/// impl EdgeWeight for Road {
///     type Weight = u8;
///
///     fn weight(&self) -> Option<u8> {
///         None
///     }
/// }
///
/// let mut graph = Graph::new(GraphConfig::new());
/// graph.add_edge("Prague", "Brno", Road("D1")).unwrap();
/// ```
pub trait EdgeWeight {
    /// Type of the weight. Irrelevant for payloads that never carry one.
    type Weight: Weight;

    /// Returns the weight of the edge, or `None` if the payload does not
    /// carry any.
    fn weight(&self) -> Option<Self::Weight>;
}

/// Pair of a value and its priority.
///
/// Comparisons only take the priority into account.
#[derive(Debug, Clone, Copy)]
pub struct Weighted<T, W>(pub T, pub W);

impl<T, W: PartialEq> PartialEq for Weighted<T, W> {
    fn eq(&self, other: &Self) -> bool {
        self.1.eq(&other.1)
    }
}

impl<T, W: Eq> Eq for Weighted<T, W> {}

impl<T, W: PartialOrd> PartialOrd for Weighted<T, W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.1.partial_cmp(&other.1)
    }
}

impl<T, W: Ord> Ord for Weighted<T, W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.1.cmp(&other.1)
    }
}

/// Edge payload consisting of a label and a weight.
///
/// Unlike [`Weighted`], two payloads are equal only if both the labels and the
/// weights are equal. It is displayed as its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Labeled<L, W> {
    pub label: L,
    pub weight: W,
}

impl<L, W> Labeled<L, W> {
    pub fn new(label: L, weight: W) -> Self {
        Self { label, weight }
    }
}

impl<L, W: Weight> EdgeWeight for Labeled<L, W> {
    type Weight = W;

    fn weight(&self) -> Option<W> {
        Some(self.weight.clone())
    }
}

impl<L: fmt::Display, W> fmt::Display for Labeled<L, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.label.fmt(f)
    }
}

impl<W: Weight> EdgeWeight for Option<W> {
    type Weight = W;

    fn weight(&self) -> Option<W> {
        self.clone()
    }
}

macro_rules! impl_int_weight {
    ($ty:ty, $is_unsigned:expr) => {
        impl Weight for $ty {
            type Ord = Self;

            fn zero() -> Self {
                0
            }

            fn inf() -> Self {
                <$ty>::MAX
            }

            fn is_unsigned() -> bool {
                $is_unsigned
            }

            fn checked_add(self, other: Self) -> Option<Self> {
                <$ty>::checked_add(self, other)
            }
        }

        impl EdgeWeight for $ty {
            type Weight = Self;

            fn weight(&self) -> Option<Self> {
                Some(*self)
            }
        }
    };
}

impl_int_weight!(i8, false);
impl_int_weight!(i16, false);
impl_int_weight!(i32, false);
impl_int_weight!(i64, false);
impl_int_weight!(u8, true);
impl_int_weight!(u16, true);
impl_int_weight!(u32, true);
impl_int_weight!(u64, true);
impl_int_weight!(isize, false);
impl_int_weight!(usize, true);

macro_rules! impl_float_weight {
    ($ty:ty) => {
        impl Weight for $ty {
            type Ord = OrderedFloat<Self>;

            fn zero() -> Self {
                <$ty>::default()
            }

            fn inf() -> Self {
                <$ty>::INFINITY
            }

            fn is_unsigned() -> bool {
                false
            }

            // Saturates to infinity.
            fn checked_add(self, other: Self) -> Option<Self> {
                Some(self + other)
            }
        }

        impl EdgeWeight for $ty {
            type Weight = Self;

            fn weight(&self) -> Option<Self> {
                Some(*self)
            }
        }
    };
}

impl_float_weight!(f32);
impl_float_weight!(f64);

macro_rules! impl_no_weight {
    ($($ty:ty),*) => {
        $(
            impl EdgeWeight for $ty {
                type Weight = u8;

                fn weight(&self) -> Option<u8> {
                    None
                }
            }
        )*
    };
}

impl_no_weight!((), bool, char, String, &str);
