use std::{collections::hash_map::DefaultHasher, fmt, hash};

/// An undirected segment between two endpoints.
///
/// `Edge::new(a, b)` and `Edge::new(b, a)` compare and hash equal. Endpoints are usually
/// [VertexId](crate::VertexId)s or [Point](crate::Point)s.
#[derive(Debug, Clone, Copy)]
pub struct Edge<T> {
    pub a: T,
    pub b: T,
}

impl<T> Edge<T> {
    pub fn new(a: T, b: T) -> Self {
        Self { a, b }
    }

    pub fn endpoints(&self) -> (&T, &T) {
        (&self.a, &self.b)
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Edge<U> {
        Edge::new(f(self.a), f(self.b))
    }
}

impl<T: PartialEq> Edge<T> {
    pub fn contains(&self, t: &T) -> bool {
        &self.a == t || &self.b == t
    }

    /// The endpoint opposite `t`, if `t` is an endpoint
    pub fn other(&self, t: &T) -> Option<&T> {
        if &self.a == t {
            Some(&self.b)
        } else if &self.b == t {
            Some(&self.a)
        } else {
            None
        }
    }

    /// Whether the two edges share an endpoint
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.contains(&other.a) || self.contains(&other.b)
    }
}

impl<T: PartialEq> PartialEq for Edge<T> {
    fn eq(&self, other: &Self) -> bool {
        (self.a == other.a && self.b == other.b) || (self.a == other.b && self.b == other.a)
    }
}

impl<T: Eq> Eq for Edge<T> { }

impl<T: hash::Hash> hash::Hash for Edge<T> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        // Combine the endpoint hashes commutatively so both orientations land in the same bucket
        fn hash_one<T: hash::Hash>(t: &T) -> u64 {
            let mut hasher = DefaultHasher::new();
            t.hash(&mut hasher);
            hash::Hasher::finish(&hasher)
        }
        state.write_u64(hash_one(&self.a).wrapping_add(hash_one(&self.b)));
    }
}

impl<T: fmt::Display> fmt::Display for Edge<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Edge({} -> {})", self.a, self.b)
    }
}
