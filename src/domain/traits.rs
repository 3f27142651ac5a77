use std::hash::Hash;

/// A value that can label a vertex of a [`DirectedGraph`](crate::domain::graph::DirectedGraph).
///
/// `is_absent` marks the type's "no vertex" value. The graph refuses it with
/// [`GraphError::InvalidArgument`](crate::domain::error::GraphError::InvalidArgument).
pub trait Vertex: Eq + Hash + Clone {
    fn is_absent(&self) -> bool {
        false
    }
}

impl Vertex for String {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl Vertex for &str {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Vertex> Vertex for Option<T> {
    fn is_absent(&self) -> bool {
        match self {
            Some(v) => v.is_absent(),
            None => true,
        }
    }
}

macro_rules! always_present {
    ($($t:ty),*) => {
        $(impl Vertex for $t {})*
    };
}

always_present!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, char);
