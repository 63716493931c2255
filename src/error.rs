use std::fmt;

use thiserror::Error;

/// Identifies one of the two child links of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the other side
    pub fn opposite(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Returned when navigating to a relative that requires an ancestor the node does not have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("node is a root and has no parent")]
    NoParent,
    #[error("node's parent is a root, so it has no grandparent")]
    NoGrandparent,
}

/// Returned when inserting a child into a slot that is already occupied
///
/// The existing subtree is left untouched and the value that was going to be inserted is handed
/// back. To replace a child, remove the existing subtree first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{side} child slot is already occupied")]
pub struct OccupiedError<T> {
    pub side: Side,
    pub value: T,
}

impl<T> OccupiedError<T> {
    /// Returns the value that could not be inserted
    pub fn into_value(self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_opposite() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
        assert_eq!(Side::Left.opposite().opposite(), Side::Left);
        assert_eq!(Side::Right.to_string(), "right");
    }

    #[test]
    fn error_messages() {
        assert_eq!(NavError::NoParent.to_string(), "node is a root and has no parent");
        let err = OccupiedError {side: Side::Right, value: 'x'};
        assert_eq!(err.to_string(), "right child slot is already occupied");
        assert_eq!(err.into_value(), 'x');
    }
}
