/// Specifies the direction for sorting documents.
///
/// Used with [`crate::collection::DocumentCursor::sort`]. Documents that tie on
/// the sort field keep their relative order in either direction.
///
/// MongoDB-style numeric directions convert with `From<i32>`: `1` (or any
/// non-negative number) is ascending, `-1` (or any negative number) is
/// descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Sort in ascending order (smallest to largest, A-Z, oldest to newest)
    Ascending,
    /// Sort in descending order (largest to smallest, Z-A, newest to oldest)
    Descending,
}

impl From<i32> for SortOrder {
    fn from(direction: i32) -> Self {
        if direction < 0 {
            SortOrder::Descending
        } else {
            SortOrder::Ascending
        }
    }
}
