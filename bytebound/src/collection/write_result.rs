use crate::common::Value;

/// The result of an `insert_one` call.
///
/// `inserted_id` is the identity of the stored document, either the one the
/// caller supplied or the one the store generated.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertOneResult {
    pub inserted_id: Value,
    pub acknowledged: bool,
}

impl InsertOneResult {
    pub(crate) fn new(inserted_id: Value) -> Self {
        InsertOneResult {
            inserted_id,
            acknowledged: true,
        }
    }
}

/// The result of an `update_one` call.
///
/// Both counts are 1 when a document matched and 0 otherwise. A matched
/// document counts as modified even when the update changed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateResult {
    pub matched_count: u64,
    pub modified_count: u64,
    pub acknowledged: bool,
}

impl UpdateResult {
    pub(crate) fn matched() -> Self {
        UpdateResult {
            matched_count: 1,
            modified_count: 1,
            acknowledged: true,
        }
    }

    pub(crate) fn unmatched() -> Self {
        UpdateResult {
            matched_count: 0,
            modified_count: 0,
            acknowledged: true,
        }
    }
}

/// The result of a `delete_one` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteResult {
    pub deleted_count: u64,
    pub acknowledged: bool,
}

impl DeleteResult {
    pub(crate) fn new(deleted_count: u64) -> Self {
        DeleteResult {
            deleted_count,
            acknowledged: true,
        }
    }
}
