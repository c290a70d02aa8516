// doc constants
pub const DEFAULT_IDENTITY_FIELD: &str = "id";

// store constants
pub const DEFAULT_KEY_PREFIX: &str = "store_";

// query operators
pub const OP_NE: &str = "$ne";
pub const OP_IN: &str = "$in";
pub const OP_REGEX: &str = "$regex";
pub const OP_OPTIONS: &str = "$options";
pub const OP_OR: &str = "$or";
pub const OP_AND: &str = "$and";

// update operators
pub const OP_SET: &str = "$set";
pub const OP_INC: &str = "$inc";
