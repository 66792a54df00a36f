pub(crate) mod domain;
pub(crate) mod infrastructure;
