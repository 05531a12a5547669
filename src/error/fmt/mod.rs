pub(crate) mod friendly;
pub(crate) mod iso8601;
