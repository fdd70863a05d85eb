//! Generated mapping data. Code lives in the codec modules.

pub(crate) mod cp932_table;
pub(crate) mod iso8859_tables;
