pub(crate) mod date;
