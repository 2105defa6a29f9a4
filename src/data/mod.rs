pub(crate) mod dataset;
