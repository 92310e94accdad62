pub(crate) mod particles;
pub(crate) mod photos;
pub(crate) mod snapshot;
