pub(crate) mod blend;
pub(crate) mod camera;
pub(crate) mod input;
pub(crate) mod output;
pub(crate) mod selection;
