pub(crate) mod generation;
pub(crate) mod static_scene;
