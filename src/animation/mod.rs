pub(crate) mod animator;
pub(crate) mod ease;
pub(crate) mod entrance;
pub(crate) mod proc;
pub(crate) mod reveal;
