pub(crate) mod slideshow;
