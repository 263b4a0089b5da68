pub(crate) mod common;
pub(crate) mod console;
pub(crate) mod fs;
pub(crate) mod math;
pub(crate) mod text;
