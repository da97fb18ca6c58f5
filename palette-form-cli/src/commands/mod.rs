pub mod submit;
pub mod translate;
pub mod translations;
