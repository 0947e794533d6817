//! URL reads and writes on [`super::UrlDb`].

mod read;
mod write;
