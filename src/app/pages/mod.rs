//! Demo page components.

mod gallery;

pub use gallery::Gallery;
