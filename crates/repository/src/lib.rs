//! Typed repository layer over the docdex search index
//!
//! This crate provides:
//! - Entity: the trait mapping typed structs to stored documents
//! - Notice: the sample entity
//! - NoticeRepository: statically declared typed finders with pagination
//!
//! Every finder is a fixed {field, operator} template; nothing here
//! parses method names at runtime.

#![warn(clippy::all)]

mod entity;
mod repository;

pub use entity::{Entity, Notice};
pub use repository::NoticeRepository;
