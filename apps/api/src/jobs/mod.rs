// Job browsing: where postings come from and how the public list is filtered.

pub mod filters;
pub mod handlers;
pub mod source;
