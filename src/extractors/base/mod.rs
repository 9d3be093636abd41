// Base Extractor for gensubstate
//
// Owns the source text a tree was parsed from and hands out byte-accurate
// slices of it. Type expressions are always recovered through here so the
// generated file reproduces them exactly as written.

pub mod extractor;

pub use extractor::BaseExtractor;
