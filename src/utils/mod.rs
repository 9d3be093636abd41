// gensubstate Utilities Module
//
// Common helpers used by the generation pipeline.

pub mod paths;
