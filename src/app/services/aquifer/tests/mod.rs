//! Tests for Carter-Tracy aquifer extraction

mod extractor_tests;
