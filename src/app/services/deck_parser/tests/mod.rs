//! Tests for the deck parsing service

mod tokenizer_tests;
