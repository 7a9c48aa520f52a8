//! Integration tests that run the shellrec binary.
