//! Known-answer and cross-cutting property tests, kept separate from the
//! per-module unit tests colocated with the code they exercise.
