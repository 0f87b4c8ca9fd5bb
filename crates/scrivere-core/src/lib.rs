// scrivere-core: shared types for the scrivere writing assistant.
//
// Holds the data types that cross crate boundaries (tokens, suggestions,
// layout lines) and the word-normalization helpers shared by the rule
// tables and the tokenizer.

pub mod character;
pub mod layout;
pub mod suggestion;
pub mod token;
