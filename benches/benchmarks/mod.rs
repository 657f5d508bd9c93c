pub mod automaton;
pub mod recurrence;
pub mod rhythm;
