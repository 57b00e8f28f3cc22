pub mod probe;
pub mod simulate;
pub mod verify;
