mod tables;

pub use self::tables::{
    probe as print_probe, sentence_stats as print_sentence_stats,
    simulation as print_simulation, verification as print_verification,
};
