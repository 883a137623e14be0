mod random;

pub use random::{
    fixture_rng, random_segment, uniform_between, ALL_ALPHANUMERIC, UPPER_ALPHANUMERIC,
};
