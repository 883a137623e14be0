use rand::Rng;

use crate::utils::{random_segment, ALL_ALPHANUMERIC, UPPER_ALPHANUMERIC};

const ORDER_ID_SEGMENTS: [usize; 3] = [6, 5, 6];
const TRANSFER_ID_SEGMENTS: [usize; 2] = [7, 22];

fn segmented_id<R: Rng + ?Sized>(rng: &mut R, alphabet: &[u8], segments: &[usize]) -> String {
    segments
        .iter()
        .map(|&len| random_segment(rng, alphabet, len))
        .collect::<Vec<_>>()
        .join("-")
}

/// Order id shaped like `OQCLML-BW3P3-BUCMWZ`.
pub fn order_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    segmented_id(rng, UPPER_ALPHANUMERIC, &ORDER_ID_SEGMENTS)
}

pub fn order_ids<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count).map(|_| order_id(rng)).collect()
}

/// Transfer id shaped like `FTQcuak-V6Za8qrWnhzTx67yYHz8Tg`.
pub fn transfer_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    segmented_id(rng, ALL_ALPHANUMERIC, &TRANSFER_ID_SEGMENTS)
}

pub fn transfer_ids<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<String> {
    (0..count).map(|_| transfer_id(rng)).collect()
}
