//! Building id generation.
//!
//! Ids come from a caller-supplied RNG so bulk fills are reproducible under a
//! fixed seed. [`PlannerRng`] is the resource a Bevy app keeps for this.
//! The RNG state is not persisted, so a restored layout already holds ids
//! the stream will produce again; [`generate_unique_building_id`] skips them.

use std::collections::HashSet;

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Default seed used when no explicit seed is provided.
const DEFAULT_SEED: u64 = 42;

/// Length of the random suffix in a building id.
const ID_SUFFIX_LEN: usize = 7;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Deterministic RNG resource for id generation.
#[derive(Resource)]
pub struct PlannerRng(pub ChaCha8Rng);

impl Default for PlannerRng {
    fn default() -> Self {
        Self(ChaCha8Rng::seed_from_u64(DEFAULT_SEED))
    }
}

impl PlannerRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

/// `building-` followed by seven base-36 characters.
pub fn generate_building_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix: String = (0..ID_SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();
    format!("building-{suffix}")
}

/// Like [`generate_building_id`], drawing again while the id is in `taken`.
pub fn generate_unique_building_id<R: Rng + ?Sized>(
    rng: &mut R,
    taken: &HashSet<String>,
) -> String {
    loop {
        let id = generate_building_id(rng);
        if !taken.contains(&id) {
            return id;
        }
    }
}
