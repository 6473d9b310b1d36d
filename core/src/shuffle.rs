pub const BOARD_SEED: u32 = 0x5EED_B0A2;

const SHUFFLE_SALT: u32 = 0xC0DE;

pub fn splitmix32(mut value: u32) -> u32 {
    value = value.wrapping_add(0x9E37_79B9);
    let mut z = value;
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

pub fn rand_unit(seed: u32, salt: u32) -> f32 {
    let mixed = splitmix32(seed ^ salt);
    let top = mixed >> 8;
    top as f32 / ((1u32 << 24) as f32)
}

pub fn scramble_seed(base: u32, nonce: u32, grid: u32) -> u32 {
    let grid_tag = (grid << 16) ^ grid;
    base ^ nonce.wrapping_mul(0x9E37_79B9) ^ grid_tag ^ 0x7105_E5ED
}

pub fn shuffled_ids(seed: u32, total: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..total).collect();
    for i in (1..order.len()).rev() {
        let salt = SHUFFLE_SALT + i as u32;
        // rand_unit stays below 1.0, so j lands in [0, i].
        let j = (rand_unit(seed, salt) * (i as f32 + 1.0)) as usize;
        order.swap(i, j);
    }
    order
}
