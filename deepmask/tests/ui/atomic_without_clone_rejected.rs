use std::sync::Mutex;

use deepmask::Maskable;

#[derive(Maskable)]
#[mask(atomic)]
struct Counter(Mutex<u64>);

fn main() {}
