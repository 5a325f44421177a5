use deepmask::Maskable;

#[derive(Maskable)]
union Bits {
    pub int: u32,
    pub float: f32,
}

fn main() {}
