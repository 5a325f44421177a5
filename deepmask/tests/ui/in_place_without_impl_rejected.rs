use deepmask::Maskable;

#[derive(Default, Maskable)]
#[mask(in_place)]
struct Session {
    pub token: String,
}

fn main() {}
