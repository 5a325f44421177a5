use deepmask::Maskable;

#[derive(Maskable)]
struct Login {
    pub user: String,
    #[mask(in_place)]
    pub password: String,
}

fn main() {}
