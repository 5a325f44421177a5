use deepmask::{MaskValue, Maskable};

#[derive(Clone, Maskable)]
#[mask(atomic, transform)]
struct Token(String);

impl MaskValue for Token {
    fn mask(self) -> String {
        self.0
    }
}

fn main() {}
