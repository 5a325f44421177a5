use std::{cell::RefCell, rc::Rc};

use deepmask::{MaskInPlace, MaskValue, Maskable};

#[derive(Clone, Debug, PartialEq, Maskable)]
#[mask(atomic, transform)]
struct ApiKey(String);

impl MaskValue for ApiKey {
    fn mask(self) -> Self {
        Self("****".into())
    }
}

#[derive(Default, Maskable)]
#[mask(in_place, transform)]
struct Account {
    pub owner: String,
    pub pin: String,
}

impl MaskInPlace for Account {
    fn mask_in_place(&mut self) {
        self.pin = "in place".into();
    }
}

impl MaskValue for Account {
    fn mask(mut self) -> Self {
        self.pin = "by value".into();
        self
    }
}

fn main() {
    assert_eq!(deepmask::must(&ApiKey("abc".into())), ApiKey("****".into()));

    let account = Account {
        owner: "alice".into(),
        pin: "1234".into(),
    };
    assert_eq!(deepmask::must(&account).pin, "by value");

    let shared = Rc::new(RefCell::new(account));
    assert_eq!(deepmask::must(&shared).borrow().pin, "in place");
}
