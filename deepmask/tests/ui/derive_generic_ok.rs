use std::{cell::RefCell, marker::PhantomData, rc::Rc};

use deepmask::Maskable;

// `fn()` is not `Maskable`, but a marker field never needs it to be.
#[derive(Maskable)]
struct TypedId<T> {
    pub id: String,
    pub marker: PhantomData<T>,
}

#[derive(Default, Maskable)]
struct Shared<T> {
    pub inner: Rc<RefCell<T>>,
    cache: Vec<T>,
}

#[derive(Maskable)]
struct Pair<A, B>(pub A, pub Option<B>);

fn main() {
    let id: TypedId<fn()> = TypedId {
        id: "42".into(),
        marker: PhantomData,
    };
    assert_eq!(deepmask::must(&id).id, "42");

    let shared = Shared {
        inner: Rc::new(RefCell::new(String::from("value"))),
        cache: vec![String::from("cached")],
    };
    let copy = deepmask::must(&shared);
    assert_eq!(*copy.inner.borrow(), "value");
    assert!(copy.cache.is_empty());

    let pair = deepmask::must(&Pair(1_u8, Some(vec![2_u8])));
    assert_eq!(pair.1, Some(vec![2]));
}
