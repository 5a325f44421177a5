//! Mask hook behavior: which hook runs where, and how often.

use std::{
    cell::RefCell,
    collections::HashMap,
    rc::Rc,
    sync::{Arc, RwLock},
};

use deepmask::{Dynamic, MaskInPlace, MaskValue, Maskable, must};

// =============================================================================
// Fixture types
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Maskable)]
#[mask(atomic, transform)]
struct TestString(String);

impl MaskValue for TestString {
    fn mask(self) -> Self {
        Self("MASKED".into())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Maskable)]
#[mask(atomic, transform)]
struct TestInt(i64);

impl MaskValue for TestInt {
    fn mask(self) -> Self {
        Self(0)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Maskable)]
#[mask(transform)]
struct TestMap(pub HashMap<String, String>);

impl MaskValue for TestMap {
    fn mask(self) -> Self {
        Self(HashMap::new())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Maskable)]
#[mask(transform)]
struct TestSlice(pub Option<Vec<String>>);

impl MaskValue for TestSlice {
    fn mask(self) -> Self {
        Self(None)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Maskable)]
#[mask(transform)]
struct TestStruct2 {
    pub n: String,
}

impl MaskValue for TestStruct2 {
    fn mask(self) -> Self {
        Self {
            n: "MASKED".into(),
        }
    }
}

#[derive(Debug, Default, Maskable)]
#[mask(in_place)]
struct TestStruct {
    pub s1: TestString,
    pub s2: Box<TestString>,

    pub i1: TestInt,
    pub i2: Option<Rc<RefCell<TestInt>>>,
    pub i3: Option<Rc<RefCell<TestInt>>>,
    pub mp: TestMap,
    pub sl: TestSlice,

    pub value: String,

    pub strct1: TestStruct2,
    pub strct2: Option<Box<TestStruct2>>,

    pub custom: Dynamic,
}

impl MaskInPlace for TestStruct {
    fn mask_in_place(&mut self) {
        self.value = "MASKED".into();
    }
}

fn new_test_struct() -> Rc<RefCell<TestStruct>> {
    Rc::new(RefCell::new(TestStruct {
        s1: TestString("test string".into()),
        s2: Box::new(TestString("test string 2".into())),
        i1: TestInt(1),
        i2: Some(Rc::new(RefCell::new(TestInt(2)))),
        i3: None,
        mp: TestMap([("testKey".to_string(), "testValue".to_string())].into()),
        sl: TestSlice(Some(vec!["sensitive".into()])),
        value: "test value".into(),
        strct1: TestStruct2 { n: "n1".into() },
        strct2: Some(Box::new(TestStruct2 { n: "n2".into() })),
        custom: Dynamic::empty(),
    }))
}

// =============================================================================
// Hook placement
// =============================================================================

#[test]
fn test_mask_applies_every_declared_hook() {
    let val = new_test_struct();
    let masked = must(&val);
    let masked = masked.borrow();

    assert_eq!(masked.s1, TestString("MASKED".into()));
    assert_eq!(*masked.s2, TestString("MASKED".into()));
    assert_eq!(masked.i1, TestInt(0));
    assert!(masked.mp.0.is_empty());
    assert_eq!(masked.sl.0, None);
    assert_eq!(*masked.i2.as_ref().unwrap().borrow(), TestInt(0));
    assert!(masked.i3.is_none());
    assert_eq!(masked.strct1.n, "MASKED");
    assert_eq!(masked.strct2.as_ref().unwrap().n, "MASKED");
    assert_eq!(masked.value, "MASKED");
}

#[test]
fn test_mask_leaves_the_original_untouched() {
    let val = new_test_struct();
    let val2 = new_test_struct();
    let masked = must(&val);

    assert_eq!(format!("{:?}", val.borrow()), format!("{:?}", val2.borrow()));
    assert_ne!(
        format!("{:?}", val.borrow()),
        format!("{:?}", masked.borrow())
    );
    assert_eq!(val.borrow().value, "test value");
    assert_eq!(val.borrow().s1, TestString("test string".into()));
}

#[test]
fn test_transform_runs_inside_dynamic_slots() {
    let val = new_test_struct();
    val.borrow_mut().custom = Dynamic::new(TestString("secret".into()));
    let masked = must(&val);
    assert_eq!(
        masked.borrow().custom.downcast_ref::<TestString>(),
        Some(&TestString("MASKED".into()))
    );
}

#[test]
fn test_in_place_hook_is_skipped_by_value() {
    #[derive(Debug, Default, Maskable)]
    struct Holder {
        pub inner: TestStruct,
    }

    let holder = Holder {
        inner: TestStruct {
            value: "visible".into(),
            ..TestStruct::default()
        },
    };
    let masked = must(&holder);
    assert_eq!(masked.inner.value, "visible");
}

#[test]
fn test_in_place_hook_runs_through_box() {
    let boxed = Box::new(TestStruct {
        value: "secret".into(),
        ..TestStruct::default()
    });
    assert_eq!(must(&boxed).value, "MASKED");
}

#[test]
fn test_in_place_hook_runs_through_arc() {
    let shared = Arc::new(RwLock::new(Counted::default()));
    let masked = must(&shared);
    assert_eq!(masked.read().unwrap().hooked, 1);
}

#[test]
fn test_nil_reference_never_runs_hooks() {
    let nil: Option<Rc<RefCell<TestStruct>>> = None;
    assert!(must(&nil).is_none());
}

#[test]
fn test_hooks_declared_but_types_without_hooks_pass_through() {
    #[derive(Clone, Debug, PartialEq, Maskable)]
    struct Plain {
        pub text: String,
    }

    let plain = Plain {
        text: "unchanged".into(),
    };
    assert_eq!(must(&plain), plain);
}

// =============================================================================
// Exactly-once semantics
// =============================================================================

#[derive(Debug, Default, Maskable)]
#[mask(in_place)]
struct Counted {
    pub hooked: u32,
    pub next: Option<Rc<RefCell<Counted>>>,
}

impl MaskInPlace for Counted {
    fn mask_in_place(&mut self) {
        self.hooked += 1;
    }
}

#[test]
fn test_shared_reference_is_hooked_once() {
    let shared = Rc::new(RefCell::new(Counted::default()));
    let pair = (Rc::clone(&shared), Rc::clone(&shared));

    let masked = must(&pair);
    assert!(Rc::ptr_eq(&masked.0, &masked.1));
    assert_eq!(masked.0.borrow().hooked, 1);
    assert_eq!(shared.borrow().hooked, 0);
}

#[test]
fn test_cyclic_reference_is_hooked_once() {
    let node = Rc::new(RefCell::new(Counted::default()));
    node.borrow_mut().next = Some(Rc::clone(&node));

    let masked = must(&node);
    assert_eq!(masked.borrow().hooked, 1);
    let next = masked.borrow().next.clone().unwrap();
    assert!(Rc::ptr_eq(&masked, &next));

    node.borrow_mut().next = None;
    masked.borrow_mut().next = None;
}

#[test]
fn test_two_node_cycle_hooks_each_node_once() {
    let a = Rc::new(RefCell::new(Counted::default()));
    let b = Rc::new(RefCell::new(Counted {
        hooked: 0,
        next: Some(Rc::clone(&a)),
    }));
    a.borrow_mut().next = Some(Rc::clone(&b));

    let masked_a = must(&a);
    let masked_b = masked_a.borrow().next.clone().unwrap();
    assert_eq!(masked_a.borrow().hooked, 1);
    assert_eq!(masked_b.borrow().hooked, 1);

    a.borrow_mut().next = None;
    masked_a.borrow_mut().next = None;
}

#[test]
fn test_hooks_run_post_order() {
    #[derive(Debug, Default, Maskable)]
    #[mask(in_place)]
    struct Parent {
        pub child: Option<Box<Child>>,
        pub seen_child_masked: bool,
    }

    #[derive(Debug, Default, Maskable)]
    #[mask(in_place)]
    struct Child {
        pub masked: bool,
    }

    impl MaskInPlace for Parent {
        fn mask_in_place(&mut self) {
            self.seen_child_masked = self.child.as_ref().is_some_and(|child| child.masked);
        }
    }

    impl MaskInPlace for Child {
        fn mask_in_place(&mut self) {
            self.masked = true;
        }
    }

    let parent = Box::new(Parent {
        child: Some(Box::new(Child::default())),
        seen_child_masked: false,
    });
    let masked = must(&parent);
    assert!(masked.seen_child_masked);
}
