use deepmask::Maskable;

#[derive(Debug, PartialEq, Maskable)]
struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<Box<Page<T>>>,
}

#[derive(Debug, PartialEq, Maskable)]
enum Tree {
    Leaf(u32),
    Node(Vec<Tree>),
}

fn main() {
    let pages = Page {
        items: vec![1_u8, 2],
        next: Some(Box::new(Page {
            items: vec![3],
            next: None,
        })),
    };
    assert_eq!(deepmask::must(&pages), pages);

    let tree = Tree::Node(vec![Tree::Leaf(1), Tree::Node(vec![Tree::Leaf(2)])]);
    assert_eq!(deepmask::must(&tree), tree);
}
