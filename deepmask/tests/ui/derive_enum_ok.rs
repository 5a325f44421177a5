use deepmask::Maskable;

#[derive(Debug, PartialEq, Maskable)]
enum Event {
    Started,
    Progress(u8, String),
    Finished { code: i32, detail: Option<String> },
}

#[derive(Debug, PartialEq, Maskable)]
enum Either<L, R> {
    Left(L),
    Right(R),
}

#[derive(Maskable)]
enum Never {}

fn main() {
    let events = vec![
        Event::Started,
        Event::Progress(50, "half".into()),
        Event::Finished {
            code: 0,
            detail: None,
        },
    ];
    assert_eq!(deepmask::must(&events), events);

    let either: Either<u8, String> = Either::Right("right".into());
    assert_eq!(deepmask::must(&either), either);

    let nothing: Vec<Never> = Vec::new();
    assert!(deepmask::must(&nothing).is_empty());
}
