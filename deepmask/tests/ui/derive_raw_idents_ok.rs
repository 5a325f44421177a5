use deepmask::Maskable;

#[derive(Debug, PartialEq, Maskable)]
struct Token {
    pub r#type: String,
    pub r#ref: u32,
}

#[derive(Debug, PartialEq, Maskable)]
enum Keyword {
    r#Match { r#in: bool },
    r#Loop(u8),
}

fn main() {
    let token = Token {
        r#type: "bearer".into(),
        r#ref: 7,
    };
    assert_eq!(deepmask::must(&token), token);

    let keywords = [Keyword::r#Match { r#in: true }, Keyword::r#Loop(3)];
    assert_eq!(deepmask::must(&keywords), keywords);
}
