//! Underscore-prefixed and `#[lesser(skip)]` fields are discarded and need
//! not implement `Describe`.

use lesser::Describe;

pub struct NotDescribed;

#[derive(Describe)]
pub struct Row {
    pub key: u32,
    pub _scratch: NotDescribed,
    #[lesser(skip)]
    pub cache: Option<NotDescribed>,
    pub r#type: bool,
}

fn main() {
    let desc = Row::shape().desc();
    let discards: Vec<bool> = desc.fields.iter().map(|f| f.discard).collect();
    assert_eq!(discards, [false, true, true, false]);
    assert_eq!(desc.fields[3].name, Some("type"));

    let leaves = desc.leaf_paths().unwrap();
    assert_eq!(leaves.len(), 2);
    assert_eq!(leaves[1].path(), "type");
}
