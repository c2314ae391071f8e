use inject_abstractions::{Inject, Injectable};
use inject_macros::Injectable;

#[derive(Injectable)]
struct Wrapper<T: Send + Sync + 'static> {
    #[inject]
    inner: Inject<T>,
}

struct Unit;

#[derive(Injectable)]
struct Marker;

fn main() {
    assert_eq!(Wrapper::<String>::dependencies().len(), 1);
    assert!(Marker::dependencies().is_empty());
    let _ = Unit;
}
