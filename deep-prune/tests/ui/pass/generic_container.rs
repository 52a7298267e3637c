use std::{collections::HashMap, marker::PhantomData};

use deep_prune::{Prunable, Prune, ToValue, Value};

struct NotConvertible;

#[derive(Prune)]
struct Page<T, K> {
    items: Vec<T>,
    index: HashMap<String, Option<T>>,
    #[prune(skip)]
    cursor: K,
    _kind: PhantomData<K>,
}

#[derive(Prune)]
struct Wrapper<'a, T: ?Sized>(&'a T);

fn main() {
    let page = Page {
        items: vec![1_u8, 2],
        index: HashMap::new(),
        cursor: NotConvertible,
        _kind: PhantomData,
    };
    let _ = &page.cursor;
    let _: Value = page.prune();

    let wrapped = Wrapper("text");
    let _: Value = wrapped.to_value();
}
