//! Based on: https://github.com/tokio-rs/tokio/blob/d74d17307dd53215061c4a8a1f20a0e30461e296/tokio/tests/async_send_sync.rs

#![warn(rust_2018_idioms)]

use std::{any::Any, cell::Cell};
use std::rc::Rc;

use bintree::{traverse, Cursor, CursorMut, Node, NodeArena, NodeId, NodeMut, Queue};

fn require_send<T: Send>(_t: &T) {}
fn require_sync<T: Sync>(_t: &T) {}

struct NotSend {
    _a: Box<dyn Any + Sync>,
}

struct Invalid;

trait AmbiguousIfSend<A> {
    fn some_item(&self) {}
}
impl<T: ?Sized> AmbiguousIfSend<()> for T {}
impl<T: ?Sized + Send> AmbiguousIfSend<Invalid> for T {}

trait AmbiguousIfSync<A> {
    fn some_item(&self) {}
}
impl<T: ?Sized> AmbiguousIfSync<()> for T {}
impl<T: ?Sized + Sync> AmbiguousIfSync<Invalid> for T {}

trait AmbiguousIfUnpin<A> {
    fn some_item(&self) {}
}
impl<T: ?Sized> AmbiguousIfUnpin<()> for T {}
impl<T: ?Sized + Unpin> AmbiguousIfUnpin<Invalid> for T {}

macro_rules! assert_value {
    ($type:ty: Send & Sync) => {
        #[allow(unreachable_code)]
        #[allow(unused_variables)]
        pub const _: fn() = || {
            let f: $type = todo!();
            require_send(&f);
            require_sync(&f);
        };
    };
    ($type:ty: !Send & Sync) => {
        #[allow(unreachable_code)]
        #[allow(unused_variables)]
        pub const _: fn() = || {
            let f: $type = todo!();
            AmbiguousIfSend::some_item(&f);
            require_sync(&f);
        };
    };
    ($type:ty: Send & !Sync) => {
        #[allow(unreachable_code)]
        #[allow(unused_variables)]
        pub const _: fn() = || {
            let f: $type = todo!();
            require_send(&f);
            AmbiguousIfSync::some_item(&f);
        };
    };
    ($type:ty: !Send & !Sync) => {
        #[allow(unreachable_code)]
        #[allow(unused_variables)]
        pub const _: fn() = || {
            let f: $type = todo!();
            AmbiguousIfSend::some_item(&f);
            AmbiguousIfSync::some_item(&f);
        };
    };
}

assert_value!(NodeId: Send & Sync);

assert_value!(NodeArena<i32>: Send & Sync);
assert_value!(NodeArena<Rc<i32>>: !Send & !Sync);
assert_value!(NodeArena<Cell<i32>>: Send & !Sync);
assert_value!(NodeArena<NotSend>: !Send & Sync);
assert_value!(NodeArena<i32, Rc<u8>>: !Send & !Sync);
assert_value!(NodeArena<i32, Cell<u8>>: Send & !Sync);

assert_value!(Node<'_, i32>: Send & Sync);
assert_value!(Node<'_, Rc<i32>>: !Send & !Sync);
assert_value!(Node<'_, Cell<i32>>: !Send & !Sync);
assert_value!(Node<'_, NotSend>: Send & Sync);
assert_value!(Node<'_, i32, Cell<u8>>: !Send & !Sync);

assert_value!(NodeMut<'_, i32>: Send & Sync);
assert_value!(NodeMut<'_, Rc<i32>>: !Send & !Sync);
assert_value!(NodeMut<'_, Cell<i32>>: Send & !Sync);
assert_value!(NodeMut<'_, NotSend>: !Send & Sync);
assert_value!(NodeMut<'_, i32, Cell<u8>>: Send & !Sync);

assert_value!(Cursor<'_, i32>: Send & Sync);
assert_value!(Cursor<'_, Rc<i32>>: !Send & !Sync);
assert_value!(Cursor<'_, Cell<i32>>: !Send & !Sync);
assert_value!(Cursor<'_, NotSend>: Send & Sync);

assert_value!(CursorMut<'_, i32>: Send & Sync);
assert_value!(CursorMut<'_, Rc<i32>>: !Send & !Sync);
assert_value!(CursorMut<'_, Cell<i32>>: Send & !Sync);
assert_value!(CursorMut<'_, NotSend>: !Send & Sync);

assert_value!(traverse::IterPreorder<'_, i32>: Send & Sync);
assert_value!(traverse::IterPreorder<'_, Rc<i32>>: !Send & !Sync);
assert_value!(traverse::IterPreorder<'_, Cell<i32>>: !Send & !Sync);
assert_value!(traverse::IterPreorder<'_, NotSend>: Send & Sync);

assert_value!(traverse::IterInorder<'_, i32>: Send & Sync);
assert_value!(traverse::IterInorder<'_, Rc<i32>>: !Send & !Sync);
assert_value!(traverse::IterInorder<'_, Cell<i32>>: !Send & !Sync);
assert_value!(traverse::IterInorder<'_, NotSend>: Send & Sync);

assert_value!(traverse::IterPostorder<'_, i32>: Send & Sync);
assert_value!(traverse::IterPostorder<'_, Rc<i32>>: !Send & !Sync);
assert_value!(traverse::IterPostorder<'_, Cell<i32>>: !Send & !Sync);
assert_value!(traverse::IterPostorder<'_, NotSend>: Send & Sync);

assert_value!(traverse::IterLevelorder<'_, i32>: Send & Sync);
assert_value!(traverse::IterLevelorder<'_, Rc<i32>>: !Send & !Sync);
assert_value!(traverse::IterLevelorder<'_, Cell<i32>>: !Send & !Sync);
assert_value!(traverse::IterLevelorder<'_, NotSend>: Send & Sync);

assert_value!(Queue<i32>: Send & Sync);
assert_value!(Queue<Rc<i32>>: !Send & !Sync);
assert_value!(Queue<Cell<i32>>: Send & !Sync);
assert_value!(Queue<NotSend>: !Send & Sync);
