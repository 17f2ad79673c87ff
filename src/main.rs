use scope_own::{create_shape, defer, Owned, ShapeKind};

fn foo() {
    let _exit = defer(|| log::debug!("leaving foo"));
    // `wrapper` is a local, so the circle is released when `foo` returns.
    let wrapper = Owned::builder()
        .label("foo")
        .wrap(Some(create_shape(ShapeKind::Circle)));
    if let Some(shape) = wrapper.get() {
        log::debug!("holding {} #{}", shape.kind(), shape.id());
    }
}

fn main() {
    env_logger::init();

    foo();
    println!("hello, modern rust");
}
