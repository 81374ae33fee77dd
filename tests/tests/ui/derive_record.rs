use rowbind::{FieldKind, Record};

#[derive(Default, Record)]
struct Everything {
    #[column("a")]
    a: i8,

    #[column("b")]
    b: i16,

    #[column("c")]
    c: i32,

    #[column("d")]
    d: i64,

    #[column("e")]
    e: isize,

    #[column("f")]
    f: f32,

    #[column("g")]
    g: f64,

    #[column("h")]
    h: String,

    #[column("i")]
    i: bool,
}

fn main() {
    let bindings = Everything::bindings();
    assert_eq!(bindings.len(), 9);

    let kinds: Vec<FieldKind> = bindings.iter().map(|b| b.kind).collect();
    assert_eq!(
        kinds,
        vec![
            FieldKind::Int,
            FieldKind::Int,
            FieldKind::Int,
            FieldKind::Int,
            FieldKind::Int,
            FieldKind::Float,
            FieldKind::Float,
            FieldKind::Str,
            FieldKind::Bool,
        ]
    );
}
