use tests::{row, Rows};

use pretty_assertions::assert_eq;
use rowbind::{Record, RecordMapper};

#[derive(Debug, Default, PartialEq, Record)]
struct Prefecture {
    #[column("id")]
    id: i64,

    #[column("name")]
    name: String,

    #[column("-")]
    description: String,
}

#[test]
fn fetch_single_row() {
    let cursor = Rows::new(["id", "name"], vec![row!(42i64, "hogehoge")]);
    let mut mapper = RecordMapper::new(cursor).unwrap();
    assert_eq!(mapper.column_names(), ["id", "name"]);

    let mut prefecture = Prefecture::default();
    assert!(mapper.fetch_next(&mut prefecture).unwrap());
    assert_eq!(
        prefecture,
        Prefecture {
            id: 42,
            name: "hogehoge".to_string(),
            description: String::new(),
        }
    );

    assert!(!mapper.fetch_next(&mut prefecture).unwrap());
}

#[test]
fn fetch_multiple_rows() {
    let expected = [
        (1, "hokkaido"),
        (2, "aomori"),
        (3, "iwate"),
        (4, "miyagi"),
        (5, "akita"),
    ];

    let cursor = Rows::new(
        ["id", "name"],
        expected.iter().map(|(id, name)| row!(*id, *name)).collect(),
    );
    let mut mapper = RecordMapper::new(cursor).unwrap();

    for (id, name) in expected {
        let mut prefecture = Prefecture::default();
        assert!(mapper.fetch_next(&mut prefecture).unwrap());
        assert_eq!(prefecture.id, id);
        assert_eq!(prefecture.name, name);
    }

    assert!(!mapper.fetch_next(&mut Prefecture::default()).unwrap());
}

#[test]
fn empty_result_set() {
    let cursor = Rows::new(["id", "name"], vec![]);
    let mut mapper = RecordMapper::new(cursor).unwrap();

    let mut prefecture = Prefecture::default();
    assert!(!mapper.fetch_next(&mut prefecture).unwrap());
    assert_eq!(prefecture, Prefecture::default());
}

// Once exhausted, every further call reports exhaustion and leaves the
// destination alone.
#[test]
fn exhaustion_is_idempotent() {
    let cursor = Rows::new(["id", "name"], vec![row!(1i64, "hokkaido")]);
    let mut mapper = RecordMapper::new(cursor).unwrap();

    assert!(mapper.fetch_next(&mut Prefecture::default()).unwrap());

    for _ in 0..3 {
        let mut sentinel = Prefecture {
            id: 99,
            name: "sentinel".to_string(),
            description: "untouched".to_string(),
        };
        assert!(!mapper.fetch_next(&mut sentinel).unwrap());
        assert_eq!(sentinel.id, 99);
        assert_eq!(sentinel.name, "sentinel");
        assert_eq!(sentinel.description, "untouched");
    }
}

// A suppressed field is never written, even when a column of the exact same
// name exists in the result set.
#[test]
fn suppression_marker_is_absolute() {
    let cursor = Rows::new(
        ["id", "name", "description"],
        vec![row!(1i64, "hokkaido", "northernmost")],
    );
    let mut mapper = RecordMapper::new(cursor).unwrap();

    let mut prefecture = Prefecture::default();
    assert!(mapper.fetch_next(&mut prefecture).unwrap());
    assert_eq!(prefecture.id, 1);
    assert_eq!(prefecture.name, "hokkaido");
    assert_eq!(prefecture.description, "");
}

// A column with no corresponding field is read and discarded without error.
#[test]
fn unbound_column_is_a_no_op() {
    let cursor = Rows::new(
        ["id", "population", "name"],
        vec![row!(1i64, 5_100_000i64, "hokkaido")],
    );
    let mut mapper = RecordMapper::new(cursor).unwrap();

    let mut prefecture = Prefecture::default();
    assert!(mapper.fetch_next(&mut prefecture).unwrap());
    assert_eq!(prefecture.id, 1);
    assert_eq!(prefecture.name, "hokkaido");
}

// Column names are matched by exact string equality, case-sensitive.
#[test]
fn column_match_is_case_sensitive() {
    let cursor = Rows::new(["Id", "name"], vec![row!(1i64, "hokkaido")]);
    let mut mapper = RecordMapper::new(cursor).unwrap();

    let mut prefecture = Prefecture::default();
    assert!(mapper.fetch_next(&mut prefecture).unwrap());
    assert_eq!(prefecture.id, 0);
    assert_eq!(prefecture.name, "hokkaido");
}

#[derive(Debug, Default, PartialEq, Record)]
struct Measurement {
    #[column("count")]
    count: i32,

    #[column("total")]
    total: i64,

    #[column("ratio")]
    ratio: f32,

    #[column("mean")]
    mean: f64,

    #[column("label")]
    label: String,

    #[column("valid")]
    valid: bool,
}

#[test]
fn type_dispatch_covers_all_kinds() {
    let cursor = Rows::new(
        ["count", "total", "ratio", "mean", "label", "valid"],
        vec![row!(12i64, 9_000_000_000i64, 0.25f64, 2.5f64, "sample", true)],
    );
    let mut mapper = RecordMapper::new(cursor).unwrap();

    let mut measurement = Measurement::default();
    assert!(mapper.fetch_next(&mut measurement).unwrap());
    assert_eq!(
        measurement,
        Measurement {
            count: 12,
            total: 9_000_000_000,
            ratio: 0.25,
            mean: 2.5,
            label: "sample".to_string(),
            valid: true,
        }
    );
}

// Each destination reflects exactly its own row, independent of prior
// fetches.
#[test]
fn no_cross_row_contamination() {
    let cursor = Rows::new(
        ["id", "name", "description"],
        vec![
            row!(1i64, "hokkaido", "a"),
            row!(2i64, "", "b"),
            row!(3i64, "iwate", "c"),
        ],
    );
    let mut mapper = RecordMapper::new(cursor).unwrap();

    let mut fetched = Vec::new();
    loop {
        let mut prefecture = Prefecture::default();
        if !mapper.fetch_next(&mut prefecture).unwrap() {
            break;
        }
        fetched.push(prefecture);
    }

    assert_eq!(
        fetched,
        vec![
            Prefecture {
                id: 1,
                name: "hokkaido".to_string(),
                description: String::new(),
            },
            Prefecture {
                id: 2,
                name: String::new(),
                description: String::new(),
            },
            Prefecture {
                id: 3,
                name: "iwate".to_string(),
                description: String::new(),
            },
        ]
    );
}

#[test]
fn collect_remaining_rows() {
    let cursor = Rows::new(
        ["id", "name"],
        vec![row!(1i64, "hokkaido"), row!(2i64, "aomori")],
    );
    let mapper = RecordMapper::new(cursor).unwrap();

    let prefectures: Vec<Prefecture> = mapper.collect().unwrap();
    assert_eq!(prefectures.len(), 2);
    assert_eq!(prefectures[0].name, "hokkaido");
    assert_eq!(prefectures[1].name, "aomori");
}

#[derive(Debug, Default, Record)]
struct Sparse {
    #[column("id")]
    id: i64,

    // No annotation: invisible to the mapper even though a same-named column
    // exists.
    name: String,
}

#[test]
fn unannotated_field_is_invisible() {
    let cursor = Rows::new(["id", "name"], vec![row!(7i64, "hokkaido")]);
    let mut mapper = RecordMapper::new(cursor).unwrap();

    let mut sparse = Sparse::default();
    assert!(mapper.fetch_next(&mut sparse).unwrap());
    assert_eq!(sparse.id, 7);
    assert_eq!(sparse.name, "");
}
