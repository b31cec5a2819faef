use super::*;
use pretty_assertions::assert_eq;

fn small_arena() -> Arena {
    Arena::with_config(ArenaConfig {
        string_capacity: 64,
        term_capacity: 8,
        scope_capacity: 2,
        page_size: 64,
    })
}

#[test]
fn canonical_terms_exist_up_front() {
    let arena = Arena::new();
    assert_eq!(arena.get(arena.nil()), Term::Nil);
    assert_eq!(arena.get(arena.t()), Term::Atom(Name::T));
    assert_eq!(arena.truth(true), arena.t());
    assert_eq!(arena.truth(false), arena.nil());
}

#[test]
fn alloc_records_span() {
    let mut arena = Arena::new();
    let id = arena.alloc(Term::Integer(7), Span::new(3, 4)).unwrap();
    assert_eq!(arena.get(id), Term::Integer(7));
    assert_eq!(arena.span(id), Span::new(3, 4));
}

#[test]
fn copy_term_is_a_distinct_slot() {
    let mut arena = Arena::new();
    let original = arena.alloc(Term::Integer(5), Span::new(0, 1)).unwrap();
    let copy = arena.copy_term(original).unwrap();
    assert_ne!(original, copy);

    *arena.get_mut(copy) = Term::Integer(-5);
    assert_eq!(arena.get(original), Term::Integer(5));
    assert_eq!(arena.span(copy), Span::new(0, 1));
}

#[test]
fn list_iteration_and_length() {
    let mut arena = Arena::new();
    let nil = arena.alloc_nil(Span::DUMMY).unwrap();
    let b = arena.alloc(Term::Integer(2), Span::DUMMY).unwrap();
    let a = arena.alloc(Term::Integer(1), Span::DUMMY).unwrap();
    let tail = arena.cons(b, nil, Span::DUMMY).unwrap();
    let list = arena.cons(a, tail, Span::DUMMY).unwrap();

    assert_eq!(arena.list_iter(list).collect::<Vec<_>>(), vec![a, b]);
    assert_eq!(arena.list_len(list), 2);
    assert_eq!(arena.uncons(list), Some((a, tail)));
    assert_eq!(arena.uncons(nil), None);
}

#[test]
fn list_iter_rest_tracks_position() {
    let mut arena = Arena::new();
    let nil = arena.alloc_nil(Span::DUMMY).unwrap();
    let x = arena.alloc(Term::Integer(1), Span::DUMMY).unwrap();
    let list = arena.cons(x, nil, Span::DUMMY).unwrap();

    let mut iter = arena.list_iter(list);
    assert_eq!(iter.rest(), list);
    iter.next();
    assert_eq!(iter.rest(), nil);
}

#[test]
fn strings_round_trip_through_region() {
    let mut arena = Arena::new();
    let hello = arena.alloc_str(b"hello").unwrap();
    let start = arena.begin_str().unwrap();
    for &b in b"a\nb" {
        arena.push_str_byte(b).unwrap();
    }
    let built = arena.finish_str(start);

    assert_eq!(arena.str_bytes(hello), b"hello");
    assert_eq!(arena.str_bytes(built), b"a\nb");
    assert_eq!(built.len(), 3);
}

#[test]
fn term_pool_spans_pages() {
    // 64-byte pages hold two 24-byte terms; allocate well past that.
    let mut arena = Arena::with_config(ArenaConfig {
        page_size: 64,
        ..ArenaConfig::default()
    });
    let ids: Vec<TermId> = (0..50)
        .map(|i| arena.alloc(Term::Integer(i), Span::DUMMY).unwrap())
        .collect();
    for (i, id) in ids.into_iter().enumerate() {
        assert_eq!(arena.get(id), Term::Integer(i as i64));
    }
}

#[test]
fn term_reservation_exhausts() {
    let mut arena = small_arena();
    // Two canonical terms sit outside the reservation.
    for i in 0..6 {
        arena.alloc(Term::Integer(i), Span::DUMMY).unwrap();
    }
    assert_eq!(
        arena.alloc(Term::Integer(99), Span::DUMMY),
        Err(ArenaError::Exhausted {
            pool: "terms",
            reserved: 8
        })
    );
}

#[test]
fn scope_reservation_exhausts() {
    let mut arena = small_arena();
    let node = EnvNode {
        name: Name::T,
        value: arena.t(),
        next: None,
    };
    let first = arena.alloc_scope(node).unwrap();
    arena.alloc_scope(node).unwrap();
    assert!(arena.alloc_scope(node).is_err());
    assert_eq!(arena.scope(first), node);
}

#[test]
fn string_reservation_exhausts() {
    let mut arena = small_arena();
    arena.alloc_str(&[b'x'; 60]).unwrap();
    assert!(matches!(
        arena.alloc_str(b"overflow"),
        Err(ArenaError::Exhausted { pool: "string bytes", .. })
    ));
}

#[test]
fn interned_names_resolve() {
    let mut arena = Arena::new();
    let name = arena.intern("make-adder");
    assert_eq!(arena.name(name), "make-adder");
    assert_eq!(arena.intern("define"), Name::DEFINE);
}

#[test]
fn stats_count_allocations() {
    let mut arena = Arena::new();
    arena.alloc(Term::Integer(1), Span::DUMMY).unwrap();
    arena.alloc_str(b"abc").unwrap();
    let stats = arena.stats();
    assert_eq!(stats.terms, 3);
    assert_eq!(stats.string_bytes, 3);
    assert_eq!(stats.committed_string_bytes, 4096);
}
