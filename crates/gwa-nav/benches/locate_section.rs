//! Benchmarks for section lookup and menu resolution.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gwa_links::RawLink;
use gwa_nav::{Menus, NavigationSettings, locate_section, primary_nav};
use gwa_tree::{ContentTree, ContentTreeBuilder, PageId, Visibility};

/// Build a tree with the given depth and breadth below a single root.
///
/// Page ids are assigned depth-first starting at 1; returns the tree and the
/// id of the last (deepest) page.
fn create_tree(depth: usize, breadth: usize) -> (ContentTree, PageId) {
    fn add_level(
        builder: &mut ContentTreeBuilder,
        next_id: &mut u64,
        parent: usize,
        current_depth: usize,
        max_depth: usize,
        breadth: usize,
    ) {
        if current_depth > max_depth {
            return;
        }
        for i in 0..breadth {
            *next_id += 1;
            let idx = builder
                .add_page(
                    *next_id,
                    format!("Page {current_depth}.{i}"),
                    format!("page-{i}"),
                    Visibility::menu(),
                    Some(parent),
                )
                .unwrap();
            add_level(builder, next_id, idx, current_depth + 1, max_depth, breadth);
        }
    }

    let mut builder = ContentTreeBuilder::new();
    let root = builder
        .add_page(1, "Root", "root", Visibility::default(), None)
        .unwrap();
    let mut next_id = 1;
    add_level(&mut builder, &mut next_id, root, 2, depth, breadth);
    (builder.build(), PageId(next_id))
}

fn bench_locate_section(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate_section");

    for (depth, breadth) in [(3, 10), (5, 5), (8, 3)] {
        let (tree, deepest) = create_tree(depth, breadth);
        let page = tree.get(deepest).unwrap();
        group.bench_with_input(
            BenchmarkId::new("deepest_page", format!("d{depth}_b{breadth}")),
            &page,
            |b, page| b.iter(|| locate_section(page)),
        );
    }

    let (tree, _) = create_tree(5, 5);
    let home = tree.get(PageId(2)).unwrap();
    group.bench_function("fallback_home", |b| b.iter(|| locate_section(&home)));

    group.finish();
}

fn bench_menus(c: &mut Criterion) {
    let (tree, deepest) = create_tree(5, 5);
    let settings = NavigationSettings {
        primary: (2..12).map(|id| RawLink::page(PageId(id), None)).collect(),
        footer_links: (0..10)
            .map(|i| RawLink::external(&format!("https://example.com/{i}"), "Example"))
            .collect(),
        ..NavigationSettings::default()
    };
    let bound = settings.bind(&tree);
    let current = tree.get(deepest).unwrap();

    let mut group = c.benchmark_group("menus");

    group.bench_function("resolve", |b| b.iter(|| Menus::resolve(&bound)));
    group.bench_function("primary_nav", |b| {
        b.iter(|| primary_nav(&bound, Some(&current)));
    });

    group.finish();
}

criterion_group!(benches, bench_locate_section, bench_menus);
criterion_main!(benches);
