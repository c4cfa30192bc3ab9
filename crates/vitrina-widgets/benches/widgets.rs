//! Benchmark tests for widget operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vitrina_core::{Constraints, Widget};
use vitrina_widgets::{Button, CellValue, DataTable, Rating, TableColumn, TableRow};

fn sample_table(rows: usize) -> DataTable {
    let table = DataTable::new()
        .column(TableColumn::new("id", "ID"))
        .column(TableColumn::new("name", "Name"))
        .column(TableColumn::new("score", "Score"));

    let rows: Vec<TableRow> = (0..rows)
        .map(|i| {
            TableRow::new()
                .cell("id", CellValue::Number(i as f64))
                .cell("name", CellValue::Text(format!("row_{i}")))
                .cell("score", CellValue::Number(((i * 37) % 100) as f64))
        })
        .collect();
    table.rows(rows)
}

fn bench_button_creation(c: &mut Criterion) {
    c.bench_function("button_new", |b| {
        b.iter(|| Button::new(black_box("Click me")))
    });
}

fn bench_button_measure(c: &mut Criterion) {
    let button = Button::new("Click me");
    let constraints = Constraints::new(0.0, 200.0, 0.0, 50.0);

    c.bench_function("button_measure", |b| {
        b.iter(|| button.measure(black_box(constraints)))
    });
}

fn bench_table_creation(c: &mut Criterion) {
    c.bench_function("table_new_with_100_rows", |b| {
        b.iter(|| sample_table(black_box(100)))
    });
}

fn bench_table_visible_slice_unsorted(c: &mut Criterion) {
    let table = sample_table(1000);

    c.bench_function("table_visible_slice_unsorted_1000", |b| {
        b.iter(|| black_box(&table).visible_slice())
    });
}

fn bench_table_visible_slice_sorted(c: &mut Criterion) {
    let mut table = sample_table(1000);
    table.toggle_sort(2);

    c.bench_function("table_visible_slice_sorted_1000", |b| {
        b.iter(|| black_box(&table).visible_slice())
    });
}

fn bench_table_page_navigation(c: &mut Criterion) {
    c.bench_function("table_go_to_page", |b| {
        b.iter_batched(
            || sample_table(1000),
            |mut table| {
                table.go_to_page(black_box(50));
                table
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_table_select_all(c: &mut Criterion) {
    c.bench_function("table_select_all_on_page", |b| {
        b.iter_batched(
            || sample_table(1000).selectable(true),
            |mut table| {
                table.select_all_on_page(black_box(true));
                table
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_rating_star_fill(c: &mut Criterion) {
    let rating = Rating::new().value(3.5);

    c.bench_function("rating_star_fill", |b| {
        b.iter(|| (0..5).map(|i| rating.star_fill(black_box(i))).count())
    });
}

criterion_group!(
    benches,
    bench_button_creation,
    bench_button_measure,
    bench_table_creation,
    bench_table_visible_slice_unsorted,
    bench_table_visible_slice_sorted,
    bench_table_page_navigation,
    bench_table_select_all,
    bench_rating_star_fill
);
criterion_main!(benches);
