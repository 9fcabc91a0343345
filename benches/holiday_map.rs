use criterion::{black_box, criterion_group, criterion_main, Criterion};

use jp_holidays::calendars::get_rule_table_by_name;
use jp_holidays::{HolidayCal, HolidayMap};

fn criterion_benchmark(c: &mut Criterion) {
    let table = get_rule_table_by_name("jp").unwrap();
    let cal = HolidayCal::from_rule_table(table.clone());
    cal.get_holiday_map(2024);

    c.bench_function("build year map", |z| {
        z.iter(|| HolidayMap::build(black_box(2024), &table.rules))
    });
    c.bench_function("cached year map", |z| {
        z.iter(|| cal.get_holiday_map(black_box(2024)))
    });
    c.bench_function("get holiday str", |z| {
        z.iter(|| cal.get_holiday(black_box("2024-05-06")))
    });
    c.bench_function("build every supported year", |z| {
        z.iter(|| {
            let cal = HolidayCal::from_rule_table(table.clone());
            (1948..=2099).map(|y| cal.get_holiday_map(y).len()).sum::<usize>()
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
