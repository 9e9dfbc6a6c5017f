use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::sync::Arc;

use staffgate::catalog::{permissions as p, Role};
use staffgate::gating::{builtin_menu, filter_items};
use staffgate::{AccessPolicy, AuthState, AuthUser, PermissionContext, PermissionEvaluator};

fn evaluator(role: Role) -> PermissionEvaluator {
    PermissionEvaluator::from_auth(Arc::new(AccessPolicy::default()), &AuthState::signed_in(AuthUser::with_role(role.as_str())))
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluator");
    for role in [Role::SuperAdmin, Role::HrSpecialist, Role::Viewer] {
        let ev = evaluator(role);
        group.bench_with_input(BenchmarkId::new("has_all_permissions", role.as_str()), &ev, |b, ev| {
            b.iter(|| criterion::black_box(ev.has_all_permissions(&[p::LEAVES_VIEW, p::LEAVES_APPROVE, p::REPORTS_VIEW])));
        });
        group.bench_with_input(BenchmarkId::new("can_reach", role.as_str()), &ev, |b, ev| {
            b.iter(|| criterion::black_box(ev.can_reach("/licenses/renew")));
        });
        group.bench_with_input(BenchmarkId::new("filter_menu", role.as_str()), &ev, |b, ev| {
            let menu = builtin_menu();
            b.iter(|| criterion::black_box(filter_items(ev, &menu)));
        });
    }
    group.finish();
}

fn bench_sync(c: &mut Criterion) {
    let ctx = PermissionContext::new(Arc::new(AccessPolicy::default()));
    let a = AuthState::signed_in(AuthUser::with_role("admin"));
    let b_state = AuthState::signed_in(AuthUser::with_role("viewer"));
    c.bench_function("context_sync_alternating", |b| {
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            criterion::black_box(ctx.sync(if flip { &a } else { &b_state }))
        });
    });
    c.bench_function("context_sync_unchanged", |b| {
        ctx.sync(&a);
        b.iter(|| criterion::black_box(ctx.sync(&a)));
    });
}

criterion_group!(benches, bench_queries, bench_sync);
criterion_main!(benches);
