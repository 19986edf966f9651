use crate::{
    arity::{Arity, SupportedArity},
    vector::Vector,
};
use impact_profiling::benchmark::Benchmarker;
use std::hint::black_box;

pub fn add_vector2(benchmarker: impl Benchmarker) {
    add::<2>(benchmarker);
}

pub fn add_vector3(benchmarker: impl Benchmarker) {
    add::<3>(benchmarker);
}

pub fn add_vector4(benchmarker: impl Benchmarker) {
    add::<4>(benchmarker);
}

pub fn dot_vector2(benchmarker: impl Benchmarker) {
    dot::<2>(benchmarker);
}

pub fn dot_vector3(benchmarker: impl Benchmarker) {
    dot::<3>(benchmarker);
}

pub fn dot_vector4(benchmarker: impl Benchmarker) {
    dot::<4>(benchmarker);
}

pub fn normalize_vector2(benchmarker: impl Benchmarker) {
    normalize::<2>(benchmarker);
}

pub fn normalize_vector3(benchmarker: impl Benchmarker) {
    normalize::<3>(benchmarker);
}

pub fn normalize_vector4(benchmarker: impl Benchmarker) {
    normalize::<4>(benchmarker);
}

pub fn lerp_vector2(benchmarker: impl Benchmarker) {
    lerp::<2>(benchmarker);
}

pub fn lerp_vector3(benchmarker: impl Benchmarker) {
    lerp::<3>(benchmarker);
}

pub fn lerp_vector4(benchmarker: impl Benchmarker) {
    lerp::<4>(benchmarker);
}

pub fn clamp_vector2(benchmarker: impl Benchmarker) {
    clamp::<2>(benchmarker);
}

pub fn clamp_vector3(benchmarker: impl Benchmarker) {
    clamp::<3>(benchmarker);
}

pub fn clamp_vector4(benchmarker: impl Benchmarker) {
    clamp::<4>(benchmarker);
}

pub fn approx_eq_vector2(benchmarker: impl Benchmarker) {
    approx_eq::<2>(benchmarker);
}

pub fn approx_eq_vector3(benchmarker: impl Benchmarker) {
    approx_eq::<3>(benchmarker);
}

pub fn approx_eq_vector4(benchmarker: impl Benchmarker) {
    approx_eq::<4>(benchmarker);
}

fn add<const N: usize>(benchmarker: impl Benchmarker)
where
    Arity<N>: SupportedArity,
{
    let a = create_vector::<N>(1.0);
    let b = create_vector::<N>(-0.5);
    benchmarker.benchmark(&mut || black_box(a) + black_box(b));
}

fn dot<const N: usize>(benchmarker: impl Benchmarker)
where
    Arity<N>: SupportedArity,
{
    let a = create_vector::<N>(1.0);
    let b = create_vector::<N>(2.0);
    benchmarker.benchmark(&mut || black_box(a).dot(&black_box(b)));
}

fn normalize<const N: usize>(benchmarker: impl Benchmarker)
where
    Arity<N>: SupportedArity,
{
    let a = create_vector::<N>(3.0);
    benchmarker.benchmark(&mut || black_box(a).normalized());
}

fn lerp<const N: usize>(benchmarker: impl Benchmarker)
where
    Arity<N>: SupportedArity,
{
    let a = create_vector::<N>(1.0);
    let b = create_vector::<N>(5.0);
    benchmarker.benchmark(&mut || black_box(a).lerp(&black_box(b), black_box(0.3)));
}

fn clamp<const N: usize>(benchmarker: impl Benchmarker)
where
    Arity<N>: SupportedArity,
{
    let v = create_vector::<N>(4.0);
    let lower = Vector::same(-1.0);
    let upper = Vector::same(2.0);
    benchmarker.benchmark(&mut || black_box(v).clamped(&lower, &upper));
}

fn approx_eq<const N: usize>(benchmarker: impl Benchmarker)
where
    Arity<N>: SupportedArity,
{
    let a = create_vector::<N>(1.0);
    let b = a.add_scalar(1e-7);
    benchmarker.benchmark(&mut || black_box(a).approx_eq(&black_box(b)));
}

fn create_vector<const N: usize>(scale: f32) -> Vector<N>
where
    Arity<N>: SupportedArity,
{
    Vector::from_array(std::array::from_fn(|i| scale * (i as f32 + 1.0)))
}
