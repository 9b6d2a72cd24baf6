//! Known-answer tests for every operator and function, on `f64`.

use fmm_linalg::*;

/// Matrix with the elements `first, first + 1, ...` in row-major order.
fn counting<const N: usize>(first: usize) -> Matrix<f64, N> {
    Matrix::from_fn(|row, col| (first + row * N + col) as f64)
}

#[test]
fn addition() {
    assert_eq!(vec2(1.0, 2.0) + vec2(1.0, 2.0), vec2(2.0, 4.0));
    assert_eq!(vec3(1.0, 2.0, 3.0) + vec3(1.0, 2.0, 3.0), vec3(2.0, 4.0, 6.0));
    assert_eq!(
        vec4(1.0, 2.0, 3.0, 4.0) + vec4(1.0, 2.0, 3.0, 4.0),
        vec4(2.0, 4.0, 6.0, 8.0)
    );

    #[rustfmt::skip]
    assert_eq!(counting::<2>(1) + counting::<2>(5), Matrix::from_rows([
        [ 6.0,  8.0],
        [10.0, 12.0],
    ]));
    #[rustfmt::skip]
    assert_eq!(counting::<3>(1) + counting::<3>(5), Matrix::from_rows([
        [ 6.0,  8.0, 10.0],
        [12.0, 14.0, 16.0],
        [18.0, 20.0, 22.0],
    ]));
    #[rustfmt::skip]
    assert_eq!(counting::<4>(1) + counting::<4>(5), Matrix::from_rows([
        [ 6.0,  8.0, 10.0, 12.0],
        [14.0, 16.0, 18.0, 20.0],
        [22.0, 24.0, 26.0, 28.0],
        [30.0, 32.0, 34.0, 36.0],
    ]));
}

#[test]
fn subtraction() {
    assert_eq!(vec2(1.0, 2.0) - vec2(1.0, 2.0), Vector2d::ZERO);
    assert_eq!(vec3(1.0, 2.0, 3.0) - vec3(1.0, 2.0, 3.0), Vector3d::ZERO);
    assert_eq!(vec4(1.0, 2.0, 3.0, 4.0) - vec4(1.0, 2.0, 3.0, 4.0), Vector4d::ZERO);

    assert_eq!(counting::<2>(1) - counting::<2>(5), Matrix::from_fn(|_, _| -4.0));
    assert_eq!(counting::<3>(1) - counting::<3>(5), Matrix::from_fn(|_, _| -4.0));
    assert_eq!(counting::<4>(1) - counting::<4>(5), Matrix::from_fn(|_, _| -4.0));
}

#[test]
fn scalar_multiplication() {
    let k = 7.0;

    assert_eq!(k * vec2(1.0, 2.0), vec2(7.0, 14.0));
    assert_eq!(k * vec3(1.0, 2.0, 3.0), vec3(7.0, 14.0, 21.0));
    assert_eq!(k * vec4(1.0, 2.0, 3.0, 4.0), vec4(7.0, 14.0, 21.0, 28.0));
    assert_eq!(vec2(1.0, 2.0) * k, vec2(7.0, 14.0));
    assert_eq!(vec3(1.0, 2.0, 3.0) * k, vec3(7.0, 14.0, 21.0));
    assert_eq!(vec4(1.0, 2.0, 3.0, 4.0) * k, vec4(7.0, 14.0, 21.0, 28.0));

    let m2 = counting::<2>(1);
    let m3 = counting::<3>(1);
    let m4 = counting::<4>(1);
    assert_eq!(k * m2, Matrix::from_rows([[7.0, 14.0], [21.0, 28.0]]));
    assert_eq!(k * m3, m3.map(|e| e * 7.0));
    assert_eq!(k * m4, m4.map(|e| e * 7.0));
    assert_eq!(m2 * k, k * m2);
    assert_eq!(m3 * k, k * m3);
    assert_eq!(m4 * k, k * m4);
    assert_eq!((k * m4).at(3, 3), 112.0);
}

#[test]
fn scalar_division() {
    assert_eq!(vec2(1.0, 2.0) / 2.0, vec2(0.5, 1.0));
    assert_eq!(vec3(1.0, 2.0, 3.0) / 2.0, vec3(0.5, 1.0, 1.5));
    assert_eq!(vec4(1.0, 2.0, 3.0, 4.0) / 2.0, vec4(0.5, 1.0, 1.5, 2.0));

    assert_eq!(counting::<2>(1) / 2.0, Matrix::from_rows([[0.5, 1.0], [1.5, 2.0]]));
    assert_eq!(counting::<3>(1) / 2.0, Matrix::from_fn(|r, c| (1 + r * 3 + c) as f64 * 0.5));
    assert_eq!(counting::<4>(1) / 2.0, Matrix::from_fn(|r, c| (1 + r * 4 + c) as f64 * 0.5));
}

#[test]
fn row_vector_matrix() {
    assert_eq!(vec2(1.0, 2.0) * counting::<2>(1), vec2(7.0, 10.0));
    assert_eq!(vec3(1.0, 2.0, 3.0) * counting::<3>(1), vec3(30.0, 36.0, 42.0));
    assert_eq!(
        vec4(1.0, 2.0, 3.0, 4.0) * counting::<4>(1),
        vec4(90.0, 100.0, 110.0, 120.0)
    );
}

#[test]
fn matrix_column_vector() {
    assert_eq!(counting::<2>(1) * vec2(1.0, 2.0), vec2(5.0, 11.0));
    assert_eq!(counting::<3>(1) * vec3(1.0, 2.0, 3.0), vec3(14.0, 32.0, 50.0));
    assert_eq!(
        counting::<4>(1) * vec4(1.0, 2.0, 3.0, 4.0),
        vec4(30.0, 70.0, 110.0, 150.0)
    );
}

#[test]
fn matrix_matrix() {
    #[rustfmt::skip]
    assert_eq!(counting::<2>(1) * counting::<2>(5), Matrix::from_rows([
        [19.0, 22.0],
        [43.0, 50.0],
    ]));
    #[rustfmt::skip]
    assert_eq!(counting::<3>(1) * counting::<3>(10), Matrix::from_rows([
        [ 84.0,  90.0,  96.0],
        [201.0, 216.0, 231.0],
        [318.0, 342.0, 366.0],
    ]));
    #[rustfmt::skip]
    assert_eq!(counting::<4>(1) * counting::<4>(17), Matrix::from_rows([
        [ 250.0,  260.0,  270.0,  280.0],
        [ 618.0,  644.0,  670.0,  696.0],
        [ 986.0, 1028.0, 1070.0, 1112.0],
        [1354.0, 1412.0, 1470.0, 1528.0],
    ]));
}

#[test]
fn inner_products() {
    assert_eq!(inner(vec2(1.0, 2.0), vec2(4.0, 5.0)), 14.0);
    assert_eq!(inner(vec3(1.0, 2.0, 3.0), vec3(4.0, 5.0, 6.0)), 32.0);
    assert_eq!(inner(vec4(1.0, 2.0, 3.0, 4.0), vec4(5.0, 6.0, 7.0, 8.0)), 70.0);

    assert_eq!(inner(counting::<2>(1), counting::<2>(5)), 70.0);
    assert_eq!(inner(counting::<3>(1), counting::<3>(5)), 465.0);
    assert_eq!(inner(counting::<4>(1), counting::<4>(5)), 2040.0);
}

#[test]
fn cross_products() {
    assert_eq!(cross(vec2(1.0, 2.0), vec2(4.0, 5.0)), -3.0);
    assert_eq!(cross(vec3(1.0, 2.0, 3.0), vec3(4.0, 5.0, 6.0)), vec3(-3.0, 6.0, -3.0));
}

#[test]
fn outer_products() {
    assert_eq!(
        outer(vec2(1.0, 2.0), vec2(3.0, 4.0)),
        Matrix::from_rows([[3.0, 4.0], [6.0, 8.0]])
    );
    #[rustfmt::skip]
    assert_eq!(outer(vec3(1.0, 2.0, 3.0), vec3(4.0, 5.0, 6.0)), Matrix::from_rows([
        [ 4.0,  5.0,  6.0],
        [ 8.0, 10.0, 12.0],
        [12.0, 15.0, 18.0],
    ]));
    #[rustfmt::skip]
    assert_eq!(outer(vec4(1.0, 2.0, 3.0, 4.0), vec4(5.0, 6.0, 7.0, 8.0)), Matrix::from_rows([
        [ 5.0,  6.0,  7.0,  8.0],
        [10.0, 12.0, 14.0, 16.0],
        [15.0, 18.0, 21.0, 24.0],
        [20.0, 24.0, 28.0, 32.0],
    ]));
}

#[test]
fn adjugates() {
    let m2 = Matrix::from_rows([[1.0, 2.0], [0.0, 1.0]]);
    assert_eq!(adj(m2), Matrix::from_rows([[1.0, -2.0], [0.0, 1.0]]));

    #[rustfmt::skip]
    let m3 = Matrix::from_rows([
        [1.0,  2.0,  3.0],
        [0.0,  1.0, -7.0],
        [9.0, 10.0,  0.0],
    ]);
    #[rustfmt::skip]
    assert_eq!(adj(m3), Matrix::from_rows([
        [ 70.0,  30.0, -17.0],
        [-63.0, -27.0,   7.0],
        [ -9.0,   8.0,   1.0],
    ]));

    #[rustfmt::skip]
    let m4 = Matrix::from_rows([
        [1.0,  2.0,  3.0,  4.0],
        [0.0,  1.0, -7.0, -8.0],
        [9.0, 10.0, 11.0, 12.0],
        [0.0,  0.0, -3.0, 13.0],
    ]);
    #[rustfmt::skip]
    assert_eq!(adj(m4), Matrix::from_rows([
        [ 1329.0,  152.0, -281.0, -56.0],
        [-1035.0, -280.0,  115.0,  40.0],
        [ -117.0,  104.0,   13.0,  88.0],
        [  -27.0,   24.0,    3.0, -72.0],
    ]));
}

#[test]
fn determinants() {
    assert_eq!(det(Matrix::from_rows([[1.0, 2.0], [0.0, -3.0]])), -3.0);

    #[rustfmt::skip]
    assert_eq!(det(Matrix::from_rows([
        [1.0,  2.0,  3.0],
        [0.0,  1.0, -7.0],
        [9.0, 10.0, 11.0],
    ])), -72.0);

    #[rustfmt::skip]
    assert_eq!(det(Matrix::from_rows([
        [1.0,  2.0,  3.0,  4.0],
        [0.0,  1.0, -7.0, -8.0],
        [9.0, 10.0, 11.0, 12.0],
        [0.0,  0.0, -3.0, 13.0],
    ])), -1200.0);
}

#[test]
fn traces() {
    assert_eq!(trace(Matrix::from_rows([[11.0, 12.0], [-3.0, 13.0]])), 24.0);

    #[rustfmt::skip]
    assert_eq!(trace(Matrix::from_rows([
        [2.0,  2.0,  3.0],
        [0.0,  1.0, -7.0],
        [9.0, 10.0, 11.0],
    ])), 14.0);

    #[rustfmt::skip]
    assert_eq!(trace(Matrix::from_rows([
        [1.0,  2.0,  3.0,  4.0],
        [0.0,  1.0, -7.0, -8.0],
        [9.0, 10.0, 11.0, 12.0],
        [0.0,  0.0, -3.0, 13.0],
    ])), 26.0);
}

#[test]
fn diagonals() {
    assert_eq!(
        diag(Matrix::from_rows([[11.0, 12.0], [-3.0, 13.0]])),
        vec2(11.0, 13.0)
    );

    #[rustfmt::skip]
    assert_eq!(diag(Matrix::from_rows([
        [11.0, 12.0, 12.0],
        [-3.0, 13.0, -2.0],
        [ 9.0, 10.0, 12.0],
    ])), vec3(11.0, 13.0, 12.0));

    #[rustfmt::skip]
    assert_eq!(diag(Matrix::from_rows([
        [11.0, 12.0, 12.0, 19.0],
        [-3.0, 13.0, -2.0, 20.0],
        [ 9.0, 10.0, 12.0, -1.0],
        [10.0, 11.0, 12.0, 20.0],
    ])), vec4(11.0, 13.0, 12.0, 20.0));
}
