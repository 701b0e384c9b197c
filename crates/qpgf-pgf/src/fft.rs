//! Radix-2 FFT and the polynomial convolution built on it.

use num_complex::Complex64;
use std::f64::consts::PI;

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    /// Inverse transform, including the `1/n` normalization.
    Inverse,
}

/// In-place iterative Cooley-Tukey transform.
///
/// `buf.len()` must be zero or a power of two.
pub fn fft(buf: &mut [Complex64], direction: Direction) {
    let n = buf.len();
    assert!(
        n == 0 || n.is_power_of_two(),
        "FFT length must be a power of two, got {n}"
    );
    if n <= 1 {
        return;
    }

    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - bits);
        if i < j {
            buf.swap(i, j);
        }
    }

    let sign = match direction {
        Direction::Forward => -1.0,
        Direction::Inverse => 1.0,
    };

    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let twiddles: Vec<Complex64> = (0..half)
            .map(|k| Complex64::from_polar(1.0, sign * 2.0 * PI * k as f64 / len as f64))
            .collect();
        for chunk in buf.chunks_exact_mut(len) {
            let (lo, hi) = chunk.split_at_mut(half);
            for ((a, b), w) in lo.iter_mut().zip(hi.iter_mut()).zip(&twiddles) {
                let t = *b * w;
                *b = *a - t;
                *a += t;
            }
        }
        len <<= 1;
    }

    if direction == Direction::Inverse {
        let scale = 1.0 / n as f64;
        for x in buf.iter_mut() {
            *x *= scale;
        }
    }
}

/// Linear convolution of two real sequences.
///
/// Both inputs are zero-padded to the next power of two at or above the
/// combined support length, multiplied pointwise in the frequency domain and
/// transformed back. The result has exactly `a.len() + b.len() - 1` entries
/// (empty if either input is empty).
///
/// ```
/// use qpgf_pgf::fft::convolve;
///
/// let c = convolve(&[1.0, 2.0], &[3.0, 4.0]);
/// let expected = [3.0, 10.0, 8.0];
/// assert_eq!(c.len(), 3);
/// for (x, y) in c.iter().zip(expected) {
///     assert!((x - y).abs() < 1e-12);
/// }
/// ```
pub fn convolve(a: &[f64], b: &[f64]) -> Vec<f64> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let out_len = a.len() + b.len() - 1;
    let size = out_len.next_power_of_two();

    let mut fa = padded(a, size);
    let mut fb = padded(b, size);
    fft(&mut fa, Direction::Forward);
    fft(&mut fb, Direction::Forward);

    for (x, y) in fa.iter_mut().zip(&fb) {
        *x *= y;
    }
    fft(&mut fa, Direction::Inverse);

    fa.into_iter().take(out_len).map(|c| c.re).collect()
}

fn padded(values: &[f64], size: usize) -> Vec<Complex64> {
    let mut buf = vec![Complex64::new(0.0, 0.0); size];
    for (slot, &v) in buf.iter_mut().zip(values) {
        *slot = Complex64::new(v, 0.0);
    }
    buf
}
