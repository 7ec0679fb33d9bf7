use lumen_image::{Image, ImageError, ImageSize};
use lumen_imgproc::{
    enhance,
    filter::{self, Kernel},
    histogram,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_plane(rng: &mut StdRng) -> Result<Image<u8, 1>, ImageError> {
    let size = ImageSize {
        width: rng.random_range(1..24),
        height: rng.random_range(1..24),
    };
    let data = (0..size.area()).map(|_| rng.random::<u8>()).collect();
    Image::new(size, data)
}

fn random_kernel(rng: &mut StdRng) -> Result<Kernel, ImageError> {
    let size = 2 * rng.random_range(0..3) + 1;
    // strictly positive weights keep the normalization well defined
    let weights = (0..size * size)
        .map(|_| rng.random_range(1..5u8) as f32)
        .collect();
    Kernel::new(size, weights)
}

#[test]
fn correlate_with_identity_kernel_is_identity() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..20 {
        let src = random_plane(&mut rng)?;
        let mut dst = Image::<f32, 1>::from_size_val(src.size(), 0.0)?;

        filter::correlate(&src, &Kernel::identity(), &mut dst)?;
        assert_eq!(dst.cast::<u8>()?, src);
    }
    Ok(())
}

#[test]
fn blur_with_unit_window_is_identity() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let src = random_plane(&mut rng)?;
        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;

        filter::blur(&src, &mut dst, 1)?;
        assert_eq!(dst, src);
    }
    Ok(())
}

#[test]
fn gamma_one_is_identity() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(13);
    for _ in 0..20 {
        let src = random_plane(&mut rng)?;
        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;

        enhance::gamma_correct(&src, &mut dst, 1.0)?;
        assert_eq!(dst, src);
    }
    Ok(())
}

#[test]
fn equalization_lut_is_monotonic_and_reaches_white() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..50 {
        let src = random_plane(&mut rng)?;
        let lut = histogram::equalization_lut(&src);

        assert!(lut.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(lut[255], 255);

        let max = src.as_slice().iter().copied().max().unwrap_or(0);
        assert_eq!(lut[max as usize], 255);
    }
    Ok(())
}

#[test]
fn equalization_preserves_intensity_order() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(19);
    let src = random_plane(&mut rng)?;
    let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;

    histogram::equalize_histogram(&src, &mut dst)?;

    let pairs = src.as_slice().iter().zip(dst.as_slice().iter());
    for (a, a_out) in pairs.clone() {
        for (b, b_out) in pairs.clone() {
            if a < b {
                assert!(a_out <= b_out);
            }
        }
    }
    Ok(())
}

#[test]
fn sharpen_and_edges_stay_in_range() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..20 {
        let src = random_plane(&mut rng)?;
        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;
        let mut raw = Image::<f32, 1>::from_size_val(src.size(), 0.0)?;
        filter::correlate(&src, &Kernel::laplacian(), &mut raw)?;

        let strength = rng.random_range(0.0..5.0f64);
        filter::sharpen(&src, &mut dst, strength)?;
        for ((&s, &lap), &out) in src
            .as_slice()
            .iter()
            .zip(raw.as_slice())
            .zip(dst.as_slice())
        {
            assert_eq!(
                out,
                (s as f64 - strength * lap as f64).clamp(0.0, 255.0) as u8
            );
        }

        filter::edge_detect(&src, &mut dst)?;
        for (&lap, &out) in raw.as_slice().iter().zip(dst.as_slice()) {
            assert_eq!(out, lap.clamp(0.0, 255.0) as u8);
        }
    }
    Ok(())
}

// integer Laplacian response with zero padding
fn laplacian_at(src: &Image<u8, 1>, row: usize, col: usize) -> i32 {
    let mut sum = 0i32;
    for r in row.saturating_sub(1)..(row + 2).min(src.rows()) {
        for c in col.saturating_sub(1)..(col + 2).min(src.cols()) {
            let v = src.as_slice()[r * src.cols() + c] as i32;
            sum += if r == row && c == col { -8 * v } else { v };
        }
    }
    sum
}

#[test]
fn sharpen_at_slider_strengths_matches_double_precision() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(37);
    for _ in 0..10 {
        let src = random_plane(&mut rng)?;
        let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;

        for level in 1..=10u8 {
            let strength = level as f64 / 10.0;
            filter::sharpen(&src, &mut dst, strength)?;

            for r in 0..src.rows() {
                for c in 0..src.cols() {
                    let s = src.as_slice()[r * src.cols() + c] as f64;
                    let lap = laplacian_at(&src, r, c) as f64;
                    let expected = (s - strength * lap).clamp(0.0, 255.0) as u8;
                    assert_eq!(dst.as_slice()[r * src.cols() + c], expected);
                }
            }
        }
    }
    Ok(())
}

#[test]
fn convolve_is_normalized_flipped_correlation() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(29);
    for _ in 0..20 {
        let src = random_plane(&mut rng)?;
        let kernel = random_kernel(&mut rng)?;

        let mut convolved = Image::<u8, 1>::from_size_val(src.size(), 0)?;
        filter::convolve(&src, &kernel, &mut convolved)?;

        let mut correlated = Image::<f32, 1>::from_size_val(src.size(), 0.0)?;
        filter::correlate(&src, &kernel.flipped(), &mut correlated)?;

        let norm = kernel.sum();
        let expected = correlated
            .as_slice()
            .iter()
            .map(|&v| (v / norm) as u8)
            .collect::<Vec<_>>();
        assert_eq!(convolved.as_slice(), expected.as_slice());
    }
    Ok(())
}

#[test]
fn correlation_matches_explicit_zero_padding() -> Result<(), ImageError> {
    let mut rng = StdRng::seed_from_u64(31);
    for _ in 0..10 {
        let src = random_plane(&mut rng)?;
        let kernel = random_kernel(&mut rng)?;
        let (rows, cols, k) = (src.rows(), src.cols(), kernel.size());
        let pad = kernel.radius();

        // build the padded plane explicitly and slide the footprint over it
        let padded_cols = cols + 2 * pad;
        let mut padded = vec![0.0f32; (rows + 2 * pad) * padded_cols];
        for r in 0..rows {
            for c in 0..cols {
                padded[(r + pad) * padded_cols + c + pad] = src.as_slice()[r * cols + c] as f32;
            }
        }

        let mut dst = Image::<f32, 1>::from_size_val(src.size(), 0.0)?;
        filter::correlate(&src, &kernel, &mut dst)?;

        for r in 0..rows {
            for c in 0..cols {
                let mut expected = 0.0f32;
                for i in 0..k {
                    for j in 0..k {
                        expected += kernel.get(i, j) * padded[(r + i) * padded_cols + c + j];
                    }
                }
                assert_eq!(dst.as_slice()[r * cols + c], expected);
            }
        }
    }
    Ok(())
}

#[test]
fn blur_of_tiny_checkerboard_is_defined() -> Result<(), ImageError> {
    let src = Image::<u8, 1>::new([2, 2].into(), vec![0, 255, 255, 0])?;
    let mut dst = Image::<u8, 1>::from_size_val(src.size(), 0)?;

    filter::blur(&src, &mut dst, 3)?;
    assert_eq!(dst.size(), src.size());

    Ok(())
}

#[test]
fn log_transform_of_black_is_black() -> Result<(), ImageError> {
    let src = Image::<u8, 1>::from_size_val([5, 4].into(), 0)?;
    let mut dst = Image::<u8, 1>::from_size_val(src.size(), 1)?;

    enhance::log_transform(&src, &mut dst)?;
    assert!(dst.as_slice().iter().all(|&v| v == 0));

    Ok(())
}
