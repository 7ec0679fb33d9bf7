use lumen_image::ImageError;

/// A square kernel of signed weights with an odd side length.
///
/// The weights are stored row-major: the weight at `(row, col)` lives at
/// `row * size + col`.
#[derive(Clone, Debug, PartialEq)]
pub struct Kernel {
    size: usize,
    weights: Vec<f32>,
}

impl Kernel {
    /// Create a kernel from its side length and row-major weights.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` is even or zero, or if `weights` does not
    /// hold `size * size` values.
    ///
    /// # Example
    ///
    /// ```
    /// use lumen_imgproc::filter::Kernel;
    ///
    /// let kernel = Kernel::new(3, vec![0.0, 1.0, 0.0, 1.0, -4.0, 1.0, 0.0, 1.0, 0.0]).unwrap();
    /// assert_eq!(kernel.radius(), 1);
    /// assert_eq!(kernel.get(1, 1), -4.0);
    /// ```
    pub fn new(size: usize, weights: Vec<f32>) -> Result<Self, ImageError> {
        if size == 0 || size % 2 == 0 {
            return Err(ImageError::InvalidKernelSize(size));
        }

        if weights.len() != size * size {
            return Err(ImageError::InvalidKernelWeights(
                size,
                size * size,
                weights.len(),
            ));
        }

        Ok(Self { size, weights })
    }

    /// The 1x1 kernel `[[1]]`.
    pub fn identity() -> Self {
        Self {
            size: 1,
            weights: vec![1.0],
        }
    }

    /// Create a box blur kernel: a `kernel_size` x `kernel_size` grid of ones.
    ///
    /// # Errors
    ///
    /// Returns an error if `kernel_size` is even or zero.
    pub fn box_blur(kernel_size: usize) -> Result<Self, ImageError> {
        Self::new(kernel_size, vec![1.0; kernel_size * kernel_size])
    }

    /// The 3x3 Laplacian kernel `[[1, 1, 1], [1, -8, 1], [1, 1, 1]]`.
    pub fn laplacian() -> Self {
        Self {
            size: 3,
            weights: vec![1.0, 1.0, 1.0, 1.0, -8.0, 1.0, 1.0, 1.0, 1.0],
        }
    }

    /// The side length of the kernel.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of samples between the center and the border, `(size - 1) / 2`.
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// The row-major weights.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// The weight at `(row, col)`.
    ///
    /// PRECONDITION: `row` and `col` are smaller than [`Kernel::size`].
    pub fn get(&self, row: usize, col: usize) -> f32 {
        self.weights[row * self.size + col]
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f32 {
        self.weights.iter().sum()
    }

    /// The kernel flipped both horizontally and vertically.
    pub fn flipped(&self) -> Self {
        // flipping both axes of a row-major grid reverses its storage order
        let weights = self.weights.iter().rev().copied().collect();
        Self {
            size: self.size,
            weights,
        }
    }
}
