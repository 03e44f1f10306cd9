use ndarray::ArrayView3;

/// A single decoded video frame: contiguous RGB bytes in row-major order.
///
/// Format conversion happens at I/O boundaries only; the pipeline treats
/// pixel data as opaque except for the grayscale view handed to the
/// detector.
#[derive(Clone, Debug)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
    index: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8, index: usize) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
            index,
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn as_ndarray(&self) -> ArrayView3<'_, u8> {
        ArrayView3::from_shape(self.shape(), &self.data)
            .expect("Frame data length must match dimensions")
    }

    /// Single-channel luma buffer (ITU-R BT.601 weights), the representation
    /// the cascade detector expects.
    pub fn to_gray(&self) -> Vec<u8> {
        let src = self.as_ndarray();
        let (h, w, _) = self.shape();
        let mut gray = Vec::with_capacity(w * h);
        for row in 0..h {
            for col in 0..w {
                let r = src[[row, col, 0]] as f32;
                let g = src[[row, col, 1]] as f32;
                let b = src[[row, col, 2]] as f32;
                gray.push((0.299 * r + 0.587 * g + 0.114 * b).round() as u8);
            }
        }
        gray
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}
