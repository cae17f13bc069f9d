use pixel_resample::{ColorSpace, PixelBuffer};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Sums of values of every component of image pixels.
pub fn image_checksum<const N: usize>(image: &PixelBuffer) -> [u64; N] {
    let mut res = [0u64; N];
    for pixel in image.buffer().chunks_exact(N) {
        res.iter_mut().zip(pixel).for_each(|(d, &s)| *d += s as u64);
    }
    res
}

pub fn color_space_for(components: usize) -> ColorSpace {
    match components {
        1 => ColorSpace::Grayscale,
        3 => ColorSpace::Rgb,
        4 => ColorSpace::ExtRgba,
        _ => ColorSpace::Unknown,
    }
}

/// Image where every pixel has the same value of all components.
pub fn uniform_image(width: u32, height: u32, components: usize, value: u8) -> PixelBuffer {
    let size = width as usize * height as usize * components;
    PixelBuffer::from_vec(
        width,
        height,
        components,
        color_space_for(components),
        vec![value; size],
    )
    .unwrap()
}

/// Image with horizontal gradient in the first component, vertical
/// gradient in the second one and a checkerboard in others.
pub fn gradient_image(width: u32, height: u32, components: usize) -> PixelBuffer {
    let x_max = width.max(2) - 1;
    let y_max = height.max(2) - 1;
    let mut data = Vec::with_capacity(width as usize * height as usize * components);
    for y in 0..height {
        for x in 0..width {
            for c in 0..components {
                let value = match c {
                    0 => x * 255 / x_max,
                    1 => y * 255 / y_max,
                    _ => ((x + y + c as u32) % 2) * 255,
                };
                data.push(value as u8);
            }
        }
    }
    PixelBuffer::from_vec(width, height, components, color_space_for(components), data).unwrap()
}

/// Image where value of every component is a pseudo-random byte.
/// The same seed always gives the same image.
pub fn noise_image(width: u32, height: u32, components: usize, seed: u32) -> PixelBuffer {
    let size = width as usize * height as usize * components;
    let mut data = vec![0u8; size];
    let mut rng = StdRng::seed_from_u64(seed as u64);
    rng.fill_bytes(&mut data);
    PixelBuffer::from_vec(width, height, components, color_space_for(components), data).unwrap()
}
