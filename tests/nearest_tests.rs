use pixel_resample::{resize_nearest, ColorSpace, PixelBuffer};
use testing::{gradient_image, noise_image, uniform_image};

#[test]
fn downscale_gray_image() {
    let src_image = gradient_image(600, 800, 1);
    let dst_image = resize_nearest(&src_image, 300, 400);
    assert_eq!(dst_image.width(), 300);
    assert_eq!(dst_image.height(), 400);
    assert_eq!(dst_image.buffer().len(), 120000);
    assert_eq!(dst_image.pixel(0, 0), src_image.pixel(0, 0));
    assert_eq!(dst_image.color_space(), ColorSpace::Grayscale);
    assert_eq!(dst_image.origin_width(), 300);
    assert_eq!(dst_image.origin_height(), 400);
}

#[test]
fn result_has_requested_size() {
    for components in [1, 2, 3, 4, 7] {
        let src_image = noise_image(31, 17, components, 3);
        for (dst_width, dst_height) in [(1, 1), (31, 17), (10, 40), (62, 34), (100, 3)] {
            let dst_image = resize_nearest(&src_image, dst_width, dst_height);
            assert_eq!(dst_image.width(), dst_width);
            assert_eq!(dst_image.height(), dst_height);
            assert_eq!(
                dst_image.buffer().len(),
                dst_width as usize * dst_height as usize * components
            );
        }
    }
}

#[test]
fn upscale_duplicates_pixels() {
    let src_image = PixelBuffer::from_vec(2, 2, 1, ColorSpace::Grayscale, vec![1, 2, 3, 4]).unwrap();
    let dst_image = resize_nearest(&src_image, 4, 4);
    assert_eq!(
        dst_image.buffer(),
        [
            1, 1, 2, 2, //
            1, 1, 2, 2, //
            3, 3, 4, 4, //
            3, 3, 4, 4,
        ]
    );
}

#[test]
fn downscale_takes_top_left_pixel_of_cell() {
    let src_image = PixelBuffer::from_vec(
        4,
        2,
        3,
        ColorSpace::Rgb,
        (0..24).collect(),
    )
    .unwrap();
    let dst_image = resize_nearest(&src_image, 2, 1);
    assert_eq!(dst_image.buffer(), [0, 1, 2, 6, 7, 8]);
}

#[test]
fn fractional_scale() {
    let src_image =
        PixelBuffer::from_vec(5, 1, 1, ColorSpace::Grayscale, vec![10, 20, 30, 40, 50]).unwrap();
    let dst_image = resize_nearest(&src_image, 3, 1);
    assert_eq!(dst_image.buffer(), [10, 20, 40]);
}

#[test]
fn pixels_are_copied_from_nearest_source_position() {
    for components in [1, 3, 5] {
        let src_image = noise_image(23, 19, components, 5);
        let (dst_width, dst_height) = (41, 13);
        let dst_image = resize_nearest(&src_image, dst_width, dst_height);
        let x_scale = 23. / dst_width as f32;
        let y_scale = 19. / dst_height as f32;
        for y in 0..dst_height {
            for x in 0..dst_width {
                let src_x = ((x as f32 * x_scale).floor() as u32).min(22);
                let src_y = (y as f32 * y_scale).floor() as u32;
                assert_eq!(
                    dst_image.pixel(x, y),
                    src_image.pixel(src_x, src_y),
                    "{components} components, pixel {x}x{y}"
                );
            }
        }
    }
}

#[test]
fn uniform_image_stays_uniform() {
    for components in [1, 3, 4] {
        let src_image = uniform_image(33, 21, components, 173);
        for (dst_width, dst_height) in [(5, 5), (32, 20), (66, 42), (1, 1)] {
            let dst_image = resize_nearest(&src_image, dst_width, dst_height);
            assert!(dst_image.buffer().iter().all(|&v| v == 173));
        }
    }
}

#[test]
fn zero_size_gives_empty_image() {
    let src_image = gradient_image(10, 10, 3);
    let dst_image = resize_nearest(&src_image, 0, 5);
    assert!(dst_image.is_empty());
    assert_eq!(dst_image.width(), 0);
    assert_eq!(dst_image.height(), 5);

    let dst_image = src_image.resize_nearest(5, 0);
    assert!(dst_image.is_empty());
}

#[test]
fn one_pixel_image() {
    let src_image = PixelBuffer::from_vec(1, 1, 3, ColorSpace::Rgb, vec![9, 8, 7]).unwrap();
    let dst_image = resize_nearest(&src_image, 3, 2);
    assert_eq!(dst_image.buffer(), [9, 8, 7].repeat(6));

    let dst_image = resize_nearest(&dst_image, 1, 1);
    assert_eq!(dst_image.buffer(), [9, 8, 7]);
}
